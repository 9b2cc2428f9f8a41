use crate::config::ConfigError;
use crate::input::EventKind;
use crate::overlay::LineState;
use crate::page::{schedule_scenario, PageWorld, TabId};
use crate::sim::{ScenarioError, ScenarioSpec, SimTime, Simulator, StepAction};

const DEMO: &str = r#"{
  "schema_version": 1,
  "meta": { "name": "keys" },
  "page": { "refresh_hz": 50 },
  "steps": [
    { "at_ms": 0, "action": "action_click" },
    { "at_ms": 1, "action": "burst", "type": "keydown", "count": 5, "gap_ms": 1,
      "init": { "code": "KeyJ", "repeat": true }, "stop_propagation": true },
    { "at_ms": 100, "action": "sample", "label": "held" },
    { "at_ms": 2200, "action": "sample", "label": "fading" },
    { "at_ms": 3000, "action": "sample" }
  ]
}"#;

#[test]
fn parses_steps_and_configs() {
    let spec = ScenarioSpec::from_json(DEMO).unwrap();
    assert_eq!(spec.steps.len(), 5);
    assert_eq!(spec.page_config().refresh_hz, 50);
    assert_eq!(spec.overlay_config().hold_ms, 2_000);
    assert_eq!(
        spec.meta.as_ref().and_then(|m| m.name.as_deref()),
        Some("keys")
    );
    match &spec.steps[1].action {
        StepAction::Burst {
            kind, count, init, ..
        } => {
            assert_eq!(*kind, EventKind::KeyDown);
            assert_eq!(*count, 5);
            assert_eq!(init.code, "KeyJ");
            assert!(init.repeat);
        }
        other => panic!("unexpected step: {other:?}"),
    }
}

#[test]
fn rejects_unsupported_schema() {
    let err = ScenarioSpec::from_json(r#"{"schema_version": 2, "steps": []}"#).unwrap_err();
    assert!(matches!(err, ScenarioError::UnsupportedSchema(2)));
    assert!(err.to_string().contains("unsupported scenario schema_version"));
}

#[test]
fn rejects_negative_time() {
    let raw = r#"{"schema_version": 1, "steps": [
        { "at_ms": 5, "action": "open_modal" },
        { "at_ms": -1, "action": "show_popover" }
    ]}"#;
    let err = ScenarioSpec::from_json(raw).unwrap_err();
    assert!(matches!(err, ScenarioError::InvalidTime { index: 1, .. }), "{err}");
}

#[test]
fn rejects_empty_burst() {
    let raw = r#"{"schema_version": 1, "steps": [
        { "at_ms": 0, "action": "burst", "type": "wheel", "count": 0, "gap_ms": 1 }
    ]}"#;
    let err = ScenarioSpec::from_json(raw).unwrap_err();
    assert!(matches!(err, ScenarioError::EmptyBurst { index: 0 }));
}

#[test]
fn rejects_zero_fade() {
    let raw = r#"{"schema_version": 1, "overlay": { "fade_ms": 0 }, "steps": []}"#;
    let err = ScenarioSpec::from_json(raw).unwrap_err();
    assert!(matches!(err, ScenarioError::Config(ConfigError::ZeroFade)));
}

#[test]
fn rejects_unknown_event_type() {
    let raw = r#"{"schema_version": 1, "steps": [
        { "at_ms": 0, "action": "input", "type": "scroll" }
    ]}"#;
    let err = ScenarioSpec::from_json(raw).unwrap_err();
    assert!(matches!(err, ScenarioError::Json(_)));
}

#[test]
fn scheduled_scenario_produces_samples() {
    let spec = ScenarioSpec::from_json(DEMO).unwrap();
    let mut sim = Simulator::default();
    let mut world = PageWorld::new(spec.page_config(), spec.overlay_config());
    let last = schedule_scenario(&mut sim, &spec, TabId::DEFAULT);
    assert_eq!(last, SimTime::from_millis(3_000));
    sim.run(&mut world);

    assert_eq!(world.samples.len(), 3);

    let held = &world.samples[0];
    assert_eq!(held.label.as_deref(), Some("held"));
    assert!(held.active && held.on_top);
    assert_eq!(held.lines.len(), 1);
    assert_eq!(held.lines[0].event_type, EventKind::KeyDown);
    assert_eq!(held.lines[0].repeat_count, 5);
    assert_eq!(held.lines[0].state, LineState::Active);
    assert!(held.lines[0].markup.contains("[keydown ×5]"));

    // 最后一次渲染在 20ms 的帧边界，保持期结束于 2020ms
    let fading = &world.samples[1];
    assert_eq!(fading.lines[0].state, LineState::FadingOut);
    assert!((fading.lines[0].opacity - 0.64).abs() < 1e-9);

    let gone = &world.samples[2];
    assert!(gone.active);
    assert!(gone.lines.is_empty());
}
