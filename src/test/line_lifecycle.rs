use super::{active_page, markup_of, run_to, FRAME};
use crate::input::{EventInit, EventKind};
use crate::overlay::LineState;
use crate::page::PageWorld;
use crate::sim::SimTime;
use crate::trace::TraceEventKind;

fn key(code: &str) -> EventInit {
    EventInit {
        code: code.into(),
        ..EventInit::default()
    }
}

fn ms(v: u64) -> SimTime {
    SimTime::from_millis(v)
}

#[test]
fn first_occurrence_renders_immediately_with_count_one() {
    let (mut sim, mut world) = active_page();
    world.dispatch_input(&mut sim, EventKind::KeyDown, &key("KeyA"), true);

    let line = world
        .engine()
        .and_then(|e| e.line(EventKind::KeyDown))
        .expect("line");
    assert_eq!(line.repeat_count(), 1);
    assert_eq!(line.renders(), 1);
    assert_eq!(line.state(), LineState::Active);
    assert!(!line.has_pending_render());
    assert!(markup_of(&world, EventKind::KeyDown).contains("[keydown]"));
}

#[test]
fn burst_renders_once_per_refresh_with_total_count() {
    let (mut sim, mut world) = active_page();
    const N: u32 = 10;
    for i in 0..N {
        let init = EventInit {
            client_x: f64::from(i),
            ..EventInit::default()
        };
        world.dispatch_input(&mut sim, EventKind::PointerMove, &init, true);
    }

    {
        let line = world
            .engine()
            .and_then(|e| e.line(EventKind::PointerMove))
            .expect("line");
        // 只有创建时的那一次立即渲染，其余合并到下一帧
        assert_eq!(line.renders(), 1);
        assert!(line.has_pending_render());
        assert_eq!(world.page.pending_frames(), 1);
    }

    run_to(&mut sim, &mut world, FRAME);

    let line = world
        .engine()
        .and_then(|e| e.line(EventKind::PointerMove))
        .expect("line");
    assert_eq!(line.renders(), 2);
    assert_eq!(line.repeat_count(), N);
    let markup = markup_of(&world, EventKind::PointerMove);
    assert!(markup.contains(&format!("[pointermove ×{N}]")), "{markup}");
    // 绘制的是最新一次发生的快照
    assert!(markup.contains("pos=<b>(9, 0)</b>"), "{markup}");
    assert_eq!(
        world
            .trace
            .count(|k| matches!(k, TraceEventKind::Rendered { .. })),
        2
    );
}

#[test]
fn burst_on_existing_line_adds_exactly_one_render() {
    let (mut sim, mut world) = active_page();
    world.dispatch_input(&mut sim, EventKind::PointerMove, &EventInit::default(), true);
    run_to(&mut sim, &mut world, FRAME);
    let before = world
        .engine()
        .and_then(|e| e.line(EventKind::PointerMove))
        .map(|l| l.renders())
        .expect("line");

    // 一个刷新间隔内的 N 次发生：40ms 到下一帧 60ms 之间
    const N: u32 = 50;
    run_to(&mut sim, &mut world, SimTime(FRAME.0 * 2));
    for _ in 0..N {
        world.dispatch_input(&mut sim, EventKind::PointerMove, &EventInit::default(), true);
    }
    run_to(&mut sim, &mut world, SimTime(FRAME.0 * 3));

    let line = world
        .engine()
        .and_then(|e| e.line(EventKind::PointerMove))
        .expect("line");
    assert_eq!(line.renders(), before + 1);
    assert_eq!(line.repeat_count(), N + 1);
    assert!(!line.has_pending_render());
    let markup = markup_of(&world, EventKind::PointerMove);
    assert!(markup.contains(&format!("[pointermove ×{}]", N + 1)), "{markup}");
}

#[test]
fn removal_waits_for_transition_end() {
    let (mut sim, mut world) = active_page();
    world.dispatch_input(&mut sim, EventKind::KeyDown, &key("KeyA"), true);
    let element = world
        .engine()
        .and_then(|e| e.line(EventKind::KeyDown))
        .map(|l| l.element())
        .expect("line");

    let state = |world: &PageWorld| {
        world
            .engine()
            .and_then(|e| e.line(EventKind::KeyDown))
            .map(|l| l.state())
    };

    run_to(&mut sim, &mut world, ms(1_999));
    assert_eq!(state(&world), Some(LineState::Active));

    run_to(&mut sim, &mut world, ms(2_000));
    assert_eq!(state(&world), Some(LineState::FadingOut));

    run_to(&mut sim, &mut world, ms(2_250));
    let opacity = world.page.dom.line_opacity(element, sim.now());
    assert!((opacity - 0.5).abs() < 1e-9, "opacity={opacity}");

    run_to(&mut sim, &mut world, ms(2_499));
    assert_eq!(state(&world), Some(LineState::FadingOut));

    run_to(&mut sim, &mut world, ms(2_500));
    assert_eq!(state(&world), None);
    assert!(world.page.dom.line(element).is_none());
    assert_eq!(world.dom_snapshot().lines, 0);
    assert_eq!(
        world
            .trace
            .count(|k| matches!(k, TraceEventKind::LineRemoved { .. })),
        1
    );
}

#[test]
fn retrigger_while_fading_restarts_from_full_visibility() {
    let (mut sim, mut world) = active_page();
    world.dispatch_input(&mut sim, EventKind::KeyDown, &key("KeyA"), true);

    run_to(&mut sim, &mut world, ms(2_200));
    let element = {
        let line = world
            .engine()
            .and_then(|e| e.line(EventKind::KeyDown))
            .expect("line");
        assert_eq!(line.state(), LineState::FadingOut);
        line.element()
    };

    world.dispatch_input(&mut sim, EventKind::KeyDown, &key("KeyB"), true);
    run_to(&mut sim, &mut world, ms(2_220));
    {
        let line = world
            .engine()
            .and_then(|e| e.line(EventKind::KeyDown))
            .expect("line");
        assert_eq!(line.state(), LineState::Active);
        assert_eq!(line.repeat_count(), 2);
        assert_eq!(line.renders(), 2);
        assert_eq!(line.element(), element);
    }
    assert_eq!(world.page.dom.line_opacity(element, sim.now()), 1.0);

    // 旧的过渡结束信号已被取消
    run_to(&mut sim, &mut world, ms(4_719));
    assert!(world.engine().and_then(|e| e.line(EventKind::KeyDown)).is_some());

    run_to(&mut sim, &mut world, ms(4_720));
    assert!(world.engine().and_then(|e| e.line(EventKind::KeyDown)).is_none());
}

#[test]
fn pending_render_at_transition_end_keeps_the_line() {
    let (mut sim, mut world) = active_page();
    world.dispatch_input(&mut sim, EventKind::KeyDown, &key("KeyA"), true);

    run_to(&mut sim, &mut world, ms(2_490));
    // 下一帧正好在 2500ms，与过渡结束同一时刻，但过渡结束先到
    world.dispatch_input(&mut sim, EventKind::KeyDown, &key("KeyA"), true);
    run_to(&mut sim, &mut world, ms(2_500));

    let line = world
        .engine()
        .and_then(|e| e.line(EventKind::KeyDown))
        .expect("line survives");
    assert_eq!(line.state(), LineState::Active);
    assert_eq!(line.renders(), 2);
    assert_eq!(
        world
            .trace
            .count(|k| matches!(k, TraceEventKind::FadeFinished { .. })),
        1
    );
    assert_eq!(
        world
            .trace
            .count(|k| matches!(k, TraceEventKind::LineRemoved { .. })),
        0
    );
}

#[test]
fn occurrence_after_removal_creates_a_fresh_line() {
    let (mut sim, mut world) = active_page();
    world.dispatch_input(&mut sim, EventKind::Wheel, &EventInit::default(), true);
    let first = world
        .engine()
        .and_then(|e| e.line(EventKind::Wheel))
        .map(|l| l.element())
        .expect("line");

    run_to(&mut sim, &mut world, ms(2_600));
    assert!(world.engine().and_then(|e| e.line(EventKind::Wheel)).is_none());

    world.dispatch_input(&mut sim, EventKind::Wheel, &EventInit::default(), true);
    let line = world
        .engine()
        .and_then(|e| e.line(EventKind::Wheel))
        .expect("fresh line");
    assert_ne!(line.element(), first);
    assert_eq!(line.repeat_count(), 1);
    assert_eq!(line.renders(), 1);
}
