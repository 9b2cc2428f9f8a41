use crate::input::{EventId, EventInit, EventKind, InputEvent, PointerType};
use crate::overlay::{button_names, plain_text, render};

fn event(kind: EventKind, init: EventInit) -> InputEvent {
    InputEvent::new(EventId(0), kind, &init)
}

#[test]
fn keydown_with_shift_shows_only_set_modifiers() {
    let ev = event(
        EventKind::KeyDown,
        EventInit {
            code: "KeyA".into(),
            shift_key: true,
            ..EventInit::default()
        },
    );
    assert_eq!(
        render(&ev, 1, false),
        r#"<b style="color: #60a5fa">[keydown]</b> code=<b>KeyA</b> shift=<b><span style="color: #4ade80">true</span></b>"#
    );
}

#[test]
fn keyboard_flags_render_in_fixed_order_with_location() {
    let ev = event(
        EventKind::KeyUp,
        EventInit {
            code: "ControlLeft".into(),
            repeat: true,
            ctrl_key: true,
            alt_key: true,
            meta_key: true,
            location: 1,
            ..EventInit::default()
        },
    );
    let text = plain_text(&render(&ev, 1, false));
    assert_eq!(
        text,
        "[keyup] code=ControlLeft repeat=true ctrl=true alt=true meta=true location=1"
    );
}

#[test]
fn mouse_buttons_bitmask_three_lists_primary_and_secondary() {
    let ev = event(
        EventKind::MouseDown,
        EventInit {
            client_x: 10.4,
            client_y: 20.6,
            buttons: 3,
            ..EventInit::default()
        },
    );
    assert_eq!(
        render(&ev, 1, false),
        r#"<b style="color: #facc15">[mousedown]</b> pos=<b>(10, 21)</b> buttons=<b>[primary, secondary]</b>"#
    );
}

#[test]
fn no_buttons_means_no_buttons_field() {
    let ev = event(EventKind::MouseMove, EventInit::default());
    let html = render(&ev, 1, false);
    assert!(!html.contains("buttons="), "{html}");
    assert!(html.contains(" pos=<b>(0, 0)</b>"));
}

#[test]
fn button_names_follow_bit_order() {
    assert_eq!(
        button_names(31),
        vec!["primary", "secondary", "auxiliary", "fourth", "fifth"]
    );
    assert_eq!(button_names(0b10100), vec!["auxiliary", "fifth"]);
    assert!(button_names(0).is_empty());
}

#[test]
fn non_primary_pointer_shows_red_flag_and_count_suffix() {
    let ev = event(
        EventKind::PointerDown,
        EventInit {
            pointer_id: 7,
            pointer_type: PointerType::Pen,
            is_primary: false,
            ..EventInit::default()
        },
    );
    assert_eq!(
        render(&ev, 2, false),
        concat!(
            r#"<b style="color: #2dd4bf">[pointerdown ×2]</b>"#,
            r#" id=<b>7</b> type=<b style="color: #67e8f9">pen</b>"#,
            r#" primary=<b><span style="color: #f87171">false</span></b>"#,
            r#" pos=<b>(0, 0)</b>"#
        )
    );
}

#[test]
fn pointer_type_is_shown_verbatim_and_escaped() {
    let unknown = event(
        EventKind::PointerUp,
        EventInit {
            pointer_type: PointerType::Other(String::new()),
            ..EventInit::default()
        },
    );
    assert!(render(&unknown, 1, false).contains(r#" type=<b style="color: #67e8f9"></b>"#));

    let vendor = event(
        EventKind::PointerUp,
        EventInit {
            pointer_type: PointerType::Other("<stylus&>".into()),
            ..EventInit::default()
        },
    );
    let markup = render(&vendor, 1, false);
    assert!(
        markup.contains(r#"type=<b style="color: #67e8f9">&lt;stylus&amp;&gt;</b>"#),
        "{markup}"
    );
    assert_eq!(plain_text(&markup), "[pointerup] id=1 type=<stylus&> pos=(0, 0)");
}

#[test]
fn primary_pointer_omits_primary_flag() {
    let ev = event(EventKind::PointerMove, EventInit::default());
    assert!(!render(&ev, 1, false).contains("primary="));
}

#[test]
fn wheel_deltas_round_to_integers() {
    let ev = event(
        EventKind::Wheel,
        EventInit {
            delta_x: -2.5,
            delta_y: 100.2,
            delta_mode: 1,
            client_x: 5.0,
            client_y: 5.0,
            ..EventInit::default()
        },
    );
    assert_eq!(
        plain_text(&render(&ev, 1, false)),
        "[wheel] delta=(-3, 100) mode=1 pos=(5, 5)"
    );
}

#[test]
fn touch_shows_count() {
    let ev = event(
        EventKind::TouchStart,
        EventInit {
            touches: 2,
            ..EventInit::default()
        },
    );
    assert_eq!(
        render(&ev, 1, false),
        r#"<b style="color: #4ade80">[touchstart]</b> touches=<b>2</b>"#
    );
}

#[test]
fn captured_tag_is_last() {
    let ev = event(
        EventKind::Click,
        EventInit {
            buttons: 1,
            ..EventInit::default()
        },
    );
    let html = render(&ev, 3, true);
    assert!(html.starts_with(r#"<b style="color: #fb923c">[click ×3]</b>"#));
    assert!(html.ends_with(r#" <b style="color: #e879f9">captured</b>"#));
}

#[test]
fn count_of_one_or_zero_has_no_suffix() {
    let ev = event(EventKind::KeyDown, EventInit::default());
    assert!(render(&ev, 1, false).contains("[keydown]"));
    assert!(render(&ev, 0, false).contains("[keydown]"));
}

#[test]
fn key_code_is_escaped() {
    let ev = event(
        EventKind::KeyDown,
        EventInit {
            code: "<b>&".into(),
            ..EventInit::default()
        },
    );
    let html = render(&ev, 1, false);
    assert!(html.contains("code=<b>&lt;b&gt;&amp;</b>"), "{html}");
    assert_eq!(plain_text(&html), "[keydown] code=<b>&");
}
