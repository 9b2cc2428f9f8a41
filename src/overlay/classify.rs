//! 事件分类
//!
//! 事件类型 → 显示颜色。纯查表，对封闭枚举全覆盖。

use crate::input::EventKind;
use std::fmt;

/// 十六进制 CSS 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const fn hex(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub mod palette {
    use super::Color;

    pub const CLICK: Color = Color("#fb923c");
    pub const MOUSE: Color = Color("#facc15");
    pub const TOUCH: Color = Color("#4ade80");
    pub const POINTER: Color = Color("#2dd4bf");
    pub const KEYBOARD: Color = Color("#60a5fa");
    pub const WHEEL: Color = Color("#e879f9");

    pub const TRUE: Color = Color("#4ade80");
    pub const FALSE: Color = Color("#f87171");
    pub const POINTER_TYPE: Color = Color("#67e8f9");
    pub const CAPTURED: Color = Color("#e879f9");
}

/// 颜色分组（互不相交）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventGroup {
    Click,
    Mouse,
    Touch,
    Pointer,
    Keyboard,
    Wheel,
}

impl EventGroup {
    pub const ALL: [EventGroup; 6] = [
        EventGroup::Click,
        EventGroup::Mouse,
        EventGroup::Touch,
        EventGroup::Pointer,
        EventGroup::Keyboard,
        EventGroup::Wheel,
    ];

    pub fn color(self) -> Color {
        match self {
            EventGroup::Click => palette::CLICK,
            EventGroup::Mouse => palette::MOUSE,
            EventGroup::Touch => palette::TOUCH,
            EventGroup::Pointer => palette::POINTER,
            EventGroup::Keyboard => palette::KEYBOARD,
            EventGroup::Wheel => palette::WHEEL,
        }
    }

    pub fn members(self) -> &'static [EventKind] {
        match self {
            EventGroup::Click => &[EventKind::Click, EventKind::DblClick, EventKind::ContextMenu],
            EventGroup::Mouse => &[EventKind::MouseDown, EventKind::MouseUp, EventKind::MouseMove],
            EventGroup::Touch => &[
                EventKind::TouchStart,
                EventKind::TouchMove,
                EventKind::TouchEnd,
                EventKind::TouchCancel,
            ],
            EventGroup::Pointer => &[
                EventKind::PointerDown,
                EventKind::PointerMove,
                EventKind::PointerUp,
                EventKind::PointerCancel,
            ],
            EventGroup::Keyboard => &[EventKind::KeyDown, EventKind::KeyUp],
            EventGroup::Wheel => &[EventKind::Wheel],
        }
    }
}

pub fn group_of(kind: EventKind) -> EventGroup {
    match kind {
        EventKind::Click | EventKind::DblClick | EventKind::ContextMenu => EventGroup::Click,
        EventKind::MouseDown | EventKind::MouseUp | EventKind::MouseMove => EventGroup::Mouse,
        EventKind::TouchStart | EventKind::TouchMove | EventKind::TouchEnd | EventKind::TouchCancel => {
            EventGroup::Touch
        }
        EventKind::PointerDown
        | EventKind::PointerMove
        | EventKind::PointerUp
        | EventKind::PointerCancel => EventGroup::Pointer,
        EventKind::KeyDown | EventKind::KeyUp => EventGroup::Keyboard,
        EventKind::Wheel => EventGroup::Wheel,
    }
}

pub fn color_of(kind: EventKind) -> Color {
    group_of(kind).color()
}
