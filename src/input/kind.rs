//! 事件类型
//!
//! 覆盖层订阅的 17 种宿主事件名，建模为封闭枚举。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 覆盖层跟踪的事件类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    ContextMenu,
    DblClick,
    KeyDown,
    KeyUp,
    MouseDown,
    MouseMove,
    MouseUp,
    PointerCancel,
    PointerDown,
    PointerMove,
    PointerUp,
    TouchCancel,
    TouchEnd,
    TouchMove,
    TouchStart,
    Wheel,
}

/// 事件在宿主事件模型中的接口（决定负载里有哪些字段）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventInterface {
    Mouse,
    Pointer,
    Wheel,
    Touch,
    Keyboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input event type: {0:?}")]
pub struct UnknownEventType(pub String);

impl EventKind {
    /// 订阅顺序（与宿主事件名的字母序一致）。
    pub const ALL: [EventKind; 17] = [
        EventKind::Click,
        EventKind::ContextMenu,
        EventKind::DblClick,
        EventKind::KeyDown,
        EventKind::KeyUp,
        EventKind::MouseDown,
        EventKind::MouseMove,
        EventKind::MouseUp,
        EventKind::PointerCancel,
        EventKind::PointerDown,
        EventKind::PointerMove,
        EventKind::PointerUp,
        EventKind::TouchCancel,
        EventKind::TouchEnd,
        EventKind::TouchMove,
        EventKind::TouchStart,
        EventKind::Wheel,
    ];

    /// 宿主事件名
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::ContextMenu => "contextmenu",
            EventKind::DblClick => "dblclick",
            EventKind::KeyDown => "keydown",
            EventKind::KeyUp => "keyup",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseUp => "mouseup",
            EventKind::PointerCancel => "pointercancel",
            EventKind::PointerDown => "pointerdown",
            EventKind::PointerMove => "pointermove",
            EventKind::PointerUp => "pointerup",
            EventKind::TouchCancel => "touchcancel",
            EventKind::TouchEnd => "touchend",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchStart => "touchstart",
            EventKind::Wheel => "wheel",
        }
    }

    pub fn interface(self) -> EventInterface {
        match self {
            EventKind::Click
            | EventKind::ContextMenu
            | EventKind::DblClick
            | EventKind::MouseDown
            | EventKind::MouseMove
            | EventKind::MouseUp => EventInterface::Mouse,
            EventKind::PointerCancel
            | EventKind::PointerDown
            | EventKind::PointerMove
            | EventKind::PointerUp => EventInterface::Pointer,
            EventKind::TouchCancel
            | EventKind::TouchEnd
            | EventKind::TouchMove
            | EventKind::TouchStart => EventInterface::Touch,
            EventKind::KeyDown | EventKind::KeyUp => EventInterface::Keyboard,
            EventKind::Wheel => EventInterface::Wheel,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| UnknownEventType(raw.to_string()))
    }
}
