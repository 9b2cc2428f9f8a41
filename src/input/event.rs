//! 被观察的输入事件

use super::init::{EventInit, PointerType};
use super::kind::{EventInterface, EventKind};

/// 一次事件发生的身份（两个观察阶段看到的是同一个 id）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct MouseData {
    pub client_x: f64,
    pub client_y: f64,
    pub buttons: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerData {
    pub pointer_id: i32,
    pub pointer_type: PointerType,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelData {
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_mode: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TouchData {
    pub touches: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardData {
    pub code: String,
    pub repeat: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub location: u32,
}

/// 按接口划分的事件负载。指针与滚轮事件同时也是鼠标事件。
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    Mouse(MouseData),
    Pointer { pointer: PointerData, mouse: MouseData },
    Wheel { wheel: WheelData, mouse: MouseData },
    Touch(TouchData),
    Keyboard(KeyboardData),
}

/// 一次宿主输入事件。创建后不可变。
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    id: EventId,
    kind: EventKind,
    detail: EventDetail,
}

impl InputEvent {
    pub fn new(id: EventId, kind: EventKind, init: &EventInit) -> Self {
        let mouse = || MouseData {
            client_x: init.client_x,
            client_y: init.client_y,
            buttons: init.buttons,
        };
        let detail = match kind.interface() {
            EventInterface::Mouse => EventDetail::Mouse(mouse()),
            EventInterface::Pointer => EventDetail::Pointer {
                pointer: PointerData {
                    pointer_id: init.pointer_id,
                    pointer_type: init.pointer_type.clone(),
                    is_primary: init.is_primary,
                },
                mouse: mouse(),
            },
            EventInterface::Wheel => EventDetail::Wheel {
                wheel: WheelData {
                    delta_x: init.delta_x,
                    delta_y: init.delta_y,
                    delta_mode: init.delta_mode,
                },
                mouse: mouse(),
            },
            EventInterface::Touch => EventDetail::Touch(TouchData {
                touches: init.touches,
            }),
            EventInterface::Keyboard => EventDetail::Keyboard(KeyboardData {
                code: init.code.clone(),
                repeat: init.repeat,
                shift: init.shift_key,
                ctrl: init.ctrl_key,
                alt: init.alt_key,
                meta: init.meta_key,
                location: init.location,
            }),
        };
        Self { id, kind, detail }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn detail(&self) -> &EventDetail {
        &self.detail
    }

    pub fn pointer(&self) -> Option<&PointerData> {
        match &self.detail {
            EventDetail::Pointer { pointer, .. } => Some(pointer),
            _ => None,
        }
    }

    pub fn wheel(&self) -> Option<&WheelData> {
        match &self.detail {
            EventDetail::Wheel { wheel, .. } => Some(wheel),
            _ => None,
        }
    }

    pub fn touch(&self) -> Option<&TouchData> {
        match &self.detail {
            EventDetail::Touch(touch) => Some(touch),
            _ => None,
        }
    }

    pub fn mouse(&self) -> Option<&MouseData> {
        match &self.detail {
            EventDetail::Mouse(mouse)
            | EventDetail::Pointer { mouse, .. }
            | EventDetail::Wheel { mouse, .. } => Some(mouse),
            _ => None,
        }
    }

    pub fn keyboard(&self) -> Option<&KeyboardData> {
        match &self.detail {
            EventDetail::Keyboard(keyboard) => Some(keyboard),
            _ => None,
        }
    }
}
