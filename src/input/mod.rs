//! 输入事件模型
//!
//! 被观察的宿主输入事件：事件类型（封闭枚举）、传播阶段、DOM 风格的 init 字典，
//! 以及按接口划分的事件负载。

mod event;
mod init;
mod kind;
mod phase;

pub use event::{
    EventDetail, EventId, InputEvent, KeyboardData, MouseData, PointerData, TouchData, WheelData,
};
pub use init::{EventInit, PointerType};
pub use kind::{EventInterface, EventKind, UnknownEventType};
pub use phase::Phase;
