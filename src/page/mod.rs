//! 模拟宿主页面
//!
//! 在离散事件仿真器上实现 [`OverlayHost`](crate::overlay::OverlayHost)：DOM 模型、
//! 事件总线、按刷新边界触发的动画帧、透明度过渡合成器，以及扩展消息通道。

mod action;
mod bus;
mod context;
mod dom;
mod events;
mod host;
mod scenario;
mod world;

pub use action::{on_action_clicked, DeliveryError, MessageSender, PageTabs, TabId};
pub use bus::{EventBus, Listener};
pub use context::Page;
pub use dom::{ContainerElement, Dom, DomSnapshot, ElementKind, Fade, LineElement};
pub use events::{
    ActionClicked, AnimationFrame, DeliverInput, DeliverMessage, FadeEnd, FadeStart,
    LoadContentScript, PageSignal, PopoverToggled, Signal, TakeSample,
};
pub use host::PageHost;
pub use scenario::schedule_scenario;
pub use world::{OverlaySample, PageWorld, SampleLine};
