//! 宿主接口
//!
//! 覆盖层与页面之间的唯一接缝：DOM 表面操作、刷新同步调度和事件总线订阅。

use super::style::StyleSheet;
use crate::input::EventKind;
use crate::sim::SimTime;

/// 宿主 DOM 中的元素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// 已请求的动画帧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// 已注册的监听器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// 监听器挂在哪个全局目标上
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Window,
    Document,
}

/// 监听的事件名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Input(EventKind),
    FocusIn,
    Toggle,
    FullscreenChange,
}

/// 回调的接收者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscriber {
    Engine,
    Visibility,
}

/// 覆盖层所需的宿主能力。
pub trait OverlayHost {
    fn now(&self) -> SimTime;

    /// 创建覆盖层容器（隔离样式、固定全视口、不拦截输入）并挂到页面上。
    fn mount_container(&mut self, sheet: &StyleSheet) -> ElementId;
    /// 移除容器及其中所有行；容器不存在时返回 false。
    fn unmount_container(&mut self, container: ElementId) -> bool;

    fn append_line(&mut self, container: ElementId) -> ElementId;
    fn remove_line(&mut self, line: ElementId) -> bool;
    fn set_markup(&mut self, line: ElementId, markup: String);
    /// 立即回到完全不透明（不带过渡），然后重新开始淡出过渡。
    fn restart_fade(&mut self, line: ElementId);

    fn hide_popover(&mut self, element: ElementId);
    fn show_popover(&mut self, element: ElementId);

    /// 在下一个显示刷新时回调。
    fn request_animation_frame(&mut self) -> FrameHandle;
    fn cancel_animation_frame(&mut self, handle: FrameHandle);

    fn add_listener(
        &mut self,
        target: ListenerTarget,
        topic: Topic,
        capture: bool,
        subscriber: Subscriber,
    ) -> ListenerId;
    /// 监听器不存在时返回 false。
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}
