//! 页面仿真事件
//!
//! 每个事件在执行时把控制权交给 [`PageWorld`] 的对应入口。

use super::action::TabId;
use super::world::PageWorld;
use crate::input::{EventInit, EventKind};
use crate::overlay::{ElementId, FrameHandle};
use crate::sim::{Event, Simulator, World};
use tracing::debug;

fn page_world(world: &mut dyn World) -> &mut PageWorld {
    world
        .as_any_mut()
        .downcast_mut::<PageWorld>()
        .expect("world must be PageWorld")
}

/// 事件：用户在页面上产生一次输入。
#[derive(Debug)]
pub struct DeliverInput {
    pub kind: EventKind,
    pub init: EventInit,
    /// 页面自己的处理器在 target 处阻止传播（窗口上看不到冒泡阶段）
    pub stop_propagation: bool,
}

impl Event for DeliverInput {
    #[tracing::instrument(skip(self, sim, world), fields(kind = %self.kind))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverInput {
            kind,
            init,
            stop_propagation,
        } = *self;
        page_world(world).dispatch_input(sim, kind, &init, stop_propagation);
    }
}

/// 事件：显示刷新，执行一个已请求的动画帧回调。
#[derive(Debug)]
pub struct AnimationFrame {
    pub handle: FrameHandle,
}

impl Event for AnimationFrame {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        page_world(world).run_animation_frame(sim, self.handle);
    }
}

/// 事件：行的保持期结束，透明度开始下降（transitionstart）。
#[derive(Debug)]
pub struct FadeStart {
    pub line: ElementId,
}

impl Event for FadeStart {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        page_world(world).on_fade_start(sim, self.line);
    }
}

/// 事件：行的透明度过渡完成（transitionend）。
#[derive(Debug)]
pub struct FadeEnd {
    pub line: ElementId,
}

impl Event for FadeEnd {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        page_world(world).on_fade_end(sim, self.line);
    }
}

/// 事件：popover 打开或关闭后派发的 toggle 事件。
#[derive(Debug)]
pub struct PopoverToggled {
    pub target: ElementId,
}

impl Event for PopoverToggled {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        page_world(world).on_popover_toggled(sim, self.target);
    }
}

/// 页面自己产生的、会改变 top layer 的界面变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    OpenModal,
    ShowPopover,
    EnterFullscreen,
    ExitFullscreen,
}

#[derive(Debug)]
pub struct PageSignal {
    pub signal: Signal,
}

impl Event for PageSignal {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        page_world(world).apply_signal(sim, self.signal);
    }
}

/// 事件：用户点击扩展的工具栏按钮。
#[derive(Debug)]
pub struct ActionClicked {
    pub tab: Option<TabId>,
}

impl Event for ActionClicked {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        debug!(tab = ?self.tab, "🖱️  工具栏按钮被点击");
        page_world(world).click_action(sim, self.tab);
    }
}

/// 事件：扩展消息到达页面。
#[derive(Debug)]
pub struct DeliverMessage {
    pub tab: TabId,
    pub payload: String,
}

impl Event for DeliverMessage {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverMessage { tab, payload } = *self;
        debug!(%tab, payload = %payload, "📨 消息到达");
        page_world(world).deliver_message(sim, &payload);
    }
}

/// 事件：页面加载内容脚本（此后才能接收消息）。
#[derive(Debug)]
pub struct LoadContentScript;

impl Event for LoadContentScript {
    fn execute(self: Box<Self>, _sim: &mut Simulator, world: &mut dyn World) {
        page_world(world).page.load_content_script();
    }
}

/// 事件：记录一次覆盖层快照。
#[derive(Debug)]
pub struct TakeSample {
    pub label: Option<String>,
}

impl Event for TakeSample {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        page_world(world).sample(sim.now(), self.label);
    }
}
