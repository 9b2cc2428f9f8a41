//! 行实体
//!
//! 每种活跃事件类型一行。状态机：
//!
//! ```text
//! (Absent) --首次发生--> Active --过渡开始--> FadingOut --过渡结束--> Removed
//!                          ^                      |
//!                          +------重新渲染--------+
//! ```
//!
//! 移除只由宿主的过渡结束信号触发，覆盖层自己不维护移除定时器。

use super::host::{ElementId, FrameHandle, OverlayHost};
use super::render::render;
use crate::input::{EventKind, InputEvent};
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    /// 完全可见（保持期内）
    Active,
    /// 透明度过渡已开始
    FadingOut,
    /// 终态：元素已从容器移除，实体随后被丢弃
    Removed,
}

#[derive(Debug)]
pub struct LineEntity {
    kind: EventKind,
    element: ElementId,
    repeat_count: u32,
    latest: Rc<InputEvent>,
    captured: bool,
    pending_frame: Option<FrameHandle>,
    state: LineState,
    renders: u64,
}

impl LineEntity {
    /// 追加行元素并立即（不经节流）渲染一次，重复次数为 1。
    pub fn create(host: &mut dyn OverlayHost, container: ElementId, event: Rc<InputEvent>) -> Self {
        let element = host.append_line(container);
        let mut line = Self {
            kind: event.kind(),
            element,
            repeat_count: 1,
            latest: event,
            captured: false,
            pending_frame: None,
            state: LineState::Active,
            renders: 0,
        };
        debug!(kind = %line.kind, element = ?element, "新建行");
        line.render(host);
        line
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn captured(&self) -> bool {
        self.captured
    }

    pub fn state(&self) -> LineState {
        self.state
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// 已执行的渲染次数（含创建时的那一次）
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn latest(&self) -> &InputEvent {
        &self.latest
    }

    /// 捕获阶段的又一次发生：计数 +1，新快照取代旧快照。
    pub fn record_capture(&mut self, host: &mut dyn OverlayHost, event: Rc<InputEvent>) {
        self.repeat_count = self.repeat_count.saturating_add(1);
        self.latest = event;
        self.captured = false;
        self.schedule_render(host);
    }

    /// 非捕获阶段的观察：不计数，只更新快照与 captured 标注。
    pub fn record_bubble(&mut self, host: &mut dyn OverlayHost, event: Rc<InputEvent>, captured: bool) {
        self.latest = event;
        self.captured = captured;
        self.schedule_render(host);
    }

    /// 单槽防抖：取消尚未触发的帧，再申请新的一帧。
    fn schedule_render(&mut self, host: &mut dyn OverlayHost) {
        if let Some(stale) = self.pending_frame.take() {
            host.cancel_animation_frame(stale);
        }
        self.pending_frame = Some(host.request_animation_frame());
        trace!(kind = %self.kind, frame = ?self.pending_frame, "渲染已排期");
    }

    /// 动画帧回调；不是本行等待的帧时返回 false。
    pub fn on_frame(&mut self, host: &mut dyn OverlayHost, handle: FrameHandle) -> bool {
        if self.pending_frame != Some(handle) {
            return false;
        }
        self.pending_frame = None;
        self.render(host);
        true
    }

    fn render(&mut self, host: &mut dyn OverlayHost) {
        let markup = render(&self.latest, self.repeat_count, self.captured);
        host.set_markup(self.element, markup);
        host.restart_fade(self.element);
        self.state = LineState::Active;
        self.renders += 1;
    }

    pub fn on_fade_started(&mut self) {
        if self.state == LineState::Active {
            self.state = LineState::FadingOut;
        }
    }

    /// 淡出过渡结束。若有尚未执行的渲染（已被重新触发），保留本行并返回 false；
    /// 否则移除元素，进入终态。
    pub fn on_fade_finished(&mut self, host: &mut dyn OverlayHost) -> bool {
        if self.state == LineState::Removed {
            return false;
        }
        if self.pending_frame.is_some() {
            debug!(kind = %self.kind, "过渡结束时已有待渲染更新，保留该行");
            return false;
        }
        host.remove_line(self.element);
        self.state = LineState::Removed;
        debug!(kind = %self.kind, renders = self.renders, "行已移除");
        true
    }

    /// 停用时丢弃：取消待执行的帧，元素随容器一起移除。
    pub fn discard(self, host: &mut dyn OverlayHost) {
        if let Some(frame) = self.pending_frame {
            host.cancel_animation_frame(frame);
        }
    }
}
