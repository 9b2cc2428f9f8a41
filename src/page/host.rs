//! 页面对覆盖层的宿主实现

use super::context::{FadeTimers, Page};
use super::dom::{ElementKind, Fade};
use super::events::{AnimationFrame, FadeEnd, FadeStart, PopoverToggled};
use crate::overlay::{
    ElementId, FrameHandle, ListenerId, ListenerTarget, OverlayHost, StyleSheet, Subscriber, Topic,
};
use crate::sim::{SimTime, Simulator};
use crate::trace::{TraceEventKind, TraceLog};
use tracing::trace;

/// 一次回调期间借出的宿主视图
pub struct PageHost<'a> {
    pub page: &'a mut Page,
    pub sim: &'a mut Simulator,
    pub trace: &'a mut TraceLog,
}

impl<'a> PageHost<'a> {
    pub fn new(page: &'a mut Page, sim: &'a mut Simulator, trace: &'a mut TraceLog) -> Self {
        Self { page, sim, trace }
    }

    fn record(&mut self, kind: TraceEventKind) {
        self.trace.push(self.sim.now().0, kind);
    }

    fn cancel_fade(&mut self, line: ElementId) {
        if let Some(timers) = self.page.fades.remove(&line) {
            self.sim.cancel(timers.start);
            self.sim.cancel(timers.end);
        }
    }

    fn queue_toggle_event(&mut self, target: ElementId) {
        let now = self.sim.now();
        self.sim.schedule(now, PopoverToggled { target });
    }
}

impl OverlayHost for PageHost<'_> {
    fn now(&self) -> SimTime {
        self.sim.now()
    }

    fn mount_container(&mut self, sheet: &StyleSheet) -> ElementId {
        let container = self.page.dom.mount_container(sheet.clone());
        self.record(TraceEventKind::ContainerMounted {
            container: container.0,
        });
        container
    }

    fn unmount_container(&mut self, container: ElementId) -> bool {
        let Some(lines) = self.page.dom.unmount_container(container) else {
            return false;
        };
        for line in &lines {
            self.cancel_fade(*line);
        }
        self.record(TraceEventKind::ContainerUnmounted {
            container: container.0,
            lines: lines.len(),
        });
        true
    }

    fn append_line(&mut self, container: ElementId) -> ElementId {
        let line = self.page.dom.append_line(container);
        self.record(TraceEventKind::LineAppended { line: line.0 });
        line
    }

    fn remove_line(&mut self, line: ElementId) -> bool {
        self.cancel_fade(line);
        let removed = self.page.dom.remove_line(line);
        if removed {
            self.record(TraceEventKind::LineRemoved { line: line.0 });
        }
        removed
    }

    fn set_markup(&mut self, line: ElementId, markup: String) {
        let Some(element) = self.page.dom.line_mut(line) else {
            return;
        };
        element.markup = markup.clone();
        self.record(TraceEventKind::Rendered {
            line: line.0,
            markup,
        });
    }

    fn restart_fade(&mut self, line: ElementId) {
        let Some(transition) = self.page.dom.line_transition(line) else {
            return;
        };
        self.cancel_fade(line);
        let now = self.sim.now();
        if let Some(element) = self.page.dom.line_mut(line) {
            element.fade = Fade::Holding { since: now };
        }
        let fade_at = now.saturating_add(transition.delay);
        let start = self.sim.schedule(fade_at, FadeStart { line });
        let end = self
            .sim
            .schedule(fade_at.saturating_add(transition.duration), FadeEnd { line });
        self.page.fades.insert(line, FadeTimers { start, end });
        self.record(TraceEventKind::FadeRestarted { line: line.0 });
    }

    fn hide_popover(&mut self, element: ElementId) {
        if self.page.dom.leave_top_layer(element) {
            self.queue_toggle_event(element);
        }
    }

    fn show_popover(&mut self, element: ElementId) {
        if !self.page.dom.enter_top_layer(element) {
            return;
        }
        self.queue_toggle_event(element);
        if self.page.dom.kind(element) == Some(ElementKind::Container) {
            let top_layer_len = self.page.dom.top_layer().len();
            self.record(TraceEventKind::ContainerRaised {
                container: element.0,
                top_layer_len,
            });
        }
    }

    fn request_animation_frame(&mut self) -> FrameHandle {
        let handle = self.page.alloc_frame();
        let at = self.page.next_refresh(self.sim.now());
        let token = self.sim.schedule(at, AnimationFrame { handle });
        self.page.frames.insert(handle, token);
        trace!(frame = ?handle, at = ?at, "请求动画帧");
        handle
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        if let Some(token) = self.page.frames.remove(&handle) {
            self.sim.cancel(token);
        }
    }

    fn add_listener(
        &mut self,
        target: ListenerTarget,
        topic: Topic,
        capture: bool,
        subscriber: Subscriber,
    ) -> ListenerId {
        self.page.bus.add(target, topic, capture, subscriber)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.page.bus.remove(id)
    }
}
