//! 聚合引擎
//!
//! 在窗口上以两个阶段订阅全部跟踪的事件类型，把每次发生路由到对应的行：
//! 已有活跃行则交给它（合并更新或 captured 标注），否则只有捕获阶段的发生会新建行。

use super::host::{ElementId, FrameHandle, ListenerId, ListenerTarget, OverlayHost, Subscriber, Topic};
use super::line::LineEntity;
use super::provenance::CaptureProvenance;
use crate::input::{EventKind, InputEvent, Phase};
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{debug, info, trace};

#[derive(Debug)]
pub struct AggregationEngine {
    container: ElementId,
    lines: BTreeMap<EventKind, LineEntity>,
    provenance: CaptureProvenance,
    listeners: Vec<ListenerId>,
}

impl AggregationEngine {
    /// 订阅 17 种事件 × 2 个阶段。
    pub fn start(host: &mut dyn OverlayHost, container: ElementId) -> Self {
        let mut listeners = Vec::with_capacity(EventKind::ALL.len() * Phase::ALL.len());
        for kind in EventKind::ALL {
            for phase in Phase::ALL {
                listeners.push(host.add_listener(
                    ListenerTarget::Window,
                    Topic::Input(kind),
                    phase.is_capture(),
                    Subscriber::Engine,
                ));
            }
        }
        info!(listeners = listeners.len(), container = ?container, "聚合引擎已启动");
        Self {
            container,
            lines: BTreeMap::new(),
            provenance: CaptureProvenance::default(),
            listeners,
        }
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn line(&self, kind: EventKind) -> Option<&LineEntity> {
        self.lines.get(&kind)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineEntity> {
        self.lines.values()
    }

    pub fn active_kinds(&self) -> Vec<EventKind> {
        self.lines.keys().copied().collect()
    }

    pub fn provenance(&self) -> &CaptureProvenance {
        &self.provenance
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[tracing::instrument(skip(self, host, event), fields(kind = %event.kind(), id = event.id().0))]
    pub fn on_event(&mut self, host: &mut dyn OverlayHost, event: &Rc<InputEvent>, phase: Phase) {
        let kind = event.kind();
        match phase {
            Phase::Capture => {
                if let Some(line) = self.lines.get_mut(&kind) {
                    line.record_capture(host, Rc::clone(event));
                } else {
                    let line = LineEntity::create(host, self.container, Rc::clone(event));
                    self.lines.insert(kind, line);
                }
                self.provenance.mark(event);
            }
            Phase::Bubble => {
                let captured = self.provenance.take(event);
                match self.lines.get_mut(&kind) {
                    Some(line) => line.record_bubble(host, Rc::clone(event), captured),
                    None => trace!("没有活跃行，忽略非捕获阶段的发生"),
                }
            }
        }
    }

    pub fn on_animation_frame(&mut self, host: &mut dyn OverlayHost, handle: FrameHandle) {
        let rendered = self
            .lines
            .values_mut()
            .any(|line| line.on_frame(host, handle));
        if !rendered {
            trace!(frame = ?handle, "动画帧不属于任何行");
        }
    }

    pub fn on_transition_start(&mut self, element: ElementId) {
        if let Some(line) = self.lines.values_mut().find(|line| line.element() == element) {
            line.on_fade_started();
        }
    }

    pub fn on_transition_end(&mut self, host: &mut dyn OverlayHost, element: ElementId) {
        let Some(kind) = self
            .lines
            .iter()
            .find(|(_, line)| line.element() == element)
            .map(|(kind, _)| *kind)
        else {
            trace!(element = ?element, "过渡结束的元素不属于任何行");
            return;
        };
        let removed = self
            .lines
            .get_mut(&kind)
            .is_some_and(|line| line.on_fade_finished(host));
        if removed {
            self.lines.remove(&kind);
        }
    }

    /// 退订全部监听器并取消待执行的帧；容器由会话负责移除。
    pub fn teardown(self, host: &mut dyn OverlayHost) {
        let mut missing = 0usize;
        for id in self.listeners {
            if !host.remove_listener(id) {
                missing += 1;
            }
        }
        let lines = self.lines.len();
        for line in self.lines.into_values() {
            line.discard(host);
        }
        debug!(lines, missing_listeners = missing, "聚合引擎已停止");
    }
}
