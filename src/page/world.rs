//! 页面世界
//!
//! 持有页面上下文、覆盖层生命周期开关和表面变化记录，负责把宿主事件分发给覆盖层。

use super::action::{on_action_clicked, PageTabs, TabId};
use super::context::Page;
use super::dom::{DomSnapshot, ElementKind, Fade};
use super::events::{PopoverToggled, Signal};
use super::host::PageHost;
use crate::config::{OverlayConfig, PageConfig};
use crate::input::{EventId, EventInit, EventKind, Phase};
use crate::overlay::{
    AggregationEngine, ElementId, FrameHandle, LifecycleToggle, LineState, ListenerTarget,
    OverlaySession, RuntimeMessage, Subscriber, Topic,
};
use crate::sim::{SimTime, Simulator, World};
use crate::trace::{TraceEventKind, TraceLog};
use serde::Serialize;
use std::any::Any;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// 覆盖层中的一行（快照）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleLine {
    pub event_type: EventKind,
    pub state: LineState,
    pub repeat_count: u32,
    pub opacity: f64,
    pub markup: String,
}

/// 某一时刻覆盖层的快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySample {
    pub t_ns: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub active: bool,
    /// 覆盖层容器是否位于 top layer 最上面
    pub on_top: bool,
    pub lines: Vec<SampleLine>,
}

pub struct PageWorld {
    pub page: Page,
    pub toggle: LifecycleToggle,
    pub trace: TraceLog,
    pub samples: Vec<OverlaySample>,
}

impl PageWorld {
    pub fn new(page: PageConfig, overlay: OverlayConfig) -> Self {
        Self {
            page: Page::new(page),
            toggle: LifecycleToggle::new(overlay),
            trace: TraceLog::default(),
            samples: Vec::new(),
        }
    }

    pub fn session(&self) -> Option<&OverlaySession> {
        self.toggle.session()
    }

    pub fn engine(&self) -> Option<&AggregationEngine> {
        self.toggle.session().map(OverlaySession::engine)
    }

    pub fn dom_snapshot(&self) -> DomSnapshot {
        self.page.dom.snapshot()
    }

    pub fn activate(&mut self, sim: &mut Simulator) -> bool {
        let mut host = PageHost::new(&mut self.page, sim, &mut self.trace);
        self.toggle.activate(&mut host)
    }

    pub fn deactivate(&mut self, sim: &mut Simulator) -> bool {
        let mut host = PageHost::new(&mut self.page, sim, &mut self.trace);
        self.toggle.deactivate(&mut host)
    }

    /// 在当前时刻同步分发一次输入：先窗口捕获阶段，再（除非被阻止）冒泡阶段。
    pub fn dispatch_input(
        &mut self,
        sim: &mut Simulator,
        kind: EventKind,
        init: &EventInit,
        stop_propagation: bool,
    ) -> EventId {
        let event = Rc::new(self.page.make_event(kind, init));
        for phase in Phase::ALL {
            if phase == Phase::Bubble && stop_propagation {
                trace!(id = event.id().0, "传播在 target 处被阻止");
                break;
            }
            let subscribers =
                self.page
                    .bus
                    .subscribers(ListenerTarget::Window, Topic::Input(kind), phase.is_capture());
            for subscriber in subscribers {
                let Some(session) = self.toggle.session_mut() else {
                    continue;
                };
                if subscriber == Subscriber::Engine {
                    let mut host = PageHost::new(&mut self.page, sim, &mut self.trace);
                    session.engine_mut().on_event(&mut host, &event, phase);
                }
            }
        }
        event.id()
    }

    pub fn run_animation_frame(&mut self, sim: &mut Simulator, handle: FrameHandle) {
        if self.page.frames.remove(&handle).is_none() {
            return;
        }
        if let Some(session) = self.toggle.session_mut() {
            let mut host = PageHost::new(&mut self.page, sim, &mut self.trace);
            session.engine_mut().on_animation_frame(&mut host, handle);
        }
    }

    pub fn on_fade_start(&mut self, sim: &mut Simulator, line: ElementId) {
        let now = sim.now();
        let Some(element) = self.page.dom.line_mut(line) else {
            return;
        };
        element.fade = Fade::Fading { since: now };
        self.trace.push(now.0, TraceEventKind::FadeStarted { line: line.0 });
        if let Some(session) = self.toggle.session_mut() {
            session.engine_mut().on_transition_start(line);
        }
    }

    pub fn on_fade_end(&mut self, sim: &mut Simulator, line: ElementId) {
        let now = sim.now();
        self.page.fades.remove(&line);
        let Some(element) = self.page.dom.line_mut(line) else {
            return;
        };
        element.fade = Fade::Faded;
        self.trace.push(now.0, TraceEventKind::FadeFinished { line: line.0 });
        if let Some(session) = self.toggle.session_mut() {
            let mut host = PageHost::new(&mut self.page, sim, &mut self.trace);
            session.engine_mut().on_transition_end(&mut host, line);
        }
    }

    /// 把非输入信号交给订阅者（捕获阶段优先）。
    pub fn dispatch_signal(
        &mut self,
        sim: &mut Simulator,
        target: ListenerTarget,
        topic: Topic,
        origin: Option<ElementId>,
    ) {
        for phase in Phase::ALL {
            let subscribers = self.page.bus.subscribers(target, topic, phase.is_capture());
            for subscriber in subscribers {
                let Some(session) = self.toggle.session_mut() else {
                    continue;
                };
                if subscriber == Subscriber::Visibility {
                    let mut host = PageHost::new(&mut self.page, sim, &mut self.trace);
                    session.visibility_mut().on_signal(&mut host, origin);
                }
            }
        }
    }

    pub fn on_popover_toggled(&mut self, sim: &mut Simulator, target: ElementId) {
        self.dispatch_signal(sim, ListenerTarget::Window, Topic::Toggle, Some(target));
    }

    pub fn apply_signal(&mut self, sim: &mut Simulator, signal: Signal) {
        let now = sim.now();
        match signal {
            Signal::OpenModal => {
                let dialog = self.enter_top_layer(now, ElementKind::Dialog, "modal");
                // showModal() 会把焦点移进对话框
                self.dispatch_signal(sim, ListenerTarget::Window, Topic::FocusIn, Some(dialog));
            }
            Signal::ShowPopover => {
                let popover = self.enter_top_layer(now, ElementKind::Popover, "popover");
                sim.schedule(now, PopoverToggled { target: popover });
            }
            Signal::EnterFullscreen => {
                let element = self.enter_top_layer(now, ElementKind::Fullscreen, "fullscreen");
                self.page.dom.set_fullscreen(Some(element));
                self.dispatch_signal(
                    sim,
                    ListenerTarget::Document,
                    Topic::FullscreenChange,
                    Some(element),
                );
            }
            Signal::ExitFullscreen => {
                let Some(element) = self.page.dom.fullscreen() else {
                    debug!("当前没有全屏元素");
                    return;
                };
                self.page.dom.leave_top_layer(element);
                self.page.dom.set_fullscreen(None);
                self.dispatch_signal(
                    sim,
                    ListenerTarget::Document,
                    Topic::FullscreenChange,
                    Some(element),
                );
            }
        }
    }

    fn enter_top_layer(&mut self, now: SimTime, kind: ElementKind, what: &str) -> ElementId {
        let element = self.page.dom.append_to_body(kind);
        self.page.dom.enter_top_layer(element);
        self.trace.push(
            now.0,
            TraceEventKind::TopLayerEntered {
                element: element.0,
                what: what.to_string(),
            },
        );
        element
    }

    pub fn click_action(&mut self, sim: &mut Simulator, tab: Option<TabId>) {
        let mut tabs = PageTabs {
            page: &self.page,
            sim,
            trace: &mut self.trace,
        };
        on_action_clicked(tab, &mut tabs);
    }

    pub fn deliver_message(&mut self, sim: &mut Simulator, payload: &str) {
        let message: RuntimeMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(err) => {
                warn!(error = %err, "无法解析的消息，已丢弃");
                return;
            }
        };
        let mut host = PageHost::new(&mut self.page, sim, &mut self.trace);
        self.toggle.on_message(&mut host, &message);
    }

    pub fn snapshot(&self, now: SimTime, label: Option<String>) -> OverlaySample {
        let session = self.toggle.session();
        let on_top = session.is_some_and(|s| self.page.dom.topmost() == Some(s.container()));
        let lines = session
            .map(|s| {
                s.engine()
                    .lines()
                    .map(|line| SampleLine {
                        event_type: line.kind(),
                        state: line.state(),
                        repeat_count: line.repeat_count(),
                        opacity: self.page.dom.line_opacity(line.element(), now),
                        markup: self
                            .page
                            .dom
                            .line(line.element())
                            .map(|el| el.markup.clone())
                            .unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        OverlaySample {
            t_ns: now.0,
            label,
            active: session.is_some(),
            on_top,
            lines,
        }
    }

    pub fn sample(&mut self, now: SimTime, label: Option<String>) -> &OverlaySample {
        let sample = self.snapshot(now, label);
        self.samples.push(sample);
        &self.samples[self.samples.len() - 1]
    }
}

impl World for PageWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
