//! 页面上下文
//!
//! 一个标签页里的全部宿主状态：DOM、事件总线、刷新时钟、进行中的帧与过渡。

use super::action::TabId;
use super::bus::EventBus;
use super::dom::Dom;
use crate::config::PageConfig;
use crate::input::{EventId, EventInit, EventKind, InputEvent};
use crate::overlay::{ElementId, FrameHandle};
use crate::sim::{EventToken, SimTime};
use std::collections::HashMap;

/// 一行正在进行的过渡对应的两个定时事件
#[derive(Debug, Clone, Copy)]
pub(crate) struct FadeTimers {
    pub(crate) start: EventToken,
    pub(crate) end: EventToken,
}

#[derive(Debug)]
pub struct Page {
    pub config: PageConfig,
    pub dom: Dom,
    pub bus: EventBus,
    tab: TabId,
    content_script_loaded: bool,
    next_event_id: u64,
    next_frame: u64,
    pub(crate) frames: HashMap<FrameHandle, EventToken>,
    pub(crate) fades: HashMap<ElementId, FadeTimers>,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            dom: Dom::default(),
            bus: EventBus::default(),
            tab: TabId::DEFAULT,
            content_script_loaded: config.content_script_loaded,
            next_event_id: 0,
            next_frame: 0,
            frames: HashMap::new(),
            fades: HashMap::new(),
        }
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn content_script_loaded(&self) -> bool {
        self.content_script_loaded
    }

    pub fn load_content_script(&mut self) {
        self.content_script_loaded = true;
    }

    /// 构造一次新的事件发生
    pub fn make_event(&mut self, kind: EventKind, init: &EventInit) -> InputEvent {
        let id = EventId(self.next_event_id);
        self.next_event_id = self.next_event_id.wrapping_add(1);
        InputEvent::new(id, kind, init)
    }

    pub(crate) fn alloc_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_frame);
        self.next_frame = self.next_frame.wrapping_add(1);
        handle
    }

    /// `now` 之后的下一个刷新边界
    pub fn next_refresh(&self, now: SimTime) -> SimTime {
        let interval = self.config.frame_interval().0.max(1);
        SimTime((now.0 / interval).saturating_add(1).saturating_mul(interval))
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_fades(&self) -> usize {
        self.fades.len()
    }
}
