//! 扩展工具栏按钮
//!
//! 点击按钮时向当前标签页发送 `{"action":"toggle"}`。投递是尽力而为的：页面还没有
//! 加载内容脚本时发送会失败，失败被静默丢弃，这次切换就是空操作。

use super::context::Page;
use super::events::DeliverMessage;
use crate::overlay::RuntimeMessage;
use crate::sim::Simulator;
use crate::trace::{TraceEventKind, TraceLog};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub u32);

impl TabId {
    pub const DEFAULT: TabId = TabId(1);
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("no tab with id {0}")]
    NoSuchTab(TabId),
    #[error("could not establish connection: tab {0} has no message listener")]
    NoReceiver(TabId),
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait MessageSender {
    fn send_message(&mut self, tab: TabId, message: &RuntimeMessage) -> Result<(), DeliveryError>;
}

/// 工具栏按钮点击处理；没有标签页 id 时直接返回。
pub fn on_action_clicked(tab: Option<TabId>, sender: &mut dyn MessageSender) {
    let Some(tab) = tab else {
        debug!("点击时没有标签页 id，忽略");
        return;
    };
    if let Err(err) = sender.send_message(tab, &RuntimeMessage::Toggle) {
        debug!(%tab, error = %err, "消息投递失败，已忽略");
    }
}

/// 模拟浏览器的标签页消息通道：消息异步到达（作为当前时刻的新事件）。
pub struct PageTabs<'a> {
    pub page: &'a Page,
    pub sim: &'a mut Simulator,
    pub trace: &'a mut TraceLog,
}

impl PageTabs<'_> {
    fn try_send(&mut self, tab: TabId, message: &RuntimeMessage) -> Result<(), DeliveryError> {
        if tab != self.page.tab() {
            return Err(DeliveryError::NoSuchTab(tab));
        }
        if !self.page.content_script_loaded() {
            return Err(DeliveryError::NoReceiver(tab));
        }
        let payload = serde_json::to_string(message)?;
        let now = self.sim.now();
        self.sim.schedule(now, DeliverMessage { tab, payload });
        Ok(())
    }
}

impl MessageSender for PageTabs<'_> {
    fn send_message(&mut self, tab: TabId, message: &RuntimeMessage) -> Result<(), DeliveryError> {
        let result = self.try_send(tab, message);
        if let Err(err) = &result {
            self.trace.push(
                self.sim.now().0,
                TraceEventKind::MessageDropped {
                    reason: err.to_string(),
                },
            );
        }
        result
    }
}
