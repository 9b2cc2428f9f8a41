//! 生命周期开关
//!
//! 由扩展消息驱动，在“未激活”（没有引擎、没有 DOM 表面）与“激活”之间切换。
//! 同一页面同时最多一个会话：已激活时再次切换即停用。

use super::host::OverlayHost;
use super::session::OverlaySession;
use crate::config::OverlayConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 扩展发往页面的消息，例如 `{"action":"toggle"}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RuntimeMessage {
    Toggle,
    #[serde(other)]
    Unknown,
}

#[derive(Debug)]
pub struct LifecycleToggle {
    config: OverlayConfig,
    session: Option<OverlaySession>,
}

impl LifecycleToggle {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&OverlaySession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut OverlaySession> {
        self.session.as_mut()
    }

    pub fn on_message(&mut self, host: &mut dyn OverlayHost, message: &RuntimeMessage) {
        match message {
            RuntimeMessage::Toggle => self.toggle(host),
            RuntimeMessage::Unknown => debug!("忽略未知消息"),
        }
    }

    pub fn toggle(&mut self, host: &mut dyn OverlayHost) {
        if self.is_active() {
            self.deactivate(host);
        } else {
            self.activate(host);
        }
    }

    /// 已激活时不做任何事并返回 false。
    pub fn activate(&mut self, host: &mut dyn OverlayHost) -> bool {
        if self.session.is_some() {
            warn!("覆盖层已处于激活状态");
            return false;
        }
        self.session = Some(OverlaySession::start(host, &self.config));
        true
    }

    /// 未激活时不做任何事并返回 false。
    pub fn deactivate(&mut self, host: &mut dyn OverlayHost) -> bool {
        match self.session.take() {
            Some(session) => {
                session.teardown(host);
                true
            }
            None => false,
        }
    }
}
