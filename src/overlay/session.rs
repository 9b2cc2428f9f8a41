//! 覆盖层会话
//!
//! 一次激活期间的全部状态：容器、聚合引擎、置顶维护。`start` 返回的会话本身就是
//! 拆除句柄，`teardown` 按值消费，因此每次 `start` 最多拆除一次。

use super::engine::AggregationEngine;
use super::host::{ElementId, OverlayHost};
use super::style::StyleSheet;
use super::visibility::VisibilityHost;
use crate::config::OverlayConfig;
use tracing::info;

#[derive(Debug)]
pub struct OverlaySession {
    container: ElementId,
    engine: AggregationEngine,
    visibility: VisibilityHost,
}

impl OverlaySession {
    pub fn start(host: &mut dyn OverlayHost, config: &OverlayConfig) -> Self {
        let sheet = StyleSheet::for_config(config);
        let container = host.mount_container(&sheet);
        let visibility = VisibilityHost::attach(host, container);
        let engine = AggregationEngine::start(host, container);
        info!(container = ?container, "🟢 覆盖层已激活");
        Self {
            container,
            engine,
            visibility,
        }
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AggregationEngine {
        &mut self.engine
    }

    pub fn visibility(&self) -> &VisibilityHost {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut VisibilityHost {
        &mut self.visibility
    }

    pub fn teardown(self, host: &mut dyn OverlayHost) {
        let OverlaySession {
            container,
            engine,
            visibility,
        } = self;
        visibility.detach(host);
        engine.teardown(host);
        host.unmount_container(container);
        info!(container = ?container, "⚪ 覆盖层已停用");
    }
}
