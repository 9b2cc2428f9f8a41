//! 配置
//!
//! 覆盖层的呈现时序（保持时长、淡出时长）与模拟页面的显示参数。
//! 两者都可以写进场景 JSON，也可以由命令行覆盖。

use crate::sim::SimTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("fade duration must be > 0 ms")]
    ZeroFade,
    #[error("refresh rate must be > 0 Hz")]
    ZeroRefreshRate,
}

/// 覆盖层配置：一行在完全可见状态保持 `hold_ms` 后，用 `fade_ms` 淡出到透明。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub hold_ms: u64,
    pub fade_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hold_ms: 2_000,
            fade_ms: 500,
        }
    }
}

impl OverlayConfig {
    pub fn hold(&self) -> SimTime {
        SimTime::from_millis(self.hold_ms)
    }

    pub fn fade(&self) -> SimTime {
        SimTime::from_millis(self.fade_ms)
    }

    /// 零时长的过渡不会产生结束信号，行将永远不会被移除。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_ms == 0 {
            return Err(ConfigError::ZeroFade);
        }
        Ok(())
    }
}

/// 模拟页面配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// 显示刷新率（Hz），决定动画帧边界
    pub refresh_hz: u32,
    /// 页面是否已加载内容脚本（未加载时，扩展消息投递失败）
    pub content_script_loaded: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            refresh_hz: 60,
            content_script_loaded: true,
        }
    }
}

impl PageConfig {
    /// 相邻两帧的间隔
    pub fn frame_interval(&self) -> SimTime {
        SimTime(1_000_000_000 / u64::from(self.refresh_hz.max(1)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_hz == 0 {
            return Err(ConfigError::ZeroRefreshRate);
        }
        Ok(())
    }
}
