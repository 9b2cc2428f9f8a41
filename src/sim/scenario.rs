//! 场景描述
//!
//! 一个场景是按时间排列的页面动作：点击扩展按钮、注入输入事件、打开模态框等。

use crate::config::{ConfigError, OverlayConfig, PageConfig};
use crate::input::{EventInit, EventKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported scenario schema_version {0} (expected 1)")]
    UnsupportedSchema(u32),
    #[error("step {index}: invalid time {value} ms")]
    InvalidTime { index: usize, value: f64 },
    #[error("step {index}: burst count must be > 0")]
    EmptyBurst { index: usize },
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    #[serde(default)]
    pub overlay: Option<OverlayConfig>,
    #[serde(default)]
    pub page: Option<PageConfig>,
    #[serde(default)]
    pub steps: Vec<StepSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSpec {
    pub at_ms: f64,
    #[serde(flatten)]
    pub action: StepAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StepAction {
    /// 点击扩展工具栏按钮（发送 toggle 消息）
    ActionClick,
    /// 页面加载内容脚本
    LoadContentScript,
    Input {
        #[serde(rename = "type")]
        kind: EventKind,
        #[serde(default)]
        init: EventInit,
        #[serde(default)]
        stop_propagation: bool,
    },
    /// 以固定间隔重复注入同一事件
    Burst {
        #[serde(rename = "type")]
        kind: EventKind,
        count: u32,
        gap_ms: f64,
        #[serde(default)]
        init: EventInit,
        #[serde(default)]
        stop_propagation: bool,
    },
    OpenModal,
    ShowPopover,
    EnterFullscreen,
    ExitFullscreen,
    /// 记录覆盖层快照
    Sample {
        #[serde(default)]
        label: Option<String>,
    },
}

impl ScenarioSpec {
    pub fn from_json(raw: &str) -> Result<Self, ScenarioError> {
        let spec: ScenarioSpec = serde_json::from_str(raw)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ScenarioError::UnsupportedSchema(self.schema_version));
        }
        if let Some(overlay) = &self.overlay {
            overlay.validate()?;
        }
        if let Some(page) = &self.page {
            page.validate()?;
        }
        let valid_time = |v: f64| v.is_finite() && v >= 0.0;
        for (index, step) in self.steps.iter().enumerate() {
            if !valid_time(step.at_ms) {
                return Err(ScenarioError::InvalidTime {
                    index,
                    value: step.at_ms,
                });
            }
            if let StepAction::Burst { count, gap_ms, .. } = &step.action {
                if *count == 0 {
                    return Err(ScenarioError::EmptyBurst { index });
                }
                if !valid_time(*gap_ms) {
                    return Err(ScenarioError::InvalidTime {
                        index,
                        value: *gap_ms,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn overlay_config(&self) -> OverlayConfig {
        self.overlay.unwrap_or_default()
    }

    pub fn page_config(&self) -> PageConfig {
        self.page.unwrap_or_default()
    }
}
