//! 表面变化记录（用于离线检查与回归测试）
//!
//! 设计目标：
//! - **结构化**：记录 JSON 事件而不是解析文本日志
//! - **轻量**：只存内存，结束时一次性写出

mod types;

pub use types::{TraceEvent, TraceEventKind, TraceLog};
