//! 输入事件覆盖层
//!
//! 核心：事件聚合与渲染引擎。每种活跃的事件类型对应一行文字；同类事件的突发被
//! 合并为一行，渲染被节流到每个显示刷新最多一次，行在活动停止后淡出并移除。
//!
//! 覆盖层只通过 [`OverlayHost`] 接触宿主页面。

mod classify;
mod engine;
mod host;
mod line;
mod provenance;
mod render;
mod session;
mod style;
mod toggle;
mod visibility;

pub use classify::{color_of, group_of, palette, Color, EventGroup};
pub use engine::AggregationEngine;
pub use host::{ElementId, FrameHandle, ListenerId, ListenerTarget, OverlayHost, Subscriber, Topic};
pub use line::{LineEntity, LineState};
pub use provenance::CaptureProvenance;
pub use render::{button_names, plain_text, render};
pub use session::OverlaySession;
pub use style::{StyleSheet, Transition};
pub use toggle::{LifecycleToggle, RuntimeMessage};
pub use visibility::VisibilityHost;
