use serde::{Deserialize, Serialize};

/// 表面变化类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEventKind {
    /// 容器挂载到页面
    ContainerMounted { container: u64 },
    /// 容器及其所有行被移除
    ContainerUnmounted { container: u64, lines: usize },
    /// 容器重新进入 top layer 顶部
    ContainerRaised { container: u64, top_layer_len: usize },
    LineAppended { line: u64 },
    /// 行的标记被重建
    Rendered { line: u64, markup: String },
    /// 透明度回到 1 并重新开始过渡
    FadeRestarted { line: u64 },
    /// 保持期结束，透明度开始下降
    FadeStarted { line: u64 },
    /// 透明度已到 0
    FadeFinished { line: u64 },
    LineRemoved { line: u64 },
    /// 页面上出现了会进入 top layer 的界面（模态、popover、全屏）
    TopLayerEntered { element: u64, what: String },
    /// 扩展消息未能投递（被静默丢弃）
    MessageDropped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// 仿真时间（纳秒，和 `SimTime.0` 同口径）
    pub t_ns: u64,
    #[serde(flatten)]
    pub kind: TraceEventKind,
}

/// 一个简单的事件收集器（存内存，仿真结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, t_ns: u64, kind: TraceEventKind) {
        self.events.push(TraceEvent { t_ns, kind });
    }

    pub fn count(&self, pred: impl Fn(&TraceEventKind) -> bool) -> usize {
        self.events.iter().filter(|ev| pred(&ev.kind)).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}
