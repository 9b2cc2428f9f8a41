//! 事件传播阶段

/// 覆盖层观察事件的两个阶段。
///
/// `Bubble` 同时涵盖 target 阶段与冒泡阶段：在窗口上注册的非捕获监听器
/// 两者都能看到。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Capture,
    Bubble,
}

impl Phase {
    /// 宿主分发顺序：先捕获，再冒泡。
    pub const ALL: [Phase; 2] = [Phase::Capture, Phase::Bubble];

    pub fn is_capture(self) -> bool {
        matches!(self, Phase::Capture)
    }
}
