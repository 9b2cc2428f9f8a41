//! 覆盖层样式表
//!
//! 容器使用隔离样式：固定在全视口、不参与布局、不拦截输入。行的淡出时序写在
//! `transition: opacity <fade> <hold>` 里，宿主从这里读取过渡参数。

use crate::config::OverlayConfig;
use crate::sim::SimTime;

/// 行的 opacity 过渡：先保持 `delay`，再用 `duration` 变到透明。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub delay: SimTime,
    pub duration: SimTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub text: String,
    pub line_transition: Transition,
}

impl StyleSheet {
    pub fn for_config(config: &OverlayConfig) -> Self {
        let text = format!(
            r#":host {{
  all: initial !important;
  position: fixed !important;
  inset: 0 !important;
  pointer-events: none !important;
}}

:host::backdrop {{
  all: initial !important;
}}

pre {{
  margin: 0;
  color: #fffc;
}}

pre:empty {{
  display: none;
}}

div {{
  width: max-content;
  line-height: 20px;
  padding: 0 0.25em;
  transition: opacity {} {};
  background: #000d;
}}

b {{
  color: #fff;
}}
"#,
            seconds(config.fade_ms),
            seconds(config.hold_ms)
        );
        Self {
            text,
            line_transition: Transition {
                delay: config.hold(),
                duration: config.fade(),
            },
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::for_config(&OverlayConfig::default())
    }
}

/// CSS 时间值：500 → "0.5s"，2000 → "2s"
fn seconds(ms: u64) -> String {
    if ms % 1_000 == 0 {
        format!("{}s", ms / 1_000)
    } else {
        format!("{}s", ms as f64 / 1_000.0)
    }
}
