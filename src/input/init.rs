//! DOM 风格的事件 init 字典
//!
//! 场景 JSON 用它描述要注入的事件；字段名与宿主一致（camelCase），全部可省略。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 指针设备类别。宿主给出的是开放字符串：无法识别设备时为空串，厂商也可能给出
/// 自定义值，这些都原样保存在 `Other` 里。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PointerType {
    #[default]
    Mouse,
    Pen,
    Touch,
    Other(String),
}

impl PointerType {
    pub fn as_str(&self) -> &str {
        match self {
            PointerType::Mouse => "mouse",
            PointerType::Pen => "pen",
            PointerType::Touch => "touch",
            PointerType::Other(raw) => raw,
        }
    }
}

impl From<String> for PointerType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "mouse" => PointerType::Mouse,
            "pen" => PointerType::Pen,
            "touch" => PointerType::Touch,
            _ => PointerType::Other(raw),
        }
    }
}

impl From<PointerType> for String {
    fn from(kind: PointerType) -> Self {
        match kind {
            PointerType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PointerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 构造 [`InputEvent`](super::InputEvent) 的参数；事件接口用不到的字段会被忽略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInit {
    pub client_x: f64,
    pub client_y: f64,
    /// 按键位掩码：1 主键、2 次键、4 辅助键、8 第四键、16 第五键
    pub buttons: u16,

    pub pointer_id: i32,
    pub pointer_type: PointerType,
    pub is_primary: bool,

    pub delta_x: f64,
    pub delta_y: f64,
    /// 0 像素、1 行、2 页
    pub delta_mode: u32,

    /// 当前活动触点数
    pub touches: u32,

    pub code: String,
    pub repeat: bool,
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
    pub location: u32,
}

impl Default for EventInit {
    fn default() -> Self {
        Self {
            client_x: 0.0,
            client_y: 0.0,
            buttons: 0,
            pointer_id: 1,
            pointer_type: PointerType::Mouse,
            is_primary: true,
            delta_x: 0.0,
            delta_y: 0.0,
            delta_mode: 0,
            touches: 0,
            code: String::new(),
            repeat: false,
            shift_key: false,
            ctrl_key: false,
            alt_key: false,
            meta_key: false,
            location: 0,
        }
    }
}
