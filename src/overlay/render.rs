//! 行渲染
//!
//! (事件, 重复次数, 是否 captured) → 一行标记文本。纯函数。

use super::classify::{color_of, palette};
use crate::input::InputEvent;

const BUTTON_NAMES: [(u16, &str); 5] = [
    (1, "primary"),
    (2, "secondary"),
    (4, "auxiliary"),
    (8, "fourth"),
    (16, "fifth"),
];

/// 按位掩码顺序列出按下的按键名
pub fn button_names(buttons: u16) -> Vec<&'static str> {
    BUTTON_NAMES
        .iter()
        .filter(|(bit, _)| buttons & bit != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// 渲染一行。字段按固定顺序出现：标签、指针、滚轮、触摸、鼠标、键盘、captured。
pub fn render(event: &InputEvent, repeat_count: u32, captured: bool) -> String {
    let count = if repeat_count > 1 {
        format!(" ×{repeat_count}")
    } else {
        String::new()
    };
    let mut html = format!(
        r#"<b style="color: {}">[{}{}]</b>"#,
        color_of(event.kind()),
        event.kind(),
        count
    );

    if let Some(pointer) = event.pointer() {
        html.push_str(&format!(" id=<b>{}</b>", pointer.pointer_id));
        html.push_str(&format!(
            r#" type=<b style="color: {}">{}</b>"#,
            palette::POINTER_TYPE,
            escape(pointer.pointer_type.as_str())
        ));
        if !pointer.is_primary {
            html.push_str(&format!(" primary=<b>{}</b>", flag(pointer.is_primary)));
        }
    }

    if let Some(wheel) = event.wheel() {
        html.push_str(&format!(
            " delta=<b>({}, {})</b>",
            fixed0(wheel.delta_x),
            fixed0(wheel.delta_y)
        ));
        html.push_str(&format!(" mode=<b>{}</b>", wheel.delta_mode));
    }

    if let Some(touch) = event.touch() {
        html.push_str(&format!(" touches=<b>{}</b>", touch.touches));
    }

    if let Some(mouse) = event.mouse() {
        html.push_str(&format!(
            " pos=<b>({}, {})</b>",
            fixed0(mouse.client_x),
            fixed0(mouse.client_y)
        ));
        let buttons = button_names(mouse.buttons);
        if !buttons.is_empty() {
            html.push_str(&format!(" buttons=<b>[{}]</b>", buttons.join(", ")));
        }
    }

    if let Some(key) = event.keyboard() {
        html.push_str(&format!(" code=<b>{}</b>", escape(&key.code)));
        for (name, on) in [
            ("repeat", key.repeat),
            ("shift", key.shift),
            ("ctrl", key.ctrl),
            ("alt", key.alt),
            ("meta", key.meta),
        ] {
            if on {
                html.push_str(&format!(" {name}=<b>{}</b>", flag(on)));
            }
        }
        if key.location != 0 {
            html.push_str(&format!(" location=<b>{}</b>", key.location));
        }
    }

    if captured {
        html.push_str(&format!(
            r#" <b style="color: {}">captured</b>"#,
            palette::CAPTURED
        ));
    }

    html
}

/// 去掉标签并还原实体，便于在终端输出。
pub fn plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn flag(value: bool) -> String {
    let color = if value { palette::TRUE } else { palette::FALSE };
    format!(r#"<span style="color: {color}">{value}</span>"#)
}

/// 零位小数定点，半数远离零舍入。
fn fixed0(value: f64) -> String {
    // -0.0 + 0.0 == 0.0，避免输出 "-0"
    format!("{:.0}", value.round() + 0.0)
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
