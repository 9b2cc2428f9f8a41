//! DOM 模型
//!
//! 只建模覆盖层关心的部分：body 下的顶层元素、覆盖层容器与行、top layer 的叠放顺序、
//! 全屏元素。

use crate::overlay::{ElementId, StyleSheet, Transition};
use crate::sim::SimTime;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Container,
    Line,
    Dialog,
    Popover,
    Fullscreen,
}

/// 行的透明度过渡状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// 尚未开始过渡（完全不透明）
    Idle,
    /// 保持期：完全不透明
    Holding { since: SimTime },
    /// 透明度正在下降
    Fading { since: SimTime },
    /// 已透明
    Faded,
}

#[derive(Debug, Clone)]
pub struct LineElement {
    pub container: ElementId,
    pub markup: String,
    pub fade: Fade,
}

#[derive(Debug, Clone)]
pub struct ContainerElement {
    pub sheet: StyleSheet,
    pub lines: Vec<ElementId>,
}

/// 用于比较激活前后页面状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomSnapshot {
    pub body: Vec<ElementId>,
    pub top_layer: Vec<ElementId>,
    pub fullscreen: Option<ElementId>,
    pub containers: usize,
    pub lines: usize,
}

#[derive(Debug, Default)]
pub struct Dom {
    next_id: u64,
    body: Vec<ElementId>,
    kinds: BTreeMap<ElementId, ElementKind>,
    containers: BTreeMap<ElementId, ContainerElement>,
    lines: BTreeMap<ElementId, LineElement>,
    /// 叠放顺序，最后一个在最上面
    top_layer: Vec<ElementId>,
    fullscreen: Option<ElementId>,
}

impl Dom {
    fn alloc(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.kinds.insert(id, kind);
        id
    }

    /// 页面自己的内容（对话框、popover 等）
    pub fn append_to_body(&mut self, kind: ElementKind) -> ElementId {
        let id = self.alloc(kind);
        self.body.push(id);
        id
    }

    pub fn mount_container(&mut self, sheet: StyleSheet) -> ElementId {
        let id = self.append_to_body(ElementKind::Container);
        self.containers.insert(
            id,
            ContainerElement {
                sheet,
                lines: Vec::new(),
            },
        );
        id
    }

    /// 移除容器（连同其中的行），返回被移除的行。
    pub fn unmount_container(&mut self, id: ElementId) -> Option<Vec<ElementId>> {
        let container = self.containers.remove(&id)?;
        self.body.retain(|el| *el != id);
        self.top_layer.retain(|el| *el != id);
        self.kinds.remove(&id);
        for line in &container.lines {
            self.lines.remove(line);
            self.kinds.remove(line);
        }
        Some(container.lines)
    }

    pub fn append_line(&mut self, container: ElementId) -> ElementId {
        let id = self.alloc(ElementKind::Line);
        if let Some(c) = self.containers.get_mut(&container) {
            c.lines.push(id);
        }
        self.lines.insert(
            id,
            LineElement {
                container,
                markup: String::new(),
                fade: Fade::Idle,
            },
        );
        id
    }

    pub fn remove_line(&mut self, id: ElementId) -> bool {
        let Some(line) = self.lines.remove(&id) else {
            return false;
        };
        if let Some(c) = self.containers.get_mut(&line.container) {
            c.lines.retain(|el| *el != id);
        }
        self.kinds.remove(&id);
        true
    }

    pub fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.kinds.get(&id).copied()
    }

    pub fn line(&self, id: ElementId) -> Option<&LineElement> {
        self.lines.get(&id)
    }

    pub fn line_mut(&mut self, id: ElementId) -> Option<&mut LineElement> {
        self.lines.get_mut(&id)
    }

    pub fn container(&self, id: ElementId) -> Option<&ContainerElement> {
        self.containers.get(&id)
    }

    /// 行所在容器声明的过渡参数
    pub fn line_transition(&self, id: ElementId) -> Option<Transition> {
        let line = self.lines.get(&id)?;
        self.containers
            .get(&line.container)
            .map(|c| c.sheet.line_transition)
    }

    /// 在 `now` 时刻行的可见透明度（0..=1）
    pub fn line_opacity(&self, id: ElementId, now: SimTime) -> f64 {
        let Some(line) = self.lines.get(&id) else {
            return 0.0;
        };
        match line.fade {
            Fade::Idle | Fade::Holding { .. } => 1.0,
            Fade::Faded => 0.0,
            Fade::Fading { since } => {
                let duration = self
                    .line_transition(id)
                    .map(|t| t.duration.0)
                    .unwrap_or(0);
                if duration == 0 {
                    return 0.0;
                }
                let elapsed = now.saturating_sub(since).0 as f64;
                (1.0 - elapsed / duration as f64).clamp(0.0, 1.0)
            }
        }
    }

    /// 进入 top layer 顶部；已在其中时返回 false。
    pub fn enter_top_layer(&mut self, id: ElementId) -> bool {
        if self.top_layer.contains(&id) {
            return false;
        }
        self.top_layer.push(id);
        true
    }

    pub fn leave_top_layer(&mut self, id: ElementId) -> bool {
        let before = self.top_layer.len();
        self.top_layer.retain(|el| *el != id);
        self.top_layer.len() != before
    }

    pub fn top_layer(&self) -> &[ElementId] {
        &self.top_layer
    }

    pub fn topmost(&self) -> Option<ElementId> {
        self.top_layer.last().copied()
    }

    pub fn fullscreen(&self) -> Option<ElementId> {
        self.fullscreen
    }

    pub fn set_fullscreen(&mut self, element: Option<ElementId>) {
        self.fullscreen = element;
    }

    pub fn snapshot(&self) -> DomSnapshot {
        DomSnapshot {
            body: self.body.clone(),
            top_layer: self.top_layer.clone(),
            fullscreen: self.fullscreen,
            containers: self.containers.len(),
            lines: self.lines.len(),
        }
    }
}
