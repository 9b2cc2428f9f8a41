//! 捕获来源记录
//!
//! 记录哪些正在分发的事件已在捕获阶段被看到，供同一事件的第二次观察（冒泡/target）
//! 标注为 captured。记录只持有 `Weak`，不会延长事件的生命周期；宿主分发结束、
//! 没有其他引用后，条目自然失效并在下一次写入时被清理。

use crate::input::{EventId, InputEvent};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

#[derive(Debug, Default)]
pub struct CaptureProvenance {
    entries: HashMap<EventId, Weak<InputEvent>>,
}

impl CaptureProvenance {
    pub fn mark(&mut self, event: &Rc<InputEvent>) {
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        self.entries.insert(event.id(), Rc::downgrade(event));
    }

    /// 同一事件对象是否已被标记（按身份比较，而非仅按 id）。
    pub fn contains(&self, event: &Rc<InputEvent>) -> bool {
        self.entries
            .get(&event.id())
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), Rc::as_ptr(event)))
    }

    /// 查询并清除标记。
    pub fn take(&mut self, event: &Rc<InputEvent>) -> bool {
        let marked = self.contains(event);
        if marked {
            self.entries.remove(&event.id());
        }
        marked
    }

    /// 仍然存活的条目数
    pub fn live(&self) -> usize {
        self.entries
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}
