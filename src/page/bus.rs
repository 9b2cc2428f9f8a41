//! 事件总线（监听器注册表）

use crate::overlay::{ListenerId, ListenerTarget, Subscriber, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub id: ListenerId,
    pub target: ListenerTarget,
    pub topic: Topic,
    pub capture: bool,
    pub subscriber: Subscriber,
}

#[derive(Debug, Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn add(
        &mut self,
        target: ListenerTarget,
        topic: Topic,
        capture: bool,
        subscriber: Subscriber,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push(Listener {
            id,
            target,
            topic,
            capture,
            subscriber,
        });
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// 按注册顺序返回匹配的接收者
    pub fn subscribers(&self, target: ListenerTarget, topic: Topic, capture: bool) -> Vec<Subscriber> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.topic == topic && l.capture == capture)
            .map(|l| l.subscriber)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
