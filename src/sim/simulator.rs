//! 仿真器
//!
//! 定义事件驱动仿真器，维护当前时间与事件队列。

use super::event::Event;
use super::scheduled_event::{EventToken, ScheduledEvent};
use super::time::SimTime;
use super::world::World;
use std::collections::{BinaryHeap, HashSet};
use tracing::{debug, info, trace};

/// 事件驱动仿真器：维护当前时间与事件队列。
///
/// 取消是惰性的：被取消的事件留在堆里，弹出时跳过。
#[derive(Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    q: BinaryHeap<ScheduledEvent>,
    /// 仍在队列中且未被取消的事件序列号
    live: HashSet<u64>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 尚未执行且未被取消的事件数
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// 调度事件在指定时间执行
    #[tracing::instrument(skip(self, ev), fields(event_type = std::any::type_name::<E>(), schedule_at = ?at))]
    pub fn schedule<E: Event>(&mut self, at: SimTime, ev: E) -> EventToken {
        let seq = self.next_seq;
        trace!(now = ?self.now, seq, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.live.insert(seq);
        self.q.push(ScheduledEvent {
            at,
            seq,
            ev: Box::new(ev),
        });

        debug!(queue_size = self.q.len(), "事件已加入队列");
        EventToken(seq)
    }

    /// 取消一个尚未执行的事件；事件已执行或已取消时返回 false。
    pub fn cancel(&mut self, token: EventToken) -> bool {
        let removed = self.live.remove(&token.0);
        trace!(seq = token.0, removed, "取消事件");
        removed
    }

    /// 弹出下一个未取消的事件（不检查时间上限）。
    fn pop_live(&mut self) -> Option<ScheduledEvent> {
        while let Some(item) = self.q.pop() {
            if self.live.remove(&item.seq) {
                return Some(item);
            }
            trace!(seq = item.seq, "跳过已取消事件");
        }
        None
    }

    /// 丢弃堆顶所有已取消事件，返回下一个有效事件的时间。
    fn peek_live_at(&mut self) -> Option<SimTime> {
        while let Some(top) = self.q.peek() {
            if self.live.contains(&top.seq) {
                return Some(top.at);
            }
            self.q.pop();
        }
        None
    }

    /// 运行直到事件队列为空或到达 `until`。
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) {
        while let Some(at) = self.peek_live_at() {
            if at > until {
                break;
            }
            let Some(item) = self.pop_live() else {
                break;
            };
            self.now = item.at;
            item.ev.execute(self, world);
            world.on_tick(self);
        }
        self.now = self.now.max(until);
    }

    /// 运行所有事件直到队列为空。
    #[tracing::instrument(skip(self, world))]
    pub fn run(&mut self, world: &mut dyn World) {
        info!("▶️  开始运行仿真");
        debug!(now = ?self.now, queue_size = self.q.len(), "初始状态");

        let mut event_count = 0;
        while let Some(item) = self.pop_live() {
            event_count += 1;
            self.now = item.at;

            debug!(
                event_num = event_count,
                now = ?self.now,
                scheduled_at = ?item.at,
                seq = item.seq,
                remaining_queue = self.q.len(),
                "执行事件"
            );

            item.ev.execute(self, world);
            world.on_tick(self);
        }

        info!(
            total_events = event_count,
            final_time = ?self.now,
            "✅ 仿真完成"
        );
    }
}
