//! 世界 trait
//!
//! 定义仿真世界接口。

use super::simulator::Simulator;
use std::any::Any;

/// 仿真世界：由宿主层实现（例如模拟页面）。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn on_tick(&mut self, _sim: &mut Simulator) {}
}
