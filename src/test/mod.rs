mod line_lifecycle;
mod render;
mod scenario;
mod sim_time;
mod simulator;

use crate::config::{OverlayConfig, PageConfig};
use crate::input::EventKind;
use crate::page::PageWorld;
use crate::sim::{SimTime, Simulator};

/// 50 Hz：帧间隔正好 20ms，便于计算帧边界
pub(crate) const FRAME: SimTime = SimTime(20_000_000);

pub(crate) fn page_config() -> PageConfig {
    PageConfig {
        refresh_hz: 50,
        ..PageConfig::default()
    }
}

pub(crate) fn idle_page() -> (Simulator, PageWorld) {
    (
        Simulator::default(),
        PageWorld::new(page_config(), OverlayConfig::default()),
    )
}

pub(crate) fn active_page() -> (Simulator, PageWorld) {
    let (mut sim, mut world) = idle_page();
    assert!(world.activate(&mut sim));
    (sim, world)
}

pub(crate) fn markup_of(world: &PageWorld, kind: EventKind) -> String {
    let engine = world.engine().expect("overlay active");
    let line = engine.line(kind).expect("line exists");
    world
        .page
        .dom
        .line(line.element())
        .expect("line element")
        .markup
        .clone()
}

pub(crate) fn run_to(sim: &mut Simulator, world: &mut PageWorld, until: SimTime) {
    sim.run_until(until, world);
}
