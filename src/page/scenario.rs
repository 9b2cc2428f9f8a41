//! 把场景步骤排入仿真器

use super::action::TabId;
use super::events::{
    ActionClicked, DeliverInput, LoadContentScript, PageSignal, Signal, TakeSample,
};
use crate::sim::{ScenarioSpec, SimTime, Simulator, StepAction};
use tracing::debug;

/// 返回最后一个步骤的时间。
pub fn schedule_scenario(sim: &mut Simulator, spec: &ScenarioSpec, tab: TabId) -> SimTime {
    let mut last = SimTime::ZERO;
    for step in &spec.steps {
        let at = SimTime::from_millis_f64(step.at_ms);
        last = last.max(at);
        match &step.action {
            StepAction::ActionClick => {
                sim.schedule(at, ActionClicked { tab: Some(tab) });
            }
            StepAction::LoadContentScript => {
                sim.schedule(at, LoadContentScript);
            }
            StepAction::Input {
                kind,
                init,
                stop_propagation,
            } => {
                sim.schedule(
                    at,
                    DeliverInput {
                        kind: *kind,
                        init: init.clone(),
                        stop_propagation: *stop_propagation,
                    },
                );
            }
            StepAction::Burst {
                kind,
                count,
                gap_ms,
                init,
                stop_propagation,
            } => {
                let gap = SimTime::from_millis_f64(*gap_ms);
                let mut t = at;
                for _ in 0..*count {
                    sim.schedule(
                        t,
                        DeliverInput {
                            kind: *kind,
                            init: init.clone(),
                            stop_propagation: *stop_propagation,
                        },
                    );
                    last = last.max(t);
                    t = t.saturating_add(gap);
                }
            }
            StepAction::OpenModal => {
                sim.schedule(at, PageSignal { signal: Signal::OpenModal });
            }
            StepAction::ShowPopover => {
                sim.schedule(at, PageSignal { signal: Signal::ShowPopover });
            }
            StepAction::EnterFullscreen => {
                sim.schedule(at, PageSignal { signal: Signal::EnterFullscreen });
            }
            StepAction::ExitFullscreen => {
                sim.schedule(at, PageSignal { signal: Signal::ExitFullscreen });
            }
            StepAction::Sample { label } => {
                sim.schedule(at, TakeSample { label: label.clone() });
            }
        }
    }
    debug!(steps = spec.steps.len(), last = ?last, "场景已排期");
    last
}
