use log::info;

use super::{gantt, metrics::Metrics, observer::Observer, state::SimCtx};
use crate::{
    scheduler::Scheduler,
    sim::{Process, SimulationResult, job::ScheduledProcess},
};

/// Runs one policy over a process list and assembles the result.
pub struct SchedCore<S: Scheduler> {
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            observer: Observer::new(S::WAITING_TIME),
        }
    }

    pub fn run(&mut self, processes: &[Process]) -> SimulationResult {
        if processes.is_empty() {
            return SimulationResult::default();
        }

        let mut ctx = SimCtx::new(processes);
        self.scheduler.schedule(&mut ctx);
        self.observer.observe(&ctx);

        let raw_timeline = ctx.raw_timeline().to_vec();
        let timeline = gantt::consolidate(&raw_timeline);
        let processes: Vec<ScheduledProcess> = ctx
            .instances()
            .map(|proc| ScheduledProcess::finish(proc, S::WAITING_TIME))
            .collect();
        let metrics = Metrics::derive(&processes);

        info!(
            "{}: {} processes done at t={}, avg wait {:.2}, avg turnaround {:.2}",
            S::NAME,
            processes.len(),
            ctx.now,
            metrics.average_waiting_time,
            metrics.average_turnaround_time
        );

        let result = SimulationResult {
            timeline,
            raw_timeline,
            processes,
            metrics,
        };
        self.observer.observe_result(&result);
        result
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
