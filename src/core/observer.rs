use super::{event::CpuSlot, state::SimCtx};
use crate::{scheduler::WaitingTime, sim::SimulationResult};

/// Debug-build checker for the invariants every finished run must hold.
#[derive(Debug)]
pub struct Observer {
    waiting_time: WaitingTime,
    runs: u64,
}

impl Observer {
    pub fn new(waiting_time: WaitingTime) -> Self {
        Self {
            waiting_time,
            runs: 0,
        }
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Check the simulation state once the policy has returned.
    pub fn observe(&mut self, ctx: &SimCtx) {
        self.runs += 1;

        debug_assert!(ctx.all_completed(), "Policy returned with work left");

        for proc in ctx.instances() {
            let id = proc.process.id;
            debug_assert_eq!(proc.remaining_time, 0, "Process {id} has remaining work");
            debug_assert!(
                proc.start_time.is_some() && proc.completion_time.is_some(),
                "Process {id} never dispatched or never completed"
            );
        }

        let mut prev_end = None;
        for entry in ctx.raw_timeline() {
            debug_assert!(
                entry.end_time > entry.start_time,
                "Empty interval {entry:?} on the timeline"
            );
            if let Some(end) = prev_end {
                debug_assert!(
                    entry.start_time >= end,
                    "Interval {entry:?} overlaps the previous one ending at {end}"
                );
            }
            prev_end = Some(entry.end_time);
        }
    }

    /// Check the assembled result against the per-process timing identities.
    pub fn observe_result(&self, result: &SimulationResult) {
        for proc in &result.processes {
            let id = proc.id;
            debug_assert_eq!(
                proc.turnaround_time,
                proc.completion_time - proc.arrival_time,
                "Process {id} turnaround mismatch"
            );
            debug_assert_eq!(
                proc.response_time,
                proc.start_time - proc.arrival_time,
                "Process {id} response mismatch"
            );
            match self.waiting_time {
                WaitingTime::UntilFirstDispatch => debug_assert_eq!(
                    proc.waiting_time,
                    proc.start_time - proc.arrival_time,
                    "Process {id} waited past its first dispatch"
                ),
                WaitingTime::TurnaroundLessBurst => debug_assert_eq!(
                    proc.turnaround_time,
                    proc.waiting_time + proc.burst_time,
                    "Process {id} waiting time does not cover its preempted gaps"
                ),
            }

            let executed: u64 = result
                .raw_timeline
                .iter()
                .filter(|entry| entry.slot == CpuSlot::Process(id))
                .map(|entry| entry.duration())
                .sum();
            debug_assert_eq!(executed, proc.burst_time, "Process {id} ran {executed} ticks");
        }
    }
}
