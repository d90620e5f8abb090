use std::cmp::Reverse;

use super::{RunToCompletion, Scheduler, WaitingTime, run_to_completion::run_to_completion};
use crate::{
    core::{SimCtx, Ticks},
    sim::job::ProcessInstance,
};

/// Longest processing time first, non-preemptive.
pub struct LptScheduler;

impl RunToCompletion for LptScheduler {
    type Key = Reverse<Ticks>;

    fn key(&self, proc: &ProcessInstance) -> Reverse<Ticks> {
        Reverse(proc.process.burst_time)
    }
}

impl Scheduler for LptScheduler {
    const NAME: &'static str = "LPT";
    const WAITING_TIME: WaitingTime = WaitingTime::UntilFirstDispatch;

    fn schedule(&mut self, ctx: &mut SimCtx) {
        run_to_completion(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::{Process, lpt_scheduling};

    #[test]
    fn picks_longest_arrived_job() {
        let result = lpt_scheduling(&[
            Process::new(1, 0, 2),
            Process::new(2, 0, 4),
            Process::new(3, 0, 8),
            Process::new(4, 0, 4),
        ]);
        let order: Vec<_> = result.timeline.iter().filter_map(|e| e.slot.process_id()).collect();
        assert_eq!(order, vec![3, 2, 4, 1]);
        assert_eq!(result.processes[0].completion_time, 18);
    }

    #[test]
    fn only_arrived_jobs_compete() {
        let result = lpt_scheduling(&[Process::new(1, 0, 1), Process::new(2, 5, 9)]);
        let order: Vec<_> = result.timeline.iter().filter_map(|e| e.slot.process_id()).collect();
        assert_eq!(order, vec![1, 2]);
        assert_eq!(result.processes[1].start_time, 5);
    }
}
