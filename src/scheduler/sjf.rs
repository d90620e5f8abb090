use super::{RunToCompletion, Scheduler, WaitingTime, run_to_completion::run_to_completion};
use crate::{
    core::{SimCtx, Ticks},
    sim::job::ProcessInstance,
};

/// Shortest job first, non-preemptive.
pub struct SjfScheduler;

impl RunToCompletion for SjfScheduler {
    type Key = Ticks;

    fn key(&self, proc: &ProcessInstance) -> Ticks {
        proc.process.burst_time
    }
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "SJF";
    const WAITING_TIME: WaitingTime = WaitingTime::UntilFirstDispatch;

    fn schedule(&mut self, ctx: &mut SimCtx) {
        run_to_completion(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::{Process, sjf_scheduling};

    fn run_order(processes: &[Process]) -> Vec<u32> {
        sjf_scheduling(processes)
            .timeline
            .iter()
            .filter_map(|e| e.slot.process_id())
            .collect()
    }

    #[test]
    fn picks_shortest_arrived_job() {
        // P1 is alone at t=0 and is not preempted by the shorter jobs
        let order = run_order(&[
            Process::new(1, 0, 7),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
            Process::new(4, 3, 2),
        ]);
        assert_eq!(order, vec![1, 4, 2, 3]);
    }

    #[test]
    fn equal_bursts_keep_caller_order() {
        let order = run_order(&[
            Process::new(1, 0, 4),
            Process::new(2, 0, 2),
            Process::new(3, 0, 4),
            Process::new(4, 0, 2),
        ]);
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn waiting_time_is_time_before_dispatch() {
        let result = sjf_scheduling(&[Process::new(1, 0, 8), Process::new(2, 0, 4)]);
        let long = &result.processes[0];
        assert_eq!(long.start_time, 4);
        assert_eq!(long.waiting_time, 4);
        assert_eq!(long.turnaround_time, 12);
    }
}
