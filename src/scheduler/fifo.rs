use super::{RunToCompletion, Scheduler, WaitingTime, run_to_completion::run_to_completion};
use crate::{
    core::{SimCtx, Ticks},
    sim::job::ProcessInstance,
};

/// First come, first served: earliest arrival runs to completion.
pub struct FifoScheduler;

impl RunToCompletion for FifoScheduler {
    type Key = Ticks;

    fn key(&self, proc: &ProcessInstance) -> Ticks {
        proc.process.arrival_time
    }
}

impl Scheduler for FifoScheduler {
    const NAME: &'static str = "FIFO";
    const WAITING_TIME: WaitingTime = WaitingTime::UntilFirstDispatch;

    fn schedule(&mut self, ctx: &mut SimCtx) {
        run_to_completion(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{CpuSlot, TimelineEntry},
        sim::{Process, fifo_scheduling},
    };

    #[test]
    fn later_arrival_waits_for_the_running_process() {
        let result = fifo_scheduling(&[Process::new(1, 0, 5), Process::new(2, 2, 3)]);
        assert_eq!(
            result.timeline,
            vec![
                TimelineEntry::new(CpuSlot::Process(1), 0, 5),
                TimelineEntry::new(CpuSlot::Process(2), 5, 8),
            ]
        );
        assert_eq!(result.processes[1].waiting_time, 3);
        assert_eq!(result.metrics.average_waiting_time, 1.5);
    }

    #[test]
    fn ignores_burst_length() {
        let result = fifo_scheduling(&[
            Process::new(1, 3, 1),
            Process::new(2, 0, 9),
            Process::new(3, 0, 2),
        ]);
        let order: Vec<_> = result.timeline.iter().filter_map(|e| e.slot.process_id()).collect();
        assert_eq!(order, vec![2, 3, 1]);
        // Output keeps the caller's order
        assert_eq!(result.processes[0].id, 1);
        assert_eq!(result.processes[0].start_time, 11);
    }

    #[test]
    fn idle_gap_is_not_on_the_timeline() {
        let result = fifo_scheduling(&[Process::new(1, 2, 2), Process::new(2, 10, 1)]);
        assert_eq!(
            result.timeline,
            vec![
                TimelineEntry::new(CpuSlot::Process(1), 2, 4),
                TimelineEntry::new(CpuSlot::Process(2), 10, 11),
            ]
        );
        assert_eq!(result.processes[1].waiting_time, 0);
    }
}
