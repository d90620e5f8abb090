use keyed_priority_queue::KeyedPriorityQueue;

use super::{Rank, Scheduler, WaitingTime};
use crate::core::{ProcKey, SimCtx, Ticks};

/// Shortest remaining time, the preemptive form of SJF.
///
/// The choice is re-evaluated at every completion and every arrival. Between
/// those points the candidate set cannot change, so running the winner up to
/// the next arrival is exact for integer times.
pub struct SrtScheduler;

impl Scheduler for SrtScheduler {
    const NAME: &'static str = "SRT";
    const WAITING_TIME: WaitingTime = WaitingTime::TurnaroundLessBurst;

    fn schedule(&mut self, ctx: &mut SimCtx) {
        let mut ready: KeyedPriorityQueue<ProcKey, Rank<Ticks>> = KeyedPriorityQueue::new();

        while !ctx.all_completed() {
            for key in ctx.admit_arrivals() {
                let proc = ctx.process(key);
                ready.push(key, Rank::new(proc.remaining_time, proc.order));
            }

            let Some((key, _)) = ready.pop() else {
                if !ctx.idle_until_next_arrival() {
                    break;
                }
                continue;
            };

            let remaining = ctx.process(key).remaining_time;
            // Everything due by `now` is admitted, so the next arrival is strictly later
            let slice = match ctx.next_arrival() {
                Some(at) => remaining.min(at - ctx.now),
                None => remaining,
            };
            ctx.dispatch(key, slice);

            let proc = ctx.process(key);
            if proc.remaining_time == 0 {
                ctx.mark_completed(key);
            } else {
                ready.push(key, Rank::new(proc.remaining_time, proc.order));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{CpuSlot, TimelineEntry},
        sim::{Process, srt_scheduling},
    };

    #[test]
    fn shorter_arrival_preempts() {
        let result = srt_scheduling(&[Process::new(1, 0, 8), Process::new(2, 1, 4)]);
        assert_eq!(
            result.timeline,
            vec![
                TimelineEntry::new(CpuSlot::Process(1), 0, 1),
                TimelineEntry::new(CpuSlot::Process(2), 1, 5),
                TimelineEntry::new(CpuSlot::Process(1), 5, 12),
            ]
        );

        let p1 = &result.processes[0];
        assert_eq!(p1.start_time, 0);
        assert_eq!(p1.completion_time, 12);
        // Waiting covers the preempted gap, not only the wait before first dispatch
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(p1.response_time, 0);
    }

    #[test]
    fn raw_timeline_splits_at_every_arrival() {
        // P2 arrives but is longer, so P1 keeps the CPU across the arrival
        let result = srt_scheduling(&[Process::new(1, 0, 5), Process::new(2, 2, 6)]);
        assert_eq!(result.raw_timeline.len(), 3);
        assert_eq!(
            result.timeline,
            vec![
                TimelineEntry::new(CpuSlot::Process(1), 0, 5),
                TimelineEntry::new(CpuSlot::Process(2), 5, 11),
            ]
        );
    }

    #[test]
    fn textbook_four_process_run() {
        let result = srt_scheduling(&[
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ]);
        let completions: Vec<_> = result.processes.iter().map(|p| p.completion_time).collect();
        assert_eq!(completions, vec![17, 5, 26, 10]);
        assert_eq!(result.metrics.average_waiting_time, 6.5);
    }

    #[test]
    fn equal_remaining_keeps_caller_order() {
        let result = srt_scheduling(&[Process::new(1, 0, 3), Process::new(2, 0, 3)]);
        assert_eq!(result.timeline[0].slot, CpuSlot::Process(1));
    }
}
