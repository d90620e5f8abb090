use keyed_priority_queue::KeyedPriorityQueue;

use super::Rank;
use crate::{
    core::{ProcKey, SimCtx},
    sim::job::ProcessInstance,
};

/// A non-preemptive policy: the ready process with the smallest `key` runs to
/// completion. Ties go to the process supplied first.
pub trait RunToCompletion {
    type Key: Ord + Copy;

    fn key(&self, proc: &ProcessInstance) -> Self::Key;
}

pub fn run_to_completion<P: RunToCompletion>(policy: &P, ctx: &mut SimCtx) {
    let mut ready: KeyedPriorityQueue<ProcKey, Rank<P::Key>> = KeyedPriorityQueue::new();

    while !ctx.all_completed() {
        for key in ctx.admit_arrivals() {
            let proc = ctx.process(key);
            ready.push(key, Rank::new(policy.key(proc), proc.order));
        }

        let Some((key, _)) = ready.pop() else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };

        let burst = ctx.process(key).process.burst_time;
        ctx.dispatch(key, burst);
        ctx.mark_completed(key);
    }
}
