use std::{collections::VecDeque, num::NonZeroU64};

use super::{Scheduler, WaitingTime};
use crate::core::{ProcKey, SimCtx, Ticks};

/// Round robin with a fixed quantum and an optional context-switch cost.
///
/// The ready queue holds arena keys only. Processes arriving during a slice
/// are queued before the preempted process goes back to the tail.
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
    context_switch_time: Ticks,
}

impl RoundRobinScheduler {
    /// Returns `None` for a zero quantum.
    pub fn new(time_quantum: Ticks, context_switch_time: Ticks) -> Option<Self> {
        Some(Self {
            quantum: NonZeroU64::new(time_quantum)?,
            context_switch_time,
        })
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum.get()
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "RR";
    const WAITING_TIME: WaitingTime = WaitingTime::TurnaroundLessBurst;

    fn schedule(&mut self, ctx: &mut SimCtx) {
        let mut ready: VecDeque<ProcKey> = VecDeque::new();
        let mut last: Option<ProcKey> = None;

        while !ctx.all_completed() {
            ready.extend(ctx.admit_arrivals());

            let Some(key) = ready.pop_front() else {
                if !ctx.idle_until_next_arrival() {
                    break;
                }
                continue;
            };

            if last.is_some_and(|prev| prev != key) && self.context_switch_time > 0 {
                ctx.context_switch(self.context_switch_time);
                ready.extend(ctx.admit_arrivals());
            }

            let slice = self.quantum().min(ctx.process(key).remaining_time);
            ctx.dispatch(key, slice);
            ready.extend(ctx.admit_arrivals());
            last = Some(key);

            if ctx.process(key).remaining_time == 0 {
                ctx.mark_completed(key);
            } else {
                ready.push_back(key);
            }
        }
    }
}
