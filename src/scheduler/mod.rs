pub mod fifo;
pub mod lpt;
pub mod round_robin;
pub mod run_to_completion;
pub mod sjf;
pub mod srt;

use std::cmp::Ordering;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    core::{SchedCore, SimCtx, Ticks},
    sim::{Process, SimulationResult},
};
pub use fifo::FifoScheduler;
pub use lpt::LptScheduler;
pub use round_robin::RoundRobinScheduler;
pub use run_to_completion::RunToCompletion;
pub use sjf::SjfScheduler;
pub use srt::SrtScheduler;

pub const DEFAULT_TIME_QUANTUM: Ticks = 2;
pub const DEFAULT_CONTEXT_SWITCH: Ticks = 0;

/// How a policy charges waiting time once a process completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitingTime {
    /// `start - arrival`: a process is never put back in the queue.
    UntilFirstDispatch,
    /// `turnaround - burst`: every gap spent preempted counts.
    TurnaroundLessBurst,
}

impl WaitingTime {
    pub fn compute(self, arrival: Ticks, burst: Ticks, start: Ticks, completion: Ticks) -> Ticks {
        match self {
            Self::UntilFirstDispatch => start.saturating_sub(arrival),
            Self::TurnaroundLessBurst => completion.saturating_sub(arrival).saturating_sub(burst),
        }
    }
}

/// Ready-set ordering key. KeyedPriorityQueue is a max-heap, so Ord is flipped:
/// the smallest key wins, then the earliest caller position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank<K> {
    key: K,
    order: usize,
}

impl<K> Rank<K> {
    pub fn new(key: K, order: usize) -> Self {
        Self { key, order }
    }
}

impl<K: Ord> PartialOrd for Rank<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for Rank<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.order.cmp(&self.order))
    }
}

pub trait Scheduler {
    const NAME: &'static str;
    const WAITING_TIME: WaitingTime;

    /// Drive `ctx` until every process has completed.
    fn schedule(&mut self, ctx: &mut SimCtx);
}

/// The five supported policies with their parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Policy {
    #[default]
    Fifo,
    Sjf,
    Srt,
    #[serde(rename_all = "camelCase")]
    RoundRobin {
        time_quantum: Ticks,
        context_switch_time: Ticks,
    },
    Lpt,
}

impl Policy {
    pub fn round_robin(time_quantum: Ticks, context_switch_time: Ticks) -> Self {
        Self::RoundRobin {
            time_quantum,
            context_switch_time,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fifo => FifoScheduler::NAME,
            Self::Sjf => SjfScheduler::NAME,
            Self::Srt => SrtScheduler::NAME,
            Self::RoundRobin { .. } => RoundRobinScheduler::NAME,
            Self::Lpt => LptScheduler::NAME,
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srt | Self::RoundRobin { .. })
    }

    pub fn run(&self, processes: &[Process]) -> SimulationResult {
        match *self {
            Self::Fifo => SchedCore::new(FifoScheduler).run(processes),
            Self::Sjf => SchedCore::new(SjfScheduler).run(processes),
            Self::Srt => SchedCore::new(SrtScheduler).run(processes),
            Self::RoundRobin {
                time_quantum,
                context_switch_time,
            } => match RoundRobinScheduler::new(time_quantum, context_switch_time) {
                Some(scheduler) => SchedCore::new(scheduler).run(processes),
                None => {
                    warn!("RR: time quantum must be positive, nothing scheduled");
                    SimulationResult::default()
                }
            },
            Self::Lpt => SchedCore::new(LptScheduler).run(processes),
        }
    }
}
