use serde::{Deserialize, Serialize};

use super::{
    history::{self, ProcessHistory},
    job::{Process, ScheduledProcess},
};
use crate::{
    core::{Metrics, ProcessId, Ticks, TimelineEntry},
    scheduler::Policy,
};

/// Everything one policy run produces. The engine keeps no reference to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Adjacent intervals of one process merged.
    pub timeline: Vec<TimelineEntry>,
    /// One entry per dispatched slice or context switch.
    pub raw_timeline: Vec<TimelineEntry>,
    /// In the caller's order.
    pub processes: Vec<ScheduledProcess>,
    pub metrics: Metrics,
}

impl SimulationResult {
    pub fn process(&self, id: ProcessId) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Slice-by-slice history of every process, derived from the raw timeline.
    pub fn execution_history(&self) -> Vec<ProcessHistory> {
        history::execution_history(&self.processes, &self.raw_timeline)
    }

    /// Time at which the last process completed.
    pub fn makespan(&self) -> Ticks {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total CPU time spent switching between processes.
    pub fn context_switch_time(&self) -> Ticks {
        self.raw_timeline
            .iter()
            .filter(|entry| entry.is_context_switch())
            .map(TimelineEntry::duration)
            .sum()
    }
}

pub fn fifo_scheduling(processes: &[Process]) -> SimulationResult {
    Policy::Fifo.run(processes)
}

pub fn sjf_scheduling(processes: &[Process]) -> SimulationResult {
    Policy::Sjf.run(processes)
}

pub fn srt_scheduling(processes: &[Process]) -> SimulationResult {
    Policy::Srt.run(processes)
}

/// Round robin. A zero `time_quantum` yields an empty result.
pub fn rr_scheduling(
    processes: &[Process],
    time_quantum: Ticks,
    context_switch_time: Ticks,
) -> SimulationResult {
    Policy::round_robin(time_quantum, context_switch_time).run(processes)
}

pub fn lpt_scheduling(processes: &[Process]) -> SimulationResult {
    Policy::Lpt.run(processes)
}
