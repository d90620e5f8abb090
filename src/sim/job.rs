use serde::{Deserialize, Serialize};

use crate::{
    core::{ProcessId, Ticks},
    scheduler::WaitingTime,
};

/// A schedulable unit as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl Process {
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// A process being simulated. Lives in the `SimCtx` arena.
#[derive(Debug, Clone)]
pub struct ProcessInstance {
    pub process: Process,
    // Position in the caller's list
    pub order: usize,
    pub remaining_time: Ticks,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl ProcessInstance {
    pub fn new(process: Process, order: usize) -> Self {
        Self {
            process,
            order,
            remaining_time: process.burst_time,
            start_time: None,
            completion_time: None,
        }
    }
}

/// A process with every timing field filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledProcess {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub response_time: Ticks,
}

impl ScheduledProcess {
    pub fn finish(instance: &ProcessInstance, waiting: WaitingTime) -> Self {
        let Process {
            id,
            arrival_time,
            burst_time,
        } = instance.process;
        let start_time = instance.start_time.unwrap_or(arrival_time);
        let completion_time = instance.completion_time.unwrap_or(start_time);

        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: instance.remaining_time,
            start_time,
            completion_time,
            waiting_time: waiting.compute(arrival_time, burst_time, start_time, completion_time),
            turnaround_time: completion_time.saturating_sub(arrival_time),
            response_time: start_time.saturating_sub(arrival_time),
        }
    }
}
