use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::job::ScheduledProcess;
use crate::core::{ProcessId, Ticks, TimelineEntry};

/// One slice a process spent on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    pub step_number: usize,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub execution_time: Ticks,
    pub remaining_before: Ticks,
    pub remaining_after: Ticks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessHistory {
    pub process_id: ProcessId,
    pub burst_time: Ticks,
    pub steps: Vec<ExecutionStep>,
}

/// Group the raw timeline by process, in the order of `processes`.
pub fn execution_history(
    processes: &[ScheduledProcess],
    raw: &[TimelineEntry],
) -> Vec<ProcessHistory> {
    let mut slices: FxHashMap<ProcessId, Vec<&TimelineEntry>> = FxHashMap::default();
    for entry in raw {
        if let Some(id) = entry.slot.process_id() {
            slices.entry(id).or_default().push(entry);
        }
    }

    processes
        .iter()
        .map(|proc| {
            let mut remaining = proc.burst_time;
            let steps: Vec<ExecutionStep> = slices
                .get(&proc.id)
                .map(|runs| {
                    runs.iter()
                        .enumerate()
                        .map(|(index, run)| {
                            let execution_time = run.duration();
                            let remaining_before = remaining;
                            remaining = remaining.saturating_sub(execution_time);
                            ExecutionStep {
                                step_number: index + 1,
                                start_time: run.start_time,
                                end_time: run.end_time,
                                execution_time,
                                remaining_before,
                                remaining_after: remaining,
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();

            ProcessHistory {
                process_id: proc.id,
                burst_time: proc.burst_time,
                steps,
            }
        })
        .collect()
}
