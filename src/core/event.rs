use serde::{Deserialize, Serialize};

use crate::core::{ProcessId, Ticks};

/// What occupies the CPU during a timeline interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CpuSlot {
    Process(ProcessId),
    // Switch overhead, not billed to any process
    ContextSwitch,
}

impl CpuSlot {
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            Self::Process(id) => Some(*id),
            Self::ContextSwitch => None,
        }
    }
}

/// One contiguous CPU-occupancy interval, `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(rename = "processId")]
    pub slot: CpuSlot,
    pub start_time: Ticks,
    pub end_time: Ticks,
}

impl TimelineEntry {
    pub fn new(slot: CpuSlot, start_time: Ticks, end_time: Ticks) -> Self {
        debug_assert!(end_time > start_time, "Empty timeline interval");
        Self {
            slot,
            start_time,
            end_time,
        }
    }

    pub fn duration(&self) -> Ticks {
        self.end_time - self.start_time
    }

    pub fn is_context_switch(&self) -> bool {
        self.slot == CpuSlot::ContextSwitch
    }
}
