use serde::{Deserialize, Serialize};

use super::matrix::Units;

/// Necessary-condition heuristic: the total claimed demand is below P + R.
/// Advisory only; it never changes the safety verdict.
pub fn check_resource_condition(max: &[Vec<Units>]) -> bool {
    let processes = max.len() as u64;
    let resources = max.first().map_or(0, Vec::len) as u64;
    let total: u64 = max.iter().flatten().map(|&units| u64::from(units)).sum();
    total < processes + resources
}

/// The four Coffman conditions. All four together make deadlock possible;
/// the Banker's safety check decides whether it actually occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffmanConditions {
    pub mutual_exclusion: bool,
    pub hold_and_wait: bool,
    pub no_preemption: bool,
    pub circular_wait: bool,
    pub deadlock_possible: bool,
}

impl CoffmanConditions {
    /// Fill in circular wait from graph cycle detection.
    pub fn with_circular_wait(mut self, circular_wait: bool) -> Self {
        self.circular_wait = circular_wait;
        self.deadlock_possible =
            self.mutual_exclusion && self.hold_and_wait && self.no_preemption && circular_wait;
        self
    }
}

/// Evaluate mutual exclusion, hold-and-wait and no-preemption. Circular wait
/// starts out false; see [`CoffmanConditions::with_circular_wait`].
pub fn check_coffman_conditions(max: &[Vec<Units>], allocation: &[Vec<Units>]) -> CoffmanConditions {
    let mutual_exclusion = allocation.iter().flatten().any(|&units| units > 0);

    let hold_and_wait = max.iter().zip(allocation).any(|(max_row, alloc_row)| {
        let holding = alloc_row.iter().any(|&units| units > 0);
        let waiting = alloc_row.iter().zip(max_row).any(|(alloc, max)| alloc < max);
        holding && waiting
    });

    // Resources are never reclaimed from a process in this model
    let no_preemption = true;

    CoffmanConditions {
        mutual_exclusion,
        hold_and_wait,
        no_preemption,
        circular_wait: false,
        deadlock_possible: false,
    }
}
