use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{
    coffman::{CoffmanConditions, check_coffman_conditions, check_resource_condition},
    error::DeadlockResult,
    graph::{ResourceGraph, build_resource_graph},
    matrix::{Matrix, ResourceState, Units, compute_need},
};

/// One process completing during the safety check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankersStep {
    pub process: usize,
    pub work_before: Vec<Units>,
    /// `work_before + allocation`
    pub work_after: Vec<Units>,
    pub need: Vec<Units>,
    pub allocation: Vec<Units>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankersResult {
    pub is_safe: bool,
    /// Complete when safe; otherwise the processes that finished before the stall.
    pub safe_sequence: Vec<usize>,
    pub need: Matrix,
    pub steps: Vec<BankersStep>,
    pub resource_condition_satisfied: bool,
    pub coffman_conditions: CoffmanConditions,
    pub resource_graph: ResourceGraph,
}

impl BankersResult {
    /// Processes that could not finish, in index order.
    pub fn unfinished(&self) -> Vec<usize> {
        (0..self.need.len())
            .filter(|p| !self.safe_sequence.contains(p))
            .collect()
    }

    pub fn unsafe_reason(&self) -> Option<String> {
        if self.is_safe {
            return None;
        }

        let stuck: Vec<String> = self.unfinished().iter().map(|p| format!("P{p}")).collect();
        Some(format!(
            "No safe sequence exists because processes {} cannot obtain their remaining need with current Available",
            stuck.join(", ")
        ))
    }
}

/// Banker's Algorithm safety check plus resource-condition, Coffman and
/// allocation-graph diagnostics. Fails only on malformed input.
pub fn bankers_algorithm(state: &ResourceState) -> DeadlockResult<BankersResult> {
    state.validate_dimensions()?;
    let need = compute_need(&state.max, &state.allocation)?;

    let (safe_sequence, steps) = find_safe_sequence(&need, &state.allocation, &state.available);
    let is_safe = safe_sequence.len() == need.len();

    let resource_graph = build_resource_graph(&state.max, &state.allocation);
    let coffman_conditions = check_coffman_conditions(&state.max, &state.allocation)
        .with_circular_wait(resource_graph.has_cycle);

    if is_safe {
        info!("banker: safe, sequence {safe_sequence:?}");
    } else {
        warn!(
            "banker: unsafe after {} of {} processes",
            safe_sequence.len(),
            need.len()
        );
    }

    Ok(BankersResult {
        is_safe,
        safe_sequence,
        need,
        steps,
        resource_condition_satisfied: check_resource_condition(&state.max),
        coffman_conditions,
        resource_graph,
    })
}

// Repeated index-order passes; any process whose need fits in `work` finishes
// at once. Stops when everyone is done or a pass makes no progress.
fn find_safe_sequence(
    need: &[Vec<Units>],
    allocation: &[Vec<Units>],
    available: &[Units],
) -> (Vec<usize>, Vec<BankersStep>) {
    let mut work = available.to_vec();
    let mut finish = vec![false; need.len()];
    let mut sequence = Vec::with_capacity(need.len());
    let mut steps = Vec::with_capacity(need.len());

    let mut progressed = true;
    while sequence.len() < need.len() && progressed {
        progressed = false;

        for process in 0..need.len() {
            if finish[process] || !fits(&need[process], &work) {
                continue;
            }

            let work_before = work.clone();
            for (w, &held) in work.iter_mut().zip(&allocation[process]) {
                *w = w.saturating_add(held);
            }
            debug!("banker: P{process} finishes, work {work_before:?} -> {work:?}");

            finish[process] = true;
            sequence.push(process);
            steps.push(BankersStep {
                process,
                work_before,
                work_after: work.clone(),
                need: need[process].clone(),
                allocation: allocation[process].clone(),
            });
            progressed = true;
        }
    }

    (sequence, steps)
}

fn fits(need: &[Units], work: &[Units]) -> bool {
    need.iter().zip(work).all(|(n, w)| n <= w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadlock::DeadlockError;

    fn classic() -> ResourceState {
        ResourceState::new(
            vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
            vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            vec![3, 3, 2],
        )
    }

    #[test]
    fn classic_state_is_safe() {
        let result = bankers_algorithm(&classic()).unwrap();
        assert!(result.is_safe);
        // Index-order passes pick P1, P3, P4 in the first pass, then P0, P2
        assert_eq!(result.safe_sequence, vec![1, 3, 4, 0, 2]);
        assert_eq!(result.need[0], vec![7, 4, 3]);
        assert_eq!(result.steps.len(), 5);
        assert_eq!(result.steps[0].work_before, vec![3, 3, 2]);
        assert_eq!(result.steps[0].work_after, vec![5, 3, 2]);
        assert_eq!(result.steps[4].work_after, vec![10, 5, 7]);
        assert!(result.unfinished().is_empty());
        assert_eq!(result.unsafe_reason(), None);
    }

    #[test]
    fn steps_chain_work_vectors() {
        let result = bankers_algorithm(&classic()).unwrap();
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].work_after, pair[1].work_before);
        }
    }

    #[test]
    fn stalled_state_reports_partial_sequence() {
        let state = ResourceState::new(
            vec![vec![4, 4, 2], vec![2, 2, 2], vec![3, 3, 3]],
            vec![vec![2, 2, 2], vec![2, 0, 0], vec![0, 3, 1]],
            vec![0, 0, 0],
        );
        let result = bankers_algorithm(&state).unwrap();
        assert!(!result.is_safe);
        assert!(result.safe_sequence.is_empty());
        assert_eq!(result.unfinished(), vec![0, 1, 2]);
        assert_eq!(
            result.unsafe_reason().as_deref(),
            Some(
                "No safe sequence exists because processes P0, P1, P2 cannot obtain their remaining need with current Available"
            )
        );
    }

    #[test]
    fn partial_progress_before_stall() {
        // P1 can finish, but what it returns is not enough for P0
        let state = ResourceState::new(
            vec![vec![5, 0], vec![1, 1]],
            vec![vec![1, 0], vec![1, 0]],
            vec![0, 1],
        );
        let result = bankers_algorithm(&state).unwrap();
        assert!(!result.is_safe);
        assert_eq!(result.safe_sequence, vec![1]);
        assert_eq!(result.unfinished(), vec![0]);
    }

    #[test]
    fn zero_processes_is_trivially_safe() {
        let result = bankers_algorithm(&ResourceState::new(vec![], vec![], vec![1, 2])).unwrap();
        assert!(result.is_safe);
        assert!(result.safe_sequence.is_empty());
        assert!(result.steps.is_empty());
        assert!(!result.resource_graph.has_cycle);
    }

    #[test]
    fn over_allocation_is_an_error_not_a_verdict() {
        let state = ResourceState::new(vec![vec![1, 1]], vec![vec![2, 0]], vec![0, 0]);
        assert!(matches!(
            bankers_algorithm(&state),
            Err(DeadlockError::AllocationExceedsMax { process: 0, resource: 0, .. })
        ));
    }

    #[test]
    fn diagnostics_ride_along() {
        let state = ResourceState::new(
            vec![vec![1, 1], vec![1, 1]],
            vec![vec![1, 0], vec![0, 1]],
            vec![0, 0],
        );
        let result = bankers_algorithm(&state).unwrap();
        assert!(!result.is_safe);
        assert!(result.resource_graph.has_cycle);
        assert!(result.coffman_conditions.circular_wait);
        assert!(result.coffman_conditions.deadlock_possible);
        assert!(!result.resource_condition_satisfied);
    }
}
