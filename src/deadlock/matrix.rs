use log::warn;
use serde::{Deserialize, Serialize};

use super::error::{DeadlockError, DeadlockResult, MatrixKind};

pub type Units = u32;
pub type Matrix = Vec<Vec<Units>>;

/// Max / Allocation (P×R) and Available (R) for one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    pub max: Matrix,
    pub allocation: Matrix,
    pub available: Vec<Units>,
}

impl ResourceState {
    pub fn new(max: Matrix, allocation: Matrix, available: Vec<Units>) -> Self {
        Self {
            max,
            allocation,
            available,
        }
    }

    pub fn process_count(&self) -> usize {
        self.max.len()
    }

    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    /// Check that the three inputs agree on P and R.
    pub fn validate_dimensions(&self) -> DeadlockResult<()> {
        if self.max.len() != self.allocation.len() {
            return Err(DeadlockError::ProcessCountMismatch {
                max: self.max.len(),
                allocation: self.allocation.len(),
            });
        }

        let expected = match self.max.first() {
            Some(row) => row.len(),
            None => return Ok(()),
        };
        if self.available.len() != expected {
            return Err(DeadlockError::ResourceCountMismatch {
                expected,
                found: self.available.len(),
            });
        }

        for (kind, matrix) in [
            (MatrixKind::Max, &self.max),
            (MatrixKind::Allocation, &self.allocation),
        ] {
            if let Some((process, row)) = matrix
                .iter()
                .enumerate()
                .find(|(_, row)| row.len() != expected)
            {
                return Err(DeadlockError::RaggedRow {
                    matrix: kind,
                    process,
                    expected,
                    found: row.len(),
                });
            }
        }

        Ok(())
    }

    /// Every (process, resource) cell where Allocation exceeds Max.
    pub fn over_allocated_cells(&self) -> Vec<(usize, usize)> {
        self.max
            .iter()
            .zip(&self.allocation)
            .enumerate()
            .flat_map(|(i, (max_row, alloc_row))| {
                max_row
                    .iter()
                    .zip(alloc_row)
                    .enumerate()
                    .filter(|(_, (max, alloc))| alloc > max)
                    .map(move |(j, _)| (i, j))
            })
            .collect()
    }

    /// Units of each resource type in the system: Available plus everything allocated.
    pub fn total_resources(&self) -> Vec<Units> {
        let mut total = self.available.clone();
        for row in &self.allocation {
            for (sum, units) in total.iter_mut().zip(row) {
                *sum = sum.saturating_add(*units);
            }
        }
        total
    }

    pub fn need(&self) -> DeadlockResult<Matrix> {
        compute_need(&self.max, &self.allocation)
    }
}

/// `need[i][j] = max[i][j] - allocation[i][j]`, failing on the first cell
/// where the allocation exceeds the claim.
pub fn compute_need(max: &[Vec<Units>], allocation: &[Vec<Units>]) -> DeadlockResult<Matrix> {
    if max.len() != allocation.len() {
        return Err(DeadlockError::ProcessCountMismatch {
            max: max.len(),
            allocation: allocation.len(),
        });
    }

    max.iter()
        .zip(allocation)
        .enumerate()
        .map(|(process, (max_row, alloc_row))| {
            if alloc_row.len() != max_row.len() {
                return Err(DeadlockError::RaggedRow {
                    matrix: MatrixKind::Allocation,
                    process,
                    expected: max_row.len(),
                    found: alloc_row.len(),
                });
            }

            max_row
                .iter()
                .zip(alloc_row)
                .enumerate()
                .map(|(resource, (&max, &allocation))| {
                    max.checked_sub(allocation).ok_or_else(|| {
                        warn!("allocation[{process}][{resource}] = {allocation} exceeds max {max}");
                        DeadlockError::AllocationExceedsMax {
                            process,
                            resource,
                            allocation,
                            max,
                        }
                    })
                })
                .collect::<DeadlockResult<Vec<Units>>>()
        })
        .collect()
}
