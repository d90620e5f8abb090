use std::fmt;

/// Which input matrix a dimension error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    Max,
    Allocation,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixKind::Max => write!(f, "max"),
            MatrixKind::Allocation => write!(f, "allocation"),
        }
    }
}

/// Input-contract violations. An unsafe state is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlockError {
    /// Max and Allocation describe a different number of processes
    ProcessCountMismatch { max: usize, allocation: usize },
    /// Available does not have one entry per resource type
    ResourceCountMismatch { expected: usize, found: usize },
    /// A matrix row has the wrong number of resource columns
    RaggedRow {
        matrix: MatrixKind,
        process: usize,
        expected: usize,
        found: usize,
    },
    /// A process holds more units than it ever claimed
    AllocationExceedsMax {
        process: usize,
        resource: usize,
        allocation: u32,
        max: u32,
    },
}

impl fmt::Display for DeadlockError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeadlockError::ProcessCountMismatch { max, allocation } => write!(
                f,
                "max has {max} processes but allocation has {allocation}"
            ),
            DeadlockError::ResourceCountMismatch { expected, found } => write!(
                f,
                "available has {found} resource types, expected {expected}"
            ),
            DeadlockError::RaggedRow {
                matrix,
                process,
                expected,
                found,
            } => write!(
                f,
                "{matrix} row {process} has {found} resource types, expected {expected}"
            ),
            DeadlockError::AllocationExceedsMax {
                process,
                resource,
                allocation,
                max,
            } => write!(
                f,
                "allocation[{process}][{resource}] = {allocation} exceeds max demand {max}"
            ),
        }
    }
}

impl std::error::Error for DeadlockError {}

pub type DeadlockResult<T> = Result<T, DeadlockError>;
