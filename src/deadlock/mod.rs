pub mod banker;
pub mod coffman;
pub mod error;
pub mod graph;
pub mod matrix;

pub use banker::{BankersResult, BankersStep, bankers_algorithm};
pub use coffman::{CoffmanConditions, check_coffman_conditions, check_resource_condition};
pub use error::{DeadlockError, DeadlockResult, MatrixKind};
pub use graph::{EdgeKind, Node, ResourceEdge, ResourceGraph, build_resource_graph};
pub use matrix::{Matrix, ResourceState, Units, compute_need};
