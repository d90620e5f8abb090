pub mod core;
pub mod deadlock;
pub mod scheduler;
pub mod sim;

pub use deadlock::{BankersResult, DeadlockError, ResourceState, bankers_algorithm};
pub use scheduler::{Policy, Scheduler};
pub use sim::{
    Process, ScheduledProcess, SimulationResult, fifo_scheduling, lpt_scheduling, rr_scheduling,
    sjf_scheduling, srt_scheduling,
};
