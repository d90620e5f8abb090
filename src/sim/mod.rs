pub mod driver;
pub mod history;
pub mod job;
pub mod workload;

pub use driver::{
    SimulationResult, fifo_scheduling, lpt_scheduling, rr_scheduling, sjf_scheduling,
    srt_scheduling,
};
pub use history::{ExecutionStep, ProcessHistory};
pub use job::{Process, ProcessInstance, ScheduledProcess};
pub use workload::WorkloadConfig;
