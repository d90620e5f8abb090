pub mod driver;
pub mod event;
pub mod gantt;
pub mod metrics;
pub mod observer;
pub mod state;

pub use driver::SchedCore;
pub use event::{CpuSlot, TimelineEntry};
pub use metrics::Metrics;
pub use state::{ProcKey, ProcessId, SimCtx, Ticks};
