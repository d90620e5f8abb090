use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::job::Process;
use crate::core::Ticks;

/// Parameters for a Bernoulli arrival workload: at each tick a process arrives
/// with probability `p_arrival`, and is short with probability `p_short`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadConfig {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_burst: Ticks,
    pub long_burst: Ticks,
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            ticks: 30,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            seed: 0,
        }
    }
}

impl WorkloadConfig {
    /// Same config, same list. Ids start at 1.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut processes = Vec::new();

        for t in 0..self.ticks {
            if rng.random::<f64>() < self.p_arrival {
                let burst_time = if rng.random::<f64>() < self.p_short {
                    self.short_burst
                } else {
                    self.long_burst
                };

                processes.push(Process::new(processes.len() as u32 + 1, t, burst_time));
            }
        }

        processes
    }
}
