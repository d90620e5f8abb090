use average::{Estimate, Max, Mean, Min};
use serde::{Deserialize, Serialize};

use crate::sim::job::ScheduledProcess;

/// Aggregate figures for one finished run.
///
/// Every ratio divides by a denominator floored at 1, so degenerate runs
/// (everything finishing at t=0, all arrivals at once) still give defined numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
    pub average_response_time: f64,
    /// Busy share of the schedule, in percent.
    pub cpu_utilization: f64,
    /// Same ratio as `cpu_utilization`, as a fraction.
    pub cpu_efficiency: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Little's Law estimate, L = λW.
    pub avg_ready_queue_length: f64,
    pub arrival_rate: f64,
}

impl Metrics {
    pub fn derive(processes: &[ScheduledProcess]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        let count = processes.len() as f64;
        let total_burst: f64 = processes.iter().map(|p| p.burst_time as f64).sum();

        let makespan = processes
            .iter()
            .map(|p| p.completion_time as f64)
            .collect::<Max>()
            .max()
            .max(1.0);

        let first_arrival = processes
            .iter()
            .map(|p| p.arrival_time as f64)
            .collect::<Min>()
            .min();
        let last_arrival = processes
            .iter()
            .map(|p| p.arrival_time as f64)
            .collect::<Max>()
            .max();
        let arrival_span = (last_arrival - first_arrival).max(1.0);

        let average_waiting_time = avg(processes.iter().map(|p| p.waiting_time as f64));
        let arrival_rate = count / arrival_span;

        Self {
            average_turnaround_time: avg(processes.iter().map(|p| p.turnaround_time as f64)),
            average_waiting_time,
            average_response_time: avg(processes.iter().map(|p| p.response_time as f64)),
            cpu_utilization: total_burst / makespan * 100.0,
            cpu_efficiency: total_burst / makespan,
            throughput: count / makespan,
            avg_ready_queue_length: average_waiting_time * arrival_rate,
            arrival_rate,
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(arrival: u64, burst: u64, start: u64, completion: u64) -> ScheduledProcess {
        let turnaround = completion - arrival;
        ScheduledProcess {
            id: 1,
            arrival_time: arrival,
            burst_time: burst,
            remaining_time: 0,
            start_time: start,
            completion_time: completion,
            waiting_time: turnaround - burst,
            turnaround_time: turnaround,
            response_time: start - arrival,
        }
    }

    #[test]
    fn empty_run_is_all_zero() {
        assert_eq!(Metrics::derive(&[]), Metrics::default());
    }

    #[test]
    fn two_process_fifo_run() {
        let metrics = Metrics::derive(&[done(0, 5, 0, 5), done(2, 3, 5, 8)]);
        assert_eq!(metrics.average_waiting_time, 1.5);
        assert_eq!(metrics.average_turnaround_time, 5.5);
        assert_eq!(metrics.average_response_time, 1.5);
        assert_eq!(metrics.cpu_utilization, 100.0);
        assert_eq!(metrics.cpu_efficiency, 1.0);
        assert_eq!(metrics.throughput, 0.25);
        assert_eq!(metrics.arrival_rate, 1.0);
        assert_eq!(metrics.avg_ready_queue_length, 1.5);
    }

    #[test]
    fn idle_time_lowers_utilization() {
        let metrics = Metrics::derive(&[done(0, 2, 0, 2), done(6, 2, 6, 8)]);
        assert_eq!(metrics.cpu_utilization, 50.0);
        assert!((metrics.arrival_rate - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_denominators_floor_at_one() {
        let metrics = Metrics::derive(&[done(0, 0, 0, 0), done(0, 0, 0, 0)]);
        assert_eq!(metrics.throughput, 2.0);
        assert_eq!(metrics.arrival_rate, 2.0);
        assert_eq!(metrics.cpu_utilization, 0.0);
    }
}
