use os_model::{
    Policy, ResourceState, SimulationResult, bankers_algorithm,
    scheduler::{DEFAULT_CONTEXT_SWITCH, DEFAULT_TIME_QUANTUM},
    sim::WorkloadConfig,
};

fn main() {
    env_logger::init();

    let processes = WorkloadConfig::default().generate();
    println!("Generated {} processes", processes.len());

    for policy in [
        Policy::Fifo,
        Policy::Sjf,
        Policy::Srt,
        Policy::round_robin(DEFAULT_TIME_QUANTUM, DEFAULT_CONTEXT_SWITCH),
        Policy::round_robin(DEFAULT_TIME_QUANTUM, 1),
        Policy::Lpt,
    ] {
        let result = policy.run(&processes);
        print_summary(&policy, &result);
    }

    let state = ResourceState::new(
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
    );

    match bankers_algorithm(&state) {
        Ok(result) if result.is_safe => {
            println!("Banker: safe, sequence {:?}", result.safe_sequence);
        }
        Ok(result) => {
            println!("Banker: unsafe");
            if let Some(reason) = result.unsafe_reason() {
                println!("  {reason}");
            }
        }
        Err(err) => eprintln!("Banker: invalid input: {err}"),
    }
}

fn print_summary(policy: &Policy, result: &SimulationResult) {
    let metrics = &result.metrics;
    println!("{} ({:?})", policy.name(), policy);
    println!("  Average waiting time: {:.2} ticks", metrics.average_waiting_time);
    println!("  Average turnaround time: {:.2} ticks", metrics.average_turnaround_time);
    println!("  Average response time: {:.2} ticks", metrics.average_response_time);
    println!("  CPU utilization: {:.1}%", metrics.cpu_utilization);
    println!("  Throughput: {:.3} processes/tick", metrics.throughput);
    println!("  Ready queue length (Little): {:.2}", metrics.avg_ready_queue_length);
    println!(
        "  Timeline: {} intervals ({} raw), {} ticks switching",
        result.timeline.len(),
        result.raw_timeline.len(),
        result.context_switch_time()
    );
}
