/*!
 * Sched-Sim - Main Entry Point
 *
 * Priority Round-Robin scheduling simulator:
 * - loads a process list (one `name,priority,burst` line per process)
 * - runs the ready queue to exhaustion, one quantum per dispatch
 * - prints per-process completion accounting
 */

use log::{debug, info};
use miette::IntoDiagnostic;
use sched_sim::io::report::render_ready_listing;
use sched_sim::{
    load_process_file, parse_quantum, Scheduler, SimResult, SimulationReport,
};
use std::env;
use std::process::exit;

fn simulate(input: &str, quantum_arg: &str) -> SimResult<SimulationReport> {
    let quantum = parse_quantum(quantum_arg)?;
    let specs = load_process_file(input)?;

    let mut scheduler = Scheduler::new(quantum, specs.len());
    for spec in specs {
        scheduler.admit(spec)?;
    }
    debug!(
        "Initial ready queue (descending):\n{}",
        render_ready_listing(&scheduler.ready_processes())
    );

    scheduler.run();

    Ok(SimulationReport::new(
        scheduler.stats(),
        scheduler.completed(),
    ))
}

fn main() -> miette::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <input_file> <time_quantum> [--json]", args[0]);
        eprintln!("  <input_file>: process list, one 'name,priority,burst' line per process");
        eprintln!("  <time_quantum>: maximum ticks per dispatch, at least 1");
        exit(1);
    }
    let json = args.iter().skip(3).any(|arg| arg == "--json");

    info!("Priority RR simulation starting");
    let report = simulate(&args[1], &args[2])?;

    if json {
        println!("{}", report.to_json().into_diagnostic()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
