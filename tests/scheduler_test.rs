/*!
 * Scheduler Tests
 * End-to-end Priority Round-Robin scenarios through the public API
 */

use pretty_assertions::assert_eq;
use sched_sim::{
    parse_process_list, ProcessState, Scheduler, SimulationReport, TimeQuantum,
};

fn scheduler(quantum: u64, list: &str) -> Scheduler {
    let specs = parse_process_list(list).expect("valid process list");
    let mut scheduler = Scheduler::new(TimeQuantum::new(quantum).unwrap(), specs.len());
    for spec in specs {
        scheduler.admit(spec).expect("capacity matches list length");
    }
    scheduler
}

#[test]
fn test_single_process_runs_to_completion() {
    let mut scheduler = scheduler(3, "only,10,7\n");
    scheduler.run();

    let completed = scheduler.completed();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].name, "only");
    assert_eq!(completed[0].completion, 7);
    assert_eq!(completed[0].turnaround, 7);
    assert_eq!(completed[0].waiting, 0);
    assert!(scheduler.is_empty());
}

#[test]
fn test_distinct_priorities_run_in_strict_order() {
    // Each burst fits a single quantum, so completion order is exactly
    // descending priority
    let mut scheduler = scheduler(10, "low,5,3\nidle,1,3\nurgent,9,3\nmid,3,3\n");
    scheduler.run();

    let completed = scheduler.completed();
    let names: Vec<&str> = completed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["urgent", "low", "mid", "idle"]);
}

#[test]
fn test_higher_priority_drains_before_lower_gets_cpu() {
    let mut scheduler = scheduler(2, "bulk,1,100\nurgent,10,5\n");

    // First three dispatches must all go to the dominating process
    for expected_slice in [2, 2, 1] {
        let dispatch = scheduler.step().expect("ready processes remain");
        assert_eq!(dispatch.slice, expected_slice);
        let info = scheduler.process(dispatch.pid).unwrap();
        assert_eq!(info.name, "urgent");
    }
    assert_eq!(scheduler.clock(), 5);

    scheduler.run();
    assert_eq!(scheduler.clock(), 105);
}

#[test]
fn test_round_robin_slices_among_equals() {
    let mut scheduler = scheduler(2, "a,7,5\nb,7,5\nc,7,5\n");
    scheduler.run();

    let completed = scheduler.completed();
    assert_eq!(completed.len(), 3);
    // 15 ticks of work total; the last completion lands exactly there
    assert_eq!(scheduler.clock(), 15);
    assert_eq!(completed.iter().map(|c| c.completion).max(), Some(15));
    // No process can finish before its own burst has been served
    for process in &completed {
        assert!(process.completion >= process.burst);
        assert_eq!(process.turnaround, process.completion);
    }
}

#[test]
fn test_terminated_processes_leave_the_machine() {
    let mut scheduler = scheduler(4, "a,5,4\nb,5,4\n");
    scheduler.run();

    for pid in [0, 1] {
        let info = scheduler.process(pid).unwrap();
        assert_eq!(info.state, ProcessState::Terminated);
        assert_eq!(info.remaining, 0);
    }
    assert_eq!(scheduler.step(), None);
}

#[test]
fn test_report_from_simulation() {
    let mut scheduler = scheduler(2, "slow,3,10\nfast,40,5\n");
    scheduler.run();

    let report = SimulationReport::new(scheduler.stats(), scheduler.completed());
    assert_eq!(report.processes.len(), 2);
    assert_eq!(report.processes[0].name, "fast");
    assert_eq!(report.processes[0].completion, 5);
    assert_eq!(report.processes[1].name, "slow");
    assert_eq!(report.processes[1].completion, 15);
    assert_eq!(report.avg_turnaround(), 10.0);
    assert_eq!(report.avg_waiting(), 2.5);

    let text = report.render();
    assert!(text.contains("fast"));
    assert!(text.contains("avg waiting: 2.50"));

    let json = report.to_json().unwrap();
    assert!(json.contains("\"ticks\": 15"));
    assert!(json.contains("\"name\": \"slow\""));
}

#[test]
fn test_ready_listing_before_simulation() {
    let scheduler = scheduler(2, "a,12,5\nb,40,5\nc,3,5\nd,27,5\n");

    let listing = scheduler.ready_processes();
    let priorities: Vec<u32> = listing.iter().map(|info| info.priority).collect();
    assert_eq!(priorities, vec![40, 27, 12, 3]);

    // Listing twice gives the same answer; the queue is untouched
    let again: Vec<u32> = scheduler
        .ready_processes()
        .iter()
        .map(|info| info.priority)
        .collect();
    assert_eq!(again, priorities);
    assert_eq!(scheduler.len(), 4);
}

#[test]
fn test_out_of_range_priorities_behave_as_clamped() {
    // 99 orders as 50, 0 orders as 1; stored values are untouched
    let mut scheduler = scheduler(10, "over,99,2\nmid,25,2\nunder,0,2\n");
    scheduler.run();

    let completed = scheduler.completed();
    let names: Vec<&str> = completed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["over", "mid", "under"]);
    assert_eq!(completed[0].priority, 99);
    assert_eq!(completed[2].priority, 0);
}

#[test]
fn test_zero_burst_process_is_not_an_error() {
    let mut scheduler = scheduler(4, "empty,50,0\nwork,5,8\n");
    scheduler.run();

    let completed = scheduler.completed();
    assert_eq!(completed[0].name, "empty");
    assert_eq!(completed[0].completion, 0);
    assert_eq!(completed[1].name, "work");
    assert_eq!(completed[1].completion, 8);
}
