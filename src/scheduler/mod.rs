/*!
 * Scheduler
 * Priority Round-Robin simulation driver
 */

use crate::core::types::{Pid, Timestamp};
use crate::process::{ProcessTable, ReadyQueue};
use log::info;

mod operations;
mod stats;
mod types;

// Re-export public API
pub use types::{CompletionStats, Dispatch, ProcessSpec, SchedulerStats, TimeQuantum};

/// Single-CPU Priority Round-Robin scheduler.
///
/// Owns the process table and the ready queue; the simulation loop pulls
/// the highest-priority ready process, runs it for at most one quantum,
/// and re-queues it if unfinished. One logical actor drives everything;
/// there is no locking and no suspension point.
pub struct Scheduler {
    quantum: TimeQuantum,
    clock: Timestamp,
    table: ProcessTable,
    ready: ReadyQueue,
    next_pid: Pid,
    completion_order: Vec<Pid>,
    dispatches: u64,
    preemptions: u64,
}

impl Scheduler {
    /// Create a scheduler with a fixed process-table capacity
    pub fn new(quantum: TimeQuantum, capacity: usize) -> Self {
        info!(
            "Scheduler initialized: quantum={} ticks, table capacity={}",
            quantum.as_ticks(),
            capacity.max(1)
        );

        Self {
            quantum,
            clock: 0,
            table: ProcessTable::new(capacity),
            ready: ReadyQueue::new(),
            next_pid: 0,
            completion_order: Vec::new(),
            dispatches: 0,
            preemptions: 0,
        }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Simulated clock, in ticks since the simulation started
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    /// Number of processes currently ready
    pub fn len(&self) -> usize {
        self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }
}
