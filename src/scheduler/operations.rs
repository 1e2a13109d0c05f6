/*!
 * Scheduler Operations
 * Admission, dispatch, and the simulation loop
 */

use super::types::{Dispatch, ProcessSpec};
use super::Scheduler;
use crate::core::types::Pid;
use crate::process::{
    ProcessControlBlock, ProcessError, ProcessInfo, ProcessResult, ProcessState,
};
use log::{debug, info};

impl Scheduler {
    /// Admit a validated process: assign the next pid, stamp arrival with
    /// the current clock, store the record and enqueue it.
    ///
    /// Fails once the table is full. The check happens here so that
    /// `ProcessTable::put` keeps its fail-silent contract.
    pub fn admit(&mut self, spec: ProcessSpec) -> ProcessResult<Pid> {
        if self.next_pid as usize >= self.table.capacity() {
            return Err(ProcessError::TableFull {
                capacity: self.table.capacity(),
            });
        }

        let pid = self.next_pid;
        self.next_pid += 1;

        let priority = spec.priority;
        let burst = spec.burst;
        let record = ProcessControlBlock::new(pid, spec.name, priority, burst, self.clock);
        self.table.put(record, pid);
        self.ready.enqueue(&mut self.table, pid);

        info!(
            "Process {} admitted (priority: {}, burst: {})",
            pid, priority, burst
        );
        Ok(pid)
    }

    /// Execute one Priority Round-Robin step.
    ///
    /// Dequeues the maximum-priority ready process, runs it for at most
    /// one quantum, and either completes it or re-queues it. Returns
    /// `None` when the ready queue is empty; the simulation is over.
    pub fn step(&mut self) -> Option<Dispatch> {
        loop {
            let pid = self.ready.dequeue_max(&mut self.table)?;

            let quantum = self.quantum.as_ticks();
            let record = match self.table.get_mut(pid) {
                Some(record) if record.state() != ProcessState::Terminated => record,
                _ => {
                    // Stale handle to a replaced or already-terminated
                    // record: absorb it and keep the loop alive
                    debug!("Absorbed stale handle {} from ready queue", pid);
                    continue;
                }
            };

            let slice = record.remaining().min(quantum);
            self.clock += slice;
            record.run_for(slice);
            self.dispatches += 1;

            if record.is_finished() {
                record.complete(self.clock);
                let turnaround = record.turnaround().unwrap_or(0);
                let waiting = record.waiting().unwrap_or(0);
                self.completion_order.push(pid);
                info!(
                    "Process {} terminated at tick {} (turnaround: {}, waiting: {})",
                    pid, self.clock, turnaround, waiting
                );
                return Some(Dispatch {
                    pid,
                    slice,
                    completed: true,
                });
            }

            // Quantum expired with work left: back of its priority tier
            let remaining = record.remaining();
            self.preemptions += 1;
            self.ready.enqueue(&mut self.table, pid);
            debug!(
                "Process {} preempted after {} ticks ({} remaining)",
                pid, slice, remaining
            );
            return Some(Dispatch {
                pid,
                slice,
                completed: false,
            });
        }
    }

    /// Run the simulation until the ready queue is empty
    pub fn run(&mut self) {
        info!(
            "Simulation starting: {} ready processes, quantum {} ticks",
            self.ready.len(),
            self.quantum.as_ticks()
        );

        while self.step().is_some() {}

        info!(
            "Simulation complete at tick {}: {} dispatches, {} preemptions",
            self.clock, self.dispatches, self.preemptions
        );
    }

    /// Metadata snapshot for one process; `None` for an unknown pid
    pub fn process(&self, pid: Pid) -> Option<ProcessInfo> {
        self.table.get(pid).map(|record| record.info())
    }

    /// Ready processes from highest to lowest effective priority,
    /// without disturbing the queue
    pub fn ready_processes(&self) -> Vec<ProcessInfo> {
        self.ready
            .peek_all_descending(&self.table)
            .iter()
            .filter_map(|&pid| self.table.get(pid))
            .map(|record| record.info())
            .collect()
    }
}
