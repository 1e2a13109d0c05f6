/*!
 * Scheduler Statistics
 * Counter snapshots and per-process completion accounting
 */

use super::types::{CompletionStats, SchedulerStats};
use super::Scheduler;

impl Scheduler {
    /// Counter snapshot
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            dispatches: self.dispatches,
            preemptions: self.preemptions,
            completed: self.completion_order.len() as u64,
            ready: self.ready.len(),
            ticks: self.clock,
            quantum_ticks: self.quantum.as_ticks(),
        }
    }

    /// Per-process final accounting, in completion order
    pub fn completed(&self) -> Vec<CompletionStats> {
        self.completion_order
            .iter()
            .filter_map(|&pid| {
                let record = self.table.get(pid)?;
                Some(CompletionStats {
                    pid,
                    name: record.name().to_string(),
                    priority: record.priority(),
                    burst: record.burst(),
                    completion: record.completion()?,
                    turnaround: record.turnaround()?,
                    waiting: record.waiting()?,
                })
            })
            .collect()
    }
}
