/*!
 * Result Reporting
 * Renders completion accounting and the priority-ordered ready listing
 */

use crate::process::ProcessInfo;
use crate::scheduler::{CompletionStats, SchedulerStats};
use serde::Serialize;
use std::fmt::Write;

/// Full simulation output handed to the display layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub stats: SchedulerStats,
    pub processes: Vec<CompletionStats>,
}

impl SimulationReport {
    pub fn new(stats: SchedulerStats, processes: Vec<CompletionStats>) -> Self {
        Self { stats, processes }
    }

    /// Mean waiting time across completed processes
    pub fn avg_waiting(&self) -> f64 {
        if self.processes.is_empty() {
            return 0.0;
        }
        let total: u64 = self.processes.iter().map(|p| p.waiting).sum();
        total as f64 / self.processes.len() as f64
    }

    /// Mean turnaround time across completed processes
    pub fn avg_turnaround(&self) -> f64 {
        if self.processes.is_empty() {
            return 0.0;
        }
        let total: u64 = self.processes.iter().map(|p| p.turnaround).sum();
        total as f64 / self.processes.len() as f64
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text table, one row per process in completion order
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{:<6} {:<16} {:>8} {:>8} {:>10} {:>10} {:>8}",
            "pid", "name", "priority", "burst", "completion", "turnaround", "waiting"
        );
        for process in &self.processes {
            let _ = writeln!(
                out,
                "{:<6} {:<16} {:>8} {:>8} {:>10} {:>10} {:>8}",
                process.pid,
                process.name,
                process.priority,
                process.burst,
                process.completion,
                process.turnaround,
                process.waiting
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "avg turnaround: {:.2}  avg waiting: {:.2}",
            self.avg_turnaround(),
            self.avg_waiting()
        );
        let _ = writeln!(
            out,
            "total: {} ticks, {} dispatches, {} preemptions (quantum {})",
            self.stats.ticks, self.stats.dispatches, self.stats.preemptions, self.stats.quantum_ticks
        );

        out
    }
}

/// Ready-queue listing from highest to lowest effective priority
pub fn render_ready_listing(processes: &[ProcessInfo]) -> String {
    let mut out = String::new();
    for info in processes {
        let _ = writeln!(
            out,
            "pid={} name={} priority={} remaining={}",
            info.pid, info.name, info.priority, info.remaining
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{CompletionStats, SchedulerStats};
    use pretty_assertions::assert_eq;

    fn report() -> SimulationReport {
        SimulationReport::new(
            SchedulerStats {
                dispatches: 4,
                preemptions: 2,
                completed: 2,
                ready: 0,
                ticks: 15,
                quantum_ticks: 5,
            },
            vec![
                CompletionStats {
                    pid: 1,
                    name: "fast".to_string(),
                    priority: 40,
                    burst: 5,
                    completion: 5,
                    turnaround: 5,
                    waiting: 0,
                },
                CompletionStats {
                    pid: 0,
                    name: "slow".to_string(),
                    priority: 3,
                    burst: 10,
                    completion: 15,
                    turnaround: 15,
                    waiting: 5,
                },
            ],
        )
    }

    #[test]
    fn test_averages() {
        let report = report();
        assert_eq!(report.avg_turnaround(), 10.0);
        assert_eq!(report.avg_waiting(), 2.5);

        let empty = SimulationReport::new(report.stats.clone(), Vec::new());
        assert_eq!(empty.avg_waiting(), 0.0);
    }

    #[test]
    fn test_render_lists_processes_in_completion_order() {
        let text = report().render();
        let fast = text.find("fast").unwrap();
        let slow = text.find("slow").unwrap();
        assert!(fast < slow);
        assert!(text.contains("avg turnaround: 10.00"));
        assert!(text.contains("quantum 5"));
    }

    #[test]
    fn test_json_payload_contains_stats_and_processes() {
        let json = report().to_json().unwrap();
        assert!(json.contains("\"dispatches\": 4"));
        assert!(json.contains("\"name\": \"fast\""));
    }
}
