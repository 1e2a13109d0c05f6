/*!
 * Process Control Block
 * Identity, priority, and execution progress of one simulated process
 */

use super::types::{ProcessInfo, ProcessState};
use crate::core::types::{clamp_priority, Pid, Priority, Timestamp};

/// Record of a simulated process.
///
/// Owned exclusively by the [`ProcessTable`](super::table::ProcessTable)
/// for its entire lifetime; the ready queue and scheduler refer to it only
/// through its pid. Timing metrics are derived from the completion tick,
/// which the scheduler writes exactly once.
#[derive(Debug, Clone)]
pub struct ProcessControlBlock {
    pid: Pid,
    name: String,
    priority: Priority,
    burst: Timestamp,
    remaining: Timestamp,
    state: ProcessState,
    arrival: Timestamp,
    completion: Option<Timestamp>,
}

impl ProcessControlBlock {
    pub fn new(
        pid: Pid,
        name: impl Into<String>,
        priority: Priority,
        burst: Timestamp,
        arrival: Timestamp,
    ) -> Self {
        Self {
            pid,
            name: name.into(),
            priority,
            burst,
            remaining: burst,
            state: ProcessState::New,
            arrival,
            completion: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored priority, exactly as given at admission
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Priority used for ordering: the stored value clamped into [1, 50]
    #[inline]
    pub fn effective_priority(&self) -> Priority {
        clamp_priority(self.priority)
    }

    /// Original CPU burst, immutable after admission
    pub fn burst(&self) -> Timestamp {
        self.burst
    }

    pub fn remaining(&self) -> Timestamp {
        self.remaining
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn arrival(&self) -> Timestamp {
        self.arrival
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// State transitions are driven only by the ready queue and the scheduler
    pub(crate) fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }

    /// Consume `slice` ticks of the remaining burst
    pub(crate) fn run_for(&mut self, slice: Timestamp) {
        self.remaining = self.remaining.saturating_sub(slice);
    }

    /// Mark terminated at `clock`. The completion tick is written once;
    /// turnaround and waiting derive from it.
    pub(crate) fn complete(&mut self, clock: Timestamp) {
        self.state = ProcessState::Terminated;
        self.completion = Some(clock);
    }

    pub fn completion(&self) -> Option<Timestamp> {
        self.completion
    }

    /// Completion minus arrival; `None` until terminated
    pub fn turnaround(&self) -> Option<Timestamp> {
        self.completion.map(|c| c - self.arrival)
    }

    /// Turnaround minus total burst; `None` until terminated
    pub fn waiting(&self) -> Option<Timestamp> {
        self.turnaround().map(|t| t.saturating_sub(self.burst))
    }

    pub fn info(&self) -> ProcessInfo {
        ProcessInfo {
            pid: self.pid,
            name: self.name.clone(),
            state: self.state,
            priority: self.priority,
            remaining: self.remaining,
        }
    }
}
