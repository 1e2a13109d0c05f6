/*!
 * Process Types
 * Common types for process management
 */

use crate::core::serde::is_zero_u64;
use crate::core::types::{Pid, Priority, Timestamp};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Process table full: capacity {capacity} reached")]
    #[diagnostic(
        code(process::table_full),
        help("Admit fewer processes or construct the scheduler with a larger table.")
    )]
    TableFull { capacity: usize },
}

/// Process lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Created but not yet admitted to the ready queue
    New,
    /// Eligible to run; present in the ready queue
    Ready,
    /// Currently holding the CPU
    Running,
    /// Blocked on I/O. Reserved; this simulator models no I/O
    Waiting,
    /// Finished; must never be selected again
    Terminated,
}

/// Process metadata snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessInfo {
    pub pid: Pid,
    pub name: String,
    pub state: ProcessState,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub remaining: Timestamp,
}
