/*!
 * Scheduler Types
 * Configuration and result types for the simulation
 */

use crate::core::serde::{is_zero_u64, is_zero_usize};
use crate::core::types::{Pid, Priority, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

/// Validated process description accepted from the loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: String,
    pub priority: Priority,
    pub burst: Timestamp,
}

/// Time quantum configuration: maximum contiguous ticks granted per
/// dispatch before forced preemption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum {
    ticks: Timestamp,
}

impl TimeQuantum {
    /// Create a new time quantum; a zero-length quantum is rejected
    pub fn new(ticks: Timestamp) -> Result<Self, String> {
        if ticks == 0 {
            return Err("Invalid quantum: must be at least 1 tick".to_string());
        }
        Ok(Self { ticks })
    }

    /// Get ticks
    ///
    /// # Performance
    /// Hot path - read on every dispatch
    #[inline(always)]
    pub const fn as_ticks(&self) -> Timestamp {
        self.ticks
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            ticks: Timestamp,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.ticks).map_err(serde::de::Error::custom)
    }
}

/// Outcome of one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub pid: Pid,
    /// Ticks consumed by this dispatch; equals the quantum unless the
    /// process finished early
    pub slice: Timestamp,
    pub completed: bool,
}

/// Scheduler counters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub dispatches: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub preemptions: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub completed: u64,
    #[serde(default, skip_serializing_if = "is_zero_usize")]
    pub ready: usize,
    pub ticks: Timestamp,
    pub quantum_ticks: Timestamp,
}

/// Final accounting for one terminated process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompletionStats {
    pub pid: Pid,
    pub name: String,
    pub priority: Priority,
    pub burst: Timestamp,
    pub completion: Timestamp,
    pub turnaround: Timestamp,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub waiting: Timestamp,
}
