/*!
 * Process Module
 * Process control blocks, the owning table, and the ready queue
 */

pub mod pcb;
pub mod queue;
pub mod table;
pub mod types;

// Re-export public API
pub use pcb::ProcessControlBlock;
pub use queue::ReadyQueue;
pub use table::ProcessTable;
pub use types::{ProcessError, ProcessInfo, ProcessResult, ProcessState};
