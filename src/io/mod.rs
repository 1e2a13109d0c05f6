/*!
 * I/O Module
 * Process-list loading and result reporting
 */

pub mod loader;
pub mod report;

// Re-export public API
pub use loader::{load_process_file, parse_process_list, parse_quantum, LoaderError};
pub use report::{render_ready_listing, SimulationReport};
