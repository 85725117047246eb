//! Workload binding and simulation hand-off.
//!
//! Provides the process/workload objects bound to the core, binary
//! inspection, and the interface to the engine that runs a finished graph.

/// Run driver interface and the one-shot `run` entry point.
pub mod driver;

/// Driver that validates and dumps a graph without simulating it.
pub mod dry_run;

/// Binary reading and ISA detection.
pub mod loader;

/// Command splitting, process images and SE workloads.
pub mod workload;

pub use driver::{ExitEvent, RunDriver, run};
pub use dry_run::DryRunDriver;
