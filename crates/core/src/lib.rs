//! Topology assembly for a runahead-capable out-of-order CPU simulator.
//!
//! This crate builds the static configuration graph handed to a cycle-accurate
//! simulation engine:
//! 1. **Options:** The recognized option set with its defaults.
//! 2. **Core:** Mode selection between baseline, runahead and precise-runahead O3 cores.
//! 3. **SoC:** Cache factory, crossbars, memory, and the staged topology assembler.
//! 4. **Simulation:** Workload binding and the one-shot hand-off to a run driver.
//!
//! ```no_run
//! use rasim_core::{Options, build_system};
//! use rasim_core::sim::{DryRunDriver, run};
//!
//! let graph = build_system(&Options::default())?;
//! let exit = run(graph, &mut DryRunDriver::new())?;
//! println!("Exiting @ tick {} because {}", exit.tick, exit.cause);
//! # Ok::<(), rasim_core::common::Error>(())
//! ```

/// Common types (sizes, ranges, ISA, errors).
pub mod common;
/// Option set (defaults, mode tag, cache projection).
pub mod config;
/// Core descriptor and mode selector.
pub mod core;
/// Workload binding, binary inspection and run drivers.
pub mod sim;
/// System topology (graph, caches, buses, memory, assembler, builder).
pub mod soc;

/// Option set; use `Options::default()` or deserialize from JSON.
pub use crate::config::Options;
/// Builds a ready graph from options.
pub use crate::soc::build_system;
/// Root container of an assembled system.
pub use crate::soc::SystemGraph;
