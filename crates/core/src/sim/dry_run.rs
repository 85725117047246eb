//! Dry-run driver.
//!
//! Stands in for the engine when only the configuration is of interest. On
//! instantiation it checks that the workload binary is an ELF file for the
//! graph's ISA and optionally writes the graph as JSON; simulation then ends
//! immediately at tick 0.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::error::DriverError;
use crate::sim::driver::{ExitEvent, RunDriver};
use crate::sim::loader;
use crate::soc::graph::SystemGraph;

/// Cause reported by [`DryRunDriver::simulate`].
pub const DRY_RUN_CAUSE: &str = "dry run: configuration instantiated";

/// A driver that instantiates a graph but never simulates it.
#[derive(Debug)]
pub struct DryRunDriver {
    dump_path: Option<PathBuf>,
    check_binary: bool,
    graph: Option<SystemGraph>,
}

impl Default for DryRunDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DryRunDriver {
    /// Creates a driver that checks the workload binary and dumps nothing.
    pub const fn new() -> Self {
        Self {
            dump_path: None,
            check_binary: true,
            graph: None,
        }
    }

    /// Writes the instantiated graph as pretty JSON to `path`.
    #[must_use]
    pub fn with_dump(mut self, path: impl Into<PathBuf>) -> Self {
        self.dump_path = Some(path.into());
        self
    }

    /// Skips the workload binary check.
    #[must_use]
    pub fn without_binary_check(mut self) -> Self {
        self.check_binary = false;
        self
    }

    /// The instantiated graph, if any.
    pub const fn graph(&self) -> Option<&SystemGraph> {
        self.graph.as_ref()
    }

    fn check_workload(graph: &SystemGraph) -> Result<(), DriverError> {
        let Some(workload) = graph.workload() else {
            return Ok(());
        };
        let path = workload.binary.as_str();
        let isa = loader::detect_isa(Path::new(path)).map_err(|e| DriverError::Workload {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        if isa != graph.isa() {
            return Err(DriverError::Workload {
                path: path.to_string(),
                reason: format!("built for {isa}, system is {}", graph.isa()),
            });
        }
        Ok(())
    }
}

impl RunDriver for DryRunDriver {
    fn instantiate(&mut self, graph: SystemGraph) -> Result<(), DriverError> {
        if self.graph.is_some() {
            return Err(DriverError::AlreadyInstantiated);
        }
        if self.check_binary {
            Self::check_workload(&graph)?;
        }
        if let Some(path) = &self.dump_path {
            fs::write(path, serde_json::to_string_pretty(&graph)?)?;
            info!("wrote configuration to {}", path.display());
        }
        self.graph = Some(graph);
        Ok(())
    }

    fn simulate(&mut self) -> Result<ExitEvent, DriverError> {
        if self.graph.is_none() {
            return Err(DriverError::NotInstantiated);
        }
        Ok(ExitEvent {
            tick: 0,
            cause: DRY_RUN_CAUSE.to_string(),
        })
    }
}
