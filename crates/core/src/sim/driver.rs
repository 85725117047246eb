//! Run driver interface.
//!
//! The engine that actually simulates a graph is external. This module fixes
//! the contract with it: the finished graph is handed over once, by value,
//! and control returns once with the tick and cause of termination.

use serde::Serialize;
use tracing::info;

use crate::common::Isa;
use crate::common::error::{ConfigError, DriverError, Error, ResolutionError};
use crate::soc::graph::SystemGraph;

/// Why and when a simulation stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitEvent {
    /// Tick at which the simulation stopped.
    pub tick: u64,
    /// Human-readable termination cause.
    pub cause: String,
}

/// An engine that can instantiate and run a system graph.
pub trait RunDriver {
    /// Returns `true` if the engine was built for `isa`.
    fn supports_isa(&self, isa: Isa) -> bool {
        let _ = isa;
        true
    }

    /// Validates and freezes `graph`.
    ///
    /// # Errors
    ///
    /// Engine-specific; a missing or malformed workload binary is reported here.
    fn instantiate(&mut self, graph: SystemGraph) -> Result<(), DriverError>;

    /// Runs the instantiated graph to completion.
    ///
    /// # Errors
    ///
    /// Engine-specific.
    fn simulate(&mut self) -> Result<ExitEvent, DriverError>;
}

/// Hands `graph` to `driver` and runs it to completion.
///
/// # Errors
///
/// * [`ConfigError::GraphNotReady`] if `graph` did not come out of a finished assembly.
/// * [`ResolutionError::UnsupportedIsa`] if the driver cannot run the graph's ISA.
/// * Any [`DriverError`], unchanged.
pub fn run<D: RunDriver + ?Sized>(graph: SystemGraph, driver: &mut D) -> Result<ExitEvent, Error> {
    if !graph.is_ready() {
        return Err(ConfigError::GraphNotReady.into());
    }
    let isa = graph.isa();
    if !driver.supports_isa(isa) {
        return Err(ResolutionError::UnsupportedIsa(isa).into());
    }

    driver.instantiate(graph)?;
    info!("Beginning simulation!");
    let event = driver.simulate()?;
    info!("Exiting @ tick {} because {}", event.tick, event.cause);
    Ok(event)
}
