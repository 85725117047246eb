//! Memory controller descriptor.
//!
//! The controller is the only responder behind the system crossbar's
//! memory-side ports. It serves exactly one address range and drives exactly
//! one DRAM model, which lives in the graph as its own component.

use serde::Serialize;

use crate::common::AddrRange;
use crate::soc::graph::{ComponentId, PortRole, PortSpec};

/// Ports exposed by the memory controller.
pub const MEM_CTRL_PORTS: &[PortSpec] = &[PortSpec::scalar("port", PortRole::Responder)];

/// A single-channel memory controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryController {
    /// Address range served.
    pub range: AddrRange,
    /// The DRAM model this controller drives.
    pub dram: ComponentId,
}

impl MemoryController {
    /// Binds `range` to the DRAM model `dram`.
    pub const fn new(range: AddrRange, dram: ComponentId) -> Self {
        Self { range, dram }
    }

    /// Returns `true` if the controller serves `addr`.
    pub const fn serves(&self, addr: u64) -> bool {
        self.range.contains(addr)
    }
}
