//! Crossbar interconnects.
//!
//! This module describes the two buses of the hierarchy. It provides:
//! 1. **L2XBar:** The crossbar between the L1 caches and the shared L2.
//! 2. **SystemXBar:** The memory bus joining L2, system port, interrupts and memory.
//!
//! Both expose vector ports, so any number of peers can attach on each side.

use serde::Serialize;

use crate::soc::graph::{PortRole, PortSpec};

/// Ports exposed by every crossbar.
pub const BUS_PORTS: &[PortSpec] = &[
    PortSpec::vector("cpu_side_ports", PortRole::Responder),
    PortSpec::vector("mem_side_ports", PortRole::Requestor),
];

/// Which crossbar flavour to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum XBarKind {
    /// Coherent crossbar in front of the L2.
    L2XBar,
    /// Coherent system-wide memory bus.
    SystemXBar,
}

/// A coherent crossbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bus {
    /// Flavour.
    pub kind: XBarKind,
    /// Data path width in bytes.
    pub width: u64,
    /// Cycles to accept a request.
    pub frontend_latency: u64,
    /// Cycles to forward a request.
    pub forward_latency: u64,
    /// Cycles to return a response.
    pub response_latency: u64,
    /// Cycles to return a snoop response.
    pub snoop_response_latency: u64,
}

impl Bus {
    /// The crossbar between the L1s and the L2.
    pub const fn l2_xbar() -> Self {
        Self {
            kind: XBarKind::L2XBar,
            width: 32,
            frontend_latency: 1,
            forward_latency: 0,
            response_latency: 1,
            snoop_response_latency: 1,
        }
    }

    /// The system memory bus.
    pub const fn system_xbar() -> Self {
        Self {
            kind: XBarKind::SystemXBar,
            width: 16,
            frontend_latency: 3,
            forward_latency: 4,
            response_latency: 2,
            snoop_response_latency: 4,
        }
    }

    /// Cycles to move `bytes` across the data path, including frontend latency.
    pub const fn transit_cycles(&self, bytes: u64) -> u64 {
        self.frontend_latency + bytes.div_ceil(self.width)
    }
}
