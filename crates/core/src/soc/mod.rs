//! System-on-Chip topology.
//!
//! This module organizes the components that make up the simulated system and
//! the machinery that wires them together: the graph arena, caches, crossbars,
//! memory, the staged assembler and the one-shot builder.

/// Staged topology assembler.
pub mod assembler;

/// One-shot system construction from options.
pub mod builder;

/// Cache factory and cache connection operations.
pub mod cache;

/// Component arena, ports and connections.
pub mod graph;

/// Crossbar interconnects.
pub mod interconnect;

/// Memory controller and DRAM model.
pub mod memory;

pub use assembler::{AssemblyState, TopologyAssembler};
pub use builder::build_system;
pub use graph::SystemGraph;
