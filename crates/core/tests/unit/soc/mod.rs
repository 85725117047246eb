//! # System-on-Chip
//!
//! Tests for the component graph and everything that is wired into it.





/// Crossbar parameters.
pub mod interconnect;

/// Memory controller and DRAM preset.
pub mod memory;
