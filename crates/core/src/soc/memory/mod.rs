//! Main memory: controller and DRAM timing model.
//!
//! This module describes the memory side of the system. It provides:
//! 1. **Controller:** Binds one address range and one DRAM model to the memory bus.
//! 2. **DRAM:** Device geometry and timing parameters for the memory technology.

/// Memory controller descriptor.
pub mod controller;

/// DRAM technology presets.
pub mod dram;

pub use controller::{MEM_CTRL_PORTS, MemoryController};
pub use dram::DramModel;
