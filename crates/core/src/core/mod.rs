//! Processor core configuration.
//!
//! This module describes the out-of-order core handed to the engine:
//! 1. **Descriptor:** `O3Core`, its variant and the bound process/threads.
//! 2. **Selection:** The mode selector mapping option tags to variants.

/// Core descriptor, variants and interrupt controller.
pub mod cpu;

/// Mode selector.
pub mod mode;

pub use cpu::{CoreVariant, InterruptController, O3Core, PreParams, Process, ThreadContext};
