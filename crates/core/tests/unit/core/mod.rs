//! # Core

/// Core descriptor, variants and interrupt controller.
pub mod cpu;

/// Mode selector.
pub mod mode;
