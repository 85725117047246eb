//! Common types shared by every stage of topology assembly.
//!
//! This module provides the building blocks used across the crate:
//! 1. **Quantities:** Memory sizes, address ranges and clock frequencies.
//! 2. **Architecture:** The explicit target ISA.
//! 3. **Error Handling:** Configuration, resolution and driver error types.

/// Address ranges, sizes and frequencies.
pub mod addr;

/// Error taxonomy.
pub mod error;

/// Target instruction-set architecture.
pub mod isa;

pub use addr::{AddrRange, Frequency, MemSize};
pub use error::{ConfigError, DriverError, Error, LoadError, ResolutionError};
pub use isa::Isa;
