//! # Common Types


/// Error display and conversions.
pub mod error;

/// ISA tags and interrupt routing.
pub mod isa;
