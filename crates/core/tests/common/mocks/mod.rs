//! # Mocks
//!
//! `mockall` doubles for the traits at the crate's seams.
