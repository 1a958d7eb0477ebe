//! Utility modules shared across crates.

pub mod error;
