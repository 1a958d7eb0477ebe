//! # algolab-common
//!
//! Foundation layer for Algolab: identifier types, record types and errors.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, OrderRecord, MovieRecord, SortAttribute)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{MovieRecord, OrderRecord, SortAttribute, VertexId};
pub use utils::error::{Error, Result};
