//! Core type definitions for Algolab.
//!
//! - Identifier types ([`VertexId`])
//! - Record types fed to the sorts ([`OrderRecord`], [`MovieRecord`])
//! - Sort key selection ([`SortAttribute`])

mod id;
mod record;

pub use id::VertexId;
pub use record::{MovieRecord, OrderRecord, SortAttribute};
