//! # algolab-adapters
//!
//! Adapters layer for Algolab: the collaborators that sit between files and
//! the engines.
//!
//! ## Modules
//!
//! - [`ingest`] - CSV readers for order and movie datasets
//! - [`export`] - Graphviz DOT export of weighted graphs

pub mod export;
pub mod ingest;
