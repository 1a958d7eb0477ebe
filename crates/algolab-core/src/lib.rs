//! # algolab-core
//!
//! Core layer for Algolab: the algorithmic engines and the graphs they run on.
//!
//! This crate depends only on `algolab-common`. Engines take already-parsed
//! inputs; all file and console I/O lives in the adapters and the CLI.
//!
//! ## Modules
//!
//! - [`sort`] - Stable merge sort and Lomuto quicksort
//! - [`graph`] - Weighted directed graph and undirected conflict graph
//! - [`algorithms`] - Dijkstra, knapsack variants, greedy coloring
//! - [`config`] - Tunables shared by engines and drivers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod config;
pub mod graph;
pub mod sort;

// Re-export commonly used types
pub use config::Config;
pub use graph::{ConflictGraph, Edge, Graph};
