//! Error types shared by every Algolab crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::VertexId;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the engines and their drivers.
#[derive(Error, Debug)]
pub enum Error {
    /// An input file does not exist.
    #[error("input not found: {}", .0.display())]
    InputMissing(PathBuf),

    /// A CSV row or user-supplied field could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// One-based line number, or 0 when not line-oriented.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A timestamp did not match `YYYY-MM-DDTHH:MM:SS.ffffff`.
    #[error("bad timestamp: {0:?}")]
    BadTimestamp(String),

    /// Dijkstra examined an edge with a negative weight.
    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        /// Source vertex.
        from: VertexId,
        /// Target vertex.
        to: VertexId,
        /// The offending weight.
        weight: f64,
    },

    /// A vertex id is outside `0..vertex_count`.
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        /// The requested vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// A knapsack item was rejected at construction.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// A knapsack DP table would exceed the cell limit.
    #[error("knapsack table for {items} items at capacity {capacity} exceeds {max_cells} cells")]
    TableTooLarge {
        /// Number of items in the solve.
        items: usize,
        /// Requested capacity.
        capacity: usize,
        /// Cell limit.
        max_cells: usize,
    },

    /// A sort attribute name is not one of rating, year or popularity.
    #[error("invalid sort attribute: {0:?}")]
    InvalidSortAttribute(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
