//! Graph models the engines run on.
//!
//! - [`Graph`] - directed adjacency-list graph with mutable edge weights
//! - [`ConflictGraph`] - undirected graph used by the coloring engine

mod conflict;
mod weighted;

pub use conflict::ConflictGraph;
pub use weighted::{Edge, Graph};

use algolab_common::utils::error::{Error, Result};
use algolab_common::VertexId;

/// Fails with [`Error::VertexOutOfRange`] unless `v < vertex_count`.
pub(crate) fn check_vertex(v: VertexId, vertex_count: usize) -> Result<()> {
    if v.index() < vertex_count {
        Ok(())
    } else {
        Err(Error::VertexOutOfRange {
            vertex: v.index(),
            vertex_count,
        })
    }
}
