//! Undirected conflict graph.

use algolab_common::utils::error::Result;
use algolab_common::VertexId;
use smallvec::SmallVec;

use super::check_vertex;

/// Undirected graph over vertices `0..k`, built one conflict at a time.
///
/// Every conflict is stored in both endpoints' lists, so adjacency is
/// always symmetric.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    adjacency: Vec<SmallVec<[VertexId; 8]>>,
}

impl ConflictGraph {
    /// Creates a conflict graph with `vertex_count` vertices and no conflicts.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![SmallVec::new(); vertex_count],
        }
    }

    /// Builds a graph from a list of conflicting pairs.
    pub fn from_conflicts(
        vertex_count: usize,
        conflicts: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (u, v) in conflicts {
            graph.add_conflict(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Records that `u` and `v` conflict.
    pub fn add_conflict(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.adjacency[u.index()].push(v);
        self.adjacency[v.index()].push(u);
        Ok(())
    }

    /// Returns the vertices conflicting with `u`.
    pub fn neighbors(&self, u: VertexId) -> Result<&[VertexId]> {
        check_vertex(u, self.vertex_count())?;
        Ok(&self.adjacency[u.index()])
    }

    /// Neighbors of an index already known to be in range.
    pub(crate) fn neighbors_at(&self, u: usize) -> &[VertexId] {
        &self.adjacency[u]
    }

    /// Iterates over every conflict once, as `(u, v)` with `u <= v`.
    pub fn conflicts(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            // Lists past the id range never hold conflicts.
            .filter_map(|(u, list)| VertexId::try_from(u).ok().map(|u| (u, list)))
            .flat_map(|(u, list)| list.iter().filter(move |v| u <= **v).map(move |v| (u, *v)))
    }
}
