//! Directed graph with per-edge real weights.
//!
//! Adjacency is one small vector of entries per source vertex, in insertion
//! order. Parallel edges are allowed and never deduplicated; weight updates
//! touch the first matching entry only.

use algolab_common::utils::error::Result;
use algolab_common::VertexId;
use serde::Serialize;
use smallvec::SmallVec;

use super::check_vertex;

/// Inline capacity of an adjacency list. Road-network style graphs rarely
/// exceed this out-degree.
const INLINE_DEGREE: usize = 4;

/// One outgoing adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Target vertex.
    pub to: VertexId,
    /// Edge weight.
    pub weight: f64,
}

/// Adjacency-list directed graph over vertices `0..n`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<SmallVec<[Edge; INLINE_DEGREE]>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![SmallVec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph where every listed road is inserted in both directions.
    pub fn from_undirected(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId, f64)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (u, v, w) in edges {
            graph.add_undirected_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed adjacency entries.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Appends the directed edge `u -> v` with weight `w`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, w: f64) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.adjacency[u.index()].push(Edge { to: v, weight: w });
        self.edge_count += 1;
        Ok(())
    }

    /// Appends `u -> v` and `v -> u`, both with weight `w`.
    pub fn add_undirected_edge(&mut self, u: VertexId, v: VertexId, w: f64) -> Result<()> {
        // Validate both ends first so a failure leaves the graph untouched.
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.add_edge(u, v, w)?;
        self.add_edge(v, u, w)
    }

    /// Overwrites the weight of the first `u -> v` entry.
    ///
    /// Returns `Ok(false)` when `u` has no edge to `v`. Only one direction is
    /// touched; undirected callers update the reverse entry themselves.
    pub fn update_edge(&mut self, u: VertexId, v: VertexId, w: f64) -> Result<bool> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        match self.adjacency[u.index()].iter_mut().find(|e| e.to == v) {
            Some(edge) => {
                tracing::debug!(%u, %v, old = edge.weight, new = w, "edge weight updated");
                edge.weight = w;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns the outgoing entries of `u` in insertion order.
    pub fn edges_from(&self, u: VertexId) -> Result<&[Edge]> {
        check_vertex(u, self.vertex_count())?;
        Ok(&self.adjacency[u.index()])
    }

    /// Returns the weight of the first `u -> v` entry, if any.
    #[must_use]
    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<f64> {
        self.adjacency
            .get(u.index())?
            .iter()
            .find(|e| e.to == v)
            .map(|e| e.weight)
    }

    /// Iterates over all `(source, edge)` pairs, sources ascending.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            // Lists past the id range never hold edges.
            .filter_map(|(u, list)| VertexId::try_from(u).ok().map(|u| (u, list)))
            .flat_map(|(u, list)| list.iter().map(move |e| (u, e)))
    }

    /// Outgoing entries of an index already known to be in range.
    pub(crate) fn neighbors(&self, u: usize) -> &[Edge] {
        &self.adjacency[u]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_common::Error;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_add_edge_appends() {
        let mut g = Graph::new(3);
        g.add_edge(v(0), v(1), 4.0).unwrap();
        g.add_edge(v(0), v(2), 2.0).unwrap();
        g.add_edge(v(0), v(1), 9.0).unwrap();

        let edges = g.edges_from(v(0)).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], Edge { to: v(1), weight: 4.0 });
        assert_eq!(edges[2], Edge { to: v(1), weight: 9.0 });
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_undirected_inserts_both_directions() {
        let mut g = Graph::new(2);
        g.add_undirected_edge(v(0), v(1), 1.5).unwrap();
        assert_eq!(g.weight(v(0), v(1)), Some(1.5));
        assert_eq!(g.weight(v(1), v(0)), Some(1.5));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_update_touches_first_match_only() {
        let mut g = Graph::new(2);
        g.add_edge(v(0), v(1), 1.0).unwrap();
        g.add_edge(v(0), v(1), 2.0).unwrap();

        assert!(g.update_edge(v(0), v(1), 40.0).unwrap());
        let weights: Vec<_> = g.edges_from(v(0)).unwrap().iter().map(|e| e.weight).collect();
        assert_eq!(weights, [40.0, 2.0]);

        // No reverse entry exists.
        assert!(!g.update_edge(v(1), v(0), 3.0).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        let mut g = Graph::new(2);
        let err = g.add_edge(v(0), v(2), 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }
        ));
        assert!(g.update_edge(v(5), v(0), 1.0).is_err());
        assert!(g.edges_from(v(2)).is_err());
        assert!(g.add_undirected_edge(v(1), v(3), 1.0).is_err());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_edges_iter() {
        let mut g = Graph::new(3);
        g.add_edge(v(2), v(0), 1.0).unwrap();
        g.add_edge(v(0), v(1), 2.0).unwrap();
        let all: Vec<_> = g.edges().map(|(u, e)| (u, e.to)).collect();
        assert_eq!(all, [(v(0), v(1)), (v(2), v(0))]);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.weight(v(0), v(0)), None);
    }
}
