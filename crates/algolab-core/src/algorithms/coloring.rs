//! First-fit greedy vertex coloring.
//!
//! Vertices are colored in ascending id order, each with the smallest color
//! no already-colored neighbor uses. This does not minimize the number of
//! colors.

use algolab_common::VertexId;
use serde::Serialize;

use crate::graph::ConflictGraph;

/// A color per vertex, plus the number of distinct colors used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Coloring {
    /// `assignment[v]` is the color of vertex `v`.
    pub assignment: Vec<usize>,
    /// `max(assignment) + 1`, or 0 for an empty graph.
    pub slots: usize,
}

impl Coloring {
    /// Returns the color of `v`.
    #[must_use]
    pub fn color(&self, v: VertexId) -> Option<usize> {
        self.assignment.get(v.index()).copied()
    }

    /// Returns true if no conflict joins two vertices of the same color.
    #[must_use]
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        graph
            .conflicts()
            .all(|(u, v)| u == v || self.color(u) != self.color(v))
    }
}

/// Colors `graph` first-fit in vertex-id order.
#[must_use]
pub fn greedy_coloring(graph: &ConflictGraph) -> Coloring {
    let n = graph.vertex_count();
    let mut assignment: Vec<Option<usize>> = vec![None; n];
    // A vertex with d neighbors never needs a color above d, so n + 1 slots
    // always contain a free one.
    let mut used = vec![false; n + 1];

    for u in 0..n {
        used.fill(false);
        for nb in graph.neighbors_at(u) {
            if let Some(color) = assignment[nb.index()] {
                used[color] = true;
            }
        }
        let color = used.iter().position(|taken| !taken).unwrap_or(n);
        assignment[u] = Some(color);
    }

    let assignment: Vec<usize> = assignment.into_iter().flatten().collect();
    let slots = assignment.iter().max().map_or(0, |max| max + 1);
    tracing::debug!(vertices = n, slots, "greedy coloring finished");

    Coloring { assignment, slots }
}
