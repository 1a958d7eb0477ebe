//! Single-source shortest paths on non-negatively weighted graphs.
//!
//! There is no incremental update: after [`Graph::update_edge`], run
//! [`dijkstra`] again from scratch.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use algolab_common::utils::error::{Error, Result};
use algolab_common::VertexId;

use crate::config::DEFAULT_RELAXATION_EPSILON;
use crate::graph::{Graph, check_vertex};

/// Frontier entry ordered so that [`BinaryHeap`] pops the smallest score.
#[derive(Debug, Clone, Copy)]
struct MinScored(f64, VertexId);

impl PartialEq for MinScored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinScored {}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .total_cmp(&self.0)
            .then_with(|| other.1.cmp(&self.1))
    }
}

/// Distances and predecessors produced by one Dijkstra run.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraResult {
    /// The source vertex.
    pub source: VertexId,
    /// `dist[v]`, or `f64::INFINITY` when `v` is unreachable.
    pub dist: Vec<f64>,
    /// Predecessor of `v` on a shortest path; `None` for the source and for
    /// unreachable vertices.
    pub pred: Vec<Option<VertexId>>,
}

impl DijkstraResult {
    /// Returns the shortest distance to `v`, or `None` if unreachable or out of range.
    #[must_use]
    pub fn distance(&self, v: VertexId) -> Option<f64> {
        self.dist.get(v.index()).copied().filter(|d| d.is_finite())
    }

    /// Returns the predecessor of `v`.
    #[must_use]
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.pred.get(v.index()).copied().flatten()
    }

    /// Returns true if `v` was reached from the source.
    #[must_use]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }
}

/// Runs Dijkstra from `source` with the default relaxation margin.
///
/// # Errors
///
/// Returns [`Error::VertexOutOfRange`] for a bad source and
/// [`Error::NegativeWeight`] as soon as a negative edge is examined.
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<DijkstraResult> {
    dijkstra_with_epsilon(graph, source, DEFAULT_RELAXATION_EPSILON)
}

/// Runs Dijkstra from `source`, accepting a relaxation only when it improves
/// the recorded distance by more than `epsilon`.
///
/// # Errors
///
/// Same as [`dijkstra`].
pub fn dijkstra_with_epsilon(
    graph: &Graph,
    source: VertexId,
    epsilon: f64,
) -> Result<DijkstraResult> {
    let n = graph.vertex_count();
    check_vertex(source, n)?;

    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = BinaryHeap::new();

    dist[source.index()] = 0.0;
    frontier.push(MinScored(0.0, source));

    let mut settled = 0usize;
    while let Some(MinScored(d, u)) = frontier.pop() {
        // Lazy deletion: skip entries superseded by a later, shorter push.
        let ui = u.index();
        if d > dist[ui] || visited[ui] {
            continue;
        }
        visited[ui] = true;
        settled += 1;

        for edge in graph.neighbors(ui) {
            if edge.weight < 0.0 {
                return Err(Error::NegativeWeight {
                    from: u,
                    to: edge.to,
                    weight: edge.weight,
                });
            }
            let v = edge.to.index();
            let nd = d + edge.weight;
            if nd + epsilon < dist[v] {
                tracing::trace!(%u, to = %edge.to, nd, "relaxed");
                dist[v] = nd;
                pred[v] = Some(u);
                frontier.push(MinScored(nd, edge.to));
            }
        }
    }

    tracing::debug!(%source, vertices = n, settled, "dijkstra finished");
    Ok(DijkstraResult { source, dist, pred })
}

/// Walks predecessors from `target` back to `source`.
///
/// Returns the path source-first, or an empty vector when `target` is out of
/// range, unreachable, or its predecessor chain does not end at `source`.
pub fn reconstruct_path(res: &DijkstraResult, source: VertexId, target: VertexId) -> Vec<VertexId> {
    if !res.is_reachable(target) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(target);
    // A chain longer than the vertex count means a cycle in `pred`.
    while let Some(v) = current {
        if path.len() > res.pred.len() {
            return Vec::new();
        }
        path.push(v);
        if v == source {
            path.reverse();
            return path;
        }
        current = res.predecessor(v);
    }
    Vec::new()
}

/// Returns the target with the smallest finite distance.
///
/// Out-of-range and unreachable targets are ignored. On ties the target
/// listed first wins.
#[must_use]
pub fn find_nearest(res: &DijkstraResult, targets: &[VertexId]) -> Option<VertexId> {
    let mut best: Option<(VertexId, f64)> = None;
    for &t in targets {
        if let Some(d) = res.distance(t) {
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((t, d));
            }
        }
    }
    best.map(|(t, _)| t)
}

/// Sums the weights along `path`, using the first entry for each hop.
///
/// Returns `None` if some consecutive pair has no edge. An empty or
/// single-vertex path weighs `0.0`.
#[must_use]
pub fn path_weight(graph: &Graph, path: &[VertexId]) -> Option<f64> {
    path.windows(2)
        .map(|hop| graph.weight(hop[0], hop[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    fn vs(ids: &[u32]) -> Vec<VertexId> {
        ids.iter().copied().map(VertexId::new).collect()
    }

    fn vid(i: usize) -> VertexId {
        VertexId::try_from(i).unwrap()
    }

    fn diamond() -> Graph {
        let mut g = Graph::new(5);
        g.add_edge(v(0), v(1), 1.0).unwrap();
        g.add_edge(v(0), v(2), 4.0).unwrap();
        g.add_edge(v(1), v(2), 1.0).unwrap();
        g.add_edge(v(2), v(3), 1.0).unwrap();
        g
    }

    #[test]
    fn test_distances_and_preds() {
        let res = dijkstra(&diamond(), v(0)).unwrap();
        assert_eq!(res.dist[..4], [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(res.pred[2], Some(v(1)));
        assert_eq!(res.pred[0], None);
        assert!(res.dist[4].is_infinite());
        assert_eq!(res.pred[4], None);
    }

    #[test]
    fn test_reconstruct_path() {
        let res = dijkstra(&diamond(), v(0)).unwrap();
        assert_eq!(reconstruct_path(&res, v(0), v(3)), vs(&[0, 1, 2, 3]));
        assert_eq!(reconstruct_path(&res, v(0), v(0)), vs(&[0]));
        assert!(reconstruct_path(&res, v(0), v(4)).is_empty());
        assert!(reconstruct_path(&res, v(0), v(99)).is_empty());
        // Any vertex on the chain works as a start point.
        assert_eq!(reconstruct_path(&res, v(1), v(3)), vs(&[1, 2, 3]));
        // The chain from 3 never passes through 4.
        assert!(reconstruct_path(&res, v(4), v(3)).is_empty());
    }

    #[test]
    fn test_find_nearest() {
        let res = dijkstra(&diamond(), v(0)).unwrap();
        assert_eq!(find_nearest(&res, &vs(&[3, 2])), Some(v(2)));
        assert_eq!(find_nearest(&res, &vs(&[4, 17])), None);
        assert_eq!(find_nearest(&res, &[]), None);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut g = Graph::new(2);
        g.add_edge(v(0), v(1), -1.0).unwrap();
        let err = dijkstra(&g, v(0)).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { weight, .. } if weight == -1.0));
    }

    #[test]
    fn test_unexamined_negative_weight_is_ignored() {
        let mut g = Graph::new(3);
        g.add_edge(v(0), v(1), 1.0).unwrap();
        g.add_edge(v(2), v(1), -5.0).unwrap();
        assert!(dijkstra(&g, v(0)).is_ok());
    }

    #[test]
    fn test_bad_source() {
        let g = Graph::new(2);
        assert!(matches!(
            dijkstra(&g, v(2)),
            Err(Error::VertexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_path_weight() {
        let g = diamond();
        assert_eq!(path_weight(&g, &vs(&[0, 1, 2, 3])), Some(3.0));
        assert_eq!(path_weight(&g, &vs(&[0])), Some(0.0));
        assert_eq!(path_weight(&g, &vs(&[3, 0])), None);
    }

    #[test]
    fn test_epsilon_keeps_first_equal_path() {
        // Two equal-weight routes to 2; the later one must not replace the
        // predecessor found first.
        let mut g = Graph::new(3);
        g.add_edge(v(0), v(2), 2.0).unwrap();
        g.add_edge(v(0), v(1), 1.0).unwrap();
        g.add_edge(v(1), v(2), 1.0).unwrap();
        let res = dijkstra(&g, v(0)).unwrap();
        assert_eq!(res.pred[2], Some(v(0)));
    }

    /// Bellman-Ford style reference distances.
    fn reference_distances(n: usize, edges: &[(usize, usize, f64)], source: usize) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; n];
        dist[source] = 0.0;
        for _ in 0..n {
            for &(u, w_to, w) in edges {
                if dist[u] + w < dist[w_to] {
                    dist[w_to] = dist[u] + w;
                }
            }
        }
        dist
    }

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
        (1usize..10).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0u32..20).prop_map(|(u, v, w)| (u, v, f64::from(w)));
            (Just(n), prop::collection::vec(edge, 0..40))
        })
    }

    proptest! {
        #[test]
        fn prop_matches_reference((n, edges) in arb_graph()) {
            let mut g = Graph::new(n);
            for &(a, b, w) in &edges {
                g.add_edge(vid(a), vid(b), w).unwrap();
            }
            let res = dijkstra(&g, v(0)).unwrap();
            let expected = reference_distances(n, &edges, 0);
            prop_assert_eq!(&res.dist, &expected);

            for t in 0..n {
                let target = vid(t);
                let path = reconstruct_path(&res, v(0), target);
                if res.is_reachable(target) {
                    prop_assert_eq!(path.first().copied(), Some(v(0)));
                    prop_assert_eq!(path.last().copied(), Some(target));
                    // Integer weights sum exactly, and any parallel edge the
                    // path relies on is at least as cheap as the first entry.
                    let walked: f64 = path
                        .windows(2)
                        .map(|hop| {
                            g.edges_from(hop[0])
                                .unwrap()
                                .iter()
                                .filter(|e| e.to == hop[1])
                                .map(|e| e.weight)
                                .fold(f64::INFINITY, f64::min)
                        })
                        .sum();
                    prop_assert_eq!(walked, res.dist[t]);
                } else {
                    prop_assert!(path.is_empty());
                }
            }
        }
    }
}
