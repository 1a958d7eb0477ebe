//! # Algolab
//!
//! Classical algorithms behind small real-world scenarios: ordering sales
//! by time, ranking movies, routing ambulances around traffic, packing relief
//! trucks and boats, and scheduling exams without clashes.
//!
//! | Scenario | Engine |
//! | -------- | ------ |
//! | Orders by timestamp | [`merge_sort`] (stable) |
//! | Movie ranking | [`quick_sort_movies`] (Lomuto, descending) |
//! | Ambulance routing | [`dijkstra`], [`reconstruct_path`], [`find_nearest`] |
//! | Relief trucks | [`knapsack01`], [`allocate`], [`apply_critical_bonus`] |
//! | Boat loading | [`fill_fractional`] |
//! | Exam slots | [`greedy_coloring`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use algolab::{Graph, VertexId, dijkstra, find_nearest, reconstruct_path};
//!
//! let mut roads = Graph::new(4);
//! roads.add_undirected_edge(VertexId::new(0), VertexId::new(1), 4.0)?;
//! roads.add_undirected_edge(VertexId::new(1), VertexId::new(2), 1.0)?;
//! roads.add_undirected_edge(VertexId::new(0), VertexId::new(3), 9.0)?;
//!
//! let res = dijkstra(&roads, VertexId::new(0))?;
//! let hospital = find_nearest(&res, &[VertexId::new(2), VertexId::new(3)]).unwrap();
//! assert_eq!(hospital, VertexId::new(2));
//! assert_eq!(reconstruct_path(&res, VertexId::new(0), hospital).len(), 3);
//! # Ok::<(), algolab::Error>(())
//! ```

// Shared types and errors
pub use algolab_common::{Error, MovieRecord, OrderRecord, Result, SortAttribute, VertexId};

// Engines
pub use algolab_core::algorithms::{
    Coloring, DijkstraResult, FractionalItem, FractionalPlan, KnapsackItem, KnapsackSolution,
    Take, TakeOutcome, allocate, apply_critical_bonus, dijkstra, dijkstra_with_epsilon,
    fill_fractional, find_nearest, greedy_coloring, knapsack01, path_weight, reconstruct_path,
};
pub use algolab_core::sort::{
    merge_sort, merge_sort_range, quick_sort_by, quick_sort_movies, quick_sort_movies_by_name,
    quick_sort_range_by,
};
pub use algolab_core::{Config, ConflictGraph, Edge, Graph};

// Loaders and exporters
pub use algolab_adapters::export::{export_dot, to_dot_string, write_dot};
pub use algolab_adapters::ingest::{load_movies, load_orders, parse_timestamp};
