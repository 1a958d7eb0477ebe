//! Algorithmic engines.
//!
//! - [`shortest_path`] - Dijkstra, path reconstruction, nearest-target selection
//! - [`knapsack`] - 0/1 knapsack and sequential multi-container allocation
//! - [`fractional`] - Greedy fractional knapsack with indivisible items
//! - [`coloring`] - First-fit greedy vertex coloring
//!
//! ## Usage
//!
//! ```
//! use algolab_common::VertexId;
//! use algolab_core::Graph;
//! use algolab_core::algorithms::{dijkstra, reconstruct_path};
//!
//! let mut g = Graph::new(3);
//! g.add_edge(VertexId::new(0), VertexId::new(1), 1.0)?;
//! g.add_edge(VertexId::new(1), VertexId::new(2), 2.0)?;
//!
//! let res = dijkstra(&g, VertexId::new(0))?;
//! assert_eq!(res.distance(VertexId::new(2)), Some(3.0));
//! assert_eq!(reconstruct_path(&res, VertexId::new(0), VertexId::new(2)).len(), 3);
//! # Ok::<(), algolab_common::Error>(())
//! ```

pub mod coloring;
pub mod fractional;
pub mod knapsack;
pub mod shortest_path;

pub use coloring::{Coloring, greedy_coloring};
pub use fractional::{FractionalItem, FractionalPlan, Take, TakeOutcome, fill_fractional};
pub use knapsack::{
    KnapsackItem, KnapsackSolution, allocate, apply_critical_bonus, knapsack01,
};
pub use shortest_path::{
    DijkstraResult, dijkstra, dijkstra_with_epsilon, find_nearest, path_weight, reconstruct_path,
};
