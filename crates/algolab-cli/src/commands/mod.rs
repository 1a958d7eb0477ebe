//! CLI command implementations.

pub mod boat;
pub mod knapsack;
pub mod movies;
pub mod orders;
pub mod slots;
pub mod traffic;
pub mod trucks;
