//! Export of graphs for external viewers.

pub mod dot;

pub use dot::{export_dot, to_dot_string, write_dot};
