//! In-place comparison sorts.
//!
//! - [`merge_sort`] - stable, ascending by an extracted key
//! - [`quick_sort_by`] - unstable Lomuto quicksort, descending by a "greater than" predicate
//!
//! Both sorts take the ordering as a parameter instead of relying on `Ord`
//! impls on the records, so the same record type can be sorted on different
//! attributes.

mod merge;
mod quick;

pub use merge::{merge_sort, merge_sort_range};
pub use quick::{quick_sort_by, quick_sort_movies, quick_sort_movies_by_name, quick_sort_range_by};
