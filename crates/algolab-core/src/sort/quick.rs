//! Lomuto quicksort, descending.

use algolab_common::{MovieRecord, SortAttribute};

/// Sorts `seq` in descending order, where `greater(a, b)` reports whether `a`
/// ranks strictly above `b`.
///
/// Not stable: equal elements stay on the high side of each partition.
///
/// ```
/// use algolab_core::sort::quick_sort_by;
///
/// let mut years = vec![1994, 1972, 2008];
/// quick_sort_by(&mut years, |a, b| a > b);
/// assert_eq!(years, [2008, 1994, 1972]);
/// ```
pub fn quick_sort_by<T, F>(seq: &mut [T], greater: F)
where
    F: Fn(&T, &T) -> bool,
{
    if seq.len() > 1 {
        sort_range(seq, 0, seq.len() - 1, &greater);
    }
}

/// Sorts the inclusive range `[lo, hi]` of `seq` in descending order.
///
/// # Panics
///
/// Panics if `lo < hi` and `hi >= seq.len()`.
pub fn quick_sort_range_by<T, F>(seq: &mut [T], lo: usize, hi: usize, greater: F)
where
    F: Fn(&T, &T) -> bool,
{
    if lo < hi {
        assert!(hi < seq.len(), "range end {hi} out of bounds for length {}", seq.len());
        sort_range(seq, lo, hi, &greater);
    }
}

/// Sorts movies in descending order of `attribute`.
pub fn quick_sort_movies(movies: &mut [MovieRecord], attribute: SortAttribute) {
    quick_sort_by(movies, |a, b| a.is_greater(b, attribute));
}

/// Sorts movies by an attribute given as a configuration string.
///
/// The name is matched case-insensitively. An unrecognized name makes every
/// comparison report "not greater", so no element ever moves to the low
/// side and the result is a degenerate, unsorted permutation. Callers should
/// parse into [`SortAttribute`] first and fall back explicitly.
pub fn quick_sort_movies_by_name(movies: &mut [MovieRecord], attribute: &str) {
    match attribute.parse::<SortAttribute>() {
        Ok(attribute) => quick_sort_movies(movies, attribute),
        Err(_) => {
            tracing::warn!(attribute, "unknown sort attribute, comparisons are all false");
            quick_sort_by(movies, |_, _| false);
        }
    }
}

fn sort_range<T, F>(seq: &mut [T], mut lo: usize, mut hi: usize, greater: &F)
where
    F: Fn(&T, &T) -> bool,
{
    // Recurse into the smaller side and loop on the larger one to keep the
    // stack depth logarithmic on adversarial input.
    while lo < hi {
        let p = partition(seq, lo, hi, greater);
        if p - lo < hi - p {
            if p > lo {
                sort_range(seq, lo, p - 1, greater);
            }
            lo = p + 1;
        } else {
            if p < hi {
                sort_range(seq, p + 1, hi, greater);
            }
            if p == lo {
                break;
            }
            hi = p - 1;
        }
    }
}

/// Partitions `[lo, hi]` around `seq[hi]` and returns the pivot's final index.
fn partition<T, F>(seq: &mut [T], lo: usize, hi: usize, greater: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mut i = lo;
    for j in lo..hi {
        if greater(&seq[j], &seq[hi]) {
            seq.swap(i, j);
            i += 1;
        }
    }
    seq.swap(i, hi);
    i
}
