//! Stable top-down merge sort.

/// Sorts `seq` ascending by `key`, keeping equal-keyed elements in input order.
///
/// ```
/// use algolab_core::sort::merge_sort;
///
/// let mut v = vec![(5, 'A'), (3, 'B'), (3, 'C'), (1, 'D'), (2, 'E')];
/// merge_sort(&mut v, |r| r.0);
/// assert_eq!(v, [(1, 'D'), (2, 'E'), (3, 'B'), (3, 'C'), (5, 'A')]);
/// ```
pub fn merge_sort<T, K, F>(seq: &mut [T], key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if seq.len() > 1 {
        merge_sort_range(seq, 0, seq.len() - 1, key);
    }
}

/// Sorts the inclusive index range `[lo, hi]` of `seq` ascending by `key`.
///
/// Empty and single-element ranges (`lo >= hi`) are no-ops.
///
/// # Panics
///
/// Panics if `lo < hi` and `hi >= seq.len()`.
pub fn merge_sort_range<T, K, F>(seq: &mut [T], lo: usize, hi: usize, key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if lo < hi {
        assert!(hi < seq.len(), "range end {hi} out of bounds for length {}", seq.len());
        sort_range(seq, lo, hi, &key);
    }
}

fn sort_range<T, K, F>(seq: &mut [T], lo: usize, hi: usize, key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if lo < hi {
        let mid = lo + (hi - lo) / 2;
        sort_range(seq, lo, mid, key);
        sort_range(seq, mid + 1, hi, key);
        merge(seq, lo, mid, hi, key);
    }
}

/// Merges the sorted runs `[lo, mid]` and `[mid + 1, hi]`.
fn merge<T, K, F>(seq: &mut [T], lo: usize, mid: usize, hi: usize, key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut scratch = Vec::with_capacity(hi - lo + 1);
    let (mut i, mut j) = (lo, mid + 1);

    while i <= mid && j <= hi {
        // `<=` takes from the left run on ties, which is what makes this stable.
        if key(&seq[i]) <= key(&seq[j]) {
            scratch.push(seq[i].clone());
            i += 1;
        } else {
            scratch.push(seq[j].clone());
            j += 1;
        }
    }
    scratch.extend_from_slice(&seq[i..=mid]);
    scratch.extend_from_slice(&seq[j..=hi]);

    for (slot, item) in seq[lo..=hi].iter_mut().zip(scratch) {
        *slot = item;
    }
}
