//! Bottom-up merge sort with an in-place rotation merge.
//!
//! The merge step allocates nothing: a right-run element that belongs before
//! the left-run head is rotated down with adjacent swaps. That trades the
//! merge step's move count (toward O(n^2) in the worst case) for zero extra
//! memory, and it is a deliberate property of this variant, not an
//! implementation shortcut to be "fixed" with a buffer. Stable.

use crate::ops;
use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = end - start;
    let mut width = 1;
    while width < len {
        let mut lo = start;
        while lo + width < end {
            let mid = lo + width;
            let hi = (mid + width).min(end);
            merge_rotate(seq, lo, mid, hi, is_less);
            lo = hi;
        }
        width *= 2;
    }
}

/// Merges the adjacent sorted runs `[lo, mid)` and `[mid, hi)` in place.
///
/// Invariant: `[lo, i)` holds merged output, `[i, j)` the rest of the left
/// run, `[j, hi)` the rest of the right run. Only a strictly smaller right
/// element rotates down, so equal elements keep the left-run-first order.
pub(crate) fn merge_rotate<S, F>(seq: &mut S, lo: usize, mid: usize, hi: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut i = lo;
    let mut j = mid;
    while i < j && j < hi {
        if is_less(seq.get(j), seq.get(i)) {
            ops::shift_right(seq, i, j + 1);
            j += 1;
        }
        i += 1;
    }
}
