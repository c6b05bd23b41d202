//! Block sort: a Tim-style hybrid that insertion-sorts fixed blocks, then
//! merges them pairwise with the same in-place rotation merge that merge
//! sort uses. Stable, zero extra allocation.

use crate::divide::merge;
use crate::elementary::insertion;
use crate::sequence::Sequence;

const BLOCK: usize = 32;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut lo = start;
    while lo < end {
        let hi = (lo + BLOCK).min(end);
        insertion::sort_span(seq, lo, hi, is_less);
        lo = hi;
    }

    let len = end - start;
    let mut width = BLOCK;
    while width < len {
        let mut lo = start;
        while lo + width < end {
            let mid = lo + width;
            let hi = (mid + width).min(end);
            merge::merge_rotate(seq, lo, mid, hi, is_less);
            lo = hi;
        }
        width *= 2;
    }
}
