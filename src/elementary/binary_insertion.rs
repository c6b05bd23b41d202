//! Insertion sort with a bisection probe into the sorted prefix.
//!
//! The probe targets the position after the run of equal elements
//! (`ops::upper_bound`), which is exactly what keeps the sort stable.

use crate::ops;
use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for i in start + 1..end {
        let pos = ops::upper_bound(&*seq, start, i, seq.get(i), is_less);
        ops::shift_right(seq, pos, i + 1);
    }
}
