//! Classic insertion sort: scan left for the insertion position, then rotate
//! the element into place. Stable; the scan stops at the first element that
//! is not strictly greater.

use crate::ops;
use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for i in start + 1..end {
        let mut pos = i;
        while pos > start && is_less(seq.get(i), seq.get(pos - 1)) {
            pos -= 1;
        }
        ops::shift_right(seq, pos, i + 1);
    }
}
