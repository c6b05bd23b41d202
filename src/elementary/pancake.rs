//! Pancake sort: find the largest unsorted element, flip it to the front,
//! then flip it onto the sorted-suffix boundary. Mutates only through
//! sub-range reversals ("flips"). Unstable.

use crate::ops;
use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for top in (start + 1..end).rev() {
        let mut max_idx = start;
        for i in start + 1..=top {
            if is_less(seq.get(max_idx), seq.get(i)) {
                max_idx = i;
            }
        }

        if max_idx == top {
            continue;
        }
        if max_idx > start {
            ops::reverse(seq, start, max_idx + 1);
        }
        ops::reverse(seq, start, top + 1);
    }
}
