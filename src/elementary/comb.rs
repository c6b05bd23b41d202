//! Comb sort: bubble passes over a shrinking gap, shrink factor 10/13 with a
//! floor of 1, running until a gap-1 pass swaps nothing. Unstable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = end - start;
    let mut gap = len;
    let mut swapped = true;

    while gap > 1 || swapped {
        gap = (gap * 10 / 13).max(1);
        swapped = false;

        for i in start..end - gap {
            if is_less(seq.get(i + gap), seq.get(i)) {
                seq.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}
