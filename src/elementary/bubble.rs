//! Textbook bubble sort: a fixed number of passes of adjacent compare-swaps.
//!
//! Deliberately carries no early-exit-on-clean-pass optimization; the pass
//! count only shrinks by the element bubbled to the top each round. Stable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = end - start;
    for pass in 0..len - 1 {
        for i in start..end - 1 - pass {
            if is_less(seq.get(i + 1), seq.get(i)) {
                seq.swap(i, i + 1);
            }
        }
    }
}
