//! Brick (odd-even) sort: alternate compare-swap passes over odd-offset and
//! even-offset adjacent pairs until a full double pass changes nothing.
//!
//! Pair parity is taken relative to the range start, so a sub-range sort
//! behaves the same wherever the range sits in the sequence. Stable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        let mut swapped = false;

        let mut i = start + 1;
        while i + 1 < end {
            if is_less(seq.get(i + 1), seq.get(i)) {
                seq.swap(i, i + 1);
                swapped = true;
            }
            i += 2;
        }

        let mut i = start;
        while i + 1 < end {
            if is_less(seq.get(i + 1), seq.get(i)) {
                seq.swap(i, i + 1);
                swapped = true;
            }
            i += 2;
        }

        if !swapped {
            break;
        }
    }
}
