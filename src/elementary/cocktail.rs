//! Cocktail (bidirectional bubble) sort: a forward pass floats the largest
//! element to the top, a backward pass sinks the smallest to the bottom, and
//! both bounds narrow each round. Stable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut lo = start;
    let mut hi = end - 1;

    while lo < hi {
        let mut swapped = false;

        for i in lo..hi {
            if is_less(seq.get(i + 1), seq.get(i)) {
                seq.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        hi -= 1;

        swapped = false;
        let mut i = hi;
        while i > lo {
            if is_less(seq.get(i), seq.get(i - 1)) {
                seq.swap(i - 1, i);
                swapped = true;
            }
            i -= 1;
        }
        if !swapped {
            break;
        }
        lo += 1;
    }
}
