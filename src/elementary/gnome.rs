//! Gnome sort: one pointer walking back and forth, swapping adjacent
//! out-of-order pairs. Stable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut i = start;
    while i < end {
        if i == start || !is_less(seq.get(i), seq.get(i - 1)) {
            i += 1;
        } else {
            seq.swap(i, i - 1);
            i -= 1;
        }
    }
}
