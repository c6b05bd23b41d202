//! Shellsort with the original Shell gap sequence `len/2, len/4, ..., 1`.
//! Gapped insertion passes; the long-distance moves make it unstable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = end - start;
    let mut gap = len / 2;
    while gap > 0 {
        for i in start + gap..end {
            let mut j = i;
            while j >= start + gap && is_less(seq.get(j), seq.get(j - gap)) {
                seq.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
}
