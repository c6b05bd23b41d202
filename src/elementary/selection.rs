//! Selection sort: grow a sorted suffix by swapping the largest remaining
//! element onto its boundary. The long-distance swap makes it unstable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for boundary in (start + 1..end).rev() {
        let mut max_idx = start;
        for i in start + 1..=boundary {
            if is_less(seq.get(max_idx), seq.get(i)) {
                max_idx = i;
            }
        }

        if max_idx != boundary {
            seq.swap(max_idx, boundary);
        }
    }
}
