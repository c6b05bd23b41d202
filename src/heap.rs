//! Heapsort over an implicit binary max-heap living in the range itself.
//!
//! The heap is built by sifting each element up as it is "inserted" (rather
//! than Floyd's top-down build); extraction then swaps the root onto the
//! shrinking tail and sifts the new root down. O(1) extra memory, unstable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for i in start + 1..end {
        sift_up(seq, start, i, is_less);
    }

    for heap_end in (start + 1..end).rev() {
        seq.swap(start, heap_end);
        sift_down(seq, start, heap_end, is_less);
    }
}

fn sift_up<S, F>(seq: &mut S, start: usize, mut i: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while i > start {
        let parent = start + (i - start - 1) / 2;
        if !is_less(seq.get(parent), seq.get(i)) {
            break;
        }
        seq.swap(parent, i);
        i = parent;
    }
}

fn sift_down<S, F>(seq: &mut S, start: usize, heap_end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut i = start;
    loop {
        let left = start + 2 * (i - start) + 1;
        if left >= heap_end {
            break;
        }

        let right = left + 1;
        let mut child = left;
        if right < heap_end && is_less(seq.get(left), seq.get(right)) {
            child = right;
        }

        if !is_less(seq.get(i), seq.get(child)) {
            break;
        }
        seq.swap(i, child);
        i = child;
    }
}
