//! Iterative quicksort: explicit bounds stack, Lomuto partition with the last
//! element as pivot. Unstable.

use crate::ops;
use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = end - start;

    // Balanced partitioning needs about log2(len) frames per side. Seed the
    // stack with that and let Vec growth absorb adversarial pivot runs.
    let depth_guess = 2 * (usize::BITS - len.leading_zeros()) as usize;
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(depth_guess);
    stack.push((start, end));

    while let Some((lo, hi)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }

        let p = lomuto_partition(seq, lo, hi, is_less);
        stack.push((lo, p));
        stack.push((p + 1, hi));
    }
}

/// Partitions `[lo, hi)` around the element at `hi - 1` and returns the
/// pivot's final index. Everything left of it is strictly less than the
/// pivot under `is_less`.
fn lomuto_partition<S, F>(seq: &mut S, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let pivot = hi - 1;
    let mut store = lo;
    for i in lo..pivot {
        if is_less(seq.get(i), seq.get(pivot)) {
            ops::swap(seq, store, i);
            store += 1;
        }
    }
    ops::swap(seq, store, pivot);

    store
}
