//! Bitonic sort for ranges of any length, driven by a comparison direction
//! rather than by rewrapping the comparator.
//!
//! The classical network assumes power-of-two inputs. This is the standard
//! arbitrary-length generalization: the sort phase splits at `n / 2` (first
//! half built against the direction, second half with it), while the merge
//! phase compares across the greatest power of two below `n`. A merge gap of
//! `n / 2` would lose the bitonic-cut property whenever the halves are
//! unequal, so the power-of-two gap is what makes odd and non-power-of-two
//! lengths come out fully sorted. Unstable.

use crate::sequence::Sequence;

pub(crate) fn sort_span<S, F>(seq: &mut S, start: usize, end: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    bitonic_sort(seq, start, end - start, true, is_less);
}

fn bitonic_sort<S, F>(seq: &mut S, lo: usize, n: usize, forward: bool, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if n < 2 {
        return;
    }

    let m = n / 2;
    bitonic_sort(seq, lo, m, !forward, is_less);
    bitonic_sort(seq, lo + m, n - m, forward, is_less);
    bitonic_merge(seq, lo, n, forward, is_less);
}

fn bitonic_merge<S, F>(seq: &mut S, lo: usize, n: usize, forward: bool, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if n < 2 {
        return;
    }

    let m = greatest_power_of_two_below(n);
    for i in lo..lo + (n - m) {
        compare_swap(seq, i, i + m, forward, is_less);
    }
    bitonic_merge(seq, lo, m, forward, is_less);
    bitonic_merge(seq, lo + m, n - m, forward, is_less);
}

fn compare_swap<S, F>(seq: &mut S, i: usize, j: usize, forward: bool, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let out_of_order = if forward {
        is_less(seq.get(j), seq.get(i))
    } else {
        is_less(seq.get(i), seq.get(j))
    };

    if out_of_order {
        seq.swap(i, j);
    }
}

/// Largest power of two strictly less than `n`. Requires `n >= 2`.
fn greatest_power_of_two_below(n: usize) -> usize {
    debug_assert!(n >= 2);
    let mut m = 1;
    while m < n {
        m <<= 1;
    }
    m >> 1
}

#[cfg(test)]
mod tests {
    use super::greatest_power_of_two_below;

    #[test]
    fn merge_gap_is_strictly_below_n() {
        assert_eq!(greatest_power_of_two_below(2), 1);
        assert_eq!(greatest_power_of_two_below(3), 2);
        assert_eq!(greatest_power_of_two_below(4), 2);
        assert_eq!(greatest_power_of_two_below(5), 4);
        assert_eq!(greatest_power_of_two_below(17), 16);
        assert_eq!(greatest_power_of_two_below(1024), 512);
    }
}
