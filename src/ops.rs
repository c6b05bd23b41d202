//! Low-level element operations shared by every algorithm family.
//!
//! All mutation funnels through [`Sequence::swap`], which is what makes the
//! "sorted range is a permutation of the input range" guarantee structural
//! rather than something each algorithm has to re-establish.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::SortResult;
use crate::range::SortRange;
use crate::sequence::Sequence;

/// Exchanges the elements at `i` and `j`; a no-op when `i == j`.
///
/// Panics if either index is out of bounds, like slice indexing.
pub fn swap<S>(seq: &mut S, i: usize, j: usize)
where
    S: Sequence + ?Sized,
{
    if i != j {
        seq.swap(i, j);
    }
}

/// Rotates `seq[start..end]` one position right: the value at `end - 1` wraps
/// around into `start` and everything else moves up by one.
///
/// This is the shift building block of the insertion sorts and the rotation
/// merge; the wrap-around (instead of duplicating the displaced value) is
/// what lets it work without cloning.
pub fn shift_right<S>(seq: &mut S, start: usize, end: usize)
where
    S: Sequence + ?Sized,
{
    if end - start < 2 {
        return;
    }
    for i in (start..end - 1).rev() {
        seq.swap(i, i + 1);
    }
}

/// Mirror of [`shift_right`]: the value at `start` wraps around to `end - 1`
/// and everything else moves down by one.
pub fn shift_left<S>(seq: &mut S, start: usize, end: usize)
where
    S: Sequence + ?Sized,
{
    if end - start < 2 {
        return;
    }
    for i in start..end - 1 {
        seq.swap(i, i + 1);
    }
}

/// Reverses `seq[start..end]` with pairwise swaps.
pub(crate) fn reverse<S>(seq: &mut S, start: usize, end: usize)
where
    S: Sequence + ?Sized,
{
    let mut i = start;
    let mut j = end;
    while j - i > 1 {
        j -= 1;
        seq.swap(i, j);
        i += 1;
    }
}

/// First index in `[start, end)` whose element orders strictly after `key`,
/// or `end` if there is none.
///
/// Requires `[start, end)` to already be sorted under `is_less`. Probing for
/// the position *after* the run of equal elements is what keeps
/// binary-insertion sort stable.
pub(crate) fn upper_bound<S, F>(
    seq: &S,
    start: usize,
    end: usize,
    key: &S::Item,
    is_less: &mut F,
) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut lo = start;
    let mut hi = end;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(key, seq.get(mid)) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Binary search over a range already sorted in the probe's order.
///
/// The inner result follows the `slice::binary_search` convention: `Ok(i)`
/// for a hit (any one of several equal hits), `Err(i)` for the index where
/// `value` could be inserted to keep the range sorted.
pub fn binary_search<S>(
    seq: &S,
    value: &S::Item,
    range: SortRange,
) -> SortResult<Result<usize, usize>>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    binary_search_by(seq, range, |probe| probe.cmp(value))
}

/// [`binary_search`] with a caller-supplied probe, `f(element)` reporting how
/// the element orders against the target.
pub fn binary_search_by<S, F>(
    seq: &S,
    range: SortRange,
    mut f: F,
) -> SortResult<Result<usize, usize>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    let span = range.resolve(seq.len())?;

    let mut lo = span.start;
    let mut hi = span.end;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match f(seq.get(mid)) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Ok(Ok(mid)),
        }
    }

    Ok(Err(lo))
}

/// Uniform random permutation of the range: Fisher-Yates driven by the
/// caller-supplied random source.
pub fn shuffle<S, R>(seq: &mut S, range: SortRange, rng: &mut R) -> SortResult<()>
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    let span = range.resolve(seq.len())?;

    let mut i = span.end;
    while i - span.start > 1 {
        let j = rng.gen_range(span.start..i);
        i -= 1;
        swap(seq, i, j);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_right_wraps_the_last_element_to_the_front() {
        let mut v = vec![1, 2, 3, 4];
        shift_right(&mut v, 0, 4);
        assert_eq!(v, [4, 1, 2, 3]);

        // Sub-range rotation leaves the rest alone.
        let mut v = vec![1, 2, 3, 4, 5];
        shift_right(&mut v, 1, 4);
        assert_eq!(v, [1, 4, 2, 3, 5]);
    }

    #[test]
    fn shift_left_wraps_the_first_element_to_the_back() {
        let mut v = vec![1, 2, 3, 4];
        shift_left(&mut v, 0, 4);
        assert_eq!(v, [2, 3, 4, 1]);
    }

    #[test]
    fn shifts_of_short_ranges_are_noops() {
        let mut v = vec![1, 2, 3];
        shift_right(&mut v, 1, 2);
        shift_left(&mut v, 1, 1);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn reverse_handles_even_and_odd_lengths() {
        let mut v = vec![1, 2, 3, 4];
        reverse(&mut v, 0, 4);
        assert_eq!(v, [4, 3, 2, 1]);

        let mut v = vec![1, 2, 3, 4, 5];
        reverse(&mut v, 1, 4);
        assert_eq!(v, [1, 4, 3, 2, 5]);
    }

    #[test]
    fn upper_bound_lands_after_the_equal_run() {
        let v = vec![1, 3, 3, 3, 7];
        let mut is_less = |a: &i32, b: &i32| a < b;
        assert_eq!(upper_bound(v.as_slice(), 0, 5, &3, &mut is_less), 4);
        assert_eq!(upper_bound(v.as_slice(), 0, 5, &0, &mut is_less), 0);
        assert_eq!(upper_bound(v.as_slice(), 0, 5, &9, &mut is_less), 5);
    }

    #[test]
    fn binary_search_hit_and_insertion_point() {
        let v = vec![10, 20, 30, 40];
        assert_eq!(binary_search(&v, &30, SortRange::all()).unwrap(), Ok(2));
        assert_eq!(binary_search(&v, &25, SortRange::all()).unwrap(), Err(2));
        assert_eq!(binary_search(&v, &5, SortRange::all()).unwrap(), Err(0));
        assert_eq!(binary_search(&v, &50, SortRange::all()).unwrap(), Err(4));
    }

    #[test]
    fn binary_search_respects_the_range() {
        let v = vec![9, 10, 20, 30, 9];
        assert_eq!(
            binary_search(&v, &20, SortRange::new(1, 3)).unwrap(),
            Ok(2)
        );
        assert_eq!(
            binary_search(&v, &15, SortRange::new(1, 3)).unwrap(),
            Err(2)
        );
        assert!(binary_search(&v, &20, SortRange::new(3, 9)).is_err());
    }
}
