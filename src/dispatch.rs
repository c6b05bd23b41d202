//! Composite entry points. [`sort`] picks the algorithm from the resolved
//! range length and the sequence's [`Backing`] instead of asking the caller
//! to choose one:
//!
//! | range length | backing      | algorithm |
//! |--------------|--------------|-----------|
//! | `< 16`       | any          | insertion |
//! | `>= 16`      | `Contiguous` | quicksort |
//! | `>= 16`      | `Indexed`    | heapsort  |
//!
//! Insertion doubles as the simple-exchange fallback for sizes and
//! representations where the specialized sorts do not pay; heapsort keeps a
//! bounded worst case on non-contiguous backings where quicksort's locality
//! advantage is moot.

use std::cmp::Ordering;

use crate::divide::quick;
use crate::elementary::insertion;
use crate::error::{SortError, SortResult};
use crate::heap;
use crate::order::SortOrder;
use crate::range::SortRange;
use crate::sequence::{Backing, Sequence};

const INSERTION_CUTOFF: usize = 16;

/// Sorts the range with the algorithm best suited to the sequence's
/// representation, by natural order.
pub fn sort<S>(seq: &mut S, range: SortRange, order: SortOrder) -> SortResult<()>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort_by(seq, range, order, |a, b| a.cmp(b))
}

/// [`sort`] with a caller-supplied comparator.
pub fn sort_by<S, F>(seq: &mut S, range: SortRange, order: SortOrder, mut compare: F) -> SortResult<()>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let span = range.resolve(seq.len())?;
    if span.len() < 2 {
        return Ok(());
    }

    let mut is_less = order.adapt(&mut compare);
    if span.len() < INSERTION_CUTOFF {
        insertion::sort_span(seq, span.start, span.end, &mut is_less);
    } else {
        match seq.backing() {
            Backing::Contiguous => quick::sort_span(seq, span.start, span.end, &mut is_less),
            Backing::Indexed => heap::sort_span(seq, span.start, span.end, &mut is_less),
        }
    }

    Ok(())
}

/// [`sort`] for element types with only a partial natural order, e.g. floats.
///
/// Fails with [`SortError::NotComparable`] before moving anything if any
/// element of the range does not belong to the total order (for floats, a
/// NaN). Elements that pass the check but are mutually incomparable merely
/// sort in an unspecified relative order.
pub fn sort_partial<S>(seq: &mut S, range: SortRange, order: SortOrder) -> SortResult<()>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    let span = range.resolve(seq.len())?;

    for i in span.start..span.end {
        let v = seq.get(i);
        if v.partial_cmp(v).is_none() {
            return Err(SortError::NotComparable);
        }
    }

    sort_by(seq, range, order, |a, b| {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    })
}
