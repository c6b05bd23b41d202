//! An in-place sorting algorithm suite over mutable indexed sequences.
//!
//! Fifteen interchangeable strategies share one contract: each
//! `sort_<name>` / `sort_<name>_by` pair takes a [`Sequence`], a [`SortRange`]
//! selecting the `[start, start + count)` window to sort, a [`SortOrder`],
//! and (for the `_by` flavor) a three-way comparator. The call mutates the
//! window in place and leaves everything outside it untouched; the sorted
//! window is always a permutation of its input because all mutation funnels
//! through [`Sequence::swap`].
//!
//! ```ignore
//! let mut v = vec![5, 3, 4, 1, 2];
//! sortkit::sort_insertion(&mut v, SortRange::all(), SortOrder::Ascending)?;
//! sortkit::sort_quick(&mut v, SortRange::all(), SortOrder::Descending)?;
//! sortkit::sort_merge(&mut v, SortRange::new(1, 3), SortOrder::Ascending)?;
//! ```
//!
//! [`sort`] is the composite entry point that picks an algorithm from the
//! range size and the sequence representation; [`swap`], [`shuffle`] and
//! [`binary_search`] are the standalone utilities the families are built on.
//!
//! Descending output is comparator composition (the adapted comparator sees
//! swapped arguments), never per-algorithm branching. Comparators must be a
//! strict weak ordering; violating that yields an unspecified permutation of
//! the input, never a crash or an out-of-bounds access.

mod dispatch;
mod divide;
mod elementary;
mod error;
mod heap;
mod order;
mod range;
mod sequence;

pub mod ops;
pub mod patterns;

pub use dispatch::{sort, sort_by, sort_partial};
pub use error::{SortError, SortResult};
pub use ops::{binary_search, binary_search_by, shuffle, swap};
pub use order::SortOrder;
pub use range::SortRange;
pub use sequence::{Backing, Sequence};

use std::cmp::Ordering;

/// Stamps out the `sort_<name>` / `sort_<name>_by` pair for one algorithm:
/// natural order over `Ord` items, and a caller-supplied comparator flavor.
/// Both normalize the range first (fail-fast, nothing moves on error) and
/// return immediately on windows shorter than two elements.
macro_rules! sort_api {
    ($(#[$attr:meta])* $name:ident => $sort_span:path) => {
        paste::paste! {
            $(#[$attr])*
            pub fn [<sort_ $name>]<S>(
                seq: &mut S,
                range: SortRange,
                order: SortOrder,
            ) -> SortResult<()>
            where
                S: Sequence + ?Sized,
                S::Item: Ord,
            {
                [<sort_ $name _by>](seq, range, order, |a, b| a.cmp(b))
            }

            #[doc = concat!("[`sort_", stringify!($name), "`] with a caller-supplied comparator.")]
            pub fn [<sort_ $name _by>]<S, F>(
                seq: &mut S,
                range: SortRange,
                order: SortOrder,
                mut compare: F,
            ) -> SortResult<()>
            where
                S: Sequence + ?Sized,
                F: FnMut(&S::Item, &S::Item) -> Ordering,
            {
                let span = range.resolve(seq.len())?;
                if span.len() < 2 {
                    return Ok(());
                }

                let mut is_less = order.adapt(&mut compare);
                $sort_span(seq, span.start, span.end, &mut is_less);

                Ok(())
            }
        }
    };
}

sort_api! {
    /// Bubble sort. Stable, O(1) extra memory. Full adjacent compare-swap
    /// passes with a shrinking upper bound and no early exit.
    bubble => elementary::bubble::sort_span
}

sort_api! {
    /// Selection sort. Unstable, O(1) extra memory. Swaps the maximum of the
    /// unsorted prefix onto the sorted-suffix boundary each round.
    selection => elementary::selection::sort_span
}

sort_api! {
    /// Insertion sort. Stable, O(1) extra memory. Classic shift-and-insert.
    insertion => elementary::insertion::sort_span
}

sort_api! {
    /// Shellsort. Unstable, O(1) extra memory. Gap sequence
    /// `len/2, len/4, ..., 1`.
    shell => elementary::shell::sort_span
}

sort_api! {
    /// Binary-insertion sort. Stable, O(1) extra memory. Bisects the sorted
    /// prefix for the insertion point, then shifts.
    binary_insertion => elementary::binary_insertion::sort_span
}

sort_api! {
    /// Gnome sort. Stable, O(1) extra memory. A single pointer walking back
    /// and forth.
    gnome => elementary::gnome::sort_span
}

sort_api! {
    /// Comb sort. Unstable, O(1) extra memory. Gap shrink factor 10/13 with
    /// a floor of 1.
    comb => elementary::comb::sort_span
}

sort_api! {
    /// Cocktail (bidirectional bubble) sort. Stable, O(1) extra memory.
    /// Alternating forward/backward passes with narrowing bounds.
    cocktail => elementary::cocktail::sort_span
}

sort_api! {
    /// Brick (odd-even) sort. Stable, O(1) extra memory. Alternates odd- and
    /// even-offset adjacent passes until a clean double pass.
    brick => elementary::brick::sort_span
}

sort_api! {
    /// Pancake sort. Unstable, O(1) extra memory. Repeatedly flips the
    /// maximum of the unsorted prefix into place.
    pancake => elementary::pancake::sort_span
}

sort_api! {
    /// Merge sort. Stable, O(1) extra memory. Bottom-up with an in-place
    /// rotation merge; the allocation-free merge is a deliberate space/time
    /// tradeoff of this variant.
    merge => divide::merge::sort_span
}

sort_api! {
    /// Quicksort. Unstable, O(log n) auxiliary stack. Iterative with an
    /// explicit bounds stack and Lomuto partition (last element as pivot).
    quick => divide::quick::sort_span
}

sort_api! {
    /// Bitonic sort. Unstable, O(1) extra memory beyond recursion. Handles
    /// arbitrary (not just power-of-two) range lengths.
    bitonic => divide::bitonic::sort_span
}

sort_api! {
    /// Block sort. Stable, O(1) extra memory. Insertion-sorts 32-element
    /// blocks, then merges them pairwise with the in-place rotation merge.
    block => divide::block::sort_span
}

sort_api! {
    /// Heapsort. Unstable, O(1) extra memory. Implicit max-heap built by
    /// sift-up insertion, then repeated extraction with sift-down.
    heap => heap::sort_span
}
