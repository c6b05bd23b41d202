use std::cmp::Ordering;

/// Output direction of a sort call.
///
/// Direction is applied by comparator composition: `Descending` evaluates the
/// caller's comparator with swapped arguments. Algorithm bodies never branch
/// on direction, and ties are left wherever the algorithm's own stability
/// guarantee puts them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite direction. Reversal is its own inverse, so reversing a
    /// reversed order restores the original with no wrapper stacking.
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Adapts a three-way comparator into the `is_less` predicate every
    /// algorithm consumes internally.
    pub(crate) fn adapt<'a, T, F>(self, compare: &'a mut F) -> impl FnMut(&T, &T) -> bool + 'a
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        move |a, b| match self {
            SortOrder::Ascending => compare(a, b) == Ordering::Less,
            SortOrder::Descending => compare(b, a) == Ordering::Less,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_an_involution() {
        assert_eq!(SortOrder::Ascending.reversed(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.reversed().reversed(), SortOrder::Ascending);
    }

    #[test]
    fn descending_swaps_arguments() {
        let mut compare = i32::cmp as fn(&i32, &i32) -> Ordering;

        let mut asc = SortOrder::Ascending.adapt(&mut compare);
        assert!(asc(&1, &2));
        assert!(!asc(&2, &1));
        drop(asc);

        let mut desc = SortOrder::Descending.adapt(&mut compare);
        assert!(desc(&2, &1));
        assert!(!desc(&1, &2));
        // Ties are not less in either direction.
        assert!(!desc(&1, &1));
    }
}
