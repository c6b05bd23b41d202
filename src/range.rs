use crate::error::{SortError, SortResult};

/// The `[start, start + count)` window of a sequence a sort call operates on.
///
/// `count: None` means "from `start` to the end of the sequence", the
/// equivalent of passing no count at all. An out-of-bounds window is rejected
/// by [`resolve`](Self::resolve), never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRange {
    start: usize,
    count: Option<usize>,
}

impl SortRange {
    /// The whole sequence.
    pub fn all() -> Self {
        Self {
            start: 0,
            count: None,
        }
    }

    /// From `start` to the end of the sequence.
    pub fn starting_at(start: usize) -> Self {
        Self { start, count: None }
    }

    /// Exactly `count` elements beginning at `start`.
    pub fn new(start: usize, count: usize) -> Self {
        Self {
            start,
            count: Some(count),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// Validates the window against a sequence of length `len` and returns the
    /// normalized half-open span.
    pub(crate) fn resolve(self, len: usize) -> SortResult<Span> {
        let out_of_bounds = SortError::Range {
            start: self.start,
            count: self.count,
            len,
        };

        if self.start > len {
            return Err(out_of_bounds);
        }

        let count = match self.count {
            Some(count) => {
                if count > len - self.start {
                    return Err(out_of_bounds);
                }
                count
            }
            None => len - self.start,
        };

        Ok(Span {
            start: self.start,
            end: self.start + count,
        })
    }
}

impl Default for SortRange {
    fn default() -> Self {
        Self::all()
    }
}

/// A normalized, in-bounds `[start, end)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(self) -> usize {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_count_runs_to_the_end() {
        let span = SortRange::starting_at(2).resolve(5).unwrap();
        assert_eq!((span.start, span.end), (2, 5));
    }

    #[test]
    fn explicit_count_is_kept() {
        let span = SortRange::new(1, 3).resolve(5).unwrap();
        assert_eq!((span.start, span.end), (1, 4));
    }

    #[test]
    fn empty_windows_are_valid() {
        assert_eq!(SortRange::new(5, 0).resolve(5).unwrap().len(), 0);
        assert_eq!(SortRange::starting_at(5).resolve(5).unwrap().len(), 0);
        assert_eq!(SortRange::all().resolve(0).unwrap().len(), 0);
    }

    #[test]
    fn out_of_bounds_is_rejected_not_clamped() {
        assert!(SortRange::starting_at(6).resolve(5).is_err());
        assert!(SortRange::new(2, 5).resolve(3).is_err());
        assert!(SortRange::new(0, 6).resolve(5).is_err());
    }
}
