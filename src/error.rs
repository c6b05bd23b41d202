use std::error::Error;
use std::fmt;

/// Errors surfaced by the sorting suite.
///
/// Both variants are raised before the first element is moved, so a failed
/// call leaves the sequence exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The requested `(start, count)` pair does not fit the sequence.
    Range {
        start: usize,
        /// `None` stands for "to the end of the sequence".
        count: Option<usize>,
        len: usize,
    },
    /// An element of the range is outside the total order, e.g. a NaN
    /// encountered by [`sort_partial`](crate::sort_partial).
    NotComparable,
}

pub type SortResult<T> = Result<T, SortError>;

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SortError::Range { start, count, len } => match count {
                Some(count) => write!(
                    f,
                    "range start {start} with count {count} is out of bounds for length {len}"
                ),
                None => write!(f, "range start {start} is out of bounds for length {len}"),
            },
            SortError::NotComparable => {
                write!(f, "an element of the range does not belong to the total order")
            }
        }
    }
}

impl Error for SortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bounds() {
        let err = SortError::Range {
            start: 2,
            count: Some(5),
            len: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("start 2"));
        assert!(msg.contains("count 5"));
        assert!(msg.contains("length 3"));
    }
}
