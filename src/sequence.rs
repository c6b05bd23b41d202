use std::collections::VecDeque;

/// How a sequence stores its elements. Drives algorithm selection in the
/// composite [`sort`](crate::sort) entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    /// One flat buffer with O(1) pointer arithmetic, e.g. a slice.
    Contiguous,
    /// Index-addressable but not necessarily flat, e.g. a ring buffer.
    Indexed,
}

/// A mutable, finite, index-addressable collection of elements.
///
/// This is the only surface the algorithms see. Reads go through [`get`],
/// writes go exclusively through [`swap`], so every sort is a permutation of
/// the original elements by construction: nothing is cloned, synthesized or
/// dropped, and no `Clone` bound is required of the element type.
///
/// [`get`]: Sequence::get
/// [`swap`]: Sequence::swap
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    /// Borrows the element at `index`. Panics if `index >= len()`, like
    /// slice indexing.
    fn get(&self, index: usize) -> &Self::Item;

    /// Exchanges the elements at `i` and `j`. Panics on an out-of-bounds
    /// index, like slice indexing.
    fn swap(&mut self, i: usize, j: usize);

    fn backing(&self) -> Backing {
        Backing::Indexed
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }

    fn backing(&self) -> Backing {
        Backing::Contiguous
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    fn backing(&self) -> Backing {
        Backing::Contiguous
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    fn backing(&self) -> Backing {
        Backing::Contiguous
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backings_report_their_representation() {
        let v = vec![1, 2, 3];
        assert_eq!(Sequence::backing(&v), Backing::Contiguous);
        assert_eq!(Sequence::backing(v.as_slice()), Backing::Contiguous);

        let d: VecDeque<i32> = VecDeque::from(v);
        assert_eq!(Sequence::backing(&d), Backing::Indexed);
    }

    #[test]
    fn ring_buffer_swaps_across_the_wrap_point() {
        let mut d: VecDeque<i32> = VecDeque::with_capacity(4);
        d.push_back(2);
        d.push_back(3);
        d.push_front(1);

        Sequence::swap(&mut d, 0, 2);
        assert_eq!(d, [3, 2, 1]);
    }
}
