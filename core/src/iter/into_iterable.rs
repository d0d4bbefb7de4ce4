use crate::Vec;

use super::Iter;

/// A container that hands out fresh iterators over itself.
pub trait IntoIterable {
    type Iter<'a>: Iter
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    /// Restarts `existing` from the beginning by overwriting it in place.
    ///
    /// Lets a caller hold on to one iterator, consume it with several
    /// terminal operations in turn, and rewind it between them without
    /// asking for a new binding.
    fn reset_iter<'a>(&'a self, existing: &mut Self::Iter<'a>) {
        *existing = self.iter();
    }
}

/// Iterator over a borrowed slice, yielding `&T`.
#[derive(Debug, Clone)]
pub struct SliceIter<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceIter<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Items not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }
}

impl<'a, T> Iter for SliceIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.slice.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }
}

impl<T> IntoIterable for [T] {
    type Iter<'a>
        = SliceIter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> SliceIter<'_, T> {
        SliceIter::new(self)
    }
}

impl<T, const N: usize> IntoIterable for [T; N] {
    type Iter<'a>
        = SliceIter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> SliceIter<'_, T> {
        SliceIter::new(self)
    }
}

impl<T> IntoIterable for Vec<T> {
    type Iter<'a>
        = SliceIter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> SliceIter<'_, T> {
        SliceIter::new(self)
    }
}
