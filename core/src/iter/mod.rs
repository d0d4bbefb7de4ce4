//! The lazy sequence algebra.
//!
//! [`Iter`] has one required method, `next`. Everything else is derived from
//! it: terminal consumers (`all`, `any`, `find`, `find_pos`, `count`,
//! `collect`, `collect_in`) and adapters (`enumerate`, `cloned`, `filter`,
//! `step_by`).
//!
//! Adapters borrow their upstream mutably instead of owning it. While an
//! adapter is alive the upstream cannot be touched, and once the adapter
//! is dropped the upstream resumes exactly where the adapter left it.
//!
//! ```
//! use conformal_core::{IntoIterable, Iter};
//!
//! let numbers = [1, 2, 3, 4, 5];
//! let mut it = IntoIterable::iter(&numbers[..]);
//!
//! let big = |n: &&i32| **n > 3;
//! let mut filtered = it.filter(&big);
//! assert_eq!(filtered.collect().unwrap(), [&4, &5]);
//! ```

mod adapters;
mod into_iterable;

pub use adapters::{Cloned, Enumerator, Filter, StepBy};
pub use into_iterable::{IntoIterable, SliceIter};

use allocator_api2::alloc::Allocator;

use crate::Vec;
use crate::error::CollectError;

/// A value that can be duplicated into an independent copy.
///
/// `Clone` already has exactly this shape: a required `clone(&self)` and a
/// `clone_from(&mut self, &Self)` that defaults to `*self = source.clone()`
/// and may be overridden to reuse resources.
pub trait Cloneable: Clone {}

impl<T: Clone> Cloneable for T {}

/// Item produced by [`Iter::enumerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedItem<T> {
    /// Zero-based position of `val` in the sequence seen by the enumerator.
    pub idx: usize,
    pub val: T,
}

/// A lazy sequence.
///
/// Once `next` returns `None` the iterator is exhausted; every built-in
/// iterator keeps returning `None` after that. Consumers that scan for a
/// match (`all`, `any`, `find`, `find_pos`, `count`, `collect`) do not
/// terminate on an infinite upstream unless they find what they look for.
pub trait Iter {
    type Item;

    fn next(&mut self) -> Option<Self::Item>;

    /// `true` if `predicate` holds for every item; `true` when empty.
    ///
    /// Stops at the first item for which it does not hold.
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if !predicate(item) {
                return false;
            }
        }
        true
    }

    /// `true` if `predicate` holds for some item; `false` when empty.
    ///
    /// Stops at the first item for which it holds.
    fn any<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// First item matching `predicate`.
    ///
    /// Consumes items up to and including the match, so calling `find`
    /// again continues after it.
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Zero-based position of the first item matching `predicate`, counted
    /// from the iterator's current position.
    fn find_pos<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut pos = 0;
        while let Some(item) = self.next() {
            if predicate(&item) {
                return Some(pos);
            }
            pos += 1;
        }
        None
    }

    /// Number of remaining items. Leaves the iterator exhausted.
    fn count(&mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }

    /// Drains the iterator into a vector, in yield order.
    ///
    /// Growth is fallible: when the vector cannot grow the partial result is
    /// dropped along with the item that did not fit.
    fn collect(&mut self) -> Result<Vec<Self::Item>, CollectError>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while let Some(item) = self.next() {
            if out.try_reserve(1).is_err() {
                return Err(CollectError::OutOfMemory {
                    collected: out.len(),
                });
            }
            out.push(item);
        }
        Ok(out)
    }

    /// Like [`collect`](Iter::collect), into a vector backed by `alloc`.
    ///
    /// ```
    /// use bumpalo::Bump;
    /// use conformal_core::{IntoIterable, Iter};
    ///
    /// let arena = Bump::new();
    /// let words = ["a", "b"];
    /// let collected = IntoIterable::iter(&words[..]).collect_in(&arena).unwrap();
    /// assert_eq!(collected.len(), 2);
    /// ```
    fn collect_in<A>(
        &mut self,
        alloc: A,
    ) -> Result<allocator_api2::vec::Vec<Self::Item, A>, CollectError>
    where
        Self: Sized,
        A: Allocator,
    {
        let mut out = allocator_api2::vec::Vec::new_in(alloc);
        while let Some(item) = self.next() {
            if out.try_reserve(1).is_err() {
                return Err(CollectError::OutOfMemory {
                    collected: out.len(),
                });
            }
            out.push(item);
        }
        Ok(out)
    }

    /// Pairs each item with its zero-based index.
    fn enumerate(&mut self) -> Enumerator<'_, Self>
    where
        Self: Sized,
    {
        Enumerator::new(self)
    }

    /// Clones each referenced item.
    ///
    /// Only available when items are `&T` with `T: Cloneable`; anything
    /// else is rejected at compile time.
    fn cloned<'b, T>(&mut self) -> Cloned<'_, Self>
    where
        Self: Sized + Iter<Item = &'b T>,
        T: Cloneable + 'b,
    {
        Cloned::new(self)
    }

    /// Keeps the items matching `predicate`, in order.
    ///
    /// The predicate is borrowed, not moved, so it can be reused afterwards.
    fn filter<'a, P>(&'a mut self, predicate: &'a P) -> Filter<'a, Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields the first item, then every `step`-th item after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    fn step_by(&mut self, step: usize) -> StepBy<'_, Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }
}
