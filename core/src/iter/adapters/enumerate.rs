use crate::iter::{IndexedItem, Iter};

/// Pairs each upstream item with its position.
#[derive(Debug)]
pub struct Enumerator<'a, I> {
    upstream: &'a mut I,
    count: usize,
}

impl<'a, I: Iter> Enumerator<'a, I> {
    pub(crate) fn new(upstream: &'a mut I) -> Self {
        Self { upstream, count: 0 }
    }

    /// Number of items yielded so far; also the index the next one gets.
    pub fn yielded(&self) -> usize {
        self.count
    }
}

impl<I: Iter> Iter for Enumerator<'_, I> {
    type Item = IndexedItem<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.upstream.next()?;
        let idx = self.count;
        self.count += 1;
        Some(IndexedItem { idx, val })
    }
}
