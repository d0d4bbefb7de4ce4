use crate::iter::Iter;

/// Yields the upstream items matching a borrowed predicate.
pub struct Filter<'a, I, P> {
    upstream: &'a mut I,
    predicate: &'a P,
}

impl<'a, I, P> Filter<'a, I, P>
where
    I: Iter,
    P: Fn(&I::Item) -> bool,
{
    pub(crate) fn new(upstream: &'a mut I, predicate: &'a P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<I, P> Iter for Filter<'_, I, P>
where
    I: Iter,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.upstream.find(self.predicate)
    }
}
