use crate::iter::Iter;

/// Yields the first upstream item, then every `step`-th one.
#[derive(Debug)]
pub struct StepBy<'a, I> {
    upstream: &'a mut I,
    step: usize,
    first: bool,
}

impl<'a, I: Iter> StepBy<'a, I> {
    pub(crate) fn new(upstream: &'a mut I, step: usize) -> Self {
        assert!(step != 0, "step_by: step must be non-zero");
        Self {
            upstream,
            step,
            first: true,
        }
    }
}

impl<I: Iter> Iter for StepBy<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.first {
            self.first = false;
            return self.upstream.next();
        }
        // Skipped slots count even when the upstream is already exhausted.
        for _ in 1..self.step {
            self.upstream.next();
        }
        self.upstream.next()
    }
}
