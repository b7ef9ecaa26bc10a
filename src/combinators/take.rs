use crate::enumeration::{Count, Cursor, Enum};

impl<C: Cursor> Enum<C> {
    /// Produces at most `n` elements of `self`.
    pub fn take(self, n: usize) -> Enum<Take<C>> {
        Enum::new(Take {
            inner: self,
            left: n,
        })
    }

    /// Skips `n` elements of `self`, lazily. The skipping happens on the first pull, using
    /// [`fast_forward`](Enum::fast_forward).
    pub fn skip(self, n: usize) -> Enum<Skip<C>> {
        Enum::new(Skip {
            inner: self,
            pending: n,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Take<C: Cursor> {
    inner: Enum<C>,
    left: usize,
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        self.inner.next()
    }

    fn count(&self) -> Count {
        Count::Known(self.left).min(self.inner.count())
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        let skipped = self.inner.fast_forward(n.min(self.left));
        self.left -= skipped;
        skipped
    }
}

#[derive(Debug, Clone)]
pub struct Skip<C: Cursor> {
    inner: Enum<C>,
    pending: usize,
}

impl<C: Cursor> Skip<C> {
    fn skip_pending(&mut self) {
        if self.pending > 0 {
            self.inner.fast_forward(self.pending);
            self.pending = 0;
        }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        self.skip_pending();
        self.inner.next()
    }

    fn count(&self) -> Count {
        self.inner.count().map(|n| n.saturating_sub(self.pending))
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        self.skip_pending();
        self.inner.fast_forward(n)
    }
}
