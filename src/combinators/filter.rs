use crate::enumeration::{Count, Cursor, Enum};

impl<C: Cursor> Enum<C> {
    /// Lazily keeps only the elements satisfying `predicate`. A single pull of the result may pull
    /// several times from `self`, but `predicate` is evaluated exactly once per element of `self`.
    pub fn filter<P: FnMut(&C::Item) -> bool>(self, predicate: P) -> Enum<Filter<C, P>> {
        Enum::new(Filter {
            inner: self,
            predicate,
        })
    }

    /// Produces elements while they satisfy `predicate`. The first element which doesn't is
    /// consumed and dropped, ending the Enum.
    pub fn take_while<P: FnMut(&C::Item) -> bool>(self, predicate: P) -> Enum<TakeWhile<C, P>> {
        Enum::new(TakeWhile {
            inner: self,
            predicate,
        })
    }

    /// Skips elements while they satisfy `predicate`, then produces everything after that.
    pub fn skip_while<P: FnMut(&C::Item) -> bool>(self, predicate: P) -> Enum<SkipWhile<C, P>> {
        Enum::new(SkipWhile {
            inner: self,
            predicate: Some(predicate),
        })
    }
}

const fn unknown_unless_empty(count: Count) -> Count {
    match count {
        Count::Known(0) => Count::Known(0),
        _ => Count::Unknown,
    }
}

#[derive(Debug, Clone)]
pub struct Filter<C: Cursor, P> {
    inner: Enum<C>,
    predicate: P,
}

impl<C: Cursor, P: FnMut(&C::Item) -> bool> Cursor for Filter<C, P> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        self.inner.find(&mut self.predicate)
    }

    fn count(&self) -> Count {
        unknown_unless_empty(self.inner.count())
    }
}

#[derive(Debug, Clone)]
pub struct TakeWhile<C: Cursor, P> {
    inner: Enum<C>,
    predicate: P,
}

impl<C: Cursor, P: FnMut(&C::Item) -> bool> Cursor for TakeWhile<C, P> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        // Returning None exhausts the wrapping Enum, so the predicate isn't consulted again.
        self.inner.next().filter(&mut self.predicate)
    }

    fn count(&self) -> Count {
        unknown_unless_empty(self.inner.count())
    }
}

#[derive(Debug, Clone)]
pub struct SkipWhile<C: Cursor, P> {
    inner: Enum<C>,
    // Dropped once the first element fails it.
    predicate: Option<P>,
}

impl<C: Cursor, P: FnMut(&C::Item) -> bool> Cursor for SkipWhile<C, P> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        match self.predicate.take() {
            Some(mut predicate) => self.inner.find(|item| !predicate(item)),
            None => self.inner.next(),
        }
    }

    fn count(&self) -> Count {
        match self.predicate {
            Some(_) => unknown_unless_empty(self.inner.count()),
            None => self.inner.count(),
        }
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        match self.predicate {
            Some(_) => {
                let mut skipped = 0;
                while skipped < n && self.pull().is_some() {
                    skipped += 1;
                }
                skipped
            },
            None => self.inner.fast_forward(n),
        }
    }
}
