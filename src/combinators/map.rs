use crate::enumeration::{Count, Cursor, Enum};

impl<C: Cursor> Enum<C> {
    /// Lazily applies `f` to each element. `f` is called exactly once per element, at the moment
    /// that element is pulled, and never for elements that are skipped by fast-forwarding.
    pub fn map<B, F: FnMut(C::Item) -> B>(self, f: F) -> Enum<Map<C, F>> {
        Enum::new(Map {
            inner: self,
            f,
        })
    }

    /// Lazily applies `f` to each element, keeping only the [`Some`] results.
    pub fn filter_map<B, F: FnMut(C::Item) -> Option<B>>(self, f: F) -> Enum<FilterMap<C, F>> {
        Enum::new(FilterMap {
            inner: self,
            f,
        })
    }

    /// Pairs each element with its index, counted from the current position.
    pub fn indexed(self) -> Enum<Indexed<C>> {
        Enum::new(Indexed {
            inner: self,
            index: 0,
        })
    }
}

impl<'a, T: Clone + 'a, C: Cursor<Item = &'a T>> Enum<C> {
    /// Turns an Enum of references into an Enum of owned clones, usually to build an owned
    /// container out of a borrowed one.
    pub fn cloned(self) -> Enum<Cloned<C>> {
        Enum::new(Cloned(self))
    }
}

#[derive(Debug, Clone)]
pub struct Map<C: Cursor, F> {
    inner: Enum<C>,
    f: F,
}

impl<B, C: Cursor, F: FnMut(C::Item) -> B> Cursor for Map<C, F> {
    type Item = B;

    fn pull(&mut self) -> Option<B> {
        self.inner.next().map(&mut self.f)
    }

    fn count(&self) -> Count {
        self.inner.count()
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        self.inner.fast_forward(n)
    }
}

#[derive(Debug, Clone)]
pub struct FilterMap<C: Cursor, F> {
    inner: Enum<C>,
    f: F,
}

impl<B, C: Cursor, F: FnMut(C::Item) -> Option<B>> Cursor for FilterMap<C, F> {
    type Item = B;

    fn pull(&mut self) -> Option<B> {
        while let Some(item) = self.inner.next() {
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
        None
    }

    fn count(&self) -> Count {
        // The only thing we know is that nothing will come out of nothing.
        match self.inner.count() {
            Count::Known(0) => Count::Known(0),
            _ => Count::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Indexed<C: Cursor> {
    inner: Enum<C>,
    index: usize,
}

impl<C: Cursor> Cursor for Indexed<C> {
    type Item = (usize, C::Item);

    fn pull(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn count(&self) -> Count {
        self.inner.count()
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        let skipped = self.inner.fast_forward(n);
        self.index += skipped;
        skipped
    }
}

#[derive(Debug, Clone)]
pub struct Cloned<C: Cursor>(Enum<C>);

impl<'a, T: Clone + 'a, C: Cursor<Item = &'a T>> Cursor for Cloned<C> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.0.next().cloned()
    }

    fn count(&self) -> Count {
        self.0.count()
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        self.0.fast_forward(n)
    }
}
