use crate::enumeration::{Count, Cursor, Enum, IntoEnum};

impl<C: Cursor> Enum<C> {
    /// Produces all remaining elements of `self`, then all of `other`. Neither is pulled before it
    /// has to be.
    pub fn concat<D: Cursor<Item = C::Item>>(self, other: Enum<D>) -> Enum<Concat<C, D>> {
        Enum::new(Concat {
            first: self,
            second: other,
        })
    }

    /// Concatenates an Enum of Enums (or of anything that turns into one), lazily.
    pub fn flatten(self) -> Enum<Flatten<C>>
    where
        C::Item: IntoEnum,
    {
        Enum::new(Flatten {
            outer: self,
            current: None,
        })
    }

    /// Repeats the remaining elements of `self` forever. An empty Enum stays empty.
    pub fn cycle(self) -> Enum<Cycle<C>>
    where
        C: Clone,
    {
        Enum::new(Cycle {
            current: self.clone(),
            original: self,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Concat<C: Cursor, D: Cursor> {
    first: Enum<C>,
    second: Enum<D>,
}

impl<C: Cursor, D: Cursor<Item = C::Item>> Cursor for Concat<C, D> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        // first is an Enum, so it keeps returning None once it runs out.
        self.first.next().or_else(|| self.second.next())
    }

    fn count(&self) -> Count {
        self.first.count() + self.second.count()
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        let skipped = self.first.fast_forward(n);
        skipped + self.second.fast_forward(n - skipped)
    }
}

pub struct Flatten<C: Cursor>
where
    C::Item: IntoEnum,
{
    outer: Enum<C>,
    current: Option<Enum<<C::Item as IntoEnum>::Cursor>>,
}

impl<C: Cursor> Cursor for Flatten<C>
where
    C::Item: IntoEnum,
{
    type Item = <C::Item as IntoEnum>::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current
                && let Some(item) = current.next()
            {
                return Some(item);
            }
            self.current = Some(self.outer.next()?.into_enum());
        }
    }

    fn count(&self) -> Count {
        match (self.outer.count(), &self.current) {
            (Count::Known(0), None) => Count::Known(0),
            (Count::Known(0), Some(current)) => current.count(),
            _ => Count::Unknown,
        }
    }
}

impl<C: Cursor + Clone> Clone for Flatten<C>
where
    C::Item: IntoEnum,
    <C::Item as IntoEnum>::Cursor: Clone,
{
    fn clone(&self) -> Self {
        Flatten {
            outer: self.outer.clone(),
            current: self.current.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cycle<C: Cursor + Clone> {
    original: Enum<C>,
    current: Enum<C>,
}

impl<C: Cursor + Clone> Cursor for Cycle<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        match self.current.next() {
            Some(item) => Some(item),
            None => {
                self.current = self.original.clone();
                // If a fresh copy is empty too, the whole cycle is.
                self.current.next()
            },
        }
    }

    fn count(&self) -> Count {
        match self.original.count() {
            Count::Known(0) => Count::Known(0),
            _ => Count::Unknown,
        }
    }
}
