use std::fmt::{self, Debug, Formatter};

use super::{Count, Cursor};

/// A type-erased [`Cursor`], produced by [`Enum::boxed`](super::Enum::boxed).
///
/// Only cloneable cursors can be boxed, so that the erased cursor is still cloneable itself.
pub struct BoxedCursor<'a, T>(Box<dyn DynCursor<'a, T> + 'a>);

/// Object-safe counterpart of [`Cursor`] + [`Clone`].
trait DynCursor<'a, T> {
    fn pull(&mut self) -> Option<T>;

    fn count(&self) -> Count;

    fn fast_forward(&mut self, n: usize) -> usize;

    fn clone_box(&self) -> Box<dyn DynCursor<'a, T> + 'a>;
}

impl<'a, C: Cursor + Clone + 'a> DynCursor<'a, C::Item> for C {
    fn pull(&mut self) -> Option<C::Item> {
        Cursor::pull(self)
    }

    fn count(&self) -> Count {
        Cursor::count(self)
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        Cursor::fast_forward(self, n)
    }

    fn clone_box(&self) -> Box<dyn DynCursor<'a, C::Item> + 'a> {
        Box::new(self.clone())
    }
}

impl<'a, T> BoxedCursor<'a, T> {
    pub fn new<C: Cursor<Item = T> + Clone + 'a>(cursor: C) -> BoxedCursor<'a, T> {
        BoxedCursor(Box::new(cursor))
    }
}

impl<T> Cursor for BoxedCursor<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.0.pull()
    }

    fn count(&self) -> Count {
        self.0.count()
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        self.0.fast_forward(n)
    }
}

impl<T> Clone for BoxedCursor<'_, T> {
    fn clone(&self) -> Self {
        BoxedCursor(self.0.clone_box())
    }
}

impl<T> Debug for BoxedCursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxedCursor")
            .field(&self.0.count())
            .finish()
    }
}
