use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{Count, Cursor, Enum};

/// Creates an Enum with no elements.
pub const fn empty<T>() -> Enum<Empty<T>> {
    Enum::new(Empty(PhantomData))
}

/// Creates an Enum that produces `value` once.
pub const fn singleton<T>(value: T) -> Enum<Singleton<T>> {
    Enum::new(Singleton(Some(value)))
}

/// Creates an infinite Enum that produces clones of `value`.
pub const fn repeat<T: Clone>(value: T) -> Enum<Repeat<T>> {
    Enum::new(Repeat {
        value,
        left: None,
    })
}

/// Creates an Enum that produces `n` clones of `value`.
pub const fn repeat_n<T: Clone>(value: T, n: usize) -> Enum<Repeat<T>> {
    Enum::new(Repeat {
        value,
        left: Some(n),
    })
}

/// Creates an Enum of `len` elements, where the element at index `i` is `f(i)`. `f` is only called
/// for elements that are actually pulled, so fast-forwarding doesn't call it at all.
pub const fn init<T, F: FnMut(usize) -> T>(len: usize, f: F) -> Enum<Init<F>> {
    Enum::new(Init {
        index: 0,
        len,
        f,
    })
}

/// Creates an Enum that calls `f` for each element, until `f` returns [`None`].
pub const fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> Enum<FromFn<F>> {
    Enum::new(FromFn(f))
}

/// Creates an Enum by repeatedly applying `f` to a state, starting with `seed`. Each application
/// produces an element and the next state, or [`None`] to stop.
pub const fn unfold<S, T, F: FnMut(S) -> Option<(T, S)>>(seed: S, f: F) -> Enum<Unfold<S, F>> {
    Enum::new(Unfold {
        state: Some(seed),
        f,
    })
}

/// Creates an Enum over anything that can be iterated, such as a range. Counting and
/// fast-forwarding use the iterator's size hint and [`Iterator::nth`], so they are `O(1)` for
/// iterators that support it.
pub fn of_iter<I: IntoIterator>(iter: I) -> Enum<IterCursor<I::IntoIter>> {
    Enum::new(IterCursor(iter.into_iter()))
}

pub struct Empty<T>(PhantomData<T>);

impl<T> Cursor for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        None
    }

    fn count(&self) -> Count {
        Count::Known(0)
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty(PhantomData)
    }
}

impl<T> Debug for Empty<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Empty")
    }
}

#[derive(Debug, Clone)]
pub struct Singleton<T>(Option<T>);

impl<T> Cursor for Singleton<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.0.take()
    }

    fn count(&self) -> Count {
        Count::Known(self.0.is_some() as usize)
    }
}

#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    // None repeats forever.
    left: Option<usize>,
}

impl<T: Clone> Cursor for Repeat<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        match &mut self.left {
            None => Some(self.value.clone()),
            Some(0) => None,
            Some(left) => {
                *left -= 1;
                Some(self.value.clone())
            },
        }
    }

    fn count(&self) -> Count {
        match self.left {
            Some(left) => Count::Known(left),
            None => Count::Unknown,
        }
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        match &mut self.left {
            None => n,
            Some(left) => {
                let skipped = n.min(*left);
                *left -= skipped;
                skipped
            },
        }
    }
}

#[derive(Clone)]
pub struct Init<F> {
    index: usize,
    len: usize,
    f: F,
}

impl<T, F: FnMut(usize) -> T> Cursor for Init<F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.index < self.len {
            let value = (self.f)(self.index);
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    fn count(&self) -> Count {
        Count::Known(self.len - self.index)
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        let skipped = n.min(self.len - self.index);
        self.index += skipped;
        skipped
    }
}

impl<F> Debug for Init<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Init")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct FromFn<F>(F);

impl<T, F: FnMut() -> Option<T>> Cursor for FromFn<F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        (self.0)()
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FromFn")
    }
}

#[derive(Clone)]
pub struct Unfold<S, F> {
    state: Option<S>,
    f: F,
}

impl<S, T, F: FnMut(S) -> Option<(T, S)>> Cursor for Unfold<S, F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let (value, next) = (self.f)(self.state.take()?)?;
        self.state = Some(next);
        Some(value)
    }
}

impl<S: Debug, F> Debug for Unfold<S, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unfold")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// A [`Cursor`] over any [`Iterator`], see [`of_iter`].
#[derive(Debug, Clone)]
pub struct IterCursor<I>(pub(crate) I);

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.0.next()
    }

    fn count(&self) -> Count {
        Count::from_size_hint(self.0.size_hint())
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        match Cursor::count(self) {
            // With an exact length, nth skips without pulling one by one for most iterators.
            Count::Known(left) => {
                let skipped = n.min(left);
                if skipped > 0 {
                    self.0.nth(skipped - 1);
                }
                skipped
            },
            Count::Unknown => {
                let mut skipped = 0;
                while skipped < n && self.0.next().is_some() {
                    skipped += 1;
                }
                skipped
            },
        }
    }
}
