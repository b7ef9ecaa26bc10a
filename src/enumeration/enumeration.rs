use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem;

use super::{BoxedCursor, Count, Cursor, FromEnum};

/// A single-pass, possibly infinite, lazily evaluated sequence.
///
/// An Enum is an explicit state machine around a [`Cursor`]. While elements remain it is
/// `Pending` and pulls are forwarded to the cursor. The first time the cursor reports that it has
/// nothing left, the cursor is dropped and the Enum becomes `Exhausted`, after which every pull
/// returns [`None`] without touching anything.
///
/// Advancing an Enum mutates its position. [`Clone`] (available whenever the cursor is cloneable)
/// is the only way to get an independent position over the same data, see [`Enum::memo`] for
/// sources that can't be cloned directly.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements skipped.
///
/// | Method | Complexity |
/// |-|-|
/// | `next` | cost of one pull |
/// | `count` | `O(1)`* |
/// | `clone` | cost of cloning the cursor |
/// | `fast_forward` | `O(1)`**, `O(n)` |
///
/// \* Except for memoized sequences, which walk their buffered elements.
///
/// \** For cursors with random access, such as those over slices, ranges or [`init`](super::init).
#[derive(Clone)]
pub struct Enum<C: Cursor> {
    pub(crate) state: State<C>,
}

#[derive(Clone)]
pub(crate) enum State<C> {
    Pending(C),
    Exhausted,
}

use State::*;

impl<C: Cursor> Enum<C> {
    /// Creates a new Enum which pulls its elements from `cursor`.
    pub const fn new(cursor: C) -> Enum<C> {
        Enum {
            state: Pending(cursor),
        }
    }

    /// Produces the next element, or [`None`] once the Enum is exhausted. After the first [`None`],
    /// every later call also returns [`None`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<C::Item> {
        match &mut self.state {
            Pending(cursor) => match cursor.pull() {
                Some(item) => Some(item),
                None => {
                    self.state = Exhausted;
                    None
                },
            },
            Exhausted => None,
        }
    }

    /// Returns the number of remaining elements if it can be determined without consuming any.
    pub fn count(&self) -> Count {
        match &self.state {
            Pending(cursor) => cursor.count(),
            Exhausted => Count::Known(0),
        }
    }

    /// Skips up to `n` elements, returning how many were actually skipped. Skipping past the end
    /// isn't an error, the Enum is simply exhausted.
    pub fn fast_forward(&mut self, n: usize) -> usize {
        match &mut self.state {
            Pending(cursor) => {
                let skipped = cursor.fast_forward(n);
                if skipped < n {
                    self.state = Exhausted;
                }
                skipped
            },
            Exhausted => 0,
        }
    }

    /// Takes the cursor out, leaving the Enum exhausted.
    pub(crate) fn take_cursor(&mut self) -> Option<C> {
        match mem::replace(&mut self.state, Exhausted) {
            Pending(cursor) => Some(cursor),
            Exhausted => None,
        }
    }

    /// Returns true if the Enum has already signalled exhaustion. An Enum with no elements left
    /// might still return false here, until it has been pulled.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, Exhausted)
    }

    /// Combines every element with an accumulator, left to right, consuming the whole Enum.
    ///
    /// This is the place where infinite sequences must not go, it won't return for them.
    pub fn fold<A, F>(mut self, init: A, mut f: F) -> A
    where
        F: FnMut(A, C::Item) -> A,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Like [`fold`](Enum::fold), using the first element as the initial accumulator. Returns
    /// [`None`] for an empty Enum.
    pub fn reduce<F>(mut self, f: F) -> Option<C::Item>
    where
        F: FnMut(C::Item, C::Item) -> C::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// Calls `f` on every remaining element.
    pub fn for_each<F: FnMut(C::Item)>(self, mut f: F) {
        self.fold((), |(), item| f(item));
    }

    /// Returns true if any element satisfies `predicate`, stopping at the first that does.
    pub fn any<P: FnMut(C::Item) -> bool>(&mut self, mut predicate: P) -> bool {
        while let Some(item) = self.next() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Returns true if every element satisfies `predicate`, stopping at the first that doesn't.
    pub fn all<P: FnMut(C::Item) -> bool>(&mut self, mut predicate: P) -> bool {
        !self.any(|item| !predicate(item))
    }

    /// Pulls elements until one satisfies `predicate` and returns it. Elements before it are
    /// consumed, elements after it are left in place.
    pub fn find<P: FnMut(&C::Item) -> bool>(&mut self, mut predicate: P) -> Option<C::Item> {
        while let Some(item) = self.next() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Consumes the Enum, returning the final element.
    pub fn last(self) -> Option<C::Item> {
        self.fold(None, |_, item| Some(item))
    }

    /// Builds a container out of the remaining elements. Shorthand for [`FromEnum::of_enum`].
    pub fn collect<B: FromEnum<C::Item>>(self) -> B {
        B::of_enum(self)
    }

    /// Erases the type of the cursor, so that Enums built in different ways can be stored
    /// together.
    pub fn boxed<'a>(self) -> Enum<BoxedCursor<'a, C::Item>>
    where
        C: Clone + 'a,
    {
        match self.state {
            Pending(cursor) => Enum::new(BoxedCursor::new(cursor)),
            Exhausted => Enum { state: Exhausted },
        }
    }
}

impl<C: Cursor> Cursor for Enum<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        self.next()
    }

    fn count(&self) -> Count {
        Enum::count(self)
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        Enum::fast_forward(self, n)
    }
}

impl<C: Cursor> Debug for Enum<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enum")
            .field("exhausted", &self.is_exhausted())
            .field("count", &self.count())
            .finish()
    }
}

impl<C: Cursor> IntoIterator for Enum<C> {
    type Item = C::Item;

    type IntoIter = Iter<C>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self)
    }
}

/// An [`Iterator`] over the elements of an [`Enum`], so that it can be used in `for` loops and
/// with the standard library's adapters.
#[derive(Debug, Clone)]
pub struct Iter<C: Cursor>(pub(crate) Enum<C>);

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.0.count() {
            Count::Known(n) => (n, Some(n)),
            Count::Unknown => (0, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.0.fast_forward(n) < n {
            return None;
        }
        self.0.next()
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}
