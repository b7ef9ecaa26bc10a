use std::ops::Add;

use derive_more::IsVariant;

/// The production engine behind an [`Enum`](super::Enum).
///
/// A Cursor only has to produce elements. Exhaustion tracking is the job of the [`Enum`]
/// wrapping it: once [`pull`](Cursor::pull) has returned [`None`] the cursor is dropped and never
/// pulled again, so implementations are free to misbehave after that point.
///
/// Cloning is expressed through [`Clone`]. A cursor that implements it must produce, from the
/// point of cloning, exactly the same elements as the original without sharing position state.
/// Cursors over inherently single-pass sources don't implement it, see
/// [`Enum::memo`](super::Enum::memo) for a way around that.
///
/// [`Enum`]: super::Enum
pub trait Cursor {
    type Item;

    /// Produces the next element, or [`None`] if there are no elements left.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Returns the number of elements remaining, if that can be known without consuming anything.
    fn count(&self) -> Count {
        Count::Unknown
    }

    /// Skips up to `n` elements, returning the number of elements actually skipped. The default
    /// implementation pulls `n` times, cursors with random access should override it.
    fn fast_forward(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n && self.pull().is_some() {
            skipped += 1;
        }
        skipped
    }
}

/// The number of elements remaining in a sequence, as far as it can be determined without
/// consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Count {
    Known(usize),
    Unknown,
}

impl Count {
    /// Returns the count if it is known.
    pub const fn known(self) -> Option<usize> {
        match self {
            Count::Known(n) => Some(n),
            Count::Unknown => None,
        }
    }

    /// Interprets an iterator's size hint, which is only exact when both bounds agree.
    pub const fn from_size_hint(hint: (usize, Option<usize>)) -> Count {
        match hint {
            (lower, Some(upper)) if lower == upper => Count::Known(lower),
            _ => Count::Unknown,
        }
    }

    /// Applies `f` to a known count, leaving an unknown one unknown.
    pub fn map(self, f: impl FnOnce(usize) -> usize) -> Count {
        match self {
            Count::Known(n) => Count::Known(f(n)),
            Count::Unknown => Count::Unknown,
        }
    }

    /// The smaller of two counts. A known count of 0 wins over an unknown one.
    pub fn min(self, other: Count) -> Count {
        match (self, other) {
            (Count::Known(a), Count::Known(b)) => Count::Known(a.min(b)),
            (Count::Known(0), Count::Unknown) | (Count::Unknown, Count::Known(0)) => Count::Known(0),
            _ => Count::Unknown,
        }
    }
}

impl Add for Count {
    type Output = Count;

    /// Sums two counts. Overflowing the sum is treated as unknown.
    fn add(self, rhs: Count) -> Count {
        match (self, rhs) {
            (Count::Known(a), Count::Known(b)) => match a.checked_add(b) {
                Some(sum) => Count::Known(sum),
                None => Count::Unknown,
            },
            _ => Count::Unknown,
        }
    }
}
