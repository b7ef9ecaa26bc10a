//! The conversion contract between containers and [`Enum`]s.
//!
//! Every container kind supplies a way to enumerate itself and a way to be built from an Enum.
//! Code written against these traits never needs to know how a container is represented.
//!
//! # Snapshots
//! An Enum over a container never observes structural changes made to that container while it is
//! alive:
//! - [`ToEnum`] (and [`Backwards`] / [`Positional`]) borrow the container, so it can't be mutated
//!   until the Enum and all of its clones are dropped.
//! - [`IntoEnum`] takes ownership of the container.

use super::{Cursor, Enum};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// Containers which can be enumerated by reference, in their natural order. For containers with an
/// unspecified order (such as hash maps) the order is stable for the lifetime of one Enum and its
/// clones.
pub trait ToEnum {
    type Item<'a> where Self: 'a;

    type Cursor<'a>: Cursor<Item = Self::Item<'a>> + Clone where Self: 'a;

    /// Returns an Enum over all elements of `self`.
    fn to_enum(&self) -> Enum<Self::Cursor<'_>>;
}

/// Ordered containers which can also be enumerated from back to front.
pub trait Backwards: ToEnum {
    type BackCursor<'a>: Cursor<Item = Self::Item<'a>> + Clone where Self: 'a;

    /// Returns an Enum over all elements of `self`, in reverse order.
    fn backwards(&self) -> Enum<Self::BackCursor<'_>>;
}

/// Indexed containers which can enumerate a sub-range of their elements.
pub trait Positional: ToEnum {
    /// Returns an Enum over `len` elements of `self`, starting at `start`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the range doesn't fit within `self`. The range is never
    /// clamped.
    fn sub(&self, start: usize, len: usize) -> Result<Enum<Self::Cursor<'_>>, IndexOutOfBounds>;
}

/// Containers which can be consumed into an Enum of their elements.
pub trait IntoEnum {
    type Item;

    type Cursor: Cursor<Item = Self::Item>;

    /// Consumes `self`, returning an Enum over its elements.
    fn into_enum(self) -> Enum<Self::Cursor>;
}

impl<C: Cursor> IntoEnum for Enum<C> {
    type Item = C::Item;

    type Cursor = C;

    fn into_enum(self) -> Enum<C> {
        self
    }
}

/// Containers which can be built from an Enum of `T`.
///
/// Containers with a uniqueness constraint keep the last occurrence of a duplicate: both the later
/// key and the later value replace the earlier ones.
pub trait FromEnum<T>: Sized {
    /// Builds a new container, consuming every remaining element of `seq`.
    fn of_enum<C: Cursor<Item = T>>(seq: Enum<C>) -> Self;
}
