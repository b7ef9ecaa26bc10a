//! The lazy sequence core: [`Enum`], the [`Cursor`] trait that drives it and the constructors
//! for Enums which don't come from a container.
//!
//! Transformations on Enums live in [`combinators`](crate::combinators), conversions to and from
//! containers are described by the traits in [`bridge`].

pub mod bridge;
mod boxed;
mod cursor;
mod enumeration;
mod source;

pub use boxed::*;
pub use cursor::*;
pub use enumeration::*;
pub use source::*;

#[doc(inline)]
pub use bridge::{Backwards, FromEnum, IndexOutOfBounds, IntoEnum, Positional, ToEnum};
