//! Lazy transformations of [`Enum`](crate::enumeration::Enum)s.
//!
//! Every combinator is a method on Enum returning a new Enum around a cursor defined here. The
//! input is kept as an Enum, so combinators only ever see a fused sequence, and the result
//! satisfies every guarantee of an Enum in turn. Nothing is pulled from an input before the
//! result itself is pulled.
//!
//! A combinator's result is cloneable whenever its inputs and closures are.

mod concat;
mod error;
mod filter;
mod map;
mod memo;
mod take;
mod windows;
mod zip;

pub use concat::*;
pub use error::*;
pub use filter::*;
pub use map::*;
pub use memo::*;
pub use take::*;
pub use windows::*;
pub use zip::*;

mod tests;
