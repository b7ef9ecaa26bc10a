//! [`Enum`](crate::enumeration::Enum) bridges for the standard collections, plus [`MultiMap`].
//!
//! # Purpose
//! Every container here can be enumerated and built from an Enum through the traits in
//! [`bridge`](crate::enumeration::bridge), so converting between two unrelated containers is just
//! `b = a.to_enum().collect()`, always a single linear pass.
//!
//! # Method
//! The bridges themselves are thin: each one adapts the container's own iterators with
//! [`of_iter`](crate::enumeration::of_iter), which keeps `O(1)` counting and fast-forwarding where
//! the underlying iterator supports it.
//!
//! | Container | `to_enum` | `backwards` | `sub` | `into_enum` | `of_enum` |
//! |-|-|-|-|-|-|
//! | `[T]` | `&T` | yes | yes | | |
//! | [`Vec`], [`VecDeque`](std::collections::VecDeque) | `&T` | yes | yes | `T` | `T` |
//! | [`LinkedList`](std::collections::LinkedList) | `&T` | yes | | `T` | `T` |
//! | [`HashMap`](std::collections::HashMap) | `(&K, &V)` | | | `(K, V)` | `(K, V)` |
//! | [`BTreeMap`](std::collections::BTreeMap) | `(&K, &V)` | yes | | `(K, V)` | `(K, V)` |
//! | [`HashSet`](std::collections::HashSet) | `&T` | | | `T` | `T` |
//! | [`BTreeSet`](std::collections::BTreeSet) | `&T` | yes | | `T` | `T` |
//! | [`str`], [`String`] | `char` | yes | | `char` | `char`, `&str`, `String` |
//! | [`MultiMap`] | `(&K, &V)` | yes | | `(K, V)` | `(K, V)`, [`Change`] |

mod buffer;
mod map;
mod sequence;
mod set;
pub mod multi_map;

pub use buffer::*;

#[doc(inline)]
pub use multi_map::{Change, MultiMap};
