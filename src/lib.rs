//! This crate extends Rust's standard collections and I/O with one shared abstraction: the lazy
//! sequence, [`Enum`](enumeration::Enum).
//!
//! # Purpose
//! Every container can be turned into an Enum and built back from one, so converting between two
//! unrelated containers (or transforming the elements on the way) never needs a bespoke function
//! for each pair of types. Enums are pulled one element at a time, can be infinite, and are only
//! ever evaluated as far as something consumes them.
//!
//! # Method
//! An [`Enum`](enumeration::Enum) is a small state machine, pending or exhausted, wrapped around a
//! [`Cursor`](enumeration::Cursor) which actually produces the elements. Combinators such as
//! [`map`](enumeration::Enum::map) or [`concat`](enumeration::Enum::concat) are just cursors that
//! hold other Enums. Cloning an Enum clones its cursor, so the clone continues independently from
//! the same point. Sources which can't be cloned (generators, channels) can still be shared via
//! [`memo`](enumeration::Enum::memo).
//!
//! Containers hook in through the traits in [`enumeration::bridge`]. Enumerating a container by
//! reference borrows it, so the borrow checker guarantees that it isn't modified while an Enum
//! over it is alive.
//!
//! # Error Handling
//! Running out of elements isn't an error: it's `None`, and an exhausted Enum stays exhausted.
//! Where this crate does return errors via [`Result`]s, they are strongly typed, using enums for
//! static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Calling something with arguments that can only be a bug, such as
//! a window size of zero, panics instead.
//!
//! # Features
//! - `collections`: bridges for the standard collections, and
//!   [`MultiMap`](collections::MultiMap).
//! - `io`: buffered channels over readable and writable resources.
//! - `fd`: a `libc` file descriptor resource for channels, on Linux.
//! - `tracing`: logs channel resources being released, and failures that happen while dropping
//!   them.
//!
//! All features are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod combinators;
pub mod enumeration;

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "io")]
pub mod io;

pub(crate) mod util;
