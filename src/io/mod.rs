//! Buffered byte channels over arbitrary resources.
//!
//! A channel is either an [`Input`] or an [`Output`] handle over a [`Resource`]: anything which
//! implements [`Read`](std::io::Read) or [`Write`](std::io::Write) and knows how to release
//! itself. Channels move from Open to Closed exactly once, and every operation on a closed channel
//! fails with [`ChannelClosed`] rather than looking like the end of input.
//!
//! # Release
//! The resource under a channel is released exactly once, by whichever happens first:
//! - [`close`](Input::close) on any handle to the channel, or on any view of it (see
//!   [`ChannelView`]), or
//! - dropping the last handle (including views such as [`Input::lines`]).
//!
//! Errors while releasing on drop have nowhere to go, so they are logged with `tracing` when the
//! `tracing` feature is enabled. Close channels explicitly to handle them.

mod error;
mod input;
mod options;
mod output;
mod resource;
mod state;
mod views;

#[cfg(all(feature = "fd", target_os = "linux"))]
mod fd;
#[cfg(all(feature = "fd", target_os = "linux"))]
mod panic;

pub use error::*;
pub use input::*;
pub use options::*;
pub use output::*;
pub use resource::*;
pub use views::*;

#[cfg(all(feature = "fd", target_os = "linux"))]
pub use fd::*;

mod tests;
