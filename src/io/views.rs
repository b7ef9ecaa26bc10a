//! Enum views over an [`Input`] channel.
//!
//! Views pull from the channel they were created from, so they share its position with every
//! other handle and view. A view yields errors as `Err` elements rather than treating them as
//! exhaustion, and is exhausted after the first one.
//!
//! A view can also close its channel, see [`Enum::close`], so holding only a view is enough to
//! release the resource deterministically.

use std::io::Read;

use super::{ChannelError, Input, ReleaseError, Resource};
use crate::enumeration::{Cursor, Enum};

/// The cursor of a view over a channel.
pub trait ChannelView: Cursor {
    /// Closes the channel for every handle, then lets go of this view's handle.
    fn close(&mut self) -> Result<(), ReleaseError>;
}

impl<V: ChannelView> Enum<V> {
    /// Closes the channel under this view for every handle and exhausts the view. The resource is
    /// released if the channel was still open, and any error from releasing it is returned.
    ///
    /// A view which is already exhausted has let go of its channel, so closing it does nothing.
    pub fn close(&mut self) -> Result<(), ReleaseError> {
        self.take_cursor().map_or(Ok(()), |mut view| view.close())
    }
}

/// Pulls through `read` until it returns `None` or fails once.
fn pull_view<T, R: Resource>(
    input: &mut Option<Input<R>>,
    read: impl FnOnce(&Input<R>) -> Result<Option<T>, ChannelError>,
) -> Option<Result<T, ChannelError>> {
    let result = read(input.as_ref()?).transpose();
    if !matches!(result, Some(Ok(_))) {
        // Let go of the handle, so the channel can be released once nothing else holds it.
        *input = None;
    }
    result
}

fn close_view<R: Resource>(input: &mut Option<Input<R>>) -> Result<(), ReleaseError> {
    input.take().map_or(Ok(()), |input| input.close())
}

/// A [`Cursor`] over the lines of an [`Input`], see [`Input::lines`].
#[derive(Debug)]
pub struct Lines<R: Resource> {
    input: Option<Input<R>>,
}

impl<R: Resource> Lines<R> {
    pub(crate) const fn new(input: Input<R>) -> Lines<R> {
        Lines { input: Some(input) }
    }
}

impl<R: Read + Resource> Cursor for Lines<R> {
    type Item = Result<String, ChannelError>;

    fn pull(&mut self) -> Option<Self::Item> {
        pull_view(&mut self.input, Input::read_line)
    }
}

/// A [`Cursor`] over the chars of an [`Input`], see [`Input::chars`].
#[derive(Debug)]
pub struct Chars<R: Resource> {
    input: Option<Input<R>>,
}

impl<R: Resource> Chars<R> {
    pub(crate) const fn new(input: Input<R>) -> Chars<R> {
        Chars { input: Some(input) }
    }
}

impl<R: Read + Resource> Cursor for Chars<R> {
    type Item = Result<char, ChannelError>;

    fn pull(&mut self) -> Option<Self::Item> {
        pull_view(&mut self.input, |input| match input.read_char() {
            Err(ChannelError::EndOfInput(_)) => Ok(None),
            result => result.map(Some),
        })
    }
}

/// A [`Cursor`] over the bytes of an [`Input`], see [`Input::bytes`].
#[derive(Debug)]
pub struct Bytes<R: Resource> {
    input: Option<Input<R>>,
}

impl<R: Resource> Bytes<R> {
    pub(crate) const fn new(input: Input<R>) -> Bytes<R> {
        Bytes { input: Some(input) }
    }
}

impl<R: Read + Resource> Cursor for Bytes<R> {
    type Item = Result<u8, ChannelError>;

    fn pull(&mut self) -> Option<Self::Item> {
        pull_view(&mut self.input, |input| match input.read_byte() {
            Err(ChannelError::EndOfInput(_)) => Ok(None),
            result => result.map(Some),
        })
    }
}

impl<R: Read + Resource> ChannelView for Lines<R> {
    fn close(&mut self) -> Result<(), ReleaseError> {
        close_view(&mut self.input)
    }
}

impl<R: Read + Resource> ChannelView for Chars<R> {
    fn close(&mut self) -> Result<(), ReleaseError> {
        close_view(&mut self.input)
    }
}

impl<R: Read + Resource> ChannelView for Bytes<R> {
    fn close(&mut self) -> Result<(), ReleaseError> {
        close_view(&mut self.input)
    }
}
