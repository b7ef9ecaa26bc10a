use std::fs::File;
use std::io::{self, Stderr, Stdin, Stdout, Write};

use super::ReleaseError;

/// The provider underneath a channel.
///
/// A channel calls [`release`](Resource::release) exactly once: either when it is explicitly
/// closed, or when its last handle is dropped. The default implementation simply drops the
/// resource.
pub trait Resource {
    /// Releases the resource, reporting any error that dropping it would hide.
    fn release(self) -> Result<(), ReleaseError>
    where
        Self: Sized,
    {
        Ok(())
    }
}

// File has no buffer of its own, dropping closes the descriptor.
impl Resource for File {}

impl Resource for Stdin {}

impl Resource for Stdout {
    fn release(mut self) -> Result<(), ReleaseError> {
        Ok(self.flush()?)
    }
}

impl Resource for Stderr {}

impl Resource for &[u8] {}

impl Resource for Vec<u8> {}

impl<T: AsRef<[u8]>> Resource for io::Cursor<T> {}

/// A borrowed resource is owned by the caller, so releasing it does nothing. The caller remains
/// responsible for closing it.
impl<R: Resource + ?Sized> Resource for &mut R {}
