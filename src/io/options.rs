use std::io::{Read, Write};

use super::{Input, Output, Resource};

/// A builder for channels with non-default settings, see [`Input::new`] and [`Output::new`] for
/// the defaults.
///
/// ```
/// # use standard_ext::io::ChannelOptions;
/// let input = ChannelOptions::new().capacity(16).input(&b"some bytes"[..]);
/// assert_eq!(input.read_to_string().unwrap(), "some bytes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOptions {
    pub(crate) capacity: usize,
}

impl ChannelOptions {
    /// The buffer capacity used unless specified otherwise, 8 KiB.
    pub const DEFAULT_CAPACITY: usize = 8 * 1024;

    pub const fn new() -> ChannelOptions {
        ChannelOptions {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Sets the capacity of the channel's buffer, in bytes. Reads and writes at least this large
    /// bypass the buffer.
    ///
    /// # Panics
    /// Panics if `value` is zero.
    pub const fn capacity(&mut self, value: usize) -> &mut Self {
        assert!(value != 0, "channel buffer capacity must be non-zero");
        self.capacity = value;
        self
    }

    /// Opens an input channel over `resource` with these options.
    pub fn input<R: Read + Resource>(&self, resource: R) -> Input<R> {
        Input::with_options(resource, self)
    }

    /// Opens an output channel over `resource` with these options.
    pub fn output<R: Write + Resource>(&self, resource: R) -> Output<R> {
        Output::with_options(resource, self)
    }
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self::new()
    }
}
