use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Stdin};
use std::path::Path;
use std::rc::Rc;

use super::state::Channel;
use super::{
    Bytes, ChannelError, ChannelOptions, Chars, EndOfInput, InvalidUtf8, Lines, ReleaseError,
    Resource,
};
use crate::enumeration::Enum;

/// A buffered input channel over a readable [`Resource`].
///
/// Input is a handle: cloning it (or creating one of its views) yields another handle to the same
/// channel, sharing both the buffer and the position. The channel is closed by the first call to
/// [`close`](Input::close) on any handle, after which every operation on every handle fails with
/// [`ChannelClosed`](super::ChannelClosed). If it is never closed explicitly, the resource is
/// released once the last handle is dropped.
///
/// Handles are reference-counted without synchronization, so a channel stays on one thread.
pub struct Input<R: Resource> {
    inner: Rc<RefCell<InputInner<R>>>,
}

struct InputInner<R: Resource> {
    channel: Channel<R>,
    buffer: Box<[u8]>,
    /// The start of the unread part of `buffer`.
    pos: usize,
    /// The end of the valid part of `buffer`.
    filled: usize,
}

impl<R: Read + Resource> Input<R> {
    /// Opens an input channel over `resource`, with a buffer of
    /// [`ChannelOptions::DEFAULT_CAPACITY`] bytes.
    pub fn new(resource: R) -> Input<R> {
        Input::with_options(resource, &ChannelOptions::new())
    }

    pub fn with_options(resource: R, options: &ChannelOptions) -> Input<R> {
        Input {
            inner: Rc::new(RefCell::new(InputInner {
                channel: Channel::new(resource),
                buffer: vec![0; options.capacity].into_boxed_slice(),
                pos: 0,
                filled: 0,
            })),
        }
    }

    /// Reads some bytes into `buf`, returning how many were read. Zero means the end of input has
    /// been reached (or `buf` is empty).
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        self.inner.borrow_mut().read(buf)
    }

    /// # Errors
    /// Returns [`EndOfInput`] if no bytes are left.
    pub fn read_byte(&self) -> Result<u8, ChannelError> {
        self.inner.borrow_mut().read_byte()
    }

    /// Reads a single UTF-8 encoded char.
    ///
    /// # Errors
    /// Returns [`EndOfInput`] if no bytes are left, or [`InvalidUtf8`] if the next bytes don't
    /// encode a char (including when the input ends part way through one).
    pub fn read_char(&self) -> Result<char, ChannelError> {
        self.inner.borrow_mut().read_char()
    }

    /// Reads the next line, without its terminating `"\n"` or `"\r\n"`. The last line doesn't need
    /// to be terminated. Returns `None` at the end of input.
    pub fn read_line(&self) -> Result<Option<String>, ChannelError> {
        self.inner.borrow_mut().read_line()
    }

    /// Reads all remaining bytes.
    pub fn read_to_end(&self) -> Result<Vec<u8>, ChannelError> {
        self.inner.borrow_mut().read_to_end()
    }

    /// Reads all remaining bytes, which must be valid UTF-8.
    pub fn read_to_string(&self) -> Result<String, ChannelError> {
        let bytes = self.read_to_end()?;
        Ok(String::from_utf8(bytes).map_err(|_| InvalidUtf8)?)
    }

    /// Returns an Enum over the remaining lines of this channel, as read by
    /// [`read_line`](Input::read_line).
    pub fn lines(&self) -> Enum<Lines<R>> {
        Enum::new(Lines::new(self.clone()))
    }

    /// Returns an Enum over the remaining chars of this channel, as read by
    /// [`read_char`](Input::read_char).
    pub fn chars(&self) -> Enum<Chars<R>> {
        Enum::new(Chars::new(self.clone()))
    }

    /// Returns an Enum over the remaining bytes of this channel.
    pub fn bytes(&self) -> Enum<Bytes<R>> {
        Enum::new(Bytes::new(self.clone()))
    }
}

impl<R: Read + Seek + Resource> Input<R> {
    /// Seeks the underlying resource, discarding the buffer. [`SeekFrom::Current`] is relative to
    /// the logical position of this channel, not to how far the resource has been read ahead.
    pub fn seek(&self, position: SeekFrom) -> Result<u64, ChannelError> {
        self.inner.borrow_mut().seek(position)
    }
}

impl<R: Resource> Input<R> {
    pub fn is_open(&self) -> bool {
        self.inner.borrow().channel.is_open()
    }

    /// Closes the channel for every handle and releases the resource. Closing an already closed
    /// channel does nothing.
    pub fn close(&self) -> Result<(), ReleaseError> {
        let mut inner = self.inner.borrow_mut();
        inner.pos = 0;
        inner.filled = 0;
        inner.channel.close()
    }
}

impl Input<io::Cursor<Vec<u8>>> {
    /// Opens an input channel over an in-memory byte buffer.
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Input::new(io::Cursor::new(bytes.into()))
    }

    /// Opens an input channel over the bytes of an in-memory string.
    pub fn from_string<S: Into<String>>(string: S) -> Self {
        Input::from_bytes(string.into().into_bytes())
    }
}

impl Input<File> {
    /// Opens the file at `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Input<File>> {
        Ok(Input::new(File::open(path)?))
    }
}

/// Opens an input channel over the standard input of the process.
pub fn stdin() -> Input<Stdin> {
    Input::new(io::stdin())
}

impl<R: Read + Resource> InputInner<R> {
    /// Returns the unread part of the buffer, refilling it first if it's empty. An empty slice
    /// means the end of input.
    fn fill_buf(&mut self) -> Result<&[u8], ChannelError> {
        let resource = self.channel.get_mut()?;
        if self.pos >= self.filled {
            self.filled = read_uninterrupted(resource, &mut self.buffer)?;
            self.pos = 0;
        }
        Ok(&self.buffer[self.pos..self.filled])
    }

    const fn consume(&mut self, n: usize) {
        self.pos = if self.pos + n < self.filled { self.pos + n } else { self.filled };
    }

    fn read(&mut self, out: &mut [u8]) -> Result<usize, ChannelError> {
        if self.pos >= self.filled && out.len() >= self.buffer.len() {
            // Nothing buffered and the read is large enough that buffering would only copy twice.
            let resource = self.channel.get_mut()?;
            return Ok(read_uninterrupted(resource, out)?);
        }

        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }

    fn read_byte(&mut self) -> Result<u8, ChannelError> {
        let byte = *self.fill_buf()?.first().ok_or(EndOfInput)?;
        self.consume(1);
        Ok(byte)
    }

    fn read_char(&mut self) -> Result<char, ChannelError> {
        let first = self.read_byte()?;
        let width = utf8_width(first).ok_or(InvalidUtf8)?;

        let mut bytes = [first, 0, 0, 0];
        for byte in &mut bytes[1..width] {
            *byte = match self.read_byte() {
                Ok(byte) => byte,
                Err(ChannelError::EndOfInput(_)) => Err(InvalidUtf8)?,
                Err(e) => return Err(e),
            };
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or(InvalidUtf8.into())
    }

    fn read_line(&mut self) -> Result<Option<String>, ChannelError> {
        let mut line = Vec::new();
        let mut terminated = false;

        loop {
            let available = self.fill_buf()?;
            if available.is_empty() {
                break;
            }

            match available.iter().position(|byte| *byte == b'\n') {
                Some(index) => {
                    line.extend_from_slice(&available[..index]);
                    self.consume(index + 1);
                    terminated = true;
                    break;
                },
                None => {
                    let n = available.len();
                    line.extend_from_slice(available);
                    self.consume(n);
                },
            }
        }

        if !terminated && line.is_empty() {
            return Ok(None);
        }
        if terminated && line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(String::from_utf8(line).map_err(|_| InvalidUtf8)?))
    }

    fn read_to_end(&mut self) -> Result<Vec<u8>, ChannelError> {
        let resource = self.channel.get_mut()?;
        let mut out = self.buffer[self.pos..self.filled].to_vec();
        self.pos = self.filled;
        resource.read_to_end(&mut out)?;
        Ok(out)
    }
}

impl<R: Read + Seek + Resource> InputInner<R> {
    fn seek(&mut self, position: SeekFrom) -> Result<u64, ChannelError> {
        let buffered = i64::try_from(self.filled - self.pos)
            .map_err(|_| io::Error::from(ErrorKind::InvalidInput))?;
        let resource = self.channel.get_mut()?;
        let position = match position {
            SeekFrom::Current(offset) => SeekFrom::Current(
                offset
                    .checked_sub(buffered)
                    .ok_or_else(|| io::Error::from(ErrorKind::InvalidInput))?,
            ),
            other => other,
        };

        let result = resource.seek(position)?;
        self.pos = 0;
        self.filled = 0;
        Ok(result)
    }
}

fn read_uninterrupted<R: Read>(resource: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match resource.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}

/// Returns the length of the UTF-8 sequence starting with `first`, or `None` if `first` can't
/// start one.
const fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl<R: Resource> Clone for Input<R> {
    /// Returns another handle to the same channel.
    fn clone(&self) -> Self {
        Input {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Read + Resource> Read for Input<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.inner.borrow_mut().read(buf)?)
    }
}

impl<R: Resource> Debug for Input<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Input")
            .field("open", &inner.channel.is_open())
            .field("buffered", &(inner.filled - inner.pos))
            .field("capacity", &inner.buffer.len())
            .finish_non_exhaustive()
    }
}
