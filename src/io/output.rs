use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, Seek, SeekFrom, Stderr, Stdout, Write};
use std::path::Path;
use std::rc::Rc;

use super::state::{Channel, report_on_drop};
use super::{ChannelError, ChannelOptions, ReleaseError, Resource};

/// A buffered output channel over a writable [`Resource`].
///
/// Like [`Input`](super::Input), Output is a reference-counted handle: clones share the channel
/// and its buffer. Buffered bytes are written out when the buffer fills up, on
/// [`flush`](Output::flush), before seeking and when the channel is closed, either explicitly or
/// by dropping its last handle.
pub struct Output<R: Write + Resource> {
    inner: Rc<RefCell<OutputInner<R>>>,
}

struct OutputInner<R: Write + Resource> {
    channel: Channel<R>,
    buffer: Vec<u8>,
    capacity: usize,
}

impl<R: Write + Resource> Output<R> {
    /// Opens an output channel over `resource`, with a buffer of
    /// [`ChannelOptions::DEFAULT_CAPACITY`] bytes.
    pub fn new(resource: R) -> Output<R> {
        Output::with_options(resource, &ChannelOptions::new())
    }

    pub fn with_options(resource: R, options: &ChannelOptions) -> Output<R> {
        Output {
            inner: Rc::new(RefCell::new(OutputInner {
                channel: Channel::new(resource),
                buffer: Vec::with_capacity(options.capacity),
                capacity: options.capacity,
            })),
        }
    }

    /// Writes some of `data`, returning how many bytes were accepted. Accepted bytes may stay
    /// buffered, and if writing them out later fails they are kept for the next write or flush.
    pub fn write(&self, data: &[u8]) -> Result<usize, ChannelError> {
        self.inner.borrow_mut().write(data)
    }

    pub fn write_all(&self, mut data: &[u8]) -> Result<(), ChannelError> {
        let mut inner = self.inner.borrow_mut();
        while !data.is_empty() {
            match inner.write(data)? {
                0 => Err(io::Error::from(io::ErrorKind::WriteZero))?,
                n => data = &data[n..],
            }
        }
        Ok(())
    }

    pub fn write_byte(&self, byte: u8) -> Result<(), ChannelError> {
        self.write_all(&[byte])
    }

    /// Writes `c` encoded as UTF-8.
    pub fn write_char(&self, c: char) -> Result<(), ChannelError> {
        self.write_all(c.encode_utf8(&mut [0; 4]).as_bytes())
    }

    pub fn write_str(&self, s: &str) -> Result<(), ChannelError> {
        self.write_all(s.as_bytes())
    }

    /// Writes out everything buffered, then flushes the resource itself.
    pub fn flush(&self) -> Result<(), ChannelError> {
        let mut inner = self.inner.borrow_mut();
        let OutputInner { channel, buffer, .. } = &mut *inner;
        Ok(drain(channel.get_mut()?, buffer)?)
    }
}

impl<R: Write + Seek + Resource> Output<R> {
    /// Flushes the channel, then seeks the underlying resource.
    pub fn seek(&self, position: SeekFrom) -> Result<u64, ChannelError> {
        let mut inner = self.inner.borrow_mut();
        let OutputInner { channel, buffer, .. } = &mut *inner;
        let resource = channel.get_mut()?;
        drain(resource, buffer)?;
        Ok(resource.seek(position)?)
    }
}

impl<R: Write + Resource> Output<R> {
    pub fn is_open(&self) -> bool {
        self.inner.borrow().channel.is_open()
    }

    /// Flushes and closes the channel for every handle, releasing the resource. Closing an already
    /// closed channel does nothing.
    ///
    /// # Errors
    /// If flushing fails the channel is still closed and the resource still released, and the
    /// flush error is returned. Otherwise, any error from releasing the resource is returned.
    pub fn close(&self) -> Result<(), ReleaseError> {
        self.inner.borrow_mut().close()
    }
}

impl Output<File> {
    /// Creates (or truncates) the file at `path` for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Output<File>> {
        Ok(Output::new(File::create(path)?))
    }
}

/// Opens an output channel over the standard output of the process.
pub fn stdout() -> Output<Stdout> {
    Output::new(io::stdout())
}

/// Opens an output channel over the standard error of the process.
pub fn stderr() -> Output<Stderr> {
    Output::new(io::stderr())
}

/// Opens an output channel which writes into memory, along with a handle to read back what was
/// written.
pub fn output_buffer() -> (Output<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::default();
    (Output::new(buffer.clone()), buffer)
}

impl<R: Write + Resource> OutputInner<R> {
    fn write(&mut self, data: &[u8]) -> Result<usize, ChannelError> {
        let resource = self.channel.get_mut()?;
        if self.buffer.len() + data.len() > self.capacity {
            write_buffered(resource, &mut self.buffer)?;
        }

        if data.len() >= self.capacity {
            Ok(resource.write(data)?)
        } else {
            self.buffer.extend_from_slice(data);
            Ok(data.len())
        }
    }

    fn close(&mut self) -> Result<(), ReleaseError> {
        let flushed = match self.channel.get_mut() {
            Ok(resource) => drain(resource, &mut self.buffer),
            Err(_) => Ok(()),
        };
        let released = self.channel.close();
        flushed?;
        released
    }
}

impl<R: Write + Resource> Drop for OutputInner<R> {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            report_on_drop(&error);
        }
    }
}

/// Writes out the buffered bytes. If writing fails, whatever wasn't written stays buffered for the
/// next attempt.
fn write_buffered<R: Write>(resource: &mut R, buffer: &mut Vec<u8>) -> io::Result<()> {
    let mut written = 0;
    let result = loop {
        if written == buffer.len() {
            break Ok(());
        }
        match resource.write(&buffer[written..]) {
            Ok(0) => break Err(io::Error::from(io::ErrorKind::WriteZero)),
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => break Err(e),
        }
    };
    buffer.drain(..written);
    result
}

fn drain<R: Write>(resource: &mut R, buffer: &mut Vec<u8>) -> io::Result<()> {
    write_buffered(resource, buffer)?;
    resource.flush()
}

impl<R: Write + Resource> Clone for Output<R> {
    /// Returns another handle to the same channel.
    fn clone(&self) -> Self {
        Output {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Write + Resource> Write for Output<R> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.inner.borrow_mut().write(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(Output::flush(self)?)
    }
}

impl<R: Write + Resource> Debug for Output<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Output")
            .field("open", &inner.channel.is_open())
            .field("buffered", &inner.buffer.len())
            .field("capacity", &inner.capacity)
            .finish_non_exhaustive()
    }
}

/// An in-memory byte buffer shared between its clones, see [`output_buffer`].
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    /// Returns a copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }

    /// Returns everything written so far as a string, replacing invalid UTF-8.
    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Resource for SharedBuffer {}
