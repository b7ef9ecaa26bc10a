use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::mem::ManuallyDrop;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{EBADF, EDQUOT, EINTR, EIO, ENOSPC, O_CLOEXEC, O_CREAT, O_RDONLY, O_TRUNC, O_WRONLY, c_int};

use super::panic::{BadFdPanic, Panic, UnexpectedErrorPanic};
use super::{CloseError, IOError, InterruptError, ReleaseError, Resource, StorageExhaustedError};

/// An owned Linux file descriptor, usable as a channel [`Resource`].
///
/// Unlike dropping, which closes the descriptor and can only log a failure, [`Fd::close`] reports
/// why closing failed. Releasing an Fd as part of closing a channel closes it the same way.
pub struct Fd(c_int);

fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

impl Fd {
    /// Opens the file at `file_path` with the raw `flags` and `mode` of `open(2)`. `O_CLOEXEC` is
    /// always added.
    pub fn open<P: AsRef<Path>>(file_path: P, flags: c_int, mode: c_int) -> io::Result<Fd> {
        let pathname = CString::new(file_path.as_ref().as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // SAFETY: pathname is a valid nul-terminated string that outlives the call.
        match unsafe { libc::open(pathname.as_ptr(), flags | O_CLOEXEC, mode) } {
            -1 => Err(io::Error::last_os_error()),
            fd => Ok(Fd(fd)),
        }
    }

    /// Opens an existing file for reading.
    pub fn open_read<P: AsRef<Path>>(file_path: P) -> io::Result<Fd> {
        Fd::open(file_path, O_RDONLY, 0)
    }

    /// Creates a file for writing, truncating it if it already exists.
    pub fn create<P: AsRef<Path>>(file_path: P) -> io::Result<Fd> {
        Fd::open(file_path, O_WRONLY | O_CREAT | O_TRUNC, 0o644)
    }

    /// Takes ownership of a raw file descriptor.
    ///
    /// # Safety
    /// `fd` must be an open file descriptor which nothing else will close.
    pub const unsafe fn from_raw(fd: c_int) -> Fd {
        Fd(fd)
    }

    pub const fn as_raw(&self) -> c_int {
        self.0
    }

    /// Closes the file descriptor.
    ///
    /// # Errors
    /// The descriptor is invalid afterwards even if an error is returned, so closing is never
    /// retried.
    ///
    /// # Panics
    /// Panics if the descriptor was already invalid, which means something else closed it.
    pub fn close(self) -> Result<(), CloseError> {
        // Dropping would close the descriptor a second time.
        let fd = ManuallyDrop::new(self);
        // SAFETY: close invalidates the descriptor regardless of the outcome, and fd is never
        // used again.
        if unsafe { libc::close(fd.0) } == -1 {
            match err_no() {
                EBADF =>           BadFdPanic.panic(),
                EINTR =>           Err(InterruptError)?,
                EIO =>             Err(IOError)?,
                ENOSPC | EDQUOT => Err(StorageExhaustedError)?,
                e =>               UnexpectedErrorPanic(e).panic(),
            }
        }
        Ok(())
    }
}

impl Read for Fd {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(io::Error::last_os_error()),
            n => Ok(n as usize),
        }
    }
}

impl Write for Fd {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for reads of buf.len() bytes.
        match unsafe { libc::write(self.0, buf.as_ptr().cast(), buf.len()) } {
            -1 => Err(io::Error::last_os_error()),
            n => Ok(n as usize),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        // Writes aren't buffered in userspace.
        Ok(())
    }
}

impl Seek for Fd {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            SeekFrom::Start(offset) => (
                i64::try_from(offset).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
                libc::SEEK_SET,
            ),
            SeekFrom::End(offset) => (offset, libc::SEEK_END),
            SeekFrom::Current(offset) => (offset, libc::SEEK_CUR),
        };

        // SAFETY: There is no memory management here and any returned errors are handled.
        match unsafe { libc::lseek(self.0, offset as libc::off_t, whence) } {
            -1 => Err(io::Error::last_os_error()),
            position => Ok(position as u64),
        }
    }
}

impl Resource for Fd {
    fn release(self) -> Result<(), ReleaseError> {
        Ok(self.close()?)
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            #[cfg(feature = "tracing")]
            tracing::warn!(fd = self.0, errno = err_no(), "error while dropping file descriptor");
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
