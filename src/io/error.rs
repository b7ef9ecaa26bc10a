use std::io::{self, ErrorKind};

use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("channel is closed")]
pub struct ChannelClosed;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("reached end of input")]
pub struct EndOfInput;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("input is not valid UTF-8")]
pub struct InvalidUtf8;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

/// An error while explicitly closing a file descriptor. The descriptor is invalid afterwards
/// regardless.
#[derive(Debug, Display, Error, From, Clone, Copy, PartialEq, Eq)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
}

/// An error from an operation on an open (or supposedly open) channel.
#[derive(Debug, Display, Error, From)]
pub enum ChannelError {
    Closed(ChannelClosed),
    EndOfInput(EndOfInput),
    InvalidUtf8(InvalidUtf8),
    Io(io::Error),
}

impl ChannelError {
    pub const fn is_closed(&self) -> bool {
        matches!(self, ChannelError::Closed(_))
    }

    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, ChannelError::EndOfInput(_))
    }
}

impl From<ChannelError> for io::Error {
    fn from(value: ChannelError) -> Self {
        match value {
            ChannelError::Io(e) => e,
            ChannelError::Closed(e) => io::Error::new(ErrorKind::NotConnected, e),
            ChannelError::EndOfInput(e) => io::Error::new(ErrorKind::UnexpectedEof, e),
            ChannelError::InvalidUtf8(e) => io::Error::new(ErrorKind::InvalidData, e),
        }
    }
}

/// An error while releasing a channel's resource, including flushing buffered output first. The
/// channel is closed even when this is returned.
#[derive(Debug, Display, Error, From)]
pub enum ReleaseError {
    Io(io::Error),
    Close(CloseError),
}
