#![cfg(test)]

use std::cell::Cell;
use std::io::{self, Read, SeekFrom, Write};
use std::rc::Rc;

use super::*;
use crate::util::panic::assert_panics;

/// A resource which records how many times it was released, and can be made to fail.
struct Tracked {
    data: io::Cursor<Vec<u8>>,
    releases: Rc<Cell<usize>>,
    fail_flush: bool,
}

impl Tracked {
    fn new(data: &[u8]) -> (Tracked, Rc<Cell<usize>>) {
        let releases = Rc::new(Cell::new(0));
        let tracked = Tracked {
            data: io::Cursor::new(data.to_vec()),
            releases: Rc::clone(&releases),
            fail_flush: false,
        };
        (tracked, releases)
    }
}

impl Read for Tracked {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

impl Write for Tracked {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_flush {
            Err(io::Error::other("flush failed"))
        } else {
            Ok(())
        }
    }
}

impl Resource for Tracked {
    fn release(self) -> Result<(), ReleaseError> {
        self.releases.set(self.releases.get() + 1);
        Ok(())
    }
}

#[test]
fn test_close_is_idempotent() {
    let (resource, releases) = Tracked::new(b"abc");
    let input = Input::new(resource);
    let other = input.clone();

    assert!(input.close().is_ok());
    assert!(!other.is_open(), "Closing one handle should close the channel for all of them.");
    assert!(input.close().is_ok(), "Closing twice should be a no-op.");
    assert!(other.close().is_ok());
    assert_eq!(releases.get(), 1, "The resource should be released exactly once.");

    drop(input);
    drop(other);
    assert_eq!(releases.get(), 1, "Dropping closed handles must not release again.");
}

#[test]
fn test_release_on_last_drop() {
    let (resource, releases) = Tracked::new(b"one\ntwo\n");
    let input = Input::new(resource);
    let other = input.clone();
    let mut lines = input.lines();

    drop(input);
    assert_eq!(lines.next().map(|line| line.ok()), Some(Some(String::from("one"))));
    drop(other);
    assert_eq!(releases.get(), 0, "A live view should keep the channel open.");

    drop(lines);
    assert_eq!(releases.get(), 1, "Dropping the last handle should release the resource.");
}

#[test]
fn test_operations_fail_after_close() {
    let input = Input::from_string("data");
    input.close().expect("in-memory input closes cleanly");

    assert!(input.read(&mut [0; 4]).is_err_and(|e| e.is_closed()));
    assert!(input.read_byte().is_err_and(|e| e.is_closed()));
    assert!(input.read_char().is_err_and(|e| e.is_closed()));
    assert!(input.read_line().is_err_and(|e| e.is_closed()));
    assert!(input.read_to_end().is_err_and(|e| e.is_closed()));
    assert!(input.read_to_string().is_err_and(|e| e.is_closed()));
    assert!(input.seek(SeekFrom::Start(0)).is_err_and(|e| e.is_closed()));

    let (output, buffer) = output_buffer();
    output.close().expect("in-memory output closes cleanly");
    assert!(output.write(b"x").is_err_and(|e| e.is_closed()));
    assert!(output.write_all(b"x").is_err_and(|e| e.is_closed()));
    assert!(output.write_byte(b'x').is_err_and(|e| e.is_closed()));
    assert!(output.write_char('x').is_err_and(|e| e.is_closed()));
    assert!(output.write_str("x").is_err_and(|e| e.is_closed()));
    assert!(output.flush().is_err_and(|e| e.is_closed()));
    assert!(buffer.is_empty(), "Nothing should reach a closed channel's resource.");
}

#[test]
fn test_views_share_channel() {
    let input = Input::from_string("first\nsecond\r\nthird");
    assert_eq!(input.read_line().ok(), Some(Some(String::from("first"))));

    let rest: Vec<_> = input.lines().map(|line| line.ok()).collect();
    assert_eq!(
        rest,
        [Some(String::from("second")), Some(String::from("third"))],
        "A view should continue from the channel's position, and strip \\r\\n too."
    );
    assert_eq!(input.read_line().ok(), Some(None), "The view should have consumed the channel.");

    let input = Input::from_string("ab");
    let mut chars = input.chars();
    let mut bytes = Input::bytes(&input);
    assert_eq!(chars.next().map(|c| c.ok()), Some(Some('a')));
    assert_eq!(bytes.next().map(|b| b.ok()), Some(Some(b'b')), "Views share one position.");
    assert!(chars.next().is_none());
    assert!(bytes.next().is_none());
}

#[test]
fn test_view_reports_closed_once() {
    let input = Input::from_string("a\nb\n");
    let mut lines = input.lines();
    input.close().expect("in-memory input closes cleanly");

    assert!(
        lines.next().is_some_and(|line| line.is_err_and(|e| e.is_closed())),
        "A closed channel must be reported, not treated as exhaustion."
    );
    assert!(lines.next().is_none(), "A view is exhausted after reporting an error.");
    assert!(lines.is_exhausted());
}

#[test]
fn test_read_chars() {
    let text = "añ€😀x";
    let chars: Vec<_> = Input::from_string(text).chars().map(|c| c.ok()).collect();
    assert_eq!(chars, text.chars().map(Some).collect::<Vec<_>>());

    let input = Input::from_bytes([0xFF, b'a']);
    assert!(input.read_char().is_err_and(|e| matches!(e, ChannelError::InvalidUtf8(_))));
    assert_eq!(input.read_char().ok(), Some('a'), "Invalid bytes should be skipped over.");
    assert!(input.read_char().is_err_and(|e| e.is_end_of_input()));

    let input = Input::from_bytes([0xE2, 0x82]);
    assert!(
        input.read_char().is_err_and(|e| matches!(e, ChannelError::InvalidUtf8(_))),
        "Input ending part way through a char is invalid, not the end of input."
    );
}

#[test]
fn test_small_buffer() {
    let input = ChannelOptions::new().capacity(2).input(&b"hello world\nsecond"[..]);
    assert_eq!(input.read_line().ok(), Some(Some(String::from("hello world"))));
    assert_eq!(input.read_byte().ok(), Some(b's'));

    let mut buf = [0; 8];
    assert_eq!(input.read(&mut buf).ok(), Some(1), "Buffered bytes are returned first.");
    assert_eq!(input.read_to_string().ok(), Some(String::from("cond")));

    assert_panics!({
        ChannelOptions::new().capacity(0);
    });
}

#[test]
fn test_seek_accounts_for_buffer() {
    let input = Input::from_string("0123456789");
    assert_eq!(input.read_byte().ok(), Some(b'0'));
    assert_eq!(
        input.seek(SeekFrom::Current(0)).ok(), Some(1),
        "Seeking should be relative to what was consumed, not what was buffered."
    );
    assert_eq!(input.read_byte().ok(), Some(b'1'));

    assert_eq!(input.seek(SeekFrom::Start(8)).ok(), Some(8));
    assert_eq!(input.read_to_string().ok(), Some(String::from("89")));
}

#[test]
fn test_seek_offset_overflow() {
    let input = Input::from_string("0123456789");
    assert_eq!(input.read_byte().ok(), Some(b'0'));
    assert!(
        input
            .seek(SeekFrom::Current(i64::MIN))
            .is_err_and(|e| matches!(e, ChannelError::Io(ref e) if e.kind() == io::ErrorKind::InvalidInput)),
        "An offset which can't be adjusted for the buffer should be rejected."
    );
    assert_eq!(input.read_byte().ok(), Some(b'1'), "A rejected seek shouldn't move the channel.");
}

#[test]
fn test_output_buffering() {
    let (output, buffer) = output_buffer();
    output.write_str("héllo").expect("in-memory writes succeed");
    output.write_char(' ').expect("in-memory writes succeed");
    output.write_byte(b'!').expect("in-memory writes succeed");
    assert!(buffer.is_empty(), "Small writes should stay buffered until flushed.");

    output.flush().expect("in-memory flushes succeed");
    assert_eq!(buffer.contents_lossy(), "héllo !");

    output.write_str(" bye").expect("in-memory writes succeed");
    drop(output);
    assert_eq!(buffer.contents_lossy(), "héllo ! bye", "Dropping should flush what's left.");

    let buffer = SharedBuffer::default();
    let output = ChannelOptions::new().capacity(4).output(buffer.clone());
    output.write_str("ab").expect("in-memory writes succeed");
    output.write_str("cdef").expect("in-memory writes succeed");
    assert_eq!(
        buffer.contents(), b"abcdef",
        "Writes larger than the buffer should flush it and go straight through."
    );
}

#[test]
fn test_close_reports_flush_failure() {
    let (mut resource, releases) = Tracked::new(b"");
    resource.fail_flush = true;
    let output = Output::new(resource);
    output.write_str("pending").expect("writes are buffered");

    assert!(
        output.close().is_err_and(|e| matches!(e, ReleaseError::Io(_))),
        "A failed flush should be reported by close."
    );
    assert!(!output.is_open(), "The channel should be closed despite the failure.");
    assert_eq!(releases.get(), 1, "The resource should be released despite the failure.");
    assert!(output.close().is_ok(), "Closing again should do nothing.");
    assert_eq!(releases.get(), 1);
}

/// A writer which fails a number of times before accepting anything.
struct FailingWriter {
    sink: SharedBuffer,
    failures: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(io::Error::other("write failed"));
        }
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Resource for FailingWriter {}

#[test]
fn test_failed_flush_keeps_buffer() {
    let sink = SharedBuffer::default();
    let output = Output::new(FailingWriter {
        sink: sink.clone(),
        failures: 1,
    });
    output.write_str("kept").expect("writes are buffered");

    assert!(output.flush().is_err_and(|e| matches!(e, ChannelError::Io(_))));
    assert!(sink.is_empty());
    output.flush().expect("the writer recovers after one failure");
    assert_eq!(sink.contents(), b"kept", "Accepted bytes shouldn't be lost to a failed flush.");
}

#[test]
fn test_output_seek() {
    let output = Output::new(io::Cursor::new(Vec::new()));
    output.write_str("hello").expect("in-memory writes succeed");
    assert_eq!(
        output.seek(SeekFrom::Current(0)).ok(), Some(5),
        "Buffered bytes should be written out before seeking."
    );

    let mut target = io::Cursor::new(Vec::new());
    let output = Output::new(&mut target);
    output.write_str("hello").expect("in-memory writes succeed");
    assert_eq!(output.seek(SeekFrom::Start(1)).ok(), Some(1));
    output.write_str("EL").expect("in-memory writes succeed");
    output.close().expect("in-memory output closes cleanly");
    assert!(output.seek(SeekFrom::Start(0)).is_err_and(|e| e.is_closed()));
    drop(output);
    assert_eq!(target.get_ref(), b"hELlo");
}

#[test]
fn test_output_release_on_last_drop() {
    let (resource, releases) = Tracked::new(b"");
    let output = Output::new(resource);
    let other = output.clone();
    other.write_str("x").expect("writes are buffered");

    drop(output);
    assert_eq!(releases.get(), 0, "A live handle should keep the channel open.");
    drop(other);
    assert_eq!(releases.get(), 1, "Dropping the last handle should release the resource.");

    let (resource, releases) = Tracked::new(b"");
    let output = Output::new(resource);
    output.close().expect("tracked output closes cleanly");
    drop(output);
    assert_eq!(releases.get(), 1, "Dropping a closed output must not release again.");
}

#[test]
fn test_view_close() {
    let (resource, releases) = Tracked::new(b"a\nb\nc");
    let input = Input::new(resource);
    let mut lines = input.lines();
    let mut bytes = Input::bytes(&input);
    assert_eq!(lines.next().map(|line| line.ok()), Some(Some(String::from("a"))));

    assert!(lines.close().is_ok());
    assert_eq!(releases.get(), 1, "Closing a view should release the resource.");
    assert!(!input.is_open(), "Closing a view should close the channel for every handle.");
    assert!(lines.is_exhausted(), "A closed view is exhausted.");
    assert!(lines.next().is_none());
    assert!(
        bytes.next().is_some_and(|b| b.is_err_and(|e| e.is_closed())),
        "Other views should see the channel as closed."
    );

    assert!(lines.close().is_ok(), "Closing again should do nothing.");
    let mut chars = input.chars();
    assert!(chars.close().is_ok());
    assert!(input.close().is_ok());
    drop((input, lines, bytes, chars));
    assert_eq!(releases.get(), 1, "The resource should be released exactly once.");
}

#[test]
fn test_files() {
    let path = std::env::temp_dir().join(format!("standard-ext-file-{}", std::process::id()));

    let output = Output::create(&path).expect("temp file can be created");
    output.write_str("first\nsecond").expect("temp file is writable");
    output.close().expect("closing the temp file succeeds");

    let input = Input::open(&path).expect("temp file can be opened");
    let lines: Vec<_> = input.lines().map(|line| line.ok()).collect();
    assert_eq!(lines, [Some(String::from("first")), Some(String::from("second"))]);
    input.close().expect("closing the temp file succeeds");

    std::fs::remove_file(&path).expect("temp file can be removed");
    assert!(
        Input::open(&path).is_err_and(|e| e.kind() == io::ErrorKind::NotFound),
        "Opening a missing file should fail."
    );
}

#[test]
fn test_std_streams() {
    let out = stdout();
    assert!(out.is_open());
    out.write_str("").expect("stdout accepts writes");
    out.close().expect("releasing stdout flushes it");
    assert!(out.write_str("x").is_err_and(|e| e.is_closed()));

    let err = stderr();
    err.flush().expect("stderr can be flushed");
    err.close().expect("stderr closes cleanly");

    let input = stdin();
    assert!(input.is_open());
    input.close().expect("stdin closes cleanly");
    assert!(input.read_byte().is_err_and(|e| e.is_closed()));
}

#[test]
fn test_std_io_interop() {
    let mut input = Input::from_string("interop");
    let mut text = String::new();
    Read::read_to_string(&mut input, &mut text).expect("in-memory reads succeed");
    assert_eq!(text, "interop");

    input.close().expect("in-memory input closes cleanly");
    let error = Read::read(&mut input, &mut [0; 1]).expect_err("the channel is closed");
    assert_eq!(error.kind(), io::ErrorKind::NotConnected);

    let (mut output, buffer) = output_buffer();
    write!(output, "{}-{}", 4, 2).expect("in-memory writes succeed");
    Write::flush(&mut output).expect("in-memory flushes succeed");
    assert_eq!(buffer.contents(), b"4-2");
}

#[cfg(all(feature = "fd", target_os = "linux"))]
#[test]
fn test_fd_round_trip() {
    let path = std::env::temp_dir().join(format!("standard-ext-fd-{}", std::process::id()));

    let output = Output::new(Fd::create(&path).expect("temp file can be created"));
    output.write_str("line one\nline two\n").expect("temp file is writable");
    output.close().expect("closing the temp file succeeds");

    let input = Input::new(Fd::open_read(&path).expect("temp file can be opened"));
    let lines: Vec<_> = input.lines().map(|line| line.ok()).collect();
    assert_eq!(lines, [Some(String::from("line one")), Some(String::from("line two"))]);

    assert_eq!(input.seek(SeekFrom::Start(5)).ok(), Some(5));
    assert_eq!(input.read_line().ok(), Some(Some(String::from("one"))));
    input.close().expect("closing the temp file succeeds");

    let fd = Fd::open_read(&path).expect("temp file can be opened");
    assert!(fd.as_raw() >= 0);
    assert!(fd.close().is_ok(), "Explicitly closing an Fd should succeed.");

    std::fs::remove_file(&path).expect("temp file can be removed");
}
