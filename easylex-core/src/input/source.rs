//! Byte source contract
//!
//! The lexer pulls input through [`ByteSource`], which reports how many bytes
//! a read produced and whether the source is exhausted. Keeping those two
//! apart is what lets the lexer tell "nothing right now" from "nothing ever".

use std::io::{self, Read};

/// Outcome of one read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadStatus {
    /// Bytes written to the front of the caller's buffer
    pub read: usize,
    /// No further bytes will ever be produced
    pub exhausted: bool,
}

impl ReadStatus {
    pub fn data(read: usize) -> Self {
        Self {
            read,
            exhausted: false,
        }
    }

    pub fn exhausted() -> Self {
        Self {
            read: 0,
            exhausted: true,
        }
    }

    /// Zero bytes, but more may come later
    pub fn pending() -> Self {
        Self {
            read: 0,
            exhausted: false,
        }
    }
}

/// Pull-based byte stream
///
/// The lexer never closes a source; callers that need the stream back can
/// pass `&mut source` or use `Lexer::into_source`.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes into the front of `buf`
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        (**self).read_chunk(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        (**self).read_chunk(buf)
    }
}

/// Adapter for [`std::io::Read`]
///
/// - `Ok(0)` on a non-empty buffer means exhausted
/// - `Interrupted` is retried
/// - `WouldBlock` is reported as zero bytes, not exhausted
/// - any other error is returned to the lexer, which surfaces it
#[derive(Debug)]
pub struct IoSource<R> {
    reader: R,
}

impl<R: Read> IoSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        if buf.is_empty() {
            return Ok(ReadStatus::pending());
        }
        loop {
            match self.reader.read(buf) {
                Ok(0) => return Ok(ReadStatus::exhausted()),
                Ok(n) => return Ok(ReadStatus::data(n)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(ReadStatus::pending()),
                Err(e) => return Err(e),
            }
        }
    }
}
