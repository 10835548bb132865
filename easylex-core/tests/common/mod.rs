//! Test byte sources
//!
//! Sources that misbehave in the ways real streams do: short reads, reads
//! that return nothing for a while, and reads that fail.

#![allow(dead_code)]

use easylex_core::{ByteSource, ReadStatus};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// One scripted read
pub enum Step {
    Data(&'static [u8]),
    /// Zero bytes, more later
    Pending,
    Fail(io::ErrorKind),
}

/// Replays a fixed list of reads, then reports exhaustion
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    pub reads: usize,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            reads: 0,
        }
    }
}

impl ByteSource for ScriptedSource {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        self.reads += 1;
        match self.steps.pop_front() {
            None => Ok(ReadStatus::exhausted()),
            Some(Step::Pending) => Ok(ReadStatus::pending()),
            Some(Step::Fail(kind)) => Err(io::Error::new(kind, "scripted failure")),
            Some(Step::Data(bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                if n < bytes.len() {
                    self.steps.push_front(Step::Data(&bytes[n..]));
                }
                Ok(ReadStatus::data(n))
            }
        }
    }
}

/// Hands out at most `step` bytes per read
pub struct TrickleSource {
    data: Vec<u8>,
    offset: usize,
    step: usize,
}

impl TrickleSource {
    pub fn new(data: impl Into<Vec<u8>>, step: usize) -> Self {
        Self {
            data: data.into(),
            offset: 0,
            step,
        }
    }
}

impl ByteSource for TrickleSource {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        if self.offset >= self.data.len() {
            return Ok(ReadStatus::exhausted());
        }
        let n = self.step.min(buf.len()).min(self.data.len() - self.offset);
        buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
        self.offset += n;
        Ok(ReadStatus::data(n))
    }
}

/// Source fed by the test while the lexer holds it
///
/// Reads return whatever was fed so far; with nothing fed the read is
/// pending until [`FeedHandle::close`] is called.
pub struct FeedSource {
    state: Rc<RefCell<Feed>>,
}

#[derive(Default)]
struct Feed {
    bytes: VecDeque<u8>,
    closed: bool,
}

/// Test-side end of a [`FeedSource`]
#[derive(Clone)]
pub struct FeedHandle {
    state: Rc<RefCell<Feed>>,
}

impl FeedSource {
    pub fn new() -> (Self, FeedHandle) {
        let state = Rc::new(RefCell::new(Feed::default()));
        (
            Self {
                state: state.clone(),
            },
            FeedHandle { state },
        )
    }
}

impl FeedHandle {
    pub fn feed(&self, text: &str) {
        self.state.borrow_mut().bytes.extend(text.bytes());
    }

    pub fn close(&self) {
        self.state.borrow_mut().closed = true;
    }
}

impl ByteSource for FeedSource {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        let mut feed = self.state.borrow_mut();
        if feed.bytes.is_empty() {
            return Ok(if feed.closed {
                ReadStatus::exhausted()
            } else {
                ReadStatus::pending()
            });
        }
        let n = buf.len().min(feed.bytes.len());
        for (slot, byte) in buf.iter_mut().zip(feed.bytes.drain(..n)) {
            *slot = byte;
        }
        Ok(ReadStatus::data(n))
    }
}

/// Never produces anything and never finishes
pub struct SilentSource {
    pub reads: usize,
}

impl ByteSource for SilentSource {
    fn read_chunk(&mut self, _buf: &mut [u8]) -> io::Result<ReadStatus> {
        self.reads += 1;
        Ok(ReadStatus::pending())
    }
}

/// Literals of every token until end of input, panicking on errors
pub fn literals<S: ByteSource>(lexer: &mut easylex_core::Lexer<S>) -> Vec<String> {
    lexer
        .tokens()
        .map(|token| token.expect("input should tokenize").literal)
        .collect()
}
