//! Source position tracking
//!
//! Positions are zero-based internally and rendered one-based:
//! - line/column: column counts Unicode scalar values since the last `'\n'`
//! - offset: byte offset into the whole input, for seeking

use std::fmt;

/// Cursor into the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number, 0-based
    pub line: usize,
    /// Column number, 0-based, in characters
    pub column: usize,
    /// Byte offset, 0-based, UTF-8
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Start of input
    pub fn start() -> Self {
        Self::default()
    }

    /// Advance past one character
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.offset += c.len_utf8();
    }

    /// Position after consuming `text` from here. Line terminators anywhere in
    /// `text` are honored, so a multi-line literal lands on the right line.
    pub fn advanced(mut self, text: &str) -> Self {
        for c in text.chars() {
            self.advance(c);
        }
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
