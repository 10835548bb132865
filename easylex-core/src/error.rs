//! Lexer error types

use crate::input::Position;
use crate::token::TokenId;
use std::fmt;
use std::io;

/// Input that no configured rule or whitespace matcher accepts
///
/// `literal` is the shortest unrecognized prefix: it ends where some rule
/// (or the whitespace matcher) would match again. The lexer's buffer and
/// cursor are left as they were, so a caller may skip the literal and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenError {
    pub literal: String,
    pub position: Position,
}

impl UnknownTokenError {
    pub fn new(literal: impl Into<String>, position: Position) -> Self {
        Self {
            literal: literal.into(),
            position,
        }
    }
}

// Consumers match on this exact shape; keep it stable.
impl fmt::Display for UnknownTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:UnknownTokenError: {:?}",
            self.position.line + 1,
            self.position.column + 1,
            self.literal
        )
    }
}

impl std::error::Error for UnknownTokenError {}

/// Errors returned by `Lexer::peek` / `Lexer::scan`
#[derive(Debug, thiserror::Error)]
pub enum LexerError {
    #[error(transparent)]
    UnknownToken(#[from] UnknownTokenError),

    /// The byte source failed. The read is not retried.
    #[error("{position}:ReadError: {source}")]
    Read {
        position: Position,
        #[source]
        source: io::Error,
    },
}

impl LexerError {
    /// Cursor position when the error was raised
    pub fn position(&self) -> Position {
        match self {
            LexerError::UnknownToken(e) => e.position,
            LexerError::Read { position, .. } => *position,
        }
    }

    pub fn as_unknown_token(&self) -> Option<&UnknownTokenError> {
        match self {
            LexerError::UnknownToken(e) => Some(e),
            LexerError::Read { .. } => None,
        }
    }
}

/// Errors raised while building matchers
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule {id}: invalid regular expression {pattern:?}: {source}")]
    InvalidRegex {
        id: TokenId,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule {id}: pattern list is empty")]
    EmptyPatterns { id: TokenId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_token_error_format() {
        let err = UnknownTokenError::new("test", Position::new(0, 1, 1));
        assert_eq!(err.to_string(), "1:2:UnknownTokenError: \"test\"");
    }

    #[test]
    fn test_unknown_token_error_escapes_literal() {
        let err = UnknownTokenError::new("a\"b\n", Position::new(4, 0, 50));
        assert_eq!(err.to_string(), "5:1:UnknownTokenError: \"a\\\"b\\n\"");
    }

    #[test]
    fn test_lexer_error_is_transparent_for_unknown_tokens() {
        let err: LexerError = UnknownTokenError::new("@@", Position::new(0, 2, 2)).into();
        assert_eq!(err.to_string(), "1:3:UnknownTokenError: \"@@\"");
        assert_eq!(err.position(), Position::new(0, 2, 2));
        assert_eq!(err.as_unknown_token().unwrap().literal, "@@");
    }

    #[test]
    fn test_read_error() {
        let err = LexerError::Read {
            position: Position::new(1, 4, 10),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert_eq!(err.to_string(), "2:5:ReadError: pipe closed");
        assert!(err.as_unknown_token().is_none());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::EmptyPatterns { id: TokenId(3) };
        assert_eq!(err.to_string(), "rule UNKNOWN(3): pattern list is empty");
    }
}
