//! Tokens and classification ids

use crate::input::Position;
use easylex_config::{IDENT_ID, NUMBER_ID, OTHER_ID, STRING_ID};
use std::fmt;

/// Classification tag of a token
///
/// Not a key: several matchers may share an id (say, every operator rule
/// reporting `OPERATOR`). Negative values are reserved for the built-in ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub i32);

impl TokenId {
    pub const OTHER: TokenId = TokenId(OTHER_ID);
    pub const IDENT: TokenId = TokenId(IDENT_ID);
    pub const NUMBER: TokenId = TokenId(NUMBER_ID);
    pub const STRING: TokenId = TokenId(STRING_ID);

    /// Name of a built-in id
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            TokenId::OTHER => Some("OTHER"),
            TokenId::IDENT => Some("IDENT"),
            TokenId::NUMBER => Some("NUMBER"),
            TokenId::STRING => Some("STRING"),
            _ => None,
        }
    }
}

impl From<i32> for TokenId {
    fn from(value: i32) -> Self {
        TokenId(value)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN({})", self.0),
        }
    }
}

/// A matched, classified span of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    /// Exact matched text
    pub literal: String,
    /// Capture groups in order, without the whole match; empty for literal matchers
    pub submatches: Vec<String>,
    /// Where the literal starts
    pub position: Position,
}

impl Token {
    pub fn new(id: TokenId, literal: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            literal: literal.into(),
            submatches: Vec::new(),
            position,
        }
    }

    pub fn with_submatches(mut self, submatches: Vec<String>) -> Self {
        self.submatches = submatches;
        self
    }

    /// Position just past the literal
    pub fn end(&self) -> Position {
        self.position.advanced(&self.literal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}({:?})", self.position, self.id, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_id_names() {
        assert_eq!(TokenId::OTHER.to_string(), "OTHER");
        assert_eq!(TokenId::IDENT.to_string(), "IDENT");
        assert_eq!(TokenId::NUMBER.to_string(), "NUMBER");
        assert_eq!(TokenId::STRING.to_string(), "STRING");
    }

    #[test]
    fn test_user_id_renders_unknown() {
        assert_eq!(TokenId(7).to_string(), "UNKNOWN(7)");
        assert_eq!(TokenId(-9).to_string(), "UNKNOWN(-9)");
        assert_eq!(TokenId::from(0).name(), None);
    }

    #[test]
    fn test_token_end_spans_lines() {
        let token = Token::new(TokenId::STRING, "\"a\nbc\"", Position::new(3, 4, 20));
        assert_eq!(token.end(), Position::new(4, 3, 26));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenId::IDENT, "foo", Position::new(0, 2, 2));
        assert_eq!(token.to_string(), "1:3 IDENT(\"foo\")");
    }
}
