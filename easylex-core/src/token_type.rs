//! Token matchers
//!
//! A [`TokenType`] answers one question: does the remaining input start with
//! one of my tokens? `find` is a pure query. It must not keep state between
//! calls, because the lexer asks the same matcher about the same input more
//! than once (peek, then scan, then error synthesis).

use crate::error::RuleError;
use crate::input::Position;
use crate::token::{Token, TokenId};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Rule for producing a token
pub trait TokenType: fmt::Debug + Send + Sync {
    /// Classification reported on every token this rule produces
    fn id(&self) -> TokenId;

    /// Token starting at the very front of `input`, positioned at `position`.
    /// Never searches forward.
    fn find(&self, input: &str, position: Position) -> Option<Token>;
}

/// Matchers are shared between the lexer, rule sets and callers
pub type SharedTokenType = Arc<dyn TokenType>;

/// Dictionary matcher: the first listed string that prefixes the input wins
///
/// List longer alternatives first (`"=="` before `"="`), since the
/// first hit is taken, not the longest. Empty alternatives never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTokenType {
    id: TokenId,
    patterns: Vec<String>,
}

impl PatternTokenType {
    pub fn new<I, P>(id: TokenId, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            id,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl TokenType for PatternTokenType {
    fn id(&self) -> TokenId {
        self.id
    }

    fn find(&self, input: &str, position: Position) -> Option<Token> {
        self.patterns
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .find(|pattern| input.starts_with(pattern.as_str()))
            .map(|pattern| Token::new(self.id, pattern.as_str(), position))
    }
}

impl fmt::Display for PatternTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

/// Regular-expression matcher
///
/// Patterns are anchored to the start of the input at construction: `"[0-9]+"`
/// is compiled as `"^(?:[0-9]+)"`. Patterns that already begin with `^` or
/// `\A` are compiled as given.
#[derive(Debug, Clone)]
pub struct RegexpTokenType {
    id: TokenId,
    re: Regex,
}

impl RegexpTokenType {
    pub fn new(id: TokenId, pattern: &str) -> Result<Self, RuleError> {
        let anchored = anchor(pattern);
        let re = Regex::new(&anchored).map_err(|source| RuleError::InvalidRegex {
            id,
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { id, re })
    }

    /// The compiled (anchored) pattern
    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }
}

fn anchor(pattern: &str) -> String {
    if pattern.starts_with('^') || pattern.starts_with("\\A") {
        pattern.to_string()
    } else {
        format!("^(?:{pattern})")
    }
}

impl TokenType for RegexpTokenType {
    fn id(&self) -> TokenId {
        self.id
    }

    fn find(&self, input: &str, position: Position) -> Option<Token> {
        // group 0 only: skip capture bookkeeping
        if self.re.captures_len() == 1 {
            return self
                .re
                .find(input)
                .map(|m| Token::new(self.id, m.as_str(), position));
        }

        let caps = self.re.captures(input)?;
        let literal = caps.get(0)?.as_str();
        // groups that did not participate report ""
        let submatches = caps
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        Some(Token::new(self.id, literal, position).with_submatches(submatches))
    }
}

impl fmt::Display for RegexpTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
