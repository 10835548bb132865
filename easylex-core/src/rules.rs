//! Rule sets: the whitespace matcher plus the ordered rule list
//!
//! Order is part of the contract. The lexer takes the first rule that
//! matches, so a catch-all rule (like the reference `OTHER` rule, which takes
//! any single character) must be last: anything listed after it is never
//! reached.

use crate::error::RuleError;
use crate::token::TokenId;
use crate::token_type::{PatternTokenType, RegexpTokenType, SharedTokenType};
use easylex_config::{MatcherConfig, RuleSetConfig};
use once_cell::sync::Lazy;
use std::sync::Arc;

pub const IDENT_PATTERN: &str = "[a-zA-Z_][a-zA-Z0-9_]*";
pub const NUMBER_PATTERN: &str = r"[0-9]+(?:\.[0-9]+)?";
pub const STRING_PATTERN: &str = r#""([^"]*)""#;
pub const OTHER_PATTERN: &str = ".";
pub const WHITESPACE_PATTERNS: [&str; 4] = [" ", "\t", "\r", "\n"];

static REFERENCE: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    whitespace: Some(Arc::new(PatternTokenType::new(
        TokenId::OTHER,
        WHITESPACE_PATTERNS,
    ))),
    rules: vec![
        reference_regex(TokenId::IDENT, IDENT_PATTERN),
        reference_regex(TokenId::NUMBER, NUMBER_PATTERN),
        reference_regex(TokenId::STRING, STRING_PATTERN),
        reference_regex(TokenId::OTHER, OTHER_PATTERN),
    ],
});

fn reference_regex(id: TokenId, pattern: &str) -> SharedTokenType {
    Arc::new(RegexpTokenType::new(id, pattern).expect("reference patterns are valid"))
}

/// Whitespace matcher plus ordered rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// Skipped before every match attempt; never emitted as a token
    pub whitespace: Option<SharedTokenType>,
    pub rules: Vec<SharedTokenType>,
}

impl RuleSet {
    pub fn new(whitespace: Option<SharedTokenType>, rules: Vec<SharedTokenType>) -> Self {
        Self { whitespace, rules }
    }

    /// Reference configuration: whitespace is space, tab, CR and LF; rules are
    /// IDENT, NUMBER, STRING and a single-character OTHER catch-all, in that
    /// order. Cheap to call: matchers are compiled once and shared.
    pub fn reference() -> Self {
        REFERENCE.clone()
    }

    pub fn from_config(config: &RuleSetConfig) -> Result<Self, RuleError> {
        let whitespace = config.whitespace.as_ref().map(build_matcher).transpose()?;
        let rules = config
            .rules
            .iter()
            .map(build_matcher)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { whitespace, rules })
    }

    /// Append a rule; it is tried after every rule already present
    pub fn with_rule(mut self, rule: SharedTokenType) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_whitespace(mut self, whitespace: Option<SharedTokenType>) -> Self {
        self.whitespace = whitespace;
        self
    }
}

/// Compile one matcher description
pub fn build_matcher(config: &MatcherConfig) -> Result<SharedTokenType, RuleError> {
    match config {
        MatcherConfig::Pattern { id, patterns } => {
            if patterns.is_empty() {
                return Err(RuleError::EmptyPatterns { id: TokenId(*id) });
            }
            Ok(Arc::new(PatternTokenType::new(TokenId(*id), patterns.iter().cloned())))
        }
        MatcherConfig::Regex { id, pattern } => {
            Ok(Arc::new(RegexpTokenType::new(TokenId(*id), pattern)?))
        }
    }
}
