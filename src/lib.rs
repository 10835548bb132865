//! Easylex - rule-driven streaming lexical scanner
//!
//! Splits text into classified tokens using an ordered list of matchers,
//! skipping whitespace and tracking line/column positions. Meant as the
//! front end of a hand-written parser.
//!
//! # Architecture
//!
//! ```text
//! easylex-config/  - Pure configuration data (buffer sizes, rule descriptions)
//! easylex-log/     - Explicit-handle logging with a ring buffer sink
//! easylex-core/    - Matchers, rule sets and the scanning engine
//! ```
//!
//! # Quick Start
//!
//! ```
//! use easylex::{tokenize, TokenId};
//!
//! let tokens = tokenize("x = 42").unwrap();
//! assert_eq!(tokens[0].id, TokenId::IDENT);
//! assert_eq!(tokens[2].literal, "42");
//! ```

use std::io::Read;
use std::sync::Arc;
use thiserror::Error;

pub use easylex_config::{
    BufferConfig, ConfigError, LexerConfig, MatcherConfig, RuleSetConfig, IDENT_ID, NUMBER_ID,
    OTHER_ID, STRING_ID,
};
pub use easylex_core::{
    build_matcher, ByteSource, IoSource, Lexer, LexerBuilder, LexerError, PatternTokenType,
    Position, ReadStatus, RegexpTokenType, RuleError, RuleSet, SharedTokenType, Token, TokenId,
    TokenType, Tokens, UnknownTokenError,
};
pub use easylex_log::{Level, LogConfig, LogRingBuffer, Logger};

/// Anything that can go wrong between a configuration file and a token list
#[derive(Error, Debug)]
pub enum EasylexError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

impl EasylexError {
    /// Position of the failure, when it happened while scanning
    pub fn position(&self) -> Option<Position> {
        match self {
            EasylexError::Lexer(e) => Some(e.position()),
            _ => None,
        }
    }
}

/// Scan all of `input` with the reference rules
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::from_reader(input.as_bytes()).tokens().collect()
}

/// Scan a whole reader with the reference rules
///
/// A reader that reports `WouldBlock` ends the token list early; use a
/// [`Lexer`] directly to resume such sources.
pub fn tokenize_reader<R: Read>(reader: R) -> Result<Vec<Token>, LexerError> {
    Lexer::from_reader(reader).tokens().collect()
}

/// Scan all of `input` with the rules and buffer sizes of a JSON configuration
pub fn tokenize_with_config(config_json: &str, input: &str) -> Result<Vec<Token>, EasylexError> {
    let config = LexerConfig::from_json(config_json)?;
    let mut lexer = LexerBuilder::from_config(&config)?.build_reader(input.as_bytes());
    Ok(lexer.tokens().collect::<Result<Vec<_>, _>>()?)
}

/// Lexer over `reader` configured from a JSON file, logging to `logger`
pub fn lexer_from_file<R: Read>(
    path: impl AsRef<std::path::Path>,
    reader: R,
    logger: Arc<Logger>,
) -> Result<Lexer<IoSource<R>>, EasylexError> {
    let config = LexerConfig::from_json_file(path)?;
    Ok(LexerBuilder::from_config(&config)?
        .logger(logger)
        .build_reader(reader))
}
