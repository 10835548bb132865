//! Easylex Core - rule-driven lexical scanning engine
//!
//! Turns a pull-based byte stream into tokens using an ordered list of
//! matchers. Whitespace is skipped, positions are tracked, and input no rule
//! accepts is reported as the shortest unrecognized span.
//!
//! No grammars, no backtracking across tokens: this is meant to sit under a
//! hand-written parser.

pub mod builder;
pub mod error;
pub mod input;
pub mod lexer;
pub mod rules;
pub mod token;
pub mod token_type;

pub use builder::LexerBuilder;
pub use error::{LexerError, RuleError, UnknownTokenError};
pub use input::{ByteSource, IoSource, Position, ReadStatus};
pub use lexer::{Lexer, Tokens};
pub use rules::{build_matcher, RuleSet};
pub use token::{Token, TokenId};
pub use token_type::{PatternTokenType, RegexpTokenType, SharedTokenType, TokenType};

// Re-export config types from easylex-config
pub use easylex_config::{BufferConfig, LexerConfig, MatcherConfig, RuleSetConfig};
