//! Easylex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no scanning logic or global state.
//! The core crate turns these descriptions into live matchers; keeping them
//! here lets rule sets be stored as JSON and shared between tools.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Classification id reserved for the catch-all rule (and, in the reference
/// configuration, for whitespace)
pub const OTHER_ID: i32 = -1;
pub const IDENT_ID: i32 = -2;
pub const NUMBER_ID: i32 = -3;
pub const STRING_ID: i32 = -4;

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid lexer configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Lookahead buffer sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Refill when fewer than this many bytes are buffered
    pub low_water_mark: usize,
    /// Upper bound on bytes pulled from the source per refill
    pub chunk_size: usize,
}

impl BufferConfig {
    /// Chunk size actually used for reads. A zero-length read buffer would make
    /// every read look like end of input, so it is clamped to one byte.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            low_water_mark: 1024,
            chunk_size: 2048,
        }
    }
}

/// Description of a single matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatcherConfig {
    /// Literal alternatives, first listed prefix wins
    Pattern { id: i32, patterns: Vec<String> },
    /// Regular expression, anchored at the start of the remaining input
    Regex { id: i32, pattern: String },
}

impl MatcherConfig {
    pub fn id(&self) -> i32 {
        match self {
            MatcherConfig::Pattern { id, .. } | MatcherConfig::Regex { id, .. } => *id,
        }
    }
}

/// Whitespace matcher plus the ordered rule list
///
/// Order matters: the first rule that matches wins, so a catch-all rule has
/// to come last or it shadows everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    pub whitespace: Option<MatcherConfig>,
    pub rules: Vec<MatcherConfig>,
}

/// Top-level lexer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    pub buffer: BufferConfig,
    /// `None` selects the reference rule set
    pub rules: Option<RuleSetConfig>,
}

impl LexerConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
