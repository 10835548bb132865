//! Lexer construction
//!
//! Everything the lexer needs is passed in here; there is no package-level
//! default state to mutate.

use crate::error::RuleError;
use crate::input::{ByteSource, IoSource};
use crate::lexer::Lexer;
use crate::rules::RuleSet;
use crate::token_type::SharedTokenType;
use easylex_config::{BufferConfig, LexerConfig};
use easylex_log::Logger;
use std::io::Read;
use std::sync::Arc;

/// Builder for [`Lexer`]
///
/// ```
/// use easylex_core::{IoSource, LexerBuilder};
/// use easylex_config::BufferConfig;
///
/// let mut lexer = LexerBuilder::new()
///     .buffer(BufferConfig { low_water_mark: 64, chunk_size: 128 })
///     .build(IoSource::new("a b".as_bytes()));
/// assert_eq!(lexer.scan().unwrap().unwrap().literal, "a");
/// ```
#[derive(Debug, Clone)]
pub struct LexerBuilder {
    rules: RuleSet,
    buffer: BufferConfig,
    logger: Arc<Logger>,
}

impl LexerBuilder {
    /// Reference rules, reference buffer sizes, noop logger
    pub fn new() -> Self {
        Self {
            rules: RuleSet::reference(),
            buffer: BufferConfig::default(),
            logger: Logger::noop(),
        }
    }

    /// Builder from a loaded configuration; compiles the rule set if one is given
    pub fn from_config(config: &LexerConfig) -> Result<Self, RuleError> {
        let rules = match &config.rules {
            Some(rules) => RuleSet::from_config(rules)?,
            None => RuleSet::reference(),
        };
        Ok(Self::new().rules(rules).buffer(config.buffer))
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn whitespace(mut self, whitespace: Option<SharedTokenType>) -> Self {
        self.rules.whitespace = whitespace;
        self
    }

    pub fn buffer(mut self, buffer: BufferConfig) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn build<S: ByteSource>(self, source: S) -> Lexer<S> {
        Lexer::from_parts(source, self.rules, self.buffer, self.logger)
    }

    pub fn build_reader<R: Read>(self, reader: R) -> Lexer<IoSource<R>> {
        self.build(IoSource::new(reader))
    }
}

impl Default for LexerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
