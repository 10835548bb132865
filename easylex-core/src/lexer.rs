//! Scanning engine
//!
//! Pulls bytes from a [`ByteSource`] into a lookahead buffer and matches the
//! configured rules against the front of it.
//!
//! # Example
//!
//! ```
//! use easylex_core::{Lexer, TokenId};
//!
//! let mut lexer = Lexer::from_reader("x = 42".as_bytes());
//! let token = lexer.scan().unwrap().unwrap();
//! assert_eq!(token.id, TokenId::IDENT);
//! assert_eq!(token.literal, "x");
//! ```

use crate::builder::LexerBuilder;
use crate::error::{LexerError, UnknownTokenError};
use crate::input::{ByteSource, IoSource, Position};
use crate::rules::RuleSet;
use crate::token::Token;
use crate::token_type::SharedTokenType;
use easylex_config::BufferConfig;
use easylex_log::{debug, error, trace, warn, Logger};
use std::io::Read;
use std::sync::Arc;

/// Rule-driven lexer over a byte source
///
/// Single-threaded: `peek` and `scan` mutate the buffer and cursor in place.
/// The lexer never closes its source; get it back with [`Lexer::into_source`]
/// or lend it as `&mut source`.
#[derive(Debug)]
pub struct Lexer<S> {
    source: S,
    /// Decoded input not consumed yet
    buf: String,
    /// Undecoded tail of the last read (a UTF-8 sequence split across reads)
    pending: Vec<u8>,
    scratch: Vec<u8>,
    exhausted: bool,
    /// Bumped whenever `buf` grows
    generation: u64,
    /// Consumed text of the current line
    loaded_line: String,
    cursor: Position,
    whitespace: Option<SharedTokenType>,
    rules: Vec<SharedTokenType>,
    buffer: BufferConfig,
    logger: Arc<Logger>,
}

impl<S: ByteSource> Lexer<S> {
    /// Lexer with the reference rule set and buffer sizes
    pub fn new(source: S) -> Self {
        LexerBuilder::new().build(source)
    }

    /// Lexer with the reference configuration and an explicit logger
    pub fn with_logger(source: S, logger: Arc<Logger>) -> Self {
        LexerBuilder::new().logger(logger).build(source)
    }

    /// Lexer with a custom rule set
    pub fn with_rules(source: S, rules: RuleSet) -> Self {
        LexerBuilder::new().rules(rules).build(source)
    }

    pub(crate) fn from_parts(
        source: S,
        rules: RuleSet,
        buffer: BufferConfig,
        logger: Arc<Logger>,
    ) -> Self {
        trace!(
            logger,
            "Creating lexer: {} rules, whitespace={}, low_water_mark={}, chunk_size={}",
            rules.rules.len(),
            rules.whitespace.is_some(),
            buffer.low_water_mark,
            buffer.chunk_size
        );
        Self {
            source,
            buf: String::new(),
            pending: Vec::new(),
            scratch: vec![0; buffer.effective_chunk_size()],
            exhausted: false,
            generation: 0,
            loaded_line: String::new(),
            cursor: Position::start(),
            whitespace: rules.whitespace,
            rules: rules.rules,
            buffer,
            logger,
        }
    }

    /// Next token without consuming it
    ///
    /// Whitespace in front of the token is discarded as a side effect.
    ///
    /// Returns `Ok(None)` when no input is buffered. That is end of input if
    /// [`Lexer::is_exhausted`] is true, otherwise the source just had nothing
    /// to give yet.
    pub fn peek(&mut self) -> Result<Option<Token>, LexerError> {
        loop {
            self.skip_whitespace()?;
            match self.try_rules()? {
                Attempt::Matched(token) => return Ok(Some(token)),
                Attempt::Grew => {
                    trace!(self.logger, "Input arrived while matching, retrying from the first rule");
                }
                Attempt::NoMatch => break,
            }
        }

        if self.buf.is_empty() {
            return Ok(None);
        }

        let err = self.unknown_token();
        warn!(self.logger, "Unknown token at {}: {:?}", err.position, err.literal);
        Err(err.into())
    }

    /// Next token, consumed
    ///
    /// Same result as [`Lexer::peek`]; on success the buffer and cursor move
    /// past the literal. On error nothing beyond whitespace is consumed.
    pub fn scan(&mut self) -> Result<Option<Token>, LexerError> {
        let token = self.peek()?;
        if let Some(token) = &token {
            self.consume(&token.literal);
            debug!(
                self.logger,
                "Produced token: id={}, literal={:?}, line={}, column={}",
                token.id,
                token.literal,
                token.position.line,
                token.position.column
            );
        }
        Ok(token)
    }

    /// Text of the line the cursor is on: what was consumed of it so far plus
    /// the buffered rest up to the next `'\n'`. Meant for error context.
    pub fn last_line(&mut self) -> Result<String, LexerError> {
        self.ensure_buffered()?;

        let rest = match self.buf.find('\n') {
            Some(end) => &self.buf[..end],
            None => self.buf.as_str(),
        };
        Ok(format!("{}{}", self.loaded_line, rest))
    }

    /// Consume `literal` if the buffer starts with it, e.g. the literal of an
    /// [`UnknownTokenError`] to resume scanning after it
    pub fn skip_literal(&mut self, literal: &str) -> bool {
        if literal.is_empty() || !self.buf.starts_with(literal) {
            return false;
        }
        debug!(self.logger, "Skipping {:?} at {}", literal, self.cursor);
        self.consume(literal);
        true
    }

    /// Iterator over scanned tokens; stops after the first error
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens {
            lexer: self,
            failed: false,
        }
    }

    /// Position of the next unconsumed character
    pub fn position(&self) -> Position {
        self.cursor
    }

    /// True once the source has reported that no more bytes will come
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Input pulled from the source but not consumed yet
    pub fn buffered(&self) -> &str {
        &self.buf
    }

    pub fn rules(&self) -> &[SharedTokenType] {
        &self.rules
    }

    /// Replace the rule list; takes effect on the next `peek`/`scan`
    pub fn set_rules(&mut self, rules: Vec<SharedTokenType>) {
        debug!(self.logger, "Replacing rules: {} -> {}", self.rules.len(), rules.len());
        self.rules = rules;
    }

    pub fn whitespace(&self) -> Option<&SharedTokenType> {
        self.whitespace.as_ref()
    }

    /// `None` disables whitespace skipping
    pub fn set_whitespace(&mut self, whitespace: Option<SharedTokenType>) {
        self.whitespace = whitespace;
    }

    pub fn set_rule_set(&mut self, rules: RuleSet) {
        self.set_whitespace(rules.whitespace);
        self.set_rules(rules.rules);
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Hand the source back. Buffered but unconsumed input is dropped.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Rules in order against the current buffer. If a refill between two
    /// rules brings in more input, earlier rules were judged on a shorter
    /// buffer and the whole pass has to be redone.
    fn try_rules(&mut self) -> Result<Attempt, LexerError> {
        let generation = self.generation;

        for index in 0..self.rules.len() {
            self.skip_whitespace()?;
            self.ensure_buffered()?;
            if self.generation != generation {
                return Ok(Attempt::Grew);
            }

            if let Some(token) = self.match_rule(index)? {
                return Ok(Attempt::Matched(token));
            }
        }

        if self.generation != generation {
            return Ok(Attempt::Grew);
        }
        Ok(Attempt::NoMatch)
    }

    /// Try one rule against the buffer. A match that runs into the end of the
    /// buffered input may continue in bytes not read yet, so the buffer is
    /// extended and the rule retried until the match stops short of the end
    /// or the source has nothing more.
    fn match_rule(&mut self, index: usize) -> Result<Option<Token>, LexerError> {
        loop {
            let found = self.rules[index]
                .find(&self.buf, self.cursor)
                .filter(|token| consumes(&self.buf, token));
            let Some(token) = found else {
                return Ok(None);
            };

            if self.exhausted || token.literal.len() < self.buf.len() {
                return Ok(Some(token));
            }
            if self.fill_chunk()? == 0 {
                return Ok(Some(token));
            }
            trace!(self.logger, "Match reached end of buffer, retrying with more input");
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), LexerError> {
        loop {
            self.ensure_buffered()?;

            let Some(whitespace) = &self.whitespace else {
                return Ok(());
            };
            match whitespace.find(&self.buf, self.cursor) {
                Some(token) if consumes(&self.buf, &token) => self.consume(&token.literal),
                _ => return Ok(()),
            }
        }
    }

    /// Shortest unrecognized prefix: everything before the first later offset
    /// at which whitespace or some rule matches, or the whole buffer. Never
    /// empty for a non-empty buffer.
    fn unknown_token(&self) -> UnknownTokenError {
        let end = self
            .buf
            .char_indices()
            .skip(1)
            .map(|(offset, _)| offset)
            .find(|&offset| self.recognizes(&self.buf[offset..]))
            .unwrap_or(self.buf.len());

        UnknownTokenError::new(&self.buf[..end], self.cursor)
    }

    fn recognizes(&self, input: &str) -> bool {
        let hit = |rule: &SharedTokenType| {
            rule.find(input, self.cursor)
                .is_some_and(|token| consumes(input, &token))
        };
        self.whitespace.iter().any(hit) || self.rules.iter().any(hit)
    }

    fn consume(&mut self, literal: &str) {
        self.buf.drain(..literal.len());
        self.cursor = self.cursor.advanced(literal);

        match literal.rfind('\n') {
            Some(last) => {
                self.loaded_line.clear();
                self.loaded_line.push_str(&literal[last + 1..]);
            }
            None => self.loaded_line.push_str(literal),
        }
    }

    /// Top the buffer up to the low-water mark. Best effort: stops as soon as
    /// a read produces nothing, whether the source is exhausted or not.
    fn ensure_buffered(&mut self) -> Result<(), LexerError> {
        let mark = self.buffer.low_water_mark.max(1);
        while self.buf.len() < mark {
            if self.fill_chunk()? == 0 {
                break;
            }
        }
        Ok(())
    }

    /// One read from the source. Returns the number of bytes read.
    fn fill_chunk(&mut self) -> Result<usize, LexerError> {
        if self.exhausted {
            return Ok(0);
        }

        let status = match self.source.read_chunk(&mut self.scratch) {
            Ok(status) => status,
            Err(source) => {
                error!(self.logger, "Read failed at {}: {}", self.cursor, source);
                return Err(LexerError::Read {
                    position: self.cursor,
                    source,
                });
            }
        };

        let read = status.read.min(self.scratch.len());
        self.pending.extend_from_slice(&self.scratch[..read]);
        if status.exhausted {
            trace!(self.logger, "Source exhausted");
            self.exhausted = true;
        } else if read == 0 {
            debug!(self.logger, "Source returned no data, not exhausted");
        }

        let before = self.buf.len();
        self.decode_pending();
        if self.buf.len() > before {
            self.generation += 1;
        }
        trace!(self.logger, "Read {} bytes, {} buffered", read, self.buf.len());
        Ok(read)
    }

    /// Move complete UTF-8 sequences from `pending` into `buf`
    fn decode_pending(&mut self) {
        while !self.pending.is_empty() {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    self.buf.push_str(text);
                    self.pending.clear();
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    self.buf
                        .push_str(&String::from_utf8_lossy(&self.pending[..valid]));

                    match e.error_len() {
                        Some(bad) => {
                            warn!(
                                self.logger,
                                "Invalid UTF-8 bytes {:02X?} near {}",
                                &self.pending[valid..valid + bad],
                                self.cursor
                            );
                            self.buf.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + bad);
                        }
                        None if self.exhausted => {
                            warn!(
                                self.logger,
                                "Incomplete UTF-8 sequence at end of input: {:02X?}",
                                &self.pending[valid..]
                            );
                            self.buf.push(char::REPLACEMENT_CHARACTER);
                            self.pending.clear();
                        }
                        None => {
                            // sequence continues in the next read
                            self.pending.drain(..valid);
                            return;
                        }
                    }
                }
            }
        }
    }
}

enum Attempt {
    Matched(Token),
    /// The buffer grew part way through
    Grew,
    NoMatch,
}

/// A match only counts if it makes progress and really is a prefix of the
/// input; anything else would stall `scan` or corrupt the buffer.
fn consumes(input: &str, token: &Token) -> bool {
    !token.literal.is_empty() && input.starts_with(token.literal.as_str())
}

impl<R: Read> Lexer<IoSource<R>> {
    /// Lexer with the reference configuration over any [`Read`]
    pub fn from_reader(reader: R) -> Self {
        Self::new(IoSource::new(reader))
    }
}

/// Iterator returned by [`Lexer::tokens`]
///
/// Yields `Ok(token)` per scanned token. After an error is yielded the
/// iterator ends, since scanning again would just repeat it. When the source
/// stalls without being exhausted, iteration ends but may be resumed by
/// calling `next` again later.
pub struct Tokens<'a, S> {
    lexer: &'a mut Lexer<S>,
    failed: bool,
}

impl<S: ByteSource> Iterator for Tokens<'_, S> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.lexer.scan() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
