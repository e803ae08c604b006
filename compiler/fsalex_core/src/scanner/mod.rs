//! Two-state identifier automaton.
//!
//! Each call to [`Scanner::next_token`] starts in [`State::Init`] and walks
//! the cursor forward:
//!
//! | State          | Input                         | Action                        |
//! |----------------|-------------------------------|-------------------------------|
//! | `Init`         | space, `\t`, `\n`, `\r`       | consume, stay                 |
//! | `Init`         | `A-Z a-z _`                   | mark start, consume, go ident |
//! | `Init`         | end of input                  | `Ok(None)`                    |
//! | `Init`         | anything else                 | [`UnexpectedCharPolicy`]      |
//! | `InIdentifier` | `A-Z a-z 0-9 _`               | consume, stay                 |
//! | `InIdentifier` | anything else, incl. end      | emit, terminator unconsumed   |
//!
//! The scanner never looks behind the cursor, so every byte is examined at
//! most once per successful call.

use crate::cursor::Cursor;
use crate::token::{is_ident_continue, is_ident_start};
use crate::{ScanError, SourceBuffer, Span, Token};

/// Automaton state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Between tokens: skipping whitespace, waiting for an identifier start.
    #[default]
    Init,
    /// Inside an identifier.
    InIdentifier,
}

/// What to do with a character that cannot start a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnexpectedCharPolicy {
    /// Return [`ScanError::UnexpectedCharacter`] and leave the character in
    /// place. Use [`Scanner::skip_char`] to move past it.
    #[default]
    Fail,
    /// Consume the character and keep scanning.
    Skip,
}

/// Scanner settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    pub on_unexpected: UnexpectedCharPolicy,
}

impl ScannerConfig {
    /// Config that silently drops characters which cannot start a token.
    pub const fn skipping() -> Self {
        ScannerConfig {
            on_unexpected: UnexpectedCharPolicy::Skip,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: UnexpectedCharPolicy) -> Self {
        self.on_unexpected = policy;
        self
    }
}

/// Identifier scanner over a [`SourceBuffer`].
///
/// Holds the only mutable state of a scan (cursor and automaton state), so
/// independent scanners over the same or different buffers never interfere.
/// Also usable as an [`Iterator`] of `Result<Token, ScanError>`; the iterator
/// stops after the first error.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
    config: ScannerConfig,
    /// Set once the iterator has yielded an error.
    halted: bool,
}

impl<'a> Scanner<'a> {
    /// Scanner at position 0 with the default config.
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Self::with_config(buf, ScannerConfig::default())
    }

    pub fn with_config(buf: &'a SourceBuffer, config: ScannerConfig) -> Self {
        tracing::debug!(
            len = buf.len(),
            policy = ?config.on_unexpected,
            "scanner created"
        );
        Scanner {
            cursor: buf.cursor(),
            state: State::Init,
            config,
            halted: false,
        }
    }

    /// Scan the next token.
    ///
    /// Returns `Ok(None)` at end of input, and keeps returning it on later
    /// calls. Under [`UnexpectedCharPolicy::Fail`] an offending character is
    /// reported without being consumed, so calling again yields the same
    /// error.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.state = State::Init;
        let mut start = self.cursor.pos();

        loop {
            let b = self.cursor.current();
            match self.state {
                State::Init => match b {
                    b' ' | b'\t' | b'\n' | b'\r' => self.cursor.advance(),
                    _ if is_ident_start(b) => {
                        start = self.cursor.pos();
                        self.state = State::InIdentifier;
                        tracing::trace!(pos = start, "Init -> InIdentifier");
                        self.cursor.advance();
                    }
                    0 if self.cursor.is_eof() => return Ok(None),
                    _ => self.unexpected()?,
                },
                State::InIdentifier => {
                    // The sentinel is not an identifier byte, so this also
                    // stops at end of input.
                    self.cursor.eat_while(is_ident_continue);
                    return Ok(Some(self.emit_identifier(start)));
                }
            }
        }
    }

    /// Consume one character without classifying it.
    ///
    /// This is the caller's way past an [`ScanError::UnexpectedCharacter`].
    /// Returns the skipped character, or `None` at end of input.
    pub fn skip_char(&mut self) -> Option<char> {
        let ch = self.cursor.current_char()?;
        self.cursor.advance_char();
        self.halted = false;
        Some(ch)
    }

    /// Position of the next unread byte.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Automaton state at the end of the last scan attempt.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn config(&self) -> ScannerConfig {
        self.config
    }

    fn emit_identifier(&self, start: u32) -> Token {
        let end = self.cursor.pos();
        let text = self.cursor.slice(start, end);
        tracing::trace!(start, end, text, "identifier");
        Token::identifier(text, Span::new(start, end))
    }

    /// Apply the configured policy to the character under the cursor.
    fn unexpected(&mut self) -> Result<(), ScanError> {
        let start = self.cursor.pos();
        let ch = self
            .cursor
            .current_char()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let mut after = self.cursor;
        after.advance_char();
        let span = Span::new(start, after.pos());

        match self.config.on_unexpected {
            UnexpectedCharPolicy::Fail => Err(ScanError::UnexpectedCharacter { ch, span }),
            UnexpectedCharPolicy::Skip => {
                tracing::debug!(%span, ?ch, "skipping unexpected character");
                self.cursor = after;
                Ok(())
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
        }
    }
}

/// Scan all of `source`, stopping at the first error.
pub fn tokenize(source: &str, config: ScannerConfig) -> Result<Vec<Token>, ScanError> {
    let buf = SourceBuffer::new(source);
    Scanner::with_config(&buf, config).collect()
}
