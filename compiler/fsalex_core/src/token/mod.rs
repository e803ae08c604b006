//! Token values handed out by the scanner.
//!
//! A [`Token`] owns its text, so it stays valid after the
//! [`SourceBuffer`](crate::SourceBuffer) it came from is dropped.

use std::fmt;

use crate::Span;

/// Classified value of a token.
///
/// The scanner currently produces only [`TokenValue::Identifier`]. The
/// literal variants are part of the value model so downstream code can match
/// exhaustively once literal scanning exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// `[A-Za-z_][A-Za-z0-9_]*`, never empty.
    Identifier(String),
    Integer(i64),
    String(String),
}

/// Fieldless discriminant of [`TokenValue`].
///
/// The numeric codes are stable and appear in printed token listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Identifier = 0,
    Integer = 1,
    String = 2,
}

impl TokenKind {
    /// Stable numeric code of this kind.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::String => "string",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Identifier(_) => TokenKind::Identifier,
            TokenValue::Integer(_) => TokenKind::Integer,
            TokenValue::String(_) => TokenKind::String,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Identifier(name) => f.write_str(name),
            TokenValue::Integer(value) => write!(f, "{value}"),
            TokenValue::String(text) => write!(f, "{text:?}"),
        }
    }
}

/// A scanned token: its value and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    /// Build an identifier token from matched text.
    pub fn identifier(text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        debug_assert!(is_identifier(&text), "not an identifier: {text:?}");
        Token {
            value: TokenValue::Identifier(text),
            span,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }
}

/// Renders as `<kind code>, <text>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.kind().code(), self.value)
    }
}

/// Byte that can start an identifier: ASCII letter or `_`.
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Byte that can continue an identifier: ASCII letter, digit, or `_`.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether `text` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn is_identifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.split_first() {
        Some((&first, rest)) => is_ident_start(first) && rest.iter().all(|&b| is_ident_continue(b)),
        None => false,
    }
}

#[cfg(test)]
mod tests;
