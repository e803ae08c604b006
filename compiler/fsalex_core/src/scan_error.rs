//! Errors surfaced by the scanner.
//!
//! Reaching the end of input is not an error: [`Scanner::next_token`]
//! reports it as `Ok(None)`.
//!
//! [`Scanner::next_token`]: crate::Scanner::next_token

use crate::Span;

/// A scan failure, returned to the caller as soon as it is found.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanError {
    /// A character that is neither whitespace nor an identifier start was
    /// found between tokens. The character is left unconsumed.
    #[error("unexpected character {ch:?} at {span}")]
    UnexpectedCharacter { ch: char, span: Span },
}

impl ScanError {
    /// Location of the offending input.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedCharacter { span, .. } => *span,
        }
    }
}
