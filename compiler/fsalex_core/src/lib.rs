//! Finite-state identifier scanner.
//!
//! The crate is layered bottom-up:
//!
//! - [`SourceBuffer`] owns a sentinel-terminated copy of the input.
//! - A crate-private cursor walks that buffer byte by byte.
//! - [`Scanner`] drives a two-state automaton ([`State`]) over the cursor and
//!   hands out owned [`Token`] values, one per call.
//!
//! # Example
//!
//! ```
//! use fsalex_core::{Scanner, SourceBuffer, TokenValue};
//!
//! let buf = SourceBuffer::new("_foo9 bar_2");
//! let mut scanner = Scanner::new(&buf);
//!
//! let first = scanner.next_token().ok().flatten().map(|t| t.value);
//! assert_eq!(first, Some(TokenValue::Identifier("_foo9".to_string())));
//! ```
//!
//! # Logging
//!
//! Scanning emits `tracing` events under the `fsalex_core` target:
//! `debug` for scanner creation and skipped characters, `trace` for every
//! state change and emitted token.

mod cursor;
mod scan_error;
mod scanner;
mod source_buffer;
mod span;
mod token;

pub use scan_error::ScanError;
pub use scanner::{tokenize, Scanner, ScannerConfig, State, UnexpectedCharPolicy};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::Span;
pub use token::{Token, TokenKind, TokenValue};
