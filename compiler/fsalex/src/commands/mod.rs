//! Command handlers for the fsalex CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

mod lex;

pub use lex::{
    lex, lex_source, parse_lex_args, run_demo, LexInput, LexOptions, LexRequest, DEMO_SOURCE,
};

use crate::CliError;

/// Read a file from disk, mapping I/O failures to user-facing messages.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))
}
