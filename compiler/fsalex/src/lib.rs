//! fsalex command-line front end.
//!
//! The binary in `main.rs` only dispatches on the first argument; argument
//! parsing for each command and the command bodies live in [`commands`] so
//! they can be tested against in-memory writers.
//!
//! # Debugging
//!
//! - `RUST_LOG=fsalex_core=debug`: scanner creation and skipped characters.
//! - `RUST_LOG=fsalex_core=trace`: every state change and emitted token.

pub mod commands;
mod error;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
