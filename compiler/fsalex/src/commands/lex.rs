//! `lex`: scan a file or inline text and print the token stream.

use std::io::Write;

use fsalex_core::{Scanner, ScannerConfig, SourceBuffer, UnexpectedCharPolicy};

use super::read_file;
use crate::CliError;

/// Input scanned when the CLI runs without arguments.
pub const DEMO_SOURCE: &str = "int val1 = 1;";

/// Output and scanning options for `lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub config: ScannerConfig,
    /// Append ` @ start..end` to every token line.
    pub show_spans: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexInput {
    File(String),
    Inline(String),
}

/// A fully parsed `lex` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexRequest {
    pub input: LexInput,
    pub options: LexOptions,
}

/// Parse the arguments following `lex`.
///
/// Accepts `--skip-unknown`, `--spans`, and exactly one of `-e <text>` or a
/// file path.
pub fn parse_lex_args(args: &[String]) -> Result<LexRequest, CliError> {
    let mut options = LexOptions::default();
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let next = match arg.as_str() {
            "--skip-unknown" => {
                options.config = options.config.with_policy(UnexpectedCharPolicy::Skip);
                continue;
            }
            "--spans" => {
                options.show_spans = true;
                continue;
            }
            "-e" | "--expr" => {
                let Some(text) = iter.next() else {
                    return Err(CliError::Usage(format!("missing text after '{arg}'")));
                };
                LexInput::Inline(text.clone())
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            path => LexInput::File(path.to_string()),
        };
        if input.replace(next).is_some() {
            return Err(CliError::Usage("more than one input given".to_string()));
        }
    }

    let input = input.ok_or_else(|| CliError::Usage("missing input".to_string()))?;
    Ok(LexRequest { input, options })
}

/// Run a parsed `lex` request, writing token lines to `out`.
///
/// Returns the number of tokens printed.
pub fn lex(request: &LexRequest, out: &mut impl Write) -> Result<usize, CliError> {
    match &request.input {
        LexInput::File(path) => {
            let source = read_file(path)?;
            lex_source(&source, &request.options, out)
        }
        LexInput::Inline(text) => lex_source(text, &request.options, out),
    }
}

/// Scan `source` and print one `<kind code>, <text>` line per token.
///
/// Tokens before a scan error are still printed; the error is returned.
pub fn lex_source(
    source: &str,
    options: &LexOptions,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    let buf = SourceBuffer::new(source);
    for issue in buf.encoding_issues() {
        tracing::warn!(kind = ?issue.kind, pos = issue.pos, "encoding issue in input");
    }

    let mut count = 0;
    for token in Scanner::with_config(&buf, options.config) {
        let token = token?;
        let written = if options.show_spans {
            writeln!(out, "{token} @ {}", token.span)
        } else {
            writeln!(out, "{token}")
        };
        written.map_err(CliError::Write)?;
        count += 1;
    }
    tracing::debug!(count, "lex finished");
    Ok(count)
}

/// Scan [`DEMO_SOURCE`], skipping the characters the scanner does not know.
pub fn run_demo(out: &mut impl Write) -> Result<usize, CliError> {
    let options = LexOptions {
        config: ScannerConfig::skipping(),
        show_spans: false,
    };
    lex_source(DEMO_SOURCE, &options, out)
}
