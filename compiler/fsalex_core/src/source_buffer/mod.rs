//! Sentinel-terminated input buffer.
//!
//! The buffer stores a copy of the input followed by a `0x00` sentinel byte,
//! so the scanner can detect end of input by looking at the current byte
//! instead of checking bounds on every step. The total size is rounded up to
//! the next 64-byte boundary; the padding is zero-filled as well.
//!
//! # Encoding Issues
//!
//! Construction records suspicious input as [`EncodingIssue`]s: a leading
//! UTF-8 BOM, interior null bytes, and truncation of oversized input. An
//! interior null looks like the sentinel to a naive scanner, so the cursor
//! tells the two apart by position. The scanner itself treats an interior
//! null as an ordinary unexpected character.

use crate::cursor::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Largest input length kept; byte offsets are `u32`.
const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Owned, immutable, sentinel-terminated copy of the input.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The scanning cursor stays inside the crate:
///
/// ```compile_fail
/// use fsalex_core::Cursor;
/// ```
///
/// ```compile_fail
/// let buf = fsalex_core::SourceBuffer::new("\u{e9}");
/// let _ = buf.cursor();
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the input content (excludes sentinel and padding).
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the input where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start of the input.
    Utf8Bom,
    /// Null byte (U+0000) inside the input content.
    InteriorNull,
    /// Input longer than `u32::MAX` bytes; everything from `pos` on was
    /// dropped.
    Truncated,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Inputs longer than `u32::MAX` bytes are cut to that length and an
    /// [`EncodingIssueKind::Truncated`] issue is recorded; the dropped tail is
    /// not kept in the buffer.
    pub fn new(source: &str) -> Self {
        let mut encoding_issues = Vec::new();
        let kept = kept_len(source.len());
        if kept < source.len() {
            encoding_issues.push(EncodingIssue {
                kind: EncodingIssueKind::Truncated,
                pos: u32::MAX,
                len: 0,
            });
        }
        let source_bytes = &source.as_bytes()[..kept];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (kept + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..kept].copy_from_slice(source_bytes);

        detect_bom(source_bytes, &mut encoding_issues);
        detect_interior_nulls(source_bytes, &mut encoding_issues);

        let source_len = u32::try_from(kept).unwrap_or(u32::MAX);
        tracing::trace!(len = source_len, padded = padded_len, "source buffer built");

        Self {
            buf,
            source_len,
            encoding_issues,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the input content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Number of input bytes kept for an input of `len` bytes.
fn kept_len(len: usize) -> usize {
    len.min(MAX_SOURCE_LEN)
}

fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Record every null byte in the input, using `memchr` to jump between them.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
