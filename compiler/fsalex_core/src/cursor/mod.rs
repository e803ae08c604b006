//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor only moves forward. End of input is the sentinel byte
//! (`0x00`) at a position at or past the source length; a null byte before
//! that point is an interior null and is reported as a regular byte.
//!
//! The cursor is internal to the crate: [`Cursor::slice`] trusts its callers
//! to cut on character boundaries, and only the scanner does so.

/// Forward-only cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], so callers can snapshot it before a speculative
/// step.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Next unread byte.
    pos: u32,
    /// Length of the input content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert!(!self.is_eof(), "advance past end of input");
        self.pos += 1;
    }

    /// Returns `true` once the cursor sits on the sentinel.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character whose leading byte is `byte`.
    ///
    /// Continuation and invalid leading bytes count as one byte.
    #[inline]
    pub(crate) fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// The full character starting at the current position.
    ///
    /// Returns `None` at end of input. An interior null decodes to `'\0'`.
    pub(crate) fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let start = self.pos as usize;
        let width = Self::utf8_char_width(self.current()) as usize;
        let end = (start + width).min(self.source_len as usize);
        let decoded = std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next());
        Some(decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Advance past one full UTF-8 character, never beyond end of input.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = self.pos.saturating_add(width).min(self.source_len);
    }

    /// Extract `start..end` of the source as `&str`.
    ///
    /// # Contract
    ///
    /// `end <= source_len`, and both ends fall on character boundaries. The
    /// scanner only slices identifier spans, which are pure ASCII.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on a buffer copied from &str"
    )]
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let bytes = &self.buf[start as usize..end as usize];
        debug_assert!(std::str::from_utf8(bytes).is_ok());
        // SAFETY: the buffer was copied from a `&str`, and the only caller
        // (`Scanner::emit_identifier`) slices ASCII identifier spans.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }
}
