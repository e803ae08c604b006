//! Byte spans into the scanned input.

use std::fmt;

/// Half-open byte range `start..end` in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_display_is_range() {
        assert_eq!(Span::new(9, 10).to_string(), "9..10");
        assert_eq!(format!("{:?}", Span::new(0, 3)), "0..3");
    }

    #[test]
    fn default_span_is_empty_at_zero() {
        assert_eq!(Span::default(), Span::new(0, 0));
    }
}
