//! Line splitting with SIMD-accelerated newline scanning.
//!
//! The classifier works line-by-line over an explicit cursor, so the lexer's
//! only job is to cut the input into [`Line`] records. It uses `memchr` for
//! fast newline detection (SIMD on supported platforms) and borrows directly
//! from the input, allocating nothing.

use crate::span::Span;
use memchr::memchr;

/// A single line from the input with its source span.
///
/// The text excludes the trailing newline (and a preceding CR, if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline).
    pub text: &'a str,
    /// Byte span in the original input.
    pub span: Span,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }

    /// Get the line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Iterator over the lines of an input string.
///
/// Produced by [`lines`]. A trailing newline does not yield an extra
/// empty line, matching `str::lines`.
pub struct Lines<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
}

/// Split input into [`Line`]s.
#[inline]
pub fn lines(input: &str) -> Lines<'_> {
    Lines {
        input,
        bytes: input.as_bytes(),
        offset: 0,
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;

        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        // CRLF: drop the CR before the newline
        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < self.bytes.len() { end + 1 } else { end };

        Some(Line {
            text: &self.input[start..text_end],
            span: Span::new(start as u32, text_end as u32),
        })
    }
}
