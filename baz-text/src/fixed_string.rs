//! Bounded byte string for building output lines.

use core::fmt;
use std::io;

use baz_collections::generic::fixed_list::FixedList;
use baz_sys::fault::{ensure, FaultKind};
use bytemuck::Zeroable;

use crate::num::{self, FMT_BUF_LEN};
use crate::span::Span;

/// A byte string with room for at most `N` bytes, 256 by default.
///
/// The `push*` methods fault with [`FaultKind::CapacityExceeded`] when the bytes do
/// not fit. Through [`fmt::Write`] an overflow is an ordinary [`fmt::Error`] instead,
/// so `write!` works as a bounded formatter. A `write!` that overflows leaves the
/// string as it was before the call; no partial output is kept.
///
/// # Examples
///
/// ```rust
/// use core::fmt::Write;
/// use baz_text::FixedString;
///
/// let mut out: FixedString = FixedString::new();
/// out.push_str("part 1: ");
/// out.push_u64(255, 16);
/// write!(out, " ({} steps)", 12).unwrap();
/// assert_eq!(out.as_bytes(), b"part 1: FF (12 steps)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedString<const N: usize = 256> {
    bytes: FixedList<u8, N>,
}

// SAFETY: a single zeroable field; all zeroes is the empty string.
unsafe impl<const N: usize> Zeroable for FixedString<N> {}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FixedString<N> {
    pub fn new() -> Self {
        Self {
            bytes: FixedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub fn as_span(&self) -> Span<'_> {
        Span::new(self.as_bytes())
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Shortens the string to `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    fn fits(&self, extra: usize) -> bool {
        extra <= N - self.len()
    }

    #[track_caller]
    fn push_bytes(&mut self, bytes: &[u8]) {
        ensure(
            self.fits(bytes.len()),
            FaultKind::CapacityExceeded { capacity: N },
            "string push",
        );
        for &byte in bytes {
            self.bytes.push(byte);
        }
    }

    #[track_caller]
    pub fn push(&mut self, byte: u8) {
        self.push_bytes(&[byte]);
    }

    #[track_caller]
    pub fn push_str(&mut self, text: &str) {
        self.push_bytes(text.as_bytes());
    }

    #[track_caller]
    pub fn push_span(&mut self, span: Span<'_>) {
        self.push_bytes(span.as_bytes());
    }

    /// Appends `value` in `radix`, uppercase.
    #[track_caller]
    pub fn push_u64(&mut self, value: u64, radix: u32) {
        let mut buf = [0u8; FMT_BUF_LEN];
        let len = num::fmt_u64(&mut buf, value, radix);
        self.push_bytes(&buf[..len]);
    }

    #[track_caller]
    pub fn push_i64(&mut self, value: i64, radix: u32) {
        let mut buf = [0u8; FMT_BUF_LEN];
        let len = num::fmt_i64(&mut buf, value, radix);
        self.push_bytes(&buf[..len]);
    }

    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }

    /// Writes the contents followed by a newline.
    pub fn write_line_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_to(out)?;
        out.write_all(b"\n")
    }
}

impl<const N: usize> fmt::Write for FixedString<N> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        if !self.fits(text.len()) {
            return Err(fmt::Error);
        }
        self.push_str(text);
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let len = self.len();
        let result = fmt::write(&mut *self, args);
        if result.is_err() {
            self.truncate(len);
        }
        result
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_span(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baz_sys::Fault;
    use core::fmt::Write;

    #[test]
    fn test_push_variants() {
        let mut out = FixedString::<64>::new();
        out.push(b'[');
        out.push_span(Span::from("xyz"));
        out.push_str("] ");
        out.push_i64(-10, 2);
        out.push(b' ');
        out.push_u64(35, 36);
        assert_eq!(out.as_bytes(), b"[xyz] -1010 Z");
        assert_eq!(out.len(), 13);
        assert!(out.as_span().starts_with("[xyz]"));
    }

    #[test]
    fn test_default_capacity() {
        let out: FixedString = FixedString::default();
        assert_eq!(out.capacity(), 256);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exact_fit_then_overflow_faults() {
        let mut out = FixedString::<4>::new();
        out.push_str("abcd");
        assert_eq!(out.len(), 4);

        let payload = std::panic::catch_unwind(move || {
            let mut out = out;
            out.push(b'e');
        })
        .unwrap_err();
        assert_eq!(
            payload.downcast_ref::<Fault>().unwrap().kind,
            FaultKind::CapacityExceeded { capacity: 4 }
        );
    }

    #[test]
    fn test_overflow_leaves_contents_untouched() {
        let mut out = FixedString::<6>::new();
        out.push_str("ab");
        let result = std::panic::catch_unwind(move || {
            let mut out = out;
            out.push_u64(123_456, 10);
        });
        assert!(result.is_err());
        assert_eq!(out.as_bytes(), b"ab");
    }

    #[test]
    fn test_fmt_write_reports_overflow() {
        let mut out = FixedString::<8>::new();
        assert!(write!(out, "{}-{}", 12, 34).is_ok());
        assert_eq!(out.to_string(), "12-34");
        assert_eq!(write!(out, "{}", "long"), Err(fmt::Error));
        assert_eq!(out.to_string(), "12-34");
    }

    #[test]
    fn test_overflowing_write_keeps_no_fragments() {
        let mut out = FixedString::<8>::new();
        out.push_str("x");
        assert_eq!(write!(out, "{}{}", "abc", "defghi"), Err(fmt::Error));
        assert_eq!(out.as_bytes(), b"x");

        write!(out, "{}{}", "abc", "def").unwrap();
        assert_eq!(out.as_bytes(), b"xabcdef");

        out.truncate(2);
        assert_eq!(out.as_bytes(), b"xa");
        out.truncate(5);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_write_line_to() {
        let mut out = FixedString::<16>::new();
        out.push_str("42");
        let mut sink = Vec::new();
        out.write_line_to(&mut sink).unwrap();
        out.clear();
        out.push_str("7");
        out.write_to(&mut sink).unwrap();
        assert_eq!(sink, b"42\n7");
    }

    #[test]
    fn test_zeroed_is_empty() {
        let out: FixedString<32> = Zeroable::zeroed();
        assert!(out.is_empty());
        assert_eq!(out, FixedString::new());
    }
}
