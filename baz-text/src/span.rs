//! Borrowed byte views and the splitting cursor built on them.

use core::fmt;
use core::iter::FusedIterator;
use std::path::Path;

use baz_collections::hash::FxHasher;
use baz_sys::fault::{self, ensure, FaultKind};
use baz_sys::fs::{self, LoadError};

use crate::num;

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\t')
}

/// An immutable view over a contiguous byte range.
///
/// A `Span` never owns its bytes. Every view derived from it (slices, trims, split
/// pieces) stays inside the original range, and equality is byte-wise.
///
/// # Examples
///
/// ```rust
/// use baz_text::Span;
///
/// let line = Span::from("  move 3 from 1 to 2\n").trim_whitespace();
/// let rest = line.trim_start("move ");
/// let (count, rest) = rest.parse_u64(10).unwrap();
/// assert_eq!(count, 3);
/// assert!(rest.starts_with(" from"));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span<'a> {
    bytes: &'a [u8],
}

impl<'a> Span<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// The byte at `index`. Faults with [`FaultKind::OutOfBounds`] past the end.
    #[track_caller]
    pub fn byte(&self, index: usize) -> u8 {
        ensure(
            index < self.len(),
            FaultKind::OutOfBounds {
                index,
                len: self.len(),
            },
            "span byte",
        );
        self.bytes[index]
    }

    /// The half-open sub-view `[from, to)`.
    ///
    /// Faults with [`FaultKind::InvalidRange`] unless `from <= to <= len`.
    #[track_caller]
    pub fn slice(&self, from: usize, to: usize) -> Span<'a> {
        ensure(
            from <= to && to <= self.len(),
            FaultKind::InvalidRange {
                from,
                to,
                len: self.len(),
            },
            "span slice",
        );
        Span::new(&self.bytes[from..to])
    }

    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.bytes.starts_with(prefix.as_ref())
    }

    /// Byte-wise equality against anything that views as bytes.
    pub fn matches(&self, other: impl AsRef<[u8]>) -> bool {
        self.bytes == other.as_ref()
    }

    /// Drops `prefix` if the span starts with it, otherwise returns the span unchanged.
    pub fn trim_start(&self, prefix: impl AsRef<[u8]>) -> Span<'a> {
        match self.bytes.strip_prefix(prefix.as_ref()) {
            Some(rest) => Span::new(rest),
            None => *self,
        }
    }

    pub fn trim_start_whitespace(&self) -> Span<'a> {
        let start = self
            .bytes
            .iter()
            .position(|&byte| !is_whitespace(byte))
            .unwrap_or(self.len());
        Span::new(&self.bytes[start..])
    }

    pub fn trim_end_whitespace(&self) -> Span<'a> {
        let end = self
            .bytes
            .iter()
            .rposition(|&byte| !is_whitespace(byte))
            .map_or(0, |last| last + 1);
        Span::new(&self.bytes[..end])
    }

    /// Trims spaces, newlines and tabs from both ends.
    pub fn trim_whitespace(&self) -> Span<'a> {
        self.trim_start_whitespace().trim_end_whitespace()
    }

    /// Parses a leading unsigned number, returning it with the unparsed rest.
    ///
    /// `None` if the span does not start with a digit of `radix` or the number
    /// overflows.
    #[track_caller]
    pub fn parse_u64(&self, radix: u32) -> Option<(u64, Span<'a>)> {
        let (value, consumed) = num::parse_u64(self.bytes, radix)?;
        Some((value, Span::new(&self.bytes[consumed..])))
    }

    /// Parses a leading number with an optional `-`, returning it with the rest.
    #[track_caller]
    pub fn parse_i64(&self, radix: u32) -> Option<(i64, Span<'a>)> {
        let (value, consumed) = num::parse_i64(self.bytes, radix)?;
        Some((value, Span::new(&self.bytes[consumed..])))
    }

    /// Splits around the first `byte`, which belongs to neither half.
    pub fn split_on(&self, byte: u8) -> Option<(Span<'a>, Span<'a>)> {
        let at = baz_sys::bytes::find(self.bytes, byte)?;
        Some((Span::new(&self.bytes[..at]), Span::new(&self.bytes[at + 1..])))
    }

    /// A cursor over the pieces between occurrences of `sep`.
    ///
    /// The cursor stops as soon as nothing is left to split, so empty pieces appear
    /// between adjacent separators but never after a trailing one.
    ///
    /// ```rust
    /// use baz_text::Span;
    ///
    /// let pieces: Vec<_> = Span::from("a,b,,c").split(b',').collect();
    /// assert_eq!(pieces, ["a", "b", "", "c"].map(Span::from));
    /// assert_eq!(Span::from("").split(b',').next(), None);
    /// ```
    pub fn split(&self, sep: u8) -> Split<'a> {
        Split { rest: *self, sep }
    }

    pub fn lines(&self) -> Split<'a> {
        self.split(b'\n')
    }

    /// Pieces between single spaces. Runs of spaces produce empty words.
    pub fn words(&self) -> Split<'a> {
        self.split(b' ')
    }

    /// Content hash: every byte folded into an [`FxHasher`] as its own word.
    pub fn fx_hash(&self) -> usize {
        let mut hasher = FxHasher::default();
        for &byte in self.bytes {
            hasher.add(byte as usize);
        }
        hasher.hash()
    }
}

impl Span<'static> {
    /// The whole contents of the file at `path`, kept alive for the rest of the process.
    ///
    /// Faults with [`FaultKind::Load`] if the file cannot be read.
    #[track_caller]
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Span::new(fs::load_or_fault(path))
    }

    pub fn try_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        fs::load(path).map(Span::new)
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(text: &'a str) -> Self {
        Span::new(text.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Span<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Span::new(bytes)
    }
}

impl AsRef<[u8]> for Span<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.bytes.escape_ascii())
    }
}

/// Single-pass cursor returned by [`Span::split`], [`Span::lines`] and [`Span::words`].
#[derive(Clone, Copy, Debug)]
pub struct Split<'a> {
    rest: Span<'a>,
    sep: u8,
}

impl<'a> Split<'a> {
    /// The part of the input not yet consumed.
    pub fn rest(&self) -> Span<'a> {
        self.rest
    }

    /// Discards the next `count` pieces.
    ///
    /// Faults with [`FaultKind::Missing`] if fewer than `count` remain.
    #[track_caller]
    pub fn skip_exact(&mut self, count: usize) {
        for _ in 0..count {
            fault::unwrap(self.next(), "split skip");
        }
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.split_on(self.sep) {
            Some((piece, rest)) => {
                self.rest = rest;
                Some(piece)
            }
            None => Some(core::mem::take(&mut self.rest)),
        }
    }
}

impl FusedIterator for Split<'_> {}
