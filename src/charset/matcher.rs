//! Single-unit matching
//!
//! A recursive-descent parser asks a character set one question at a time:
//! does the unit under the cursor belong to you? [`Parser`] is that
//! contract. A set never consumes more than one unit, never looks past the
//! cursor and never fails with an error; it either reports a match length of
//! `1` or [`NO_MATCH`].
//!
//! # Example
//!
//! ```rust
//! use chset::charset::constants::DIGIT;
//! use chset::{Parser, NO_MATCH};
//!
//! let buf: Vec<char> = "3x".chars().collect();
//! assert_eq!(DIGIT.parse(&buf, 0, buf.len(), &mut ()), Some(1));
//! assert_eq!(DIGIT.parse(&buf, 1, buf.len(), &mut ()), NO_MATCH);
//! ```

use super::set::Charset;

/// Returned when nothing was consumed at the cursor
pub const NO_MATCH: Option<usize> = None;

/// A matcher over a buffer of characters
///
/// `T` is caller-owned context threaded through a parse; character sets
/// ignore it.
pub trait Parser<T: ?Sized> {
    /// Try to match at `buf[start]`, never reading at or past `end`
    ///
    /// # Returns
    ///
    /// * `Some(len)` - the number of units consumed
    /// * `None` ([`NO_MATCH`]) - no match; the cursor must not move
    fn parse(&self, buf: &[char], start: usize, end: usize, data: &mut T) -> Option<usize>;
}

impl<T: ?Sized> Parser<T> for Charset {
    #[inline]
    fn parse(&self, buf: &[char], start: usize, end: usize, _data: &mut T) -> Option<usize> {
        if start >= end {
            return NO_MATCH;
        }
        match buf.get(start) {
            Some(&c) if self.contains_char(c) => Some(1),
            _ => NO_MATCH,
        }
    }
}

impl<T: ?Sized, P: Parser<T> + ?Sized> Parser<T> for &P {
    #[inline]
    fn parse(&self, buf: &[char], start: usize, end: usize, data: &mut T) -> Option<usize> {
        (**self).parse(buf, start, end, data)
    }
}

impl Charset {
    /// Match the character starting at byte offset `pos` of `input`
    ///
    /// Returns the UTF-8 length of the matched character, or `None` when
    /// `pos` is at the end, not on a character boundary, or the character is
    /// not a member.
    ///
    /// ```rust
    /// use chset::Charset;
    ///
    /// let greek = Charset::from_spec("α-ω").unwrap();
    /// assert_eq!(greek.match_str("xλ", 1), Some(2));
    /// assert_eq!(greek.match_str("xλ", 0), None);
    /// ```
    #[inline]
    pub fn match_str(&self, input: &str, pos: usize) -> Option<usize> {
        let c = input.get(pos..)?.chars().next()?;
        if self.contains_char(c) {
            Some(c.len_utf8())
        } else {
            None
        }
    }
}
