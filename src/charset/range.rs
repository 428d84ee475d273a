//! Inclusive code point ranges
//!
//! [`CharRange`] is the unit of storage inside a [`Charset`](super::Charset).
//! It is a plain `Copy` value; two sets never share a range.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::CharsetError;
use super::MAX_CHAR;

/// An inclusive range `[first, last]` of code points
///
/// Always satisfies `first <= last <= MAX_CHAR`.
///
/// Serializes as a two-element array, e.g. `[48, 57]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct CharRange {
    first: u32,
    last: u32,
}

impl CharRange {
    /// Create a range from raw code points
    ///
    /// Fails if `first > last` or if `last` lies outside the domain. Bounds
    /// are never swapped.
    pub fn new(first: u32, last: u32) -> Result<Self, CharsetError> {
        if first > last {
            return Err(CharsetError::DescendingRange { first, last });
        }
        if last > MAX_CHAR {
            return Err(CharsetError::OutOfDomain { value: last });
        }
        Ok(Self { first, last })
    }

    /// Create a range between two characters
    pub fn from_chars(first: char, last: char) -> Result<Self, CharsetError> {
        Self::new(first as u32, last as u32)
    }

    /// A range holding a single character
    #[inline]
    pub fn single(c: char) -> Self {
        Self {
            first: c as u32,
            last: c as u32,
        }
    }

    /// Build a range the caller has already checked.
    #[inline]
    pub(crate) const fn new_unchecked(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// First code point of the range
    #[inline]
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Last code point of the range (inclusive)
    #[inline]
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Number of code points covered
    #[inline]
    pub fn width(&self) -> u64 {
        u64::from(self.last) - u64::from(self.first) + 1
    }

    /// Whether `point` lies inside the range
    #[inline(always)]
    pub fn includes(&self, point: u32) -> bool {
        self.first <= point && point <= self.last
    }

    /// Whether `other` lies entirely inside the range
    #[inline]
    pub fn covers(&self, other: &CharRange) -> bool {
        self.first <= other.first && other.last <= self.last
    }

    /// Whether the two ranges can be replaced by one contiguous range
    ///
    /// True when they overlap or touch: the span of their union is no wider
    /// than their widths added together.
    #[inline]
    pub fn mergeable(&self, other: &CharRange) -> bool {
        let lo = u64::from(self.first.min(other.first));
        let hi = u64::from(self.last.max(other.last));
        hi - lo + 1 <= self.width() + other.width()
    }

    /// Grow `self` to cover `other`.
    ///
    /// Only meaningful when the two are [`mergeable`](Self::mergeable);
    /// otherwise the gap between them gets swallowed.
    #[inline]
    pub(crate) fn absorb(&mut self, other: &CharRange) {
        self.first = self.first.min(other.first);
        self.last = self.last.max(other.last);
    }

    #[inline]
    pub(crate) fn set_first(&mut self, first: u32) {
        debug_assert!(first <= self.last);
        self.first = first;
    }

    #[inline]
    pub(crate) fn set_last(&mut self, last: u32) {
        debug_assert!(self.first <= last);
        self.last = last;
    }
}

impl TryFrom<(u32, u32)> for CharRange {
    type Error = CharsetError;

    fn try_from((first, last): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(first, last)
    }
}

impl From<CharRange> for (u32, u32) {
    fn from(r: CharRange) -> Self {
        (r.first, r.last)
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}
