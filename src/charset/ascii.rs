//! ASCII membership bitmap
//!
//! A 128-bit cache of which code points `0..=127` belong to a set. It is a
//! pure function of the range list and is rebuilt from scratch after every
//! mutation, which keeps the hot path (almost all parser input is ASCII) down
//! to one shift and one mask.

use super::range::CharRange;
use super::set::contains_in_ranges;
use super::MAX_ASCII_CHAR;

/// Bitmap over the code points `0..=127`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AsciiSet {
    bits: u128,
}

impl AsciiSet {
    /// The empty bitmap
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Recompute the bitmap from a range list
    ///
    /// Every bit is derived from [`contains_in_ranges`], never from an
    /// existing bitmap.
    pub fn from_ranges(ranges: &[CharRange]) -> Self {
        let mut bits = 0u128;
        for ch in 0..=MAX_ASCII_CHAR {
            if contains_in_ranges(ranges, ch) {
                bits |= 1u128 << ch;
            }
        }
        Self { bits }
    }

    /// Whether `ch` is set. Values above 127 are never set.
    #[inline(always)]
    pub fn get(&self, ch: u32) -> bool {
        ch <= MAX_ASCII_CHAR && (self.bits >> ch) & 1 == 1
    }

    /// Number of members
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Whether no bit is set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}
