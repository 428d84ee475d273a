//! The character set value
//!
//! A [`Charset`] stores its members as a sorted list of disjoint, maximal
//! [`CharRange`]s. Membership is a binary search over the range starts, with
//! an [`AsciiSet`] bitmap answering code points below 128 directly.
//!
//! # Example
//!
//! ```rust
//! use chset::Charset;
//!
//! // Vowels and digits
//! let set = Charset::from_spec("uoiea0-9").unwrap();
//! assert!(set.contains_char('a'));
//! assert!(set.contains_char('3'));
//! assert!(!set.contains_char('b'));
//!
//! assert_eq!(set.to_string(), "48-57 97-97 101-101 105-105 111-111 117-117");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ascii::AsciiSet;
use super::error::CharsetError;
use super::range::CharRange;
use super::{MAX_ASCII_CHAR, MAX_CHAR};

// ============================================================================
// Range list helpers
// ============================================================================

/// Index of the first range whose start is `>= key`, or `ranges.len()`
///
/// Pure binary search over the range starts; the ASCII bitmap is never
/// consulted.
#[inline]
pub fn insertion_point(ranges: &[CharRange], key: u32) -> usize {
    ranges.partition_point(|r| r.first() < key)
}

/// Membership test against the range list alone
///
/// The insertion point of `point` names the range that would start at
/// `point`; a point inside an earlier range lands one slot past it, so both
/// that slot and its predecessor are checked.
pub fn contains_in_ranges(ranges: &[CharRange], point: u32) -> bool {
    match ranges {
        [] => false,
        // Common case, no search needed
        [only] => only.includes(point),
        _ => {
            let pos = insertion_point(ranges, point);
            (pos != ranges.len() && ranges[pos].includes(point))
                || (pos != 0 && ranges[pos - 1].includes(point))
        }
    }
}

// ============================================================================
// Charset
// ============================================================================

/// A set of code points
///
/// Invariants, checked by [`Charset::check_invariants`]:
/// - ranges are sorted by their first code point
/// - ranges are pairwise disjoint
/// - ranges are maximal: at least one non-member separates neighbours
/// - the ASCII bitmap agrees with the ranges on `0..=127`
///
/// Because the representation is canonical, derived equality is set
/// equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<CharRange>", into = "Vec<CharRange>")]
pub struct Charset {
    ranges: Vec<CharRange>,
    ascii: AsciiSet,
}

impl Charset {
    /// The empty set
    pub fn new() -> Self {
        Self {
            ranges: Vec::new(),
            ascii: AsciiSet::new(),
        }
    }

    /// A set holding exactly one character
    pub fn from_char(c: char) -> Self {
        Self::from_range(CharRange::single(c))
    }

    /// A set holding the inclusive range `[min, max]`
    ///
    /// Fails with [`CharsetError::DescendingRange`] if `min > max`.
    pub fn range(min: char, max: char) -> Result<Self, CharsetError> {
        Ok(Self::from_range(CharRange::from_chars(min, max)?))
    }

    /// A set holding the inclusive range `[first, last]` of raw code points
    pub fn from_code_points(first: u32, last: u32) -> Result<Self, CharsetError> {
        Ok(Self::from_range(CharRange::new(first, last)?))
    }

    /// A set holding a single, already validated range
    pub fn from_range(r: CharRange) -> Self {
        let ranges = vec![r];
        let ascii = AsciiSet::from_ranges(&ranges);
        Self { ranges, ascii }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Whether `point` is a member
    ///
    /// O(1) for ASCII, O(log n) in the number of ranges otherwise.
    #[inline(always)]
    pub fn contains(&self, point: u32) -> bool {
        if point <= MAX_ASCII_CHAR {
            return self.ascii.get(point);
        }
        contains_in_ranges(&self.ranges, point)
    }

    /// Whether `c` is a member
    #[inline(always)]
    pub fn contains_char(&self, c: char) -> bool {
        self.contains(c as u32)
    }

    /// The ranges, in ascending order
    #[inline]
    pub fn ranges(&self) -> &[CharRange] {
        &self.ranges
    }

    /// Iterate over the ranges in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, CharRange> {
        self.ranges.iter()
    }

    /// Number of ranges in the representation
    #[inline]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the set has no members
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of member code points
    pub fn len(&self) -> u64 {
        self.ranges.iter().map(CharRange::width).sum()
    }

    /// Iterate over members that are valid `char`s
    ///
    /// Surrogate code points are members of a set like `ANYCHAR` but have no
    /// `char` representation, so they are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges
            .iter()
            .flat_map(|r| (r.first()..=r.last()).filter_map(char::from_u32))
    }

    /// Borrow the ASCII bitmap
    #[inline]
    pub fn ascii(&self) -> &AsciiSet {
        &self.ascii
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Add every code point of `r`
    pub fn insert_range(&mut self, r: CharRange) {
        if self.ranges.is_empty() {
            self.ranges.push(r);
            self.refresh_ascii();
            return;
        }

        let len = self.ranges.len();
        let pos = insertion_point(&self.ranges, r.first());
        if (pos != len && self.ranges[pos].covers(&r))
            || (pos != 0 && self.ranges[pos - 1].covers(&r))
        {
            return;
        }

        if pos != 0 && self.ranges[pos - 1].mergeable(&r) {
            self.merge_at(pos - 1, &r);
        } else if pos != len && self.ranges[pos].mergeable(&r) {
            self.merge_at(pos, &r);
        } else {
            self.ranges.insert(pos, r);
        }
        self.refresh_ascii();
    }

    /// Remove every code point of `r`
    pub fn remove_range(&mut self, r: CharRange) {
        if self.ranges.is_empty() {
            return;
        }

        let pos = insertion_point(&self.ranges, r.first());
        if pos > 0 {
            let prev = self.ranges[pos - 1];
            if prev.includes(r.first()) {
                // prev starts strictly before r, so r.first() > 0
                if prev.last() > r.last() {
                    let tail = CharRange::new_unchecked(r.last() + 1, prev.last());
                    self.ranges[pos - 1].set_last(r.first() - 1);
                    self.ranges.insert(pos, tail);
                    self.refresh_ascii();
                    return;
                }
                self.ranges[pos - 1].set_last(r.first() - 1);
            }
        }

        let covered = self.ranges[pos..]
            .iter()
            .take_while(|x| r.covers(x))
            .count();
        self.ranges.drain(pos..pos + covered);

        if let Some(next) = self.ranges.get_mut(pos) {
            if next.includes(r.last()) {
                next.set_first(r.last() + 1);
            }
        }

        self.refresh_ascii();
    }

    /// Add the characters `[first, last]`
    pub fn insert(&mut self, first: char, last: char) -> Result<(), CharsetError> {
        self.insert_range(CharRange::from_chars(first, last)?);
        Ok(())
    }

    /// Remove the characters `[first, last]`
    pub fn remove(&mut self, first: char, last: char) -> Result<(), CharsetError> {
        self.remove_range(CharRange::from_chars(first, last)?);
        Ok(())
    }

    /// Extend the range at `pos` by `r`, then fold in any following ranges
    /// that have become mergeable with it.
    fn merge_at(&mut self, pos: usize, r: &CharRange) {
        let mut merged = self.ranges[pos];
        merged.absorb(r);

        let mut end = pos + 1;
        while end < self.ranges.len() && merged.mergeable(&self.ranges[end]) {
            merged.absorb(&self.ranges[end]);
            end += 1;
        }

        self.ranges[pos] = merged;
        self.ranges.drain(pos + 1..end);
    }

    fn refresh_ascii(&mut self) {
        self.ascii = AsciiSet::from_ranges(&self.ranges);
        debug_assert!(self.check_invariants(), "charset invariants broken: {}", self);
    }

    // ------------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------------

    /// Verify the representation invariants and the ASCII cache
    pub fn check_invariants(&self) -> bool {
        let well_formed = self
            .ranges
            .iter()
            .all(|r| r.first() <= r.last() && r.last() <= MAX_CHAR);
        // Sorted, disjoint and separated by at least one non-member
        let separated = self
            .ranges
            .windows(2)
            .all(|w| u64::from(w[0].last()) + 1 < u64::from(w[1].first()));
        let cached = (0..=MAX_ASCII_CHAR)
            .all(|c| self.ascii.get(c) == contains_in_ranges(&self.ranges, c));
        well_formed && separated && cached
    }

    // ------------------------------------------------------------------------
    // JSON
    // ------------------------------------------------------------------------

    /// Serialize to a JSON array of `[first, last]` pairs
    pub fn to_json(&self) -> Result<String, CharsetError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON array of `[first, last]` pairs
    ///
    /// Pairs may arrive in any order and may overlap; they are inserted one
    /// by one, so the result is normalized.
    pub fn from_json(s: &str) -> Result<Self, CharsetError> {
        Ok(serde_json::from_str(s)?)
    }
}

impl From<Vec<CharRange>> for Charset {
    fn from(ranges: Vec<CharRange>) -> Self {
        ranges.into_iter().collect()
    }
}

impl From<Charset> for Vec<CharRange> {
    fn from(set: Charset) -> Self {
        set.ranges
    }
}

impl FromIterator<CharRange> for Charset {
    fn from_iter<I: IntoIterator<Item = CharRange>>(iter: I) -> Self {
        let mut set = Charset::new();
        set.extend(iter);
        set
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter().map(CharRange::single).collect()
    }
}

impl Extend<CharRange> for Charset {
    fn extend<I: IntoIterator<Item = CharRange>>(&mut self, iter: I) {
        for r in iter {
            self.insert_range(r);
        }
    }
}

impl<'a> IntoIterator for &'a Charset {
    type Item = &'a CharRange;
    type IntoIter = std::slice::Iter<'a, CharRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Numeric `first-last` pairs separated by spaces
///
/// This is a diagnostic format. It is not a spec string and
/// [`Charset::from_spec`] does not read it back.
impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}
