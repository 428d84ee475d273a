//! Set algebra
//!
//! Every operation borrows its operands and returns a fresh set: the left
//! operand is cloned and the clone is mutated range by range.
//!
//! ```text
//! !x      --> ANYCHAR - x
//! a | b   --> clone(a), insert each range of b
//! a - b   --> clone(a), remove each range of b
//! a & b   --> a - !b
//! a ^ b   --> (a - b) | (b - a)
//! ```

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use super::constants::ANYCHAR;
use super::set::Charset;

/// Members of the domain that are not in `subject`
pub fn complement(subject: &Charset) -> Charset {
    difference(&ANYCHAR, subject)
}

/// Members of either operand
pub fn union(left: &Charset, right: &Charset) -> Charset {
    let mut n = left.clone();
    n.extend(right.iter().copied());
    n
}

/// Members of `left` that are not in `right`
pub fn difference(left: &Charset, right: &Charset) -> Charset {
    let mut n = left.clone();
    for r in right {
        n.remove_range(*r);
    }
    n
}

/// Members of both operands
pub fn intersection(left: &Charset, right: &Charset) -> Charset {
    difference(left, &complement(right))
}

/// Members of exactly one operand
pub fn symmetric_difference(left: &Charset, right: &Charset) -> Charset {
    union(&difference(left, right), &difference(right, left))
}

impl Charset {
    /// See [`complement`]
    pub fn complement(&self) -> Charset {
        complement(self)
    }

    /// See [`union`]
    pub fn union(&self, other: &Charset) -> Charset {
        union(self, other)
    }

    /// See [`difference`]
    pub fn difference(&self, other: &Charset) -> Charset {
        difference(self, other)
    }

    /// See [`intersection`]
    pub fn intersection(&self, other: &Charset) -> Charset {
        intersection(self, other)
    }

    /// See [`symmetric_difference`]
    pub fn symmetric_difference(&self, other: &Charset) -> Charset {
        symmetric_difference(self, other)
    }
}

impl Not for &Charset {
    type Output = Charset;

    fn not(self) -> Charset {
        complement(self)
    }
}

impl BitOr for &Charset {
    type Output = Charset;

    fn bitor(self, rhs: &Charset) -> Charset {
        union(self, rhs)
    }
}

impl Sub for &Charset {
    type Output = Charset;

    fn sub(self, rhs: &Charset) -> Charset {
        difference(self, rhs)
    }
}

impl BitAnd for &Charset {
    type Output = Charset;

    fn bitand(self, rhs: &Charset) -> Charset {
        intersection(self, rhs)
    }
}

impl BitXor for &Charset {
    type Output = Charset;

    fn bitxor(self, rhs: &Charset) -> Charset {
        symmetric_difference(self, rhs)
    }
}
