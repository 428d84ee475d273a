//! chset - Character Sets for Recursive-Descent Parsers
//!
//! A character set matches one unit of parser input against an arbitrary set
//! of code points. Sets are stored as sorted, disjoint, maximal ranges, which
//! gives:
//! - O(log n) membership tests over the range list
//! - O(1) membership tests for 7-bit ASCII via a cached bitmap
//! - Set algebra (complement, union, difference, intersection, symmetric
//!   difference) that never mutates its operands
//! - A small spec-string syntax (`"a-zA-Z0-9_"`) for building sets
//! - Predefined sets ([`DIGIT`](charset::DIGIT), [`ALPHA`](charset::ALPHA), ...)
//!
//! ## Quick Start
//!
//! ```rust
//! use chset::charset::constants::{ALPHA, DIGIT};
//! use chset::{Charset, Parser};
//!
//! let ident_start = &*ALPHA | &Charset::from_char('_');
//! let ident_rest = &ident_start | &*DIGIT;
//!
//! let buf: Vec<char> = "_x9 ".chars().collect();
//! assert_eq!(ident_start.parse(&buf, 0, buf.len(), &mut ()), Some(1));
//! assert_eq!(ident_rest.parse(&buf, 2, buf.len(), &mut ()), Some(1));
//! assert_eq!(ident_rest.parse(&buf, 3, buf.len(), &mut ()), None);
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::redundant_closure)]

// Prelude module for convenient imports
pub mod prelude;

pub mod charset;

/// Re-export commonly used types for convenience
pub use charset::{
    // Algebra
    complement,
    difference,
    intersection,
    symmetric_difference,
    union,
    // Core
    AsciiSet,
    CharRange,
    Charset,
    CharsetError,
    // Matching
    Parser,
    MAX_ASCII_CHAR,
    MAX_CHAR,
    MIN_CHAR,
    NO_MATCH,
};
