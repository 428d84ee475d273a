//! Prelude module for convenient imports
//!
//! ```
//! use chset::prelude::*;
//!
//! let hex = Charset::from_spec("0-9a-f").unwrap();
//! assert_eq!(&hex - &*DIGIT, Charset::from_spec("a-f").unwrap());
//! ```
//!
//! # Re-exported Items
//!
//! - [`Charset`], [`CharRange`], [`CharsetError`]
//! - [`Parser`] and [`NO_MATCH`]
//! - The predefined sets

// ============================================================================
// Core Types
// ============================================================================

pub use crate::charset::{CharRange, Charset, CharsetError};

// ============================================================================
// Matching
// ============================================================================

pub use crate::charset::matcher::{Parser, NO_MATCH};

// ============================================================================
// Predefined Sets
// ============================================================================

pub use crate::charset::constants::{
    ALNUM, ALPHA, ANYCHAR, ASCII, DIGIT, LOWER, NOTHING, UPPER, WHITESPACE, XDIGIT,
};
