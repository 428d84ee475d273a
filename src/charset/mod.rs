//! Character set module
//!
//! # Module Organization
//!
//! ## Core Types
//! - [`CharRange`] - Inclusive code point range
//! - [`Charset`] - Sorted, disjoint, maximal range list with membership tests
//! - [`AsciiSet`] - Bitmap cache for code points below 128
//!
//! ## Building Sets
//! - [`spec`] - Spec strings such as `"a-zA-Z_"`
//! - [`constants`] - Predefined sets and named lookup
//!
//! ## Set Algebra
//! - [`algebra`] - Complement, union, difference, intersection, symmetric
//!   difference
//!
//! ## Matching
//! - [`matcher`] - The single-unit [`Parser`] contract
//!
//! ## Domain
//!
//! Code points are `u32` values in `MIN_CHAR..=MAX_CHAR`, the full Unicode
//! code space. Surrogates are representable as numbers even though no `char`
//! holds one.

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

// ============================================================================
// Module Declarations
// ============================================================================

pub mod algebra;
pub mod ascii;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod range;
pub mod set;
pub mod spec;

// ============================================================================
// Domain
// ============================================================================

/// Smallest code point
pub const MIN_CHAR: u32 = 0;

/// Largest code point
pub const MAX_CHAR: u32 = 0x10FFFF;

/// Largest code point answered by the ASCII bitmap
pub const MAX_ASCII_CHAR: u32 = 127;

// ============================================================================
// Core Types
// ============================================================================

pub use ascii::AsciiSet;
pub use range::CharRange;
pub use set::{contains_in_ranges, insertion_point, Charset};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::CharsetError;

// ============================================================================
// Set Algebra
// ============================================================================

pub use algebra::{complement, difference, intersection, symmetric_difference, union};

// ============================================================================
// Predefined Sets
// ============================================================================

pub use constants::{
    named, ALNUM, ALPHA, ANYCHAR, ASCII, DIGIT, LOWER, NOTHING, UPPER, WHITESPACE, XDIGIT,
};

// ============================================================================
// Matching
// ============================================================================

pub use matcher::{Parser, NO_MATCH};
