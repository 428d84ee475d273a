//! Predefined character sets
//!
//! Process-wide sets built once on first use. They are only reachable through
//! shared references, so nothing can mutate them; the algebra in
//! [`algebra`](super::algebra) and [`Charset::clone`] hand out independent
//! copies when a mutable set is needed.
//!
//! [`named`] resolves a class name (or a common regex spelling of it) to one
//! of these sets.

use hashbrown::HashMap;
use std::sync::{LazyLock, OnceLock};

use super::range::CharRange;
use super::set::Charset;
use super::{MAX_ASCII_CHAR, MAX_CHAR, MIN_CHAR};

const fn span(first: char, last: char) -> CharRange {
    CharRange::new_unchecked(first as u32, last as u32)
}

fn build(ranges: &[CharRange]) -> Charset {
    ranges.iter().copied().collect()
}

/// Every code point in the domain
pub static ANYCHAR: LazyLock<Charset> =
    LazyLock::new(|| build(&[CharRange::new_unchecked(MIN_CHAR, MAX_CHAR)]));

/// The empty set
pub static NOTHING: LazyLock<Charset> = LazyLock::new(Charset::new);

/// `[a-zA-Z0-9]`
pub static ALNUM: LazyLock<Charset> =
    LazyLock::new(|| build(&[span('a', 'z'), span('A', 'Z'), span('0', '9')]));

/// `[a-zA-Z]`
pub static ALPHA: LazyLock<Charset> =
    LazyLock::new(|| build(&[span('a', 'z'), span('A', 'Z')]));

/// `[0-9]`
pub static DIGIT: LazyLock<Charset> = LazyLock::new(|| build(&[span('0', '9')]));

/// `[0-9a-fA-F]`
pub static XDIGIT: LazyLock<Charset> =
    LazyLock::new(|| build(&[span('0', '9'), span('a', 'f'), span('A', 'F')]));

/// `[a-z]`
pub static LOWER: LazyLock<Charset> = LazyLock::new(|| build(&[span('a', 'z')]));

/// `[A-Z]`
pub static UPPER: LazyLock<Charset> = LazyLock::new(|| build(&[span('A', 'Z')]));

/// Space, tab, carriage return, newline and form feed
pub static WHITESPACE: LazyLock<Charset> = LazyLock::new(|| {
    build(&[
        span(' ', ' '),
        span('\t', '\t'),
        span('\r', '\r'),
        span('\n', '\n'),
        span('\x0C', '\x0C'),
    ])
});

/// The 7-bit ASCII range
pub static ASCII: LazyLock<Charset> =
    LazyLock::new(|| build(&[CharRange::new_unchecked(MIN_CHAR, MAX_ASCII_CHAR)]));

/// Name -> predefined set, built on first lookup
static NAMED: OnceLock<HashMap<&'static str, &'static LazyLock<Charset>>> = OnceLock::new();

/// Look up a predefined set by name
///
/// # Supported Names
///
/// | Name | Set |
/// |------|-----|
/// | `any`, `.` | [`ANYCHAR`] |
/// | `nothing`, `[]` | [`NOTHING`] |
/// | `alnum`, `[a-zA-Z0-9]`, `[0-9a-zA-Z]` | [`ALNUM`] |
/// | `alpha`, `[a-zA-Z]`, `[A-Za-z]` | [`ALPHA`] |
/// | `digit`, `\d`, `[0-9]` | [`DIGIT`] |
/// | `xdigit`, `[0-9a-fA-F]`, `[0-9A-Fa-f]` | [`XDIGIT`] |
/// | `lower`, `[a-z]` | [`LOWER`] |
/// | `upper`, `[A-Z]` | [`UPPER`] |
/// | `space`, `whitespace`, `\s` | [`WHITESPACE`] |
/// | `ascii` | [`ASCII`] |
///
/// ```rust
/// use chset::charset::constants::{named, DIGIT};
///
/// assert_eq!(named("\\d"), Some(&*DIGIT));
/// assert!(named("[a-z]+").is_none());
/// ```
pub fn named(name: &str) -> Option<&'static Charset> {
    NAMED
        .get_or_init(|| {
            HashMap::from([
                ("any", &ANYCHAR),
                (".", &ANYCHAR),
                ("nothing", &NOTHING),
                ("[]", &NOTHING),
                ("alnum", &ALNUM),
                ("[a-zA-Z0-9]", &ALNUM),
                ("[0-9a-zA-Z]", &ALNUM),
                ("alpha", &ALPHA),
                ("[a-zA-Z]", &ALPHA),
                ("[A-Za-z]", &ALPHA),
                ("digit", &DIGIT),
                ("\\d", &DIGIT),
                ("[0-9]", &DIGIT),
                ("xdigit", &XDIGIT),
                ("[0-9a-fA-F]", &XDIGIT),
                ("[0-9A-Fa-f]", &XDIGIT),
                ("lower", &LOWER),
                ("[a-z]", &LOWER),
                ("upper", &UPPER),
                ("[A-Z]", &UPPER),
                ("space", &WHITESPACE),
                ("whitespace", &WHITESPACE),
                ("\\s", &WHITESPACE),
                ("ascii", &ASCII),
            ])
        })
        .get(name)
        .map(|set| LazyLock::force(set))
}
