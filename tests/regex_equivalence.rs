//! Differential tests against the regex crate
//!
//! The predefined sets and a few spec strings are compared, code point by
//! code point, with the equivalent regex character classes.

use chset::charset::constants::{
    ALNUM, ALPHA, ANYCHAR, ASCII, DIGIT, LOWER, UPPER, WHITESPACE, XDIGIT,
};
use chset::Charset;
use regex::Regex;

/// Compare over ASCII, Latin-1 and a slice of the BMP, skipping surrogates
fn assert_same_as_regex(set: &Charset, class: &str) {
    let re = Regex::new(&format!("^{}$", class)).unwrap();
    for cp in 0..=0x2FFu32 {
        let Some(c) = char::from_u32(cp) else {
            continue;
        };
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        assert_eq!(
            set.contains_char(c),
            re.is_match(s),
            "{:?} disagrees with {} at U+{:04X}",
            set.to_string(),
            class,
            cp
        );
    }
}

#[test]
fn test_digit() {
    assert_same_as_regex(&DIGIT, "[0-9]");
}

#[test]
fn test_alpha() {
    assert_same_as_regex(&ALPHA, "[a-zA-Z]");
}

#[test]
fn test_alnum() {
    assert_same_as_regex(&ALNUM, "[a-zA-Z0-9]");
}

#[test]
fn test_xdigit() {
    assert_same_as_regex(&XDIGIT, "[0-9a-fA-F]");
}

#[test]
fn test_case() {
    assert_same_as_regex(&LOWER, "[a-z]");
    assert_same_as_regex(&UPPER, "[A-Z]");
}

#[test]
fn test_whitespace() {
    assert_same_as_regex(&WHITESPACE, r"[ \t\r\n\f]");
}

#[test]
fn test_ascii() {
    assert_same_as_regex(&ASCII, r"[\x00-\x7F]");
}

#[test]
fn test_anychar() {
    assert_same_as_regex(&ANYCHAR, r"(?s:.)");
}

#[test]
fn test_complement_against_negated_class() {
    assert_same_as_regex(&!&*ALNUM, "[^a-zA-Z0-9]");
}

#[test]
fn test_spec_strings() {
    assert_same_as_regex(&Charset::from_spec("uoiea0-9").unwrap(), "[uoiea0-9]");
    assert_same_as_regex(&Charset::from_spec("a-").unwrap(), r"[a\-]");
    assert_same_as_regex(&Charset::from_spec("À-ÿ_").unwrap(), "[À-ÿ_]");
}
