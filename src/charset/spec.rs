//! Spec strings
//!
//! A spec string lists the members of a set as literal characters, with
//! `a-b` as shorthand for the inclusive range from `a` to `b`:
//!
//! | Spec        | Members |
//! |-------------|---------|
//! | `"abc"`     | `a`, `b`, `c` |
//! | `"a-z0-9"`  | `a` through `z`, `0` through `9` |
//! | `"a-"`      | `a` and `-` |
//! | `"--/"`     | `-` through `/` |
//!
//! There is no escape syntax. A `-` is a literal only as the very last
//! character of the spec (and then the character before it is a literal
//! too), or when it takes the place of a range endpoint.

use super::error::CharsetError;
use super::range::CharRange;
use super::set::Charset;

/// Translate a spec string into the ranges it denotes, in source order
///
/// Fails if a range shorthand is descending, e.g. `"z-a"`.
pub fn compile(spec: &str) -> Result<Vec<CharRange>, CharsetError> {
    let chars: Vec<char> = spec.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let s = chars[i];
        match (chars.get(i + 1), chars.get(i + 2)) {
            (Some('-'), Some(&e)) => {
                match CharRange::from_chars(s, e) {
                    Ok(r) => out.push(r),
                    Err(err) => {
                        log_debug!("rejecting spec {:?}: {}", spec, err);
                        return Err(err);
                    }
                }
                i += 3;
            }
            (Some('-'), None) => {
                // Trailing hyphen: both characters are literals
                log_debug!("spec {:?} ends in '-', treating it as a literal", spec);
                out.push(CharRange::single(s));
                out.push(CharRange::single('-'));
                break;
            }
            _ => {
                out.push(CharRange::single(s));
                i += 1;
            }
        }
    }

    Ok(out)
}

impl Charset {
    /// Build a set from a spec string
    ///
    /// # Example
    ///
    /// ```rust
    /// use chset::Charset;
    ///
    /// let lower = Charset::from_spec("a-z").unwrap();
    /// assert!(lower.contains_char('m'));
    /// assert!(!lower.contains_char('A'));
    ///
    /// let odd = Charset::from_spec("a-").unwrap();
    /// assert!(odd.contains_char('a'));
    /// assert!(odd.contains_char('-'));
    /// assert_eq!(odd.len(), 2);
    ///
    /// assert!(Charset::from_spec("z-a").is_err());
    /// ```
    pub fn from_spec(spec: &str) -> Result<Self, CharsetError> {
        let set: Charset = compile(spec)?.into_iter().collect();
        log_debug!(
            "compiled spec {:?} into {} range(s): {}",
            spec,
            set.range_count(),
            set
        );
        Ok(set)
    }
}
