//! Property-based tests using proptest
//!
//! Random sequences of insertions and removals are replayed against both a
//! `Charset` and a plain boolean bitmap over a bounded domain; the two must
//! always agree, and the range list must stay sorted, disjoint and maximal.

use chset::{complement, difference, intersection, symmetric_difference, union};
use chset::{CharRange, Charset, MAX_ASCII_CHAR};
use proptest::prelude::*;

/// Bounded test domain for the reference bitmap
const DOMAIN: u32 = 1000;

#[derive(Debug, Clone)]
enum Op {
    Insert(u32, u32),
    Remove(u32, u32),
}

fn range_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0..DOMAIN, 0..64u32).prop_map(|(first, width)| (first, (first + width).min(DOMAIN - 1)))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        range_strategy().prop_map(|(a, b)| Op::Insert(a, b)),
        range_strategy().prop_map(|(a, b)| Op::Remove(a, b)),
    ]
}

fn set_strategy() -> impl Strategy<Value = Charset> {
    prop::collection::vec(range_strategy(), 0..12).prop_map(|ranges| {
        ranges
            .into_iter()
            .map(|(a, b)| CharRange::new(a, b).unwrap())
            .collect()
    })
}

/// Ranges are sorted, disjoint, maximal and well formed
fn well_formed(set: &Charset) -> bool {
    set.ranges().iter().all(|r| r.first() <= r.last())
        && set
            .ranges()
            .windows(2)
            .all(|w| w[0].last() + 1 < w[1].first())
}

proptest! {
    /// A Charset behaves like a bitmap under inserts and removes
    #[test]
    fn test_matches_reference_bitmap(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut set = Charset::new();
        let mut reference = vec![false; DOMAIN as usize + 2];

        for op in ops {
            match op {
                Op::Insert(a, b) => {
                    set.insert_range(CharRange::new(a, b).unwrap());
                    for c in a..=b {
                        reference[c as usize] = true;
                    }
                }
                Op::Remove(a, b) => {
                    set.remove_range(CharRange::new(a, b).unwrap());
                    for c in a..=b {
                        reference[c as usize] = false;
                    }
                }
            }

            prop_assert!(well_formed(&set), "not well formed: {}", set);
            prop_assert!(set.check_invariants());
            for c in 0..=DOMAIN + 1 {
                prop_assert_eq!(set.contains(c), reference[c as usize], "code point {}", c);
            }
        }
    }

    /// The ASCII bitmap agrees with the range list after every mutation
    #[test]
    fn test_ascii_fast_path_agrees(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut set = Charset::new();
        for op in ops {
            match op {
                Op::Insert(a, b) => set.insert_range(CharRange::new(a, b).unwrap()),
                Op::Remove(a, b) => set.remove_range(CharRange::new(a, b).unwrap()),
            }
            for c in 0..=MAX_ASCII_CHAR {
                prop_assert_eq!(
                    set.ascii().get(c),
                    chset::charset::contains_in_ranges(set.ranges(), c)
                );
            }
        }
    }

    /// Algebra results agree with pointwise boolean logic
    #[test]
    fn test_algebra_is_pointwise(a in set_strategy(), b in set_strategy()) {
        let or = union(&a, &b);
        let minus = difference(&a, &b);
        let and = intersection(&a, &b);
        let xor = symmetric_difference(&a, &b);
        let not_a = complement(&a);

        for set in [&or, &minus, &and, &xor, &not_a] {
            prop_assert!(well_formed(set));
        }

        for c in 0..=DOMAIN {
            let (x, y) = (a.contains(c), b.contains(c));
            prop_assert_eq!(or.contains(c), x || y);
            prop_assert_eq!(minus.contains(c), x && !y);
            prop_assert_eq!(and.contains(c), x && y);
            prop_assert_eq!(xor.contains(c), x != y);
            prop_assert_eq!(not_a.contains(c), !x);
        }
    }

    /// Identities that must hold for any set
    #[test]
    fn test_algebra_identities(x in set_strategy()) {
        prop_assert!(intersection(&x, &complement(&x)).is_empty());
        prop_assert!(difference(&x, &x).is_empty());
        prop_assert!(symmetric_difference(&x, &x).is_empty());
        prop_assert_eq!(complement(&complement(&x)), x.clone());
        prop_assert_eq!(union(&x, &Charset::new()), x);
    }

    /// Insertion order does not change the resulting set
    #[test]
    fn test_insertion_order_irrelevant(ranges in prop::collection::vec(range_strategy(), 0..12)) {
        let forward: Charset = ranges
            .iter()
            .map(|&(a, b)| CharRange::new(a, b).unwrap())
            .collect();
        let backward: Charset = ranges
            .iter()
            .rev()
            .map(|&(a, b)| CharRange::new(a, b).unwrap())
            .collect();
        prop_assert_eq!(forward, backward);
    }

    /// Every (first, last) pair with first <= last is a valid range
    #[test]
    fn test_range_contains_its_bounds(a in 1..DOMAIN, width in 0..200u32) {
        let b = a + width;
        let set = Charset::from_code_points(a, b).unwrap();
        prop_assert!(set.contains(a));
        prop_assert!(set.contains(b));
        prop_assert!(!set.contains(a - 1));
        prop_assert!(!set.contains(b + 1));
    }

    /// Literal-only spec strings contain exactly their characters
    #[test]
    fn test_literal_spec(s in "[a-zA-Z0-9_]{0,16}") {
        let set = Charset::from_spec(&s).unwrap();
        for c in s.chars() {
            prop_assert!(set.contains_char(c));
        }
        let distinct: std::collections::BTreeSet<char> = s.chars().collect();
        prop_assert_eq!(set.len(), distinct.len() as u64);
    }
}
