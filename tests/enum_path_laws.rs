#![cfg(feature = "optics")]
//! Property-based tests for enum path laws.
//!
//! - **Round-trip Law**: `path.get(path.set(part)) == Some(part)`
//! - **Rebuild Law**: `path.match_case(whole) == Ok(part)` implies `path.set(part) == whole`
//! - **Mismatch Law**: `path.match_case(whole) == Err(back)` implies `back == whole`

use focal::control::Either;
use focal::enum_path;
use focal::optics::{BorrowEnumPath, EnumPath, alternative, err_case, ok_case, sequential, some_case};
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
enum Inner {
    Value(i32),
    Empty,
}

#[derive(Clone, PartialEq, Debug)]
enum Outer {
    Wrapped(Inner),
    Nothing,
}

fn inner_strategy() -> impl Strategy<Value = Inner> {
    prop_oneof![any::<i32>().prop_map(Inner::Value), Just(Inner::Empty)]
}

fn outer_strategy() -> impl Strategy<Value = Outer> {
    prop_oneof![inner_strategy().prop_map(Outer::Wrapped), Just(Outer::Nothing)]
}

// =============================================================================
// Standard paths
// =============================================================================

proptest! {
    #[test]
    fn prop_some_case_round_trip(value in any::<i32>()) {
        let path = some_case();
        prop_assert_eq!(path.get(path.set(value)), Some(value));
    }

    #[test]
    fn prop_some_case_rebuild(whole in any::<Option<i32>>()) {
        let path = some_case();
        match path.match_case(whole) {
            Ok(part) => prop_assert_eq!(path.set(part), whole),
            Err(back) => prop_assert_eq!(back, whole),
        }
    }

    #[test]
    fn prop_result_cases_are_exclusive(whole in any::<Result<i32, String>>()) {
        let ok = ok_case().get_ref(&whole).is_some();
        let err = err_case().get_ref(&whole).is_some();
        prop_assert!(ok != err);
    }
}

// =============================================================================
// Composed paths
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_round_trip(value in any::<i32>()) {
        let path = enum_path!(Outer, Wrapped).compose(enum_path!(Inner, Value));
        prop_assert_eq!(path.get(path.set(value)), Some(value));
    }

    #[test]
    fn prop_composed_rebuild_and_mismatch(whole in outer_strategy()) {
        let path = sequential(enum_path!(Outer, Wrapped), enum_path!(Inner, Value));
        match path.match_case(whole.clone()) {
            Ok(part) => prop_assert_eq!(path.set(part), whole),
            Err(back) => prop_assert_eq!(back, whole),
        }
    }

    #[test]
    fn prop_composed_get_ref_agrees_with_get(whole in outer_strategy()) {
        let path = enum_path!(Outer, Wrapped).compose(enum_path!(Inner, Value));
        prop_assert_eq!(path.get_ref(&whole).copied(), path.get(whole));
    }

    #[test]
    fn prop_modify_leaves_other_cases(whole in outer_strategy()) {
        let path = enum_path!(Outer, Wrapped).compose(enum_path!(Inner, Value));
        let updated = path.modify(whole.clone(), |value| value.wrapping_add(1));
        if path.get_ref(&whole).is_none() {
            prop_assert_eq!(updated, whole);
        }
    }
}

// =============================================================================
// Alternative paths
// =============================================================================

fn either_strategy() -> impl Strategy<Value = Either<Option<String>, Result<i32, String>>> {
    prop_oneof![
        any::<Option<String>>().prop_map(Either::Left),
        any::<Result<i32, String>>().prop_map(Either::Right),
    ]
}

proptest! {
    #[test]
    fn prop_alternative_get_dispatches(whole in either_strategy()) {
        let failure = alternative(some_case::<String>(), err_case::<i32, String>());
        let expected = match whole.clone() {
            Either::Left(option) => option,
            Either::Right(result) => result.err(),
        };
        prop_assert_eq!(failure.get(whole), expected);
    }

    #[test]
    fn prop_alternative_set_like_round_trip(whole in either_strategy(), part in any::<String>()) {
        let failure = some_case::<String>().or(err_case::<i32, String>());
        let rebuilt = failure.set_like(&whole, part.clone());
        prop_assert_eq!(rebuilt.is_left(), whole.is_left());
        prop_assert_eq!(failure.get(rebuilt), Some(part));
    }
}
