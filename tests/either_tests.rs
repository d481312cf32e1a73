#![cfg(feature = "control")]
//! Tests for the `Either` tag.

use focal::control::Either;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(Either::Left(3), Some(3), None)]
#[case(Either::Right("r"), None, Some("r"))]
fn test_projections(
    #[case] value: Either<i32, &'static str>,
    #[case] left: Option<i32>,
    #[case] right: Option<&'static str>,
) {
    assert_eq!(value.left(), left);
    assert_eq!(value.right(), right);
    assert_eq!(value.into_options(), (left, right));
}

#[rstest]
fn test_result_conversions() {
    let failed: Result<u8, String> = Err("bad".to_string());
    let either: Either<String, u8> = failed.into();
    assert_eq!(either, Either::Left("bad".to_string()));

    let back: Result<u8, String> = Either::<String, u8>::Right(1).into();
    assert_eq!(back, Ok(1));
}

#[rstest]
fn test_fold_and_into_inner() {
    let value: Either<i32, i32> = Either::Right(4);
    assert_eq!(value.fold(|left| left * 10, |right| right + 1), 5);
    assert_eq!(value.into_inner(), 4);
}

proptest! {
    #[test]
    fn prop_swap_is_involution(value in prop_oneof![
        any::<i32>().prop_map(Either::<i32, String>::Left),
        any::<String>().prop_map(Either::<i32, String>::Right),
    ]) {
        prop_assert_eq!(value.clone().swap().swap(), value);
    }

    #[test]
    fn prop_bimap_identity(value in prop_oneof![
        any::<i32>().prop_map(Either::<i32, u8>::Left),
        any::<u8>().prop_map(Either::<i32, u8>::Right),
    ]) {
        prop_assert_eq!(value.bimap(|left| left, |right| right), value);
    }

    #[test]
    fn prop_result_round_trip(result in any::<Result<u8, i16>>()) {
        let either: Either<i16, u8> = result.into();
        prop_assert_eq!(Result::<u8, i16>::from(either), result);
    }
}
