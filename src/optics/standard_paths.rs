//! Enum paths for the standard sum types.

use crate::control::Either;

use super::enum_path::{BorrowEnumPath, FunctionEnumPath};

/// Focuses on the value inside `Some`.
///
/// # Example
///
/// ```
/// use focal::optics::{some_case, EnumPath};
///
/// assert_eq!(some_case().get(Some(3)), Some(3));
/// assert_eq!(some_case::<i32>().match_case(None), Err(None));
/// assert_eq!(some_case().set(3), Some(3));
/// ```
#[must_use]
pub fn some_case<T>() -> impl BorrowEnumPath<Option<T>, T> + Clone {
    FunctionEnumPath::new(Option::as_ref, Some, |whole: Option<T>| whole.ok_or(None))
}

/// Focuses on the success value of a `Result`.
#[must_use]
pub fn ok_case<T, E>() -> impl BorrowEnumPath<Result<T, E>, T> + Clone {
    FunctionEnumPath::new(
        |whole: &Result<T, E>| whole.as_ref().ok(),
        Ok,
        |whole: Result<T, E>| match whole {
            Ok(value) => Ok(value),
            Err(error) => Err(Err(error)),
        },
    )
}

/// Focuses on the failure value of a `Result`.
///
/// # Example
///
/// ```
/// use focal::optics::{err_case, BorrowEnumPath, EnumPath};
///
/// let failed: Result<u8, String> = Err("timeout".to_string());
/// assert_eq!(err_case().get_ref(&failed).map(String::as_str), Some("timeout"));
/// assert_eq!(err_case().get(Ok::<u8, String>(1)), None);
/// ```
#[must_use]
pub fn err_case<T, E>() -> impl BorrowEnumPath<Result<T, E>, E> + Clone {
    FunctionEnumPath::new(
        |whole: &Result<T, E>| whole.as_ref().err(),
        Err,
        |whole: Result<T, E>| match whole {
            Err(error) => Ok(error),
            Ok(value) => Err(Ok(value)),
        },
    )
}

/// Focuses on the value inside `Either::Left`.
#[must_use]
pub fn left_case<L, R>() -> impl BorrowEnumPath<Either<L, R>, L> + Clone {
    FunctionEnumPath::new(
        Either::left_ref,
        Either::Left,
        |whole: Either<L, R>| match whole {
            Either::Left(value) => Ok(value),
            right @ Either::Right(_) => Err(right),
        },
    )
}

/// Focuses on the value inside `Either::Right`.
#[must_use]
pub fn right_case<L, R>() -> impl BorrowEnumPath<Either<L, R>, R> + Clone {
    FunctionEnumPath::new(
        Either::right_ref,
        Either::Right,
        |whole: Either<L, R>| match whole {
            Either::Right(value) => Ok(value),
            left @ Either::Left(_) => Err(left),
        },
    )
}
