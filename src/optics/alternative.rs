//! Alternative composition of enum paths.
//!
//! Given `p: EnumPath<A, X>` and `q: EnumPath<B, X>`, the alternative of the
//! two focuses on an `X` inside an [`Either<A, B>`]: extraction dispatches on
//! the side and uses the matching path.
//!
//! Embedding is not well defined, because an `X` could be placed on either
//! side. [`AlternativeEnumPath`] therefore does not implement
//! [`EnumPath`]; callers pick the side explicitly with
//! [`set_left`](AlternativeEnumPath::set_left),
//! [`set_right`](AlternativeEnumPath::set_right), or rebuild on the side an
//! existing whole occupies with [`set_like`](AlternativeEnumPath::set_like).
//!
//! # Examples
//!
//! ```
//! use focal::control::Either;
//! use focal::optics::{err_case, some_case, EnumPath};
//!
//! let failure = some_case::<String>().or(err_case::<i32, String>());
//!
//! let from_option: Either<Option<String>, Result<i32, String>> = Either::Left(Some("lost".to_string()));
//! let from_result: Either<Option<String>, Result<i32, String>> = Either::Right(Err("boom".to_string()));
//! let succeeded: Either<Option<String>, Result<i32, String>> = Either::Right(Ok(1));
//!
//! assert_eq!(failure.get(from_option), Some("lost".to_string()));
//! assert_eq!(failure.get(from_result.clone()), Some("boom".to_string()));
//! assert_eq!(failure.get(succeeded), None);
//!
//! let rebuilt = failure.set_like(&from_result, "bang".to_string());
//! assert_eq!(rebuilt, Either::Right(Err("bang".to_string())));
//! ```

use crate::control::Either;

use super::enum_path::{BorrowEnumPath, EnumPath};
use super::setter::Setter;

/// Two enum paths to the same payload type, rooted in `Either`.
///
/// Created by [`EnumPath::or`] or [`alternative`].
#[derive(Clone, Debug)]
pub struct AlternativeEnumPath<Pl, Pr> {
    left: Pl,
    right: Pr,
}

impl<Pl, Pr> AlternativeEnumPath<Pl, Pr> {
    /// Creates a new alternative path.
    #[must_use]
    pub const fn new(left: Pl, right: Pr) -> Self {
        Self { left, right }
    }

    /// Borrows the payload through the path for the side `whole` is on.
    pub fn get_ref<'a, A, B, X>(&self, whole: &'a Either<A, B>) -> Option<&'a X>
    where
        Pl: BorrowEnumPath<A, X>,
        Pr: BorrowEnumPath<B, X>,
    {
        match whole {
            Either::Left(value) => self.left.get_ref(value),
            Either::Right(value) => self.right.get_ref(value),
        }
    }

    /// Extracts the payload through the path for the side `whole` is on,
    /// handing `whole` back on a mismatch.
    ///
    /// # Errors
    ///
    /// Returns `Err(whole)` when the path for that side does not match.
    pub fn match_case<A, B, X>(&self, whole: Either<A, B>) -> Result<X, Either<A, B>>
    where
        Pl: EnumPath<A, X>,
        Pr: EnumPath<B, X>,
    {
        match whole {
            Either::Left(value) => self.left.match_case(value).map_err(Either::Left),
            Either::Right(value) => self.right.match_case(value).map_err(Either::Right),
        }
    }

    /// Extracts the payload through the path for the side `whole` is on.
    pub fn get<A, B, X>(&self, whole: Either<A, B>) -> Option<X>
    where
        Pl: EnumPath<A, X>,
        Pr: EnumPath<B, X>,
    {
        self.match_case(whole).ok()
    }

    /// Embeds `part` on the left side.
    pub fn set_left<A, B, X>(&self, part: X) -> Either<A, B>
    where
        Pl: EnumPath<A, X>,
    {
        Either::Left(self.left.set(part))
    }

    /// Embeds `part` on the right side.
    pub fn set_right<A, B, X>(&self, part: X) -> Either<A, B>
    where
        Pr: EnumPath<B, X>,
    {
        Either::Right(self.right.set(part))
    }

    /// Embeds `part` on the side that `like` is on.
    ///
    /// `get(set_like(&whole, part)) == Some(part)` holds on both sides.
    pub fn set_like<A, B, X>(&self, like: &Either<A, B>, part: X) -> Either<A, B>
    where
        Pl: EnumPath<A, X>,
        Pr: EnumPath<B, X>,
    {
        if like.is_left() {
            self.set_left(part)
        } else {
            self.set_right(part)
        }
    }
}

/// Updating through an alternative path keeps the side, so it is a setter
/// even though it is not an enum path.
impl<A, B, X, Pl, Pr> Setter<Either<A, B>, X> for AlternativeEnumPath<Pl, Pr>
where
    Pl: EnumPath<A, X>,
    Pr: EnumPath<B, X>,
{
    fn modify<F>(&self, source: Either<A, B>, function: F) -> Either<A, B>
    where
        F: FnMut(X) -> X,
    {
        match source {
            Either::Left(value) => Either::Left(self.left.modify(value, function)),
            Either::Right(value) => Either::Right(self.right.modify(value, function)),
        }
    }
}

/// Alternative composition as a free function: `alternative(p, q)` is
/// `p.or(q)`.
#[must_use]
pub const fn alternative<Pl, Pr>(left: Pl, right: Pr) -> AlternativeEnumPath<Pl, Pr> {
    AlternativeEnumPath::new(left, right)
}
