//! The `Either` outcome tag.
//!
//! Partitions classify every element as `Left` or `Right`, and alternative
//! enum paths take an `Either<A, B>` as their root. Sequence-level helpers
//! live in [`partition`](crate::partition); this module holds only the tag
//! and its case analysis.
//!
//! # Examples
//!
//! ```rust
//! use focal::control::Either;
//!
//! fn classify(text: &str) -> Either<u16, &str> {
//!     text.parse().map_or(Either::Right(text), Either::Left)
//! }
//!
//! let port = classify("8080").fold(|port| format!("port {port}"), |name| format!("service {name}"));
//! assert_eq!(port, "port 8080");
//! assert_eq!(classify("http").right(), Some("http"));
//! ```

use std::fmt;

/// Tags a value as belonging to one of two outcomes.
///
/// Unlike `Result`, neither side means failure. Conversions to and from
/// `Result` treat `Right` as `Ok`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The first outcome.
    Left(L),
    /// The second outcome.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Whether the value is tagged `Left`.
    ///
    /// ```rust
    /// use focal::control::Either;
    ///
    /// assert!(Either::<u8, ()>::Left(1).is_left());
    /// assert!(!Either::<u8, ()>::Right(()).is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether the value is tagged `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// The left payload, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// The right payload, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Borrows the left payload.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        if let Self::Left(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Borrows the right payload.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        if let Self::Right(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Maps each side with its own function, keeping the tag.
    ///
    /// ```rust
    /// use focal::control::Either;
    ///
    /// let measured = Either::<i32, &str>::Right("four").bimap(i32::abs, str::len);
    /// assert_eq!(measured, Either::Right(4));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, on_left: F, on_right: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        self.fold(
            |value| Either::Left(on_left(value)),
            |value| Either::Right(on_right(value)),
        )
    }

    /// Collapses both sides into one type.
    ///
    /// Every other method here is a `fold`.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Mirrors the tag.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::Right, Either::Left)
    }

    /// Splits into `(left, right)`; exactly one is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        self.fold(|value| (Some(value), None), |value| (None, Some(value)))
    }
}

impl<T> Either<T, T> {
    /// The payload, whichever side carries it.
    ///
    /// ```rust
    /// use focal::control::Either;
    ///
    /// let retries: Either<u32, u32> = Either::Left(3);
    /// assert_eq!(retries.into_inner(), 3);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.fold(|value| value, |value| value)
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tag, payload): (&str, &dyn fmt::Debug) = match self {
            Self::Left(value) => ("Left", value),
            Self::Right(value) => ("Right", value),
        };
        formatter.debug_tuple(tag).field(payload).finish()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        result.map_or_else(Self::Left, Self::Right)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}
