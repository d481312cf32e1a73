//! Enum paths: partial accessors into sum types.
//!
//! An enum path focuses on the payload of one case of an enum. Extraction
//! may fail (the value is in another case); embedding always succeeds.
//!
//! Paths whose payload is stored as one value inside the case can also lend
//! it out by reference; those implement [`BorrowEnumPath`]. A payload
//! assembled from several fields only exists once extracted, so such paths
//! implement [`EnumPath`] alone.
//!
//! # Laws
//!
//! 1. **Round-trip Law**: Embedding then extracting yields the payload.
//!    ```text
//!    path.get(path.set(part)) == Some(part)
//!    ```
//!
//! 2. **Rebuild Law**: A successful extraction embeds back to the original.
//!    ```text
//!    if let Ok(part) = path.match_case(whole.clone()) then
//!        path.set(part) == whole
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::{BorrowEnumPath, EnumPath};
//! use focal::enum_path;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Authentication {
//!     Authenticated(String),
//!     Unauthenticated,
//! }
//!
//! let authenticated = enum_path!(Authentication, Authenticated);
//!
//! let token = Authentication::Authenticated("deadbeef".to_string());
//! assert_eq!(authenticated.get_ref(&token).map(String::as_str), Some("deadbeef"));
//! assert_eq!(authenticated.get(Authentication::Unauthenticated), None);
//!
//! let rebuilt = authenticated.set("cafebeef".to_string());
//! assert_eq!(rebuilt, Authentication::Authenticated("cafebeef".to_string()));
//! ```

use std::marker::PhantomData;

use super::alternative::AlternativeEnumPath;
use super::setter::Setter;

/// A partial accessor focusing on one case of an enum.
///
/// # Type Parameters
///
/// - `W`: The whole (the enum)
/// - `P`: The part (the payload of the focused case)
pub trait EnumPath<W, P> {
    /// Takes the payload out of `whole`, or hands `whole` back untouched when
    /// it is in another case.
    ///
    /// # Errors
    ///
    /// Returns `Err(whole)` on a case mismatch.
    fn match_case(&self, whole: W) -> Result<P, W>;

    /// Embeds a payload into the focused case.
    fn set(&self, part: P) -> W;

    /// Takes the payload out of `whole` if it is in the focused case.
    fn get(&self, whole: W) -> Option<P> {
        self.match_case(whole).ok()
    }

    /// Updates the payload when `whole` is in the focused case; any other
    /// case passes through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{ok_case, EnumPath};
    ///
    /// let parsed: Result<i32, String> = Ok(20);
    /// assert_eq!(ok_case().modify(parsed, |n| n + 1), Ok(21));
    ///
    /// let failed: Result<i32, String> = Err("nope".to_string());
    /// assert_eq!(ok_case().modify(failed.clone(), |n| n + 1), failed);
    /// ```
    fn modify<F>(&self, whole: W, function: F) -> W
    where
        F: FnOnce(P) -> P,
    {
        match self.match_case(whole) {
            Ok(part) => self.set(function(part)),
            Err(whole) => whole,
        }
    }

    /// Composes this path with a path into the focused payload.
    ///
    /// The composed path succeeds only when both legs succeed.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{ok_case, some_case, EnumPath};
    ///
    /// let present = ok_case().compose(some_case());
    ///
    /// let found: Result<Option<i32>, String> = Ok(Some(1));
    /// let missing: Result<Option<i32>, String> = Ok(None);
    /// assert_eq!(present.get(found), Some(1));
    /// assert_eq!(present.get(missing), None);
    /// assert_eq!(present.set(2), Ok::<_, String>(Some(2)));
    /// ```
    fn compose<Q, T>(self, inner: T) -> ComposedEnumPath<Self, T, P>
    where
        Self: Sized,
        T: EnumPath<P, Q>,
    {
        ComposedEnumPath::new(self, inner)
    }

    /// Combines this path with another that focuses on the same payload
    /// type in a different enum. See [`AlternativeEnumPath`].
    fn or<V, T>(self, other: T) -> AlternativeEnumPath<Self, T>
    where
        Self: Sized,
        T: EnumPath<V, P>,
    {
        AlternativeEnumPath::new(self, other)
    }

    /// Views this path as a setter updating the focused payload.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{each, err_case, EnumPath, Setter};
    ///
    /// let results: Vec<Result<i32, String>> = vec![Ok(1), Err("bad".to_string())];
    /// let shouted = each()
    ///     .compose(err_case().as_setter())
    ///     .modify(results, |error: String| error.to_uppercase());
    /// assert_eq!(shouted, vec![Ok(1), Err("BAD".to_string())]);
    /// ```
    fn as_setter(self) -> CaseSetter<Self>
    where
        Self: Sized,
    {
        CaseSetter { path: self }
    }
}

/// An enum path that can lend its payload out of a borrowed whole.
///
/// For every whole, `get_ref(&whole).is_some() == get(whole).is_some()`,
/// and when both are present they hold equal payloads.
///
/// # Example
///
/// ```
/// use focal::optics::{some_case, BorrowEnumPath};
///
/// let present = Some("Blob".to_string());
/// assert_eq!(some_case().get_ref(&present).map(String::as_str), Some("Blob"));
/// assert_eq!(some_case::<String>().get_ref(&None), None);
/// ```
pub trait BorrowEnumPath<W, P>: EnumPath<W, P> {
    /// Borrows the payload if `whole` is in the focused case.
    fn get_ref<'a>(&self, whole: &'a W) -> Option<&'a P>;
}

/// An enum path built from three functions.
///
/// `enum_path!` and `#[derive(EnumPaths)]` generate `FunctionEnumPath`
/// values.
///
/// # Example
///
/// ```
/// use focal::optics::{EnumPath, FunctionEnumPath};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// let circle = FunctionEnumPath::new(
///     |shape: &Shape| match shape {
///         Shape::Circle(radius) => Some(radius),
///         Shape::Square(_) => None,
///     },
///     Shape::Circle,
///     |shape: Shape| match shape {
///         Shape::Circle(radius) => Ok(radius),
///         other => Err(other),
///     },
/// );
///
/// assert_eq!(circle.get(Shape::Circle(1.5)), Some(1.5));
/// assert_eq!(circle.match_case(Shape::Square(2.0)), Err(Shape::Square(2.0)));
/// ```
pub struct FunctionEnumPath<W, P, G, E, M>
where
    G: Fn(&W) -> Option<&P>,
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    get_ref: G,
    embed: E,
    extract: M,
    _marker: PhantomData<fn(W) -> P>,
}

impl<W, P, G, E, M> FunctionEnumPath<W, P, G, E, M>
where
    G: Fn(&W) -> Option<&P>,
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    /// Creates a new `FunctionEnumPath` from a borrowing extractor, an
    /// embedding and an owning extractor.
    #[must_use]
    pub const fn new(get_ref: G, embed: E, extract: M) -> Self {
        Self {
            get_ref,
            embed,
            extract,
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, E, M> EnumPath<W, P> for FunctionEnumPath<W, P, G, E, M>
where
    G: Fn(&W) -> Option<&P>,
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    fn match_case(&self, whole: W) -> Result<P, W> {
        (self.extract)(whole)
    }

    fn set(&self, part: P) -> W {
        (self.embed)(part)
    }
}

impl<W, P, G, E, M> BorrowEnumPath<W, P> for FunctionEnumPath<W, P, G, E, M>
where
    G: Fn(&W) -> Option<&P>,
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    fn get_ref<'a>(&self, whole: &'a W) -> Option<&'a P> {
        (self.get_ref)(whole)
    }
}

impl<W, P, G, E, M> Clone for FunctionEnumPath<W, P, G, E, M>
where
    G: Fn(&W) -> Option<&P> + Clone,
    E: Fn(P) -> W + Clone,
    M: Fn(W) -> Result<P, W> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_ref: self.get_ref.clone(),
            embed: self.embed.clone(),
            extract: self.extract.clone(),
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, E, M> std::fmt::Debug for FunctionEnumPath<W, P, G, E, M>
where
    G: Fn(&W) -> Option<&P>,
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionEnumPath")
            .finish_non_exhaustive()
    }
}

/// An enum path built from an embedding and an owning extractor only.
///
/// Used when the payload is assembled from several fields of the case, so
/// there is no single value to borrow. `#[derive(EnumPaths)]` generates
/// these for multi-field variants.
///
/// # Example
///
/// ```
/// use focal::optics::{EnumPath, OwnedEnumPath};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Rectangle(f64, f64),
///     Dot,
/// }
///
/// let rectangle = OwnedEnumPath::new(
///     |(width, height): (f64, f64)| Shape::Rectangle(width, height),
///     |shape: Shape| match shape {
///         Shape::Rectangle(width, height) => Ok((width, height)),
///         other => Err(other),
///     },
/// );
///
/// assert_eq!(rectangle.get(Shape::Rectangle(2.0, 3.0)), Some((2.0, 3.0)));
/// assert_eq!(rectangle.set((1.0, 1.0)), Shape::Rectangle(1.0, 1.0));
/// assert_eq!(rectangle.get(Shape::Dot), None);
/// ```
pub struct OwnedEnumPath<W, P, E, M>
where
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    embed: E,
    extract: M,
    _marker: PhantomData<fn(W) -> P>,
}

impl<W, P, E, M> OwnedEnumPath<W, P, E, M>
where
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    /// Creates a new `OwnedEnumPath` from an embedding and an owning
    /// extractor.
    #[must_use]
    pub const fn new(embed: E, extract: M) -> Self {
        Self {
            embed,
            extract,
            _marker: PhantomData,
        }
    }
}

impl<W, P, E, M> EnumPath<W, P> for OwnedEnumPath<W, P, E, M>
where
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    fn match_case(&self, whole: W) -> Result<P, W> {
        (self.extract)(whole)
    }

    fn set(&self, part: P) -> W {
        (self.embed)(part)
    }
}

impl<W, P, E, M> Clone for OwnedEnumPath<W, P, E, M>
where
    E: Fn(P) -> W + Clone,
    M: Fn(W) -> Result<P, W> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            embed: self.embed.clone(),
            extract: self.extract.clone(),
            _marker: PhantomData,
        }
    }
}

impl<W, P, E, M> std::fmt::Debug for OwnedEnumPath<W, P, E, M>
where
    E: Fn(P) -> W,
    M: Fn(W) -> Result<P, W>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OwnedEnumPath")
            .finish_non_exhaustive()
    }
}

/// Two enum paths joined end to end.
///
/// On a mismatch of the inner leg, the intermediate payload is embedded back
/// so that `match_case` still returns the original whole. The composition
/// borrows only when both legs do, and the intermediate type is `'static`.
pub struct ComposedEnumPath<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedEnumPath<P1, P2, A> {
    /// Creates a new composed enum path.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<W, A, B, P1, P2> EnumPath<W, B> for ComposedEnumPath<P1, P2, A>
where
    P1: EnumPath<W, A>,
    P2: EnumPath<A, B>,
{
    fn match_case(&self, whole: W) -> Result<B, W> {
        let intermediate = self.first.match_case(whole)?;
        self.second
            .match_case(intermediate)
            .map_err(|intermediate| self.first.set(intermediate))
    }

    fn set(&self, part: B) -> W {
        self.first.set(self.second.set(part))
    }
}

impl<W, A, B, P1, P2> BorrowEnumPath<W, B> for ComposedEnumPath<P1, P2, A>
where
    P1: BorrowEnumPath<W, A>,
    P2: BorrowEnumPath<A, B>,
    A: 'static,
{
    fn get_ref<'a>(&self, whole: &'a W) -> Option<&'a B> {
        self.first
            .get_ref(whole)
            .and_then(|intermediate| self.second.get_ref(intermediate))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedEnumPath<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedEnumPath<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedEnumPath")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Sequential composition as a free function: `sequential(p, q)` is
/// `p.compose(q)`.
#[must_use]
pub const fn sequential<P1, P2, A>(first: P1, second: P2) -> ComposedEnumPath<P1, P2, A> {
    ComposedEnumPath::new(first, second)
}

/// An enum path viewed as a setter. Created by [`EnumPath::as_setter`].
#[derive(Clone, Debug)]
pub struct CaseSetter<E> {
    path: E,
}

impl<W, P, E> Setter<W, P> for CaseSetter<E>
where
    E: EnumPath<W, P>,
{
    fn modify<F>(&self, source: W, function: F) -> W
    where
        F: FnMut(P) -> P,
    {
        self.path.modify(source, function)
    }
}

/// Creates an enum path for a single-payload tuple variant.
///
/// # Syntax
///
/// ```text
/// enum_path!(EnumType, Variant)
/// enum_path!(EnumType<T, ...>, Variant)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::EnumPath;
/// use focal::enum_path;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Event<T> {
///     Received(T),
///     Dropped,
/// }
///
/// let received = enum_path!(Event<u8>, Received);
/// assert_eq!(received.get(Event::Received(7)), Some(7));
/// assert_eq!(received.match_case(Event::Dropped), Err(Event::Dropped));
/// ```
#[macro_export]
macro_rules! enum_path {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionEnumPath::new(
            |whole: &$enum_type| match whole {
                $enum_type::$variant(part) => Some(part),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |part| $enum_type::$variant(part),
            |whole: $enum_type| match whole {
                $enum_type::$variant(part) => Ok(part),
                #[allow(unreachable_patterns)]
                other => Err(other),
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionEnumPath::new(
            |whole: &$enum_type<$($generic),+>| match whole {
                $enum_type::$variant(part) => Some(part),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |part| $enum_type::$variant(part),
            |whole: $enum_type<$($generic),+>| match whole {
                $enum_type::$variant(part) => Ok(part),
                #[allow(unreachable_patterns)]
                other => Err(other),
            },
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionEnumPath::new(
            |whole: &$enum_type| match whole {
                <$enum_type>::$variant(part) => Some(part),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |part| <$enum_type>::$variant(part),
            |whole: $enum_type| match whole {
                <$enum_type>::$variant(part) => Ok(part),
                #[allow(unreachable_patterns)]
                other => Err(other),
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

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

    #[rstest]
    #[case(Outer::Wrapped(Inner::Value(3)), Some(3))]
    #[case(Outer::Wrapped(Inner::Empty), None)]
    #[case(Outer::Nothing, None)]
    fn test_composed_get(#[case] whole: Outer, #[case] expected: Option<i32>) {
        let path = enum_path!(Outer, Wrapped).compose(enum_path!(Inner, Value));
        assert_eq!(path.get_ref(&whole).copied(), expected);
        assert_eq!(path.get(whole), expected);
    }

    #[rstest]
    #[case(Outer::Wrapped(Inner::Empty))]
    #[case(Outer::Nothing)]
    fn test_composed_match_case_hands_back_whole(#[case] whole: Outer) {
        let path = sequential(enum_path!(Outer, Wrapped), enum_path!(Inner, Value));
        assert_eq!(path.match_case(whole.clone()), Err(whole));
    }

    #[rstest]
    fn test_composed_set_embeds_both_legs() {
        let path = enum_path!(Outer, Wrapped).compose(enum_path!(Inner, Value));
        assert_eq!(path.set(9), Outer::Wrapped(Inner::Value(9)));
    }

    #[rstest]
    fn test_modify_other_case_unchanged() {
        let value = enum_path!(Inner, Value);
        assert_eq!(value.modify(Inner::Empty, |n| n + 1), Inner::Empty);
        assert_eq!(value.modify(Inner::Value(1), |n| n + 1), Inner::Value(2));
    }

    #[rstest]
    fn test_as_setter_sets_only_matching_case() {
        let setter = enum_path!(Inner, Value).as_setter();
        assert_eq!(setter.set(Inner::Value(1), 5), Inner::Value(5));
        assert_eq!(setter.set(Inner::Empty, 5), Inner::Empty);
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Span {
        Range(Inner, Inner),
        Point,
    }

    fn range() -> impl EnumPath<Span, (Inner, Inner)> + Clone {
        OwnedEnumPath::new(
            |(start, end): (Inner, Inner)| Span::Range(start, end),
            |whole: Span| match whole {
                Span::Range(start, end) => Ok((start, end)),
                other => Err(other),
            },
        )
    }

    #[rstest]
    #[case(Span::Range(Inner::Value(1), Inner::Empty), Some((Inner::Value(1), Inner::Empty)))]
    #[case(Span::Point, None)]
    fn test_owned_path_get(#[case] whole: Span, #[case] expected: Option<(Inner, Inner)>) {
        assert_eq!(range().get(whole), expected);
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Track {
        Spanning(Span),
        Idle,
    }

    #[rstest]
    #[case(Track::Spanning(Span::Range(Inner::Empty, Inner::Value(2))), Ok((Inner::Empty, Inner::Value(2))))]
    #[case(Track::Spanning(Span::Point), Err(Track::Spanning(Span::Point)))]
    #[case(Track::Idle, Err(Track::Idle))]
    fn test_owned_path_composes_by_value(
        #[case] whole: Track,
        #[case] expected: Result<(Inner, Inner), Track>,
    ) {
        let path = enum_path!(Track, Spanning).compose(range());
        assert_eq!(path.match_case(whole), expected);
        assert_eq!(
            path.set((Inner::Value(1), Inner::Empty)),
            Track::Spanning(Span::Range(Inner::Value(1), Inner::Empty))
        );
    }
}
