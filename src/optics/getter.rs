//! Getters: composable read-only projections.
//!
//! A getter is a function `&S -> A`. Wrapping it in a type gives it the
//! combinators that plain closures lack: composition, lifting through
//! optional, sequence and fallible containers, and adapters that turn it
//! back into a closure for `sort_by`, `fold` and friends.
//!
//! # Examples
//!
//! ```
//! use focal::optics::{get, their_less, Getter};
//! use focal::key_path;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, age: u32 }
//!
//! let mut users = vec![
//!     User { name: "Blob".to_string(), age: 30 },
//!     User { name: "Blob Jr.".to_string(), age: 5 },
//! ];
//!
//! let ages = get(key_path!(User, age)).lift_sequence().get(&users);
//! assert_eq!(ages, vec![30, 5]);
//!
//! let by_age = their_less(get(key_path!(User, age)));
//! users.sort_by(|left, right| if by_age(left, right) {
//!     std::cmp::Ordering::Less
//! } else {
//!     std::cmp::Ordering::Greater
//! });
//! assert_eq!(users[0].name, "Blob Jr.");
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

use super::key_path::KeyPath;

/// A read-only projection from a root to a value.
///
/// # Type Parameters
///
/// - `S`: The root type
/// - `A`: The projected value type
///
/// Implementations must be referentially transparent: the same root always
/// projects to the same value.
pub trait Getter<S, A> {
    /// Projects the value out of `source`.
    fn get(&self, source: &S) -> A;

    /// Composes this getter with a getter on its result.
    ///
    /// `outer.compose(inner).get(s) == inner.get(&outer.get(s))`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{FunctionGetter, Getter};
    ///
    /// let length = FunctionGetter::new(|text: &String| text.len());
    /// let is_long = FunctionGetter::new(|length: &usize| *length > 3);
    ///
    /// assert!(length.compose(is_long).get(&"Blobby".to_string()));
    /// ```
    fn compose<B, G>(self, inner: G) -> ComposedGetter<Self, G, A>
    where
        Self: Sized,
        G: Getter<A, B>,
    {
        ComposedGetter::new(self, inner)
    }

    /// Lifts this getter over `Option`. See [`lift_optional`].
    fn lift_optional(self) -> LiftOptional<Self>
    where
        Self: Sized,
    {
        lift_optional(self)
    }

    /// Lifts this getter over `Vec`. See [`lift_sequence`].
    fn lift_sequence(self) -> LiftSequence<Self>
    where
        Self: Sized,
    {
        lift_sequence(self)
    }

    /// Lifts this getter over `Result`. See [`lift_ok`].
    fn lift_ok(self) -> LiftOk<Self>
    where
        Self: Sized,
    {
        lift_ok(self)
    }

    /// Turns this getter into a plain closure.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{get, Getter};
    /// use focal::key_path;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Food { name: String }
    ///
    /// let foods = vec![Food { name: "Tacos".to_string() }, Food { name: "Nachos".to_string() }];
    /// let name = get(key_path!(Food, name)).into_fn();
    ///
    /// assert!(foods.iter().any(|food| name(food) == "Nachos"));
    /// assert_eq!(foods.iter().map(&name).collect::<Vec<_>>(), vec!["Tacos", "Nachos"]);
    /// ```
    fn into_fn(self) -> impl Fn(&S) -> A
    where
        Self: Sized,
    {
        move |source| self.get(source)
    }
}

/// A getter built from a closure.
///
/// Any projection works, including computed ones.
///
/// # Example
///
/// ```
/// use focal::optics::{FunctionGetter, Getter};
///
/// struct User { name: String, age: u32 }
///
/// let is_staff = FunctionGetter::new(|user: &User| user.name.starts_with("Blob"));
/// assert!(is_staff.get(&User { name: "Blob".to_string(), age: 30 }));
/// ```
pub struct FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    getter: G,
    _marker: PhantomData<fn(&S) -> A>,
}

impl<S, A, G> FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    /// Creates a new `FunctionGetter`.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Getter<S, A> for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }
}

impl<S, A, G> Clone for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> std::fmt::Debug for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

/// Two getters joined end to end.
pub struct ComposedGetter<O, I, A> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn() -> A>,
}

impl<O, I, A> ComposedGetter<O, I, A> {
    /// Creates a new composed getter.
    #[must_use]
    pub const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, I> Getter<S, B> for ComposedGetter<O, I, A>
where
    O: Getter<S, A>,
    I: Getter<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.inner.get(&self.outer.get(source))
    }
}

impl<O: Clone, I: Clone, A> Clone for ComposedGetter<O, I, A> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O: std::fmt::Debug, I: std::fmt::Debug, A> std::fmt::Debug for ComposedGetter<O, I, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedGetter")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// The getter of a key path's focus. Created by [`get`].
#[derive(Clone, Debug)]
pub struct KeyPathGetter<P> {
    path: P,
}

impl<S, A, P> Getter<S, A> for KeyPathGetter<P>
where
    P: KeyPath<S, A>,
    A: Clone,
{
    fn get(&self, source: &S) -> A {
        self.path.get(source).clone()
    }
}

/// Builds the getter of the field a key path focuses on.
///
/// The focused value is cloned out of the root.
///
/// # Example
///
/// ```
/// use focal::optics::{get, Getter};
/// use focal::key_path;
///
/// struct User { name: String, age: u32 }
///
/// let age = get(key_path!(User, age));
/// assert_eq!(age.get(&User { name: "Blob".to_string(), age: 30 }), 30);
/// ```
#[must_use]
pub const fn get<P>(path: P) -> KeyPathGetter<P> {
    KeyPathGetter { path }
}

/// A getter lifted over `Option`. Created by [`lift_optional`].
#[derive(Clone, Debug)]
pub struct LiftOptional<G> {
    getter: G,
}

impl<S, A, G> Getter<Option<S>, Option<A>> for LiftOptional<G>
where
    G: Getter<S, A>,
{
    fn get(&self, source: &Option<S>) -> Option<A> {
        source.as_ref().map(|value| self.getter.get(value))
    }
}

/// Lifts a getter over `Option`: `None` projects to `None` without calling
/// the inner getter.
///
/// # Example
///
/// ```
/// use focal::optics::{lift_optional, FunctionGetter, Getter};
///
/// let length = lift_optional(FunctionGetter::new(|text: &String| text.len()));
/// assert_eq!(length.get(&Some("Blob".to_string())), Some(4));
/// assert_eq!(length.get(&None), None);
/// ```
#[must_use]
pub const fn lift_optional<G>(getter: G) -> LiftOptional<G> {
    LiftOptional { getter }
}

/// A getter lifted over `Vec`. Created by [`lift_sequence`].
#[derive(Clone, Debug)]
pub struct LiftSequence<G> {
    getter: G,
}

impl<S, A, G> Getter<Vec<S>, Vec<A>> for LiftSequence<G>
where
    G: Getter<S, A>,
{
    fn get(&self, source: &Vec<S>) -> Vec<A> {
        source.iter().map(|value| self.getter.get(value)).collect()
    }
}

/// Lifts a getter over `Vec`, projecting every element in order.
///
/// The output always has the same length as the input.
#[must_use]
pub const fn lift_sequence<G>(getter: G) -> LiftSequence<G> {
    LiftSequence { getter }
}

/// A getter lifted over `Result`. Created by [`lift_ok`].
#[derive(Clone, Debug)]
pub struct LiftOk<G> {
    getter: G,
}

impl<S, E, A, G> Getter<Result<S, E>, Option<A>> for LiftOk<G>
where
    G: Getter<S, A>,
{
    fn get(&self, source: &Result<S, E>) -> Option<A> {
        source.as_ref().ok().map(|value| self.getter.get(value))
    }
}

/// Lifts a getter over `Result`: a failure projects to `None`.
///
/// # Example
///
/// ```
/// use focal::optics::{lift_ok, FunctionGetter, Getter};
///
/// let double = lift_ok(FunctionGetter::new(|n: &i32| n * 2));
/// assert_eq!(double.get(&Ok::<i32, String>(21)), Some(42));
/// assert_eq!(double.get(&Err::<i32, String>("boom".to_string())), None);
/// ```
#[must_use]
pub const fn lift_ok<G>(getter: G) -> LiftOk<G> {
    LiftOk { getter }
}

/// Builds a fold step that projects each element before reducing.
///
/// `combining(getter, reducer)(accumulator, source)` is
/// `reducer(accumulator, getter.get(source))`.
///
/// # Example
///
/// ```
/// use focal::optics::{combining, get};
/// use focal::key_path;
///
/// struct Item { price: u32 }
///
/// let items = vec![Item { price: 3 }, Item { price: 4 }];
/// let total = items.iter().fold(0, combining(get(key_path!(Item, price)), |sum, price| sum + price));
/// assert_eq!(total, 7);
/// ```
pub fn combining<S, A, Acc, G, R>(getter: G, reducer: R) -> impl Fn(Acc, &S) -> Acc
where
    G: Getter<S, A>,
    R: Fn(Acc, A) -> Acc,
{
    move |accumulator, source| reducer(accumulator, getter.get(source))
}

/// Builds a relation on roots from a relation on their projections.
///
/// # Example
///
/// ```
/// use focal::optics::{their, get};
/// use focal::key_path;
///
/// struct User { name: String }
///
/// let same_name = their(get(key_path!(User, name)), |left: &String, right: &String| left == right);
/// assert!(same_name(&User { name: "Blob".to_string() }, &User { name: "Blob".to_string() }));
/// ```
pub fn their<S, A, G, R>(getter: G, relation: R) -> impl Fn(&S, &S) -> bool
where
    G: Getter<S, A>,
    R: Fn(&A, &A) -> bool,
{
    move |left, right| relation(&getter.get(left), &getter.get(right))
}

/// [`their`] with `<` as the relation.
pub fn their_less<S, A, G>(getter: G) -> impl Fn(&S, &S) -> bool
where
    G: Getter<S, A>,
    A: PartialOrd,
{
    their(getter, |left: &A, right: &A| left < right)
}

/// Builds a comparator on roots from the ordering of their projections.
///
/// # Example
///
/// ```
/// use focal::optics::{order_by, get};
/// use focal::key_path;
///
/// #[derive(Debug, PartialEq)]
/// struct User { age: u32 }
///
/// let mut users = vec![User { age: 30 }, User { age: 5 }, User { age: 12 }];
/// users.sort_by(order_by(get(key_path!(User, age))));
/// assert_eq!(users, vec![User { age: 5 }, User { age: 12 }, User { age: 30 }]);
/// ```
pub fn order_by<S, A, G>(getter: G) -> impl Fn(&S, &S) -> Ordering
where
    G: Getter<S, A>,
    A: Ord,
{
    move |left, right| getter.get(left).cmp(&getter.get(right))
}

/// Creates a getter for a struct field, cloning the field.
///
/// # Example
///
/// ```
/// use focal::optics::Getter;
/// use focal::getter;
///
/// struct User { name: String }
///
/// let name = getter!(User, name);
/// assert_eq!(name.get(&User { name: "Blob".to_string() }), "Blob");
/// ```
#[macro_export]
macro_rules! getter {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionGetter::new(|source: &$struct_type| source.$field.clone())
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionGetter::new(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionGetter::new(|source: &$struct_type| source.$field.clone())
    };
}
