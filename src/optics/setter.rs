//! Setters: structure-preserving update functions.
//!
//! A setter turns an update on a part, `A -> A`, into an update on the
//! whole, `S -> S`. Setters compose, so a setter into a field of a field is
//! built from two small ones instead of being written by hand.
//!
//! # Laws
//!
//! 1. **Identity Law**: Updating with the identity leaves the source unchanged.
//!    ```text
//!    setter.modify(source, |a| a) == source
//!    ```
//!
//! 2. **Composition Law**: Two updates equal one composed update.
//!    ```text
//!    setter.modify(setter.modify(source, f), g) == setter.modify(source, |a| g(f(a)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::{prop, Setter};
//! use focal::key_path;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Location { name: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, age: u32, location: Location }
//!
//! let user_location = prop(key_path!(User, location));
//! let location_name = prop(key_path!(Location, name));
//!
//! let user = User {
//!     name: "X".to_string(),
//!     age: 30,
//!     location: Location { name: "Earth".to_string() },
//! };
//!
//! let updated = user_location
//!     .compose(location_name)
//!     .modify(user, |name| format!("Definitely {name}"));
//! assert_eq!(updated.location.name, "Definitely Earth");
//! assert_eq!(updated.age, 30);
//! ```

use std::marker::PhantomData;

use super::key_path::KeyPath;

/// A Setter rebuilds a whole from an update applied to its focused part(s).
///
/// # Type Parameters
///
/// - `S`: The root type
/// - `A`: The focused value type
///
/// A setter may focus on zero parts (an absent optional, an enum in another
/// case), one part (a field) or many (every element of a vector). It never
/// fails: an absent focus leaves the root unchanged.
pub trait Setter<S, A> {
    /// Applies `function` to every focused part and returns the rebuilt root.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Replaces every focused part with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{each, Setter};
    ///
    /// assert_eq!(each().set(vec![1, 2, 3], 0), vec![0, 0, 0]);
    /// ```
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Mutates every focused part through `&mut A` and returns the rebuilt
    /// root.
    ///
    /// Equivalent to `modify` with an update that mutates its argument and
    /// hands it back, so it composes exactly like `modify`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{each, Setter};
    ///
    /// let shouted = each().modify_in_place(
    ///     vec!["hi".to_string(), "yo".to_string()],
    ///     |word: &mut String| word.push('!'),
    /// );
    /// assert_eq!(shouted, vec!["hi!".to_string(), "yo!".to_string()]);
    /// ```
    fn modify_in_place<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(&mut A),
    {
        let mut function = function;
        self.modify(source, |mut part| {
            function(&mut part);
            part
        })
    }

    /// Returns the curried form `(A -> A) -> S -> S` applied to `function`.
    ///
    /// The returned closure owns the setter and can be fed to `pipe!` or
    /// composed with other functions.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{first, Setter};
    ///
    /// let increment_first = first::<(i32, &str)>().update(|count: i32| count + 1);
    /// let pairs: Vec<(i32, &str)> = vec![(1, "a"), (2, "b")]
    ///     .into_iter()
    ///     .map(increment_first)
    ///     .collect();
    /// assert_eq!(pairs, vec![(2, "a"), (3, "b")]);
    /// ```
    fn update<F>(self, function: F) -> impl FnMut(S) -> S
    where
        Self: Sized,
        F: FnMut(A) -> A,
    {
        let mut function = function;
        move |source| self.modify(source, &mut function)
    }

    /// Composes this setter with a setter into the focused part.
    ///
    /// `outer.compose(inner)` focuses on what `inner` focuses on inside
    /// every part `outer` focuses on.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{second, some, Setter};
    ///
    /// let pair: (Option<i32>, Option<i32>) = (None, Some(2));
    /// let doubled = second().compose(some()).modify(pair, |value: i32| value * 2);
    /// assert_eq!(doubled, (None, Some(4)));
    /// ```
    fn compose<B, T>(self, inner: T) -> ComposedSetter<Self, T, A>
    where
        Self: Sized,
        T: Setter<A, B>,
    {
        ComposedSetter::new(self, inner)
    }
}

/// A setter written by hand as a function of the root and the update.
///
/// The update arrives as `&mut dyn FnMut(A) -> A` so the function may call
/// it any number of times.
///
/// # Example
///
/// ```
/// use focal::optics::{FunctionSetter, Setter};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { name: String, age: u32 }
///
/// let user_name = FunctionSetter::new(|user: User, update: &mut dyn FnMut(String) -> String| {
///     User { name: update(user.name), ..user }
/// });
///
/// let user = User { name: "X".to_string(), age: 20 };
/// assert_eq!(user_name.modify(user, |name| name + "!").name, "X!");
/// ```
pub struct FunctionSetter<S, A, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    modifier: M,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, M> FunctionSetter<S, A, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Creates a new `FunctionSetter`.
    #[must_use]
    pub const fn new(modifier: M) -> Self {
        Self {
            modifier,
            _marker: PhantomData,
        }
    }
}

impl<S, A, M> Setter<S, A> for FunctionSetter<S, A, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        let mut function = function;
        (self.modifier)(source, &mut function)
    }
}

impl<S, A, M> Clone for FunctionSetter<S, A, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            modifier: self.modifier.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, M> std::fmt::Debug for FunctionSetter<S, A, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionSetter")
            .finish_non_exhaustive()
    }
}

/// Two setters joined end to end.
///
/// # Type Parameters
///
/// - `O`: The outer setter
/// - `I`: The inner setter
/// - `A`: The intermediate type (focus of `O`, root of `I`)
pub struct ComposedSetter<O, I, A> {
    outer: O,
    inner: I,
    _marker: PhantomData<A>,
}

impl<O, I, A> ComposedSetter<O, I, A> {
    /// Creates a new composed setter.
    #[must_use]
    pub const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, I> Setter<S, B> for ComposedSetter<O, I, A>
where
    O: Setter<S, A>,
    I: Setter<A, B>,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        let mut function = function;
        self.outer.modify(source, |intermediate| {
            self.inner.modify(intermediate, &mut function)
        })
    }
}

impl<O: Clone, I: Clone, A> Clone for ComposedSetter<O, I, A> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O: std::fmt::Debug, I: std::fmt::Debug, A> std::fmt::Debug for ComposedSetter<O, I, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedSetter")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// The setter of a single field, built from a [`KeyPath`].
///
/// Created by [`prop`].
#[derive(Clone, Debug)]
pub struct Prop<P> {
    path: P,
}

impl<S, A, P> Setter<S, A> for Prop<P>
where
    P: KeyPath<S, A>,
    A: Clone,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        let mut function = function;
        self.path.modify(source, |value| function(value))
    }
}

/// Builds the setter of the field a key path focuses on.
///
/// Only that field is replaced; every sibling field is carried over.
///
/// # Example
///
/// ```
/// use focal::optics::{prop, Setter};
/// use focal::key_path;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { name: String, age: u32 }
///
/// let user = User { name: "X".to_string(), age: 20 };
/// let older = prop(key_path!(User, age)).modify(user, |age| age + 1);
/// assert_eq!(older, User { name: "X".to_string(), age: 21 });
/// ```
#[must_use]
pub const fn prop<P>(path: P) -> Prop<P> {
    Prop { path }
}

/// The retaining update of a sequence: keeps the elements satisfying
/// `predicate`, in their original order.
///
/// `filter` is setter-shaped (`(A -> bool) -> [A] -> [A]`), so it slots in
/// wherever a setter expects an update of a sequence field.
///
/// # Example
///
/// ```
/// use focal::optics::{filtering, prop, Setter};
/// use focal::key_path;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { favorite_foods: Vec<String> }
///
/// let user = User { favorite_foods: vec!["Tacos".to_string(), "Nachos".to_string()] };
/// let updated = prop(key_path!(User, favorite_foods))
///     .modify(user, filtering(|food: &String| food != "Tacos"));
/// assert_eq!(updated.favorite_foods, vec!["Nachos".to_string()]);
/// ```
pub fn filtering<A, P>(predicate: P) -> impl FnMut(Vec<A>) -> Vec<A>
where
    P: FnMut(&A) -> bool,
{
    let mut predicate = predicate;
    move |mut values| {
        values.retain(|value| predicate(value));
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_path;

    #[derive(Clone, PartialEq, Debug)]
    struct Location {
        name: String,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct User {
        name: String,
        age: u32,
        location: Location,
    }

    fn user() -> User {
        User {
            name: "X".to_string(),
            age: 30,
            location: Location {
                name: "Earth".to_string(),
            },
        }
    }

    #[test]
    fn test_prop_identity_leaves_source_unchanged() {
        let age = prop(key_path!(User, age));
        assert_eq!(age.modify(user(), |age| age), user());
    }

    #[test]
    fn test_set_replaces_focus() {
        let name = prop(key_path!(User, name));
        assert_eq!(name.set(user(), "Y".to_string()).name, "Y");
    }

    #[test]
    fn test_function_setter_can_skip_update() {
        let never = FunctionSetter::new(|user: User, _update: &mut dyn FnMut(u32) -> u32| user);
        assert_eq!(never.modify(user(), |age| age + 1), user());
    }

    #[test]
    fn test_compose_function_setter_with_prop() {
        let user_location = FunctionSetter::new(
            |user: User, update: &mut dyn FnMut(Location) -> Location| User {
                location: update(user.location),
                ..user
            },
        );
        let location_name = prop(key_path!(Location, name));

        let updated = user_location
            .compose(location_name)
            .modify(user(), |name| format!("Maybe {name}"));
        assert_eq!(updated.location.name, "Maybe Earth");
    }

    #[test]
    fn test_update_is_reusable() {
        let mut birthday = prop(key_path!(User, age)).update(|age| age + 1);
        let once = birthday(user());
        let twice = birthday(once);
        assert_eq!(twice.age, 32);
    }

    #[test]
    fn test_modify_in_place_through_composition() {
        let location_name = prop(key_path!(User, location)).compose(prop(key_path!(Location, name)));
        let updated = location_name.modify_in_place(user(), |name: &mut String| name.insert_str(0, "Planet "));
        assert_eq!(updated.location.name, "Planet Earth");
        assert_eq!(updated.name, "X");
    }

    #[test]
    fn test_filtering_keeps_order() {
        let mut odd = filtering(|value: &i32| value % 2 != 0);
        assert_eq!(odd(vec![1, 2, 3, 4, 5]), vec![1, 3, 5]);
    }
}
