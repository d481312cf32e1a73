//! Key paths: explicit accessor pairs into product types.
//!
//! A key path couples a borrowing getter with a whole-copy-with-field-replaced
//! function. Key paths are the raw material for both getters
//! ([`get`](crate::optics::get)) and setters ([`prop`](crate::optics::prop)).
//!
//! # Laws
//!
//! Every key path must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    path.set(source, path.get(&source).clone()) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    path.get(&path.set(source, value)) == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    path.set(path.set(source, v1), v2) == path.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::KeyPath;
//! use focal::key_path;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Food { name: String }
//!
//! let name = key_path!(Food, name);
//!
//! let tacos = Food { name: "Tacos".to_string() };
//! assert_eq!(name.get(&tacos), "Tacos");
//!
//! let nachos = name.set(tacos, "Nachos".to_string());
//! assert_eq!(nachos.name, "Nachos");
//! ```

use std::marker::PhantomData;

/// An accessor pair focusing on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The root type (the whole structure)
/// - `A`: The value type (the focused field)
pub trait KeyPath<S, A> {
    /// Borrows the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a new root with the focused field replaced and every sibling
    /// field carried over unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused field with the result of `function` applied to
    /// its current value.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::KeyPath;
    /// use focal::key_path;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { name: String, age: u32 }
    ///
    /// let age = key_path!(User, age);
    /// let user = User { name: "X".to_string(), age: 20 };
    /// assert_eq!(age.modify(user, |age| age + 1).age, 21);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Composes this path with a path into the focused field.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::KeyPath;
    /// use focal::key_path;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Location { name: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { name: String, location: Location }
    ///
    /// let location_name = key_path!(User, location).compose(key_path!(Location, name));
    ///
    /// let user = User {
    ///     name: "Blob".to_string(),
    ///     location: Location { name: "Brooklyn".to_string() },
    /// };
    /// assert_eq!(location_name.get(&user), "Brooklyn");
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedKeyPath<Self, P, A>
    where
        Self: Sized,
        P: KeyPath<A, B>,
    {
        ComposedKeyPath::new(self, other)
    }
}

/// A key path built from a getter and a setter function.
///
/// The `key_path!` macro and `#[derive(KeyPaths)]` generate
/// `FunctionKeyPath` values.
///
/// # Example
///
/// ```
/// use focal::optics::{FunctionKeyPath, KeyPath};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { name: String, age: u32 }
///
/// let name = FunctionKeyPath::new(
///     |user: &User| &user.name,
///     |user: User, name: String| User { name, ..user },
/// );
///
/// let user = User { name: "X".to_string(), age: 30 };
/// assert_eq!(name.get(&user), "X");
/// ```
pub struct FunctionKeyPath<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionKeyPath<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionKeyPath` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> KeyPath<S, A> for FunctionKeyPath<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionKeyPath<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionKeyPath<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionKeyPath")
            .finish_non_exhaustive()
    }
}

/// Two key paths joined end to end.
///
/// Setting through a composed path clones the intermediate value, rebuilds
/// it with the inner path, then rebuilds the root with the outer path.
///
/// The intermediate type must be `'static`: `get` borrows through it for
/// the lifetime of the root.
pub struct ComposedKeyPath<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedKeyPath<P1, P2, A> {
    /// Creates a new composed key path.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> KeyPath<S, B> for ComposedKeyPath<P1, P2, A>
where
    P1: KeyPath<S, A>,
    P2: KeyPath<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let rebuilt = self.second.set(intermediate, value);
        self.first.set(source, rebuilt)
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedKeyPath<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedKeyPath<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedKeyPath")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a key path for a struct field.
///
/// # Syntax
///
/// ```text
/// key_path!(StructType, field_name)
/// key_path!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::KeyPath;
/// use focal::key_path;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = key_path!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(*x.get(&point), 10);
/// assert_eq!(x.set(point, 100), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! key_path {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionKeyPath::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionKeyPath::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionKeyPath::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
