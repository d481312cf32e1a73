//! Derive macros for focal key paths and enum paths.
//!
//! # Available Derive Macros
//!
//! - [`KeyPaths`]: Generates a key path method per struct field
//! - [`EnumPaths`]: Generates an enum path method per enum variant
//!
//! # Example: `KeyPaths`
//!
//! ```rust,ignore
//! use focal::KeyPaths;
//! use focal::optics::{prop, KeyPath, Setter};
//!
//! #[derive(Clone, KeyPaths)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! // Generated methods:
//! // - User::name_path() -> impl KeyPath<User, String>
//! // - User::age_path() -> impl KeyPath<User, u32>
//!
//! let user = User { name: "Blob".to_string(), age: 30 };
//! let older = prop(User::age_path()).modify(user, |age| age + 1);
//! assert_eq!(older.age, 31);
//! ```
//!
//! # Example: `EnumPaths`
//!
//! ```rust,ignore
//! use focal::EnumPaths;
//! use focal::optics::EnumPath;
//!
//! #[derive(Clone, EnumPaths)]
//! enum Authentication {
//!     Authenticated(String),
//!     Unauthenticated,
//! }
//!
//! // Generated methods:
//! // - Authentication::authenticated_case() -> impl EnumPath<Authentication, String>
//! // - Authentication::unauthenticated_case() -> impl EnumPath<Authentication, ()>
//!
//! let token = Authentication::Authenticated("deadbeef".to_string());
//! assert_eq!(Authentication::authenticated_case().get(token), Some("deadbeef".to_string()));
//! ```

mod enum_paths;
mod key_paths;

use proc_macro::TokenStream;

/// Derive macro generating a key path for every struct field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_path() -> impl KeyPath<StructName, T> + Clone { ... }
/// }
/// ```
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, KeyPaths)]
/// struct Tagged<T> {
///     tag: String,
///     value: T,
/// }
///
/// let value = Tagged::<i32>::value_path();
/// ```
#[proc_macro_derive(KeyPaths)]
pub fn derive_key_paths(input: TokenStream) -> TokenStream {
    key_paths::derive_key_paths_impl(input)
}

/// Derive macro generating an enum path for every enum variant.
///
/// The method name is the variant name in `snake_case` followed by `_case`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Unauthenticated`): `impl BorrowEnumPath<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Authenticated(String)`): `impl BorrowEnumPath<Enum, String>`
/// - **Multi-field tuple variants** (e.g., `Moved(i32, i32)`): `impl EnumPath<Enum, (i32, i32)>`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): `impl EnumPath<Enum, (i32, i32)>`
///
/// Multi-field and struct variants have no tuple stored in the enum, so
/// their paths extract by value only and do not offer `get_ref`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug, PartialEq, EnumPaths)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     KeyPress(char),
/// }
///
/// let click = Event::click_case();
/// assert_eq!(click.get(Event::Click { x: 1, y: 2 }), Some((1, 2)));
/// assert_eq!(click.set((3, 4)), Event::Click { x: 3, y: 4 });
/// assert_eq!(Event::key_press_case().get(Event::KeyPress('q')), Some('q'));
/// ```
#[proc_macro_derive(EnumPaths)]
pub fn derive_enum_paths(input: TokenStream) -> TokenStream {
    enum_paths::derive_enum_paths_impl(input)
}
