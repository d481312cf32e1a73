//! Optics for immutable data manipulation.
//!
//! Optics are composable accessors: small values that know how to read or
//! rebuild one part of a larger value. Each kind composes with itself, so
//! deep accesses are assembled from shallow ones.
//!
//! # Available Optics
//!
//! - [`KeyPath`]: Borrowing getter plus field replacement for a struct field
//! - [`Getter`]: Read-only projection `&S -> A`
//! - [`Setter`]: Structure-preserving update `(A -> A) -> S -> S`
//! - [`EnumPath`]: Partial access to one case of an enum
//! - [`BorrowEnumPath`]: An enum path that can also borrow its payload
//! - [`OwnedEnumPath`]: An enum path that extracts its payload by value only
//! - [`AlternativeEnumPath`]: An enum path rooted in `Either` of two enums
//!
//! ```text
//! KeyPath ──get──> Getter
//! KeyPath ──prop─> Setter
//! EnumPath ─as_setter─> Setter
//! ```
//!
//! # Example with setters
//!
//! ```
//! use focal::optics::{each, prop, Setter};
//! use focal::key_path;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Food { name: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { favorite_foods: Vec<Food> }
//!
//! let user = User {
//!     favorite_foods: vec![Food { name: "Tacos".to_string() }, Food { name: "Nachos".to_string() }],
//! };
//!
//! let food_names = prop(key_path!(User, favorite_foods))
//!     .compose(each())
//!     .compose(prop(key_path!(Food, name)));
//!
//! let updated = food_names.modify(user, |name| format!("Nice {name}"));
//! assert_eq!(updated.favorite_foods[0].name, "Nice Tacos");
//! assert_eq!(updated.favorite_foods[1].name, "Nice Nachos");
//! ```
//!
//! # Example with enum paths
//!
//! ```
//! use focal::optics::{ok_case, some_case, BorrowEnumPath, EnumPath};
//!
//! let lookup: Result<Option<u32>, String> = Ok(Some(7));
//! let found = ok_case().compose(some_case());
//!
//! assert_eq!(found.get_ref(&lookup), Some(&7));
//! assert_eq!(found.modify(lookup, |n| n * 6), Ok(Some(42)));
//! ```
//!
//! # Laws
//!
//! Key paths satisfy GetPut, PutGet and PutPut (see [`KeyPath`]). Setters
//! satisfy the identity and composition laws (see [`Setter`]). Enum paths
//! satisfy the round-trip and rebuild laws (see [`EnumPath`]).

mod alternative;
mod collection;
mod enum_path;
mod error;
mod getter;
mod key_path;
mod setter;
mod standard_paths;
mod tuple;

pub use key_path::ComposedKeyPath;
pub use key_path::FunctionKeyPath;
pub use key_path::KeyPath;

pub use getter::ComposedGetter;
pub use getter::FunctionGetter;
pub use getter::Getter;
pub use getter::KeyPathGetter;
pub use getter::LiftOk;
pub use getter::LiftOptional;
pub use getter::LiftSequence;
pub use getter::{combining, get, lift_ok, lift_optional, lift_sequence, order_by, their, their_less};

pub use setter::ComposedSetter;
pub use setter::FunctionSetter;
pub use setter::Prop;
pub use setter::Setter;
pub use setter::{filtering, prop};

pub use tuple::TupleSlot;
pub use tuple::{first, fourth, nth, second, third};

pub use collection::EachSetter;
pub use collection::IndexSetter;
pub use collection::KeyedEntries;
pub use collection::MapKey;
pub use collection::Member;
pub use collection::Membership;
pub use collection::SomeSetter;
pub use collection::UpdateKeyIfPresent;
pub use collection::{each, index, map_key, member, some, update_key_if_present};

pub use error::OutOfBounds;

pub use enum_path::BorrowEnumPath;
pub use enum_path::CaseSetter;
pub use enum_path::ComposedEnumPath;
pub use enum_path::EnumPath;
pub use enum_path::FunctionEnumPath;
pub use enum_path::OwnedEnumPath;
pub use enum_path::sequential;

pub use alternative::AlternativeEnumPath;
pub use alternative::alternative;

pub use standard_paths::{err_case, left_case, ok_case, right_case, some_case};
