//! # focal
//!
//! Composable getters, setters, enum paths and partition combinators for
//! immutable data.
//!
//! ## Overview
//!
//! Every combinator in this crate is a pure function value. Small pieces are
//! built once and composed into pipelines that read or rebuild deeply nested
//! values without mutation:
//!
//! - **Function Composition**: [`compose()`](compose::compose), `compose!`, `pipe!`
//! - **Control Structures**: [`Either`](control::Either)
//! - **Optics**: key paths, getters, setters and enum paths
//! - **Partitioning**: filter-map and partition-map over sequences and maps
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `control`: The `Either` tagged union
//! - `optics`: Key paths, getters, setters and enum paths
//! - `partition`: Partition and filter-map combinators
//! - `derive`: `#[derive(KeyPaths)]` and `#[derive(EnumPaths)]`
//! - `serde`: Serialization for `Either` and `Partitioned`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//! use focal::key_path;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Location { name: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, location: Location }
//!
//! let user_location_name = prop(key_path!(User, location))
//!     .compose(prop(key_path!(Location, name)));
//!
//! let user = User {
//!     name: "Blob".to_string(),
//!     location: Location { name: "Earth".to_string() },
//! };
//! let moved = user_location_name.modify(user, |name| format!("Maybe {name}"));
//! assert_eq!(moved.location.name, "Maybe Earth");
//! assert_eq!(moved.name, "Blob");
//! ```

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "partition")]
    pub use crate::partition::*;

    #[cfg(feature = "derive")]
    pub use focal_derive::{EnumPaths, KeyPaths};
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "partition")]
pub mod partition;

#[cfg(feature = "derive")]
pub use focal_derive::{EnumPaths, KeyPaths};
