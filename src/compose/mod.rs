//! Function composition utilities.
//!
//! Every getter and setter in this crate is ultimately a function, and
//! pipelines are built by composing small functions. This module provides
//! the composition core the rest of the crate is built on.
//!
//! # Overview
//!
//! - [`compose()`]: Compose two functions right-to-left, as a function
//! - [`compose!`]: Compose any number of functions right-to-left
//! - [`pipe!`]: Apply functions to a value left-to-right
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use focal::compose::compose;
//!
//! let trimmed_length = compose(|text: String| text.len(), |text: &str| text.trim().to_string());
//! assert_eq!(trimmed_length("  blob  "), 4);
//! ```
//!
//! ## Composing update functions
//!
//! ```
//! use focal::compose;
//!
//! let shout = |name: String| name.to_uppercase();
//! let exclaim = |name: String| format!("{name}!");
//!
//! // compose!(f, g)(x) = f(g(x))
//! let update = compose!(exclaim, shout);
//! assert_eq!(update("blob".to_string()), "BLOB!");
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use focal::pipe;
//!
//! let result = pipe!(vec![3, 1, 2], |mut values: Vec<i32>| { values.sort(); values }, |values: Vec<i32>| values.len());
//! assert_eq!(result, 3);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{compose, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
