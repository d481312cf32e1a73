//! Partition and filter-map combinators.
//!
//! These traversals filter and transform a sequence or a keyed container in
//! one pass, classifying each element with a binary outcome tag
//! ([`Either`](crate::control::Either)):
//!
//! - [`partition_map`] / [`partition_into`]: route each element left or right
//! - [`filter_map`] / [`filter`]: keep the elements that survive
//! - [`filter_map_values`] / [`partition_map_values`]: the same over the
//!   values of a `HashMap` or `BTreeMap`
//! - [`filtered`] / [`partitioned`]: flatten sequences that are already
//!   classified
//!
//! Relative input order is preserved inside every sequence output.
//!
//! # Laws
//!
//! ```text
//! partition_map(xs, t).lefts.len() + partition_map(xs, t).rights.len() == xs.len()
//! filter(xs, p) == partition_map(xs, |x| if p(&x) { Left(x) } else { Right(x) }).lefts
//! filter_map(xs, f) == partition_map(xs, |x| f(x).map_or(Right(()), Left)).lefts
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::control::Either;
//! use focal::partition::{filter_map, partition_map};
//!
//! let inputs = vec!["7", "seven", "11"];
//!
//! assert_eq!(filter_map(inputs.clone(), |text| text.parse::<u8>().ok()), vec![7, 11]);
//!
//! let checked = partition_map(inputs, |text| {
//!     text.parse::<u8>().map_or_else(|error| Either::Right(error.to_string()), Either::Left)
//! });
//! assert_eq!(checked.lefts, vec![7, 11]);
//! assert_eq!(checked.rights.len(), 1);
//! ```

mod keyed;
mod partitioned;
mod sequence;

pub use keyed::KeyedContainer;
pub use keyed::{filter_map_values, partition_map_values};

pub use partitioned::Discard;
pub use partitioned::Partitioned;

pub use sequence::{filter, filter_map, filtered, partition_into, partition_map, partitioned};
