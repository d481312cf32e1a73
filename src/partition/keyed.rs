//! Partition and filter-map over the values of keyed containers.
//!
//! Keys are carried through untouched. Every input key ends up in exactly
//! one output (or is dropped by a filter), so the output key sets are
//! disjoint and their union is the input key set.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::control::Either;

use super::partitioned::{Discard, Partitioned};
use super::sequence::partition_into;

/// A keyed container that can be rebuilt with a different value type.
///
/// Implemented for `HashMap` (keeping its hasher) and `BTreeMap`.
pub trait KeyedContainer: IntoIterator<Item = (Self::Key, Self::Value)> {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// The same kind of container holding values of type `W`.
    type WithValues<W>: Default + Extend<(Self::Key, W)>;
}

impl<K, V, H> KeyedContainer for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type WithValues<W> = HashMap<K, W, H>;
}

impl<K, V> KeyedContainer for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;
    type WithValues<W> = BTreeMap<K, W>;
}

/// Transforms every value and keeps the entries whose result is present.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use focal::partition::filter_map_values;
///
/// let ages = BTreeMap::from([("blob", "30"), ("blob jr", "five"), ("blob sr", "60")]);
/// let parsed = filter_map_values(ages, |age| age.parse::<u32>().ok());
/// assert_eq!(parsed, BTreeMap::from([("blob", 30), ("blob sr", 60)]));
/// ```
pub fn filter_map_values<M, W, F>(map: M, transform: F) -> M::WithValues<W>
where
    M: KeyedContainer,
    F: FnMut(M::Value) -> Option<W>,
{
    let mut transform = transform;
    partition_into::<_, _, _, _, Discard, _>(map, |(key, value)| {
        transform(value).map_or(Either::Right(()), |kept| Either::Left((key, kept)))
    })
    .lefts
}

/// Classifies every value and splits the entries by side.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use focal::control::Either;
/// use focal::partition::partition_map_values;
///
/// let scores = HashMap::from([("a", 91), ("b", 42), ("c", 77)]);
/// let result = partition_map_values(scores, |score| {
///     if score >= 60 { Either::Left(score) } else { Either::Right(score.to_string()) }
/// });
///
/// assert_eq!(result.lefts, HashMap::from([("a", 91), ("c", 77)]));
/// assert_eq!(result.rights, HashMap::from([("b", "42".to_string())]));
/// ```
pub fn partition_map_values<M, L, R, F>(
    map: M,
    transform: F,
) -> Partitioned<M::WithValues<L>, M::WithValues<R>>
where
    M: KeyedContainer,
    F: FnMut(M::Value) -> Either<L, R>,
{
    let mut transform = transform;
    partition_into(map, |(key, value)| match transform(value) {
        Either::Left(left) => Either::Left((key, left)),
        Either::Right(right) => Either::Right((key, right)),
    })
}
