//! Setters over standard containers.
//!
//! - [`some`]: the value inside an `Option`
//! - [`each`]: every element of a `Vec`
//! - [`index`]: one element of a `Vec`
//! - [`map_key`] and [`update_key_if_present`]: one entry of a map
//! - [`member`]: membership of one element in a set
//!
//! Maps and sets are supported in their hashed and ordered flavors. None of
//! these setters panic: a missing focus leaves the container unchanged.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use focal::optics::{map_key, update_key_if_present, Setter};
//!
//! let map = HashMap::from([(1, "A".to_string()), (2, "B".to_string())]);
//!
//! let inserted = map_key(3).modify(map.clone(), |_| Some("C".to_string()));
//! assert_eq!(inserted.get(&3).map(String::as_str), Some("C"));
//!
//! let untouched = update_key_if_present(3).modify(map.clone(), |_| "C".to_string());
//! assert_eq!(untouched, map);
//!
//! let updated = update_key_if_present(2).modify(map, |_| "D".to_string());
//! assert_eq!(updated.get(&2).map(String::as_str), Some("D"));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::error::OutOfBounds;
use super::setter::Setter;

/// The setter of the value inside an `Option`. Created by [`some`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SomeSetter;

impl<A> Setter<Option<A>, A> for SomeSetter {
    fn modify<F>(&self, source: Option<A>, function: F) -> Option<A>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }
}

/// Focuses on the value inside an `Option`; `None` stays `None`.
///
/// # Example
///
/// ```
/// use focal::optics::{some, Setter};
///
/// assert_eq!(some().modify(Some(2), |n: i32| n + 1), Some(3));
/// assert_eq!(some().modify(None, |n: i32| n + 1), None);
/// ```
#[must_use]
pub const fn some() -> SomeSetter {
    SomeSetter
}

/// The setter of every element of a `Vec`. Created by [`each`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EachSetter;

impl<A> Setter<Vec<A>, A> for EachSetter {
    fn modify<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }
}

/// Focuses on every element of a `Vec`, in order.
///
/// # Example
///
/// ```
/// use focal::optics::{each, some, Setter};
///
/// let values = vec![Some(1), None, Some(3)];
/// let doubled = each().compose(some()).modify(values, |n: i32| n * 2);
/// assert_eq!(doubled, vec![Some(2), None, Some(6)]);
/// ```
#[must_use]
pub const fn each() -> EachSetter {
    EachSetter
}

/// The setter of one element of a `Vec`. Created by [`index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSetter {
    index: usize,
}

impl IndexSetter {
    /// Updates the element at the index, or reports that there is none.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] holding the untouched vector when the index is
    /// not smaller than its length.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::index;
    ///
    /// let foods = vec!["Tacos".to_string(), "Nachos".to_string()];
    /// let updated = index(1).try_modify(foods, |food| food.to_uppercase());
    /// assert_eq!(updated.map(|foods| foods[1].clone()), Ok("NACHOS".to_string()));
    /// ```
    pub fn try_modify<A, F>(&self, source: Vec<A>, function: F) -> Result<Vec<A>, OutOfBounds<Vec<A>>>
    where
        F: FnOnce(A) -> A,
    {
        if self.index >= source.len() {
            return Err(OutOfBounds::new(self.index, source.len(), source));
        }
        let mut source = source;
        // swap_remove moves the last element into the hole; the final swap
        // puts both back in place.
        let element = source.swap_remove(self.index);
        source.push(function(element));
        let last = source.len() - 1;
        source.swap(self.index, last);
        Ok(source)
    }
}

impl<A> Setter<Vec<A>, A> for IndexSetter {
    fn modify<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        self.try_modify(source, function)
            .unwrap_or_else(OutOfBounds::into_source)
    }
}

/// Focuses on the element at `index`. An index past the end focuses on
/// nothing.
#[must_use]
pub const fn index(index: usize) -> IndexSetter {
    IndexSetter { index }
}

/// The setter of one map entry as an `Option`. Created by [`map_key`].
///
/// `M` is the map type and is normally left to inference.
pub struct MapKey<M, K> {
    key: K,
    _marker: PhantomData<fn(M) -> M>,
}

impl<M, K: Clone> Clone for MapKey<M, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M, K: std::fmt::Debug> std::fmt::Debug for MapKey<M, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MapKey")
            .field("key", &self.key)
            .finish()
    }
}

/// Focuses on the entry at `key` as an `Option`.
///
/// The update sees `None` for an absent key. Returning `Some` stores the
/// value (inserting if needed); returning `None` removes the key.
#[must_use]
pub const fn map_key<M, K>(key: K) -> MapKey<M, K> {
    MapKey {
        key,
        _marker: PhantomData,
    }
}

/// Maps whose entries can be taken out and put back by key.
///
/// Implemented for `HashMap` and `BTreeMap`; it is what lets [`map_key`] and
/// [`update_key_if_present`] work over either.
pub trait KeyedEntries<K, V> {
    /// Removes the entry at `key`, returning the stored key and value.
    fn take_entry(&mut self, key: &K) -> Option<(K, V)>;

    /// Stores `value` at `key`.
    fn put_entry(&mut self, key: K, value: V);
}

impl<K, V, H> KeyedEntries<K, V> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    fn take_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.remove_entry(key)
    }

    fn put_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> KeyedEntries<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn take_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.remove_entry(key)
    }

    fn put_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

fn replace_entry<M, K, V, F>(map: M, key: &K, function: F) -> M
where
    M: KeyedEntries<K, V>,
    K: Clone,
    F: FnOnce(Option<V>) -> Option<V>,
{
    let mut map = map;
    let (stored_key, current) = match map.take_entry(key) {
        Some((stored_key, value)) => (stored_key, Some(value)),
        None => (key.clone(), None),
    };
    if let Some(value) = function(current) {
        map.put_entry(stored_key, value);
    }
    map
}

impl<M, K> MapKey<M, K>
where
    K: Clone,
{
    /// Stores the result of `function` applied to the current entry,
    /// inserting when the key is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use focal::optics::map_key;
    ///
    /// let counts = BTreeMap::from([("tacos", 1)]);
    /// let counts = map_key("tacos").upsert(counts, |count: Option<i32>| count.unwrap_or(0) + 1);
    /// let counts = map_key("nachos").upsert(counts, |count: Option<i32>| count.unwrap_or(0) + 1);
    /// assert_eq!(counts, BTreeMap::from([("nachos", 1), ("tacos", 2)]));
    /// ```
    #[must_use]
    pub fn upsert<V, F>(&self, source: M, function: F) -> M
    where
        M: KeyedEntries<K, V>,
        F: FnOnce(Option<V>) -> V,
    {
        replace_entry(source, &self.key, |current| Some(function(current)))
    }
}

impl<M, K, V> Setter<M, Option<V>> for MapKey<M, K>
where
    M: KeyedEntries<K, V>,
    K: Clone,
{
    fn modify<F>(&self, source: M, function: F) -> M
    where
        F: FnMut(Option<V>) -> Option<V>,
    {
        replace_entry(source, &self.key, function)
    }
}

/// The setter of a map entry that exists. Created by
/// [`update_key_if_present`].
pub struct UpdateKeyIfPresent<M, K> {
    key: K,
    _marker: PhantomData<fn(M) -> M>,
}

impl<M, K: Clone> Clone for UpdateKeyIfPresent<M, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M, K: std::fmt::Debug> std::fmt::Debug for UpdateKeyIfPresent<M, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UpdateKeyIfPresent")
            .field("key", &self.key)
            .finish()
    }
}

/// Focuses on the value at `key` only when the key is present.
///
/// An absent key leaves the map unchanged; nothing is inserted.
#[must_use]
pub const fn update_key_if_present<M, K>(key: K) -> UpdateKeyIfPresent<M, K> {
    UpdateKeyIfPresent {
        key,
        _marker: PhantomData,
    }
}

impl<M, K, V> Setter<M, V> for UpdateKeyIfPresent<M, K>
where
    M: KeyedEntries<K, V>,
    K: Clone,
{
    fn modify<F>(&self, source: M, function: F) -> M
    where
        F: FnMut(V) -> V,
    {
        replace_entry(source, &self.key, |current| current.map(function))
    }
}

/// The setter of one element's membership in a set. Created by [`member`].
pub struct Member<C, E> {
    element: E,
    _marker: PhantomData<fn(C) -> C>,
}

impl<C, E: Clone> Clone for Member<C, E> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            _marker: PhantomData,
        }
    }
}

impl<C, E: std::fmt::Debug> std::fmt::Debug for Member<C, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Member")
            .field("element", &self.element)
            .finish()
    }
}

/// Focuses on whether `element` belongs to a set.
///
/// The update receives the current membership and returns the desired one.
/// When the two agree the set is returned as it came in.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use focal::optics::{member, Setter};
///
/// let set = HashSet::from([1, 2, 3, 4]);
/// let toggled = member(5).modify(member(2).modify(set, |present: bool| !present), |present: bool| !present);
/// assert_eq!(toggled, HashSet::from([1, 3, 4, 5]));
/// ```
#[must_use]
pub const fn member<C, E>(element: E) -> Member<C, E> {
    Member {
        element,
        _marker: PhantomData,
    }
}

/// Sets whose membership can be queried and changed element by element.
///
/// Implemented for `HashSet` and `BTreeSet`.
pub trait Membership<E> {
    /// Whether `element` belongs to the set.
    fn has(&self, element: &E) -> bool;

    /// Adds `element`.
    fn include(&mut self, element: E);

    /// Removes `element`.
    fn exclude(&mut self, element: &E);
}

impl<E, H> Membership<E> for HashSet<E, H>
where
    E: Eq + Hash,
    H: BuildHasher,
{
    fn has(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn include(&mut self, element: E) {
        self.insert(element);
    }

    fn exclude(&mut self, element: &E) {
        self.remove(element);
    }
}

impl<E> Membership<E> for BTreeSet<E>
where
    E: Ord,
{
    fn has(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn include(&mut self, element: E) {
        self.insert(element);
    }

    fn exclude(&mut self, element: &E) {
        self.remove(element);
    }
}

impl<C, E> Setter<C, bool> for Member<C, E>
where
    C: Membership<E>,
    E: Clone,
{
    fn modify<F>(&self, source: C, function: F) -> C
    where
        F: FnMut(bool) -> bool,
    {
        let mut function = function;
        let mut source = source;
        let present = source.has(&self.element);
        match (present, function(present)) {
            (false, true) => source.include(self.element.clone()),
            (true, false) => source.exclude(&self.element),
            _ => {}
        }
        source
    }
}

static_assertions::assert_impl_all!(SomeSetter: Send, Sync, Copy);
static_assertions::assert_impl_all!(EachSetter: Send, Sync, Copy);
static_assertions::assert_impl_all!(IndexSetter: Send, Sync, Copy);
static_assertions::assert_impl_all!(MapKey<HashMap<u32, String>, u32>: Send, Sync);
static_assertions::assert_impl_all!(Member<BTreeSet<u32>, u32>: Send, Sync);
