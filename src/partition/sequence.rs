//! Partition and filter-map over sequences.
//!
//! [`partition_into`] is the one traversal everything else is built on: it
//! visits the input once, in order, and routes each classified value into
//! the left or right output container. Filtering is partitioning with a
//! [`Discard`] on the unwanted side, so the filter/partition equivalences
//! hold by construction.

use crate::control::Either;

use super::partitioned::{Discard, Partitioned};

/// Classifies every value and collects each side into its own container.
///
/// The outputs can be any `Default + Extend` containers, including
/// [`Discard`] for a side that is not needed.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use focal::control::Either;
/// use focal::partition::{partition_into, Partitioned};
///
/// let result: Partitioned<BTreeSet<i32>, Vec<i32>> =
///     partition_into(vec![3, -1, 3, -2], |n| if n > 0 { Either::Left(n) } else { Either::Right(n) });
///
/// assert_eq!(result.lefts, BTreeSet::from([3]));
/// assert_eq!(result.rights, vec![-1, -2]);
/// ```
pub fn partition_into<I, L, R, Ls, Rs, F>(values: I, transform: F) -> Partitioned<Ls, Rs>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Either<L, R>,
    Ls: Default + Extend<L>,
    Rs: Default + Extend<R>,
{
    let mut transform = transform;
    let mut lefts = Ls::default();
    let mut rights = Rs::default();
    for value in values {
        match transform(value) {
            Either::Left(left) => lefts.extend(Some(left)),
            Either::Right(right) => rights.extend(Some(right)),
        }
    }
    Partitioned { lefts, rights }
}

/// Classifies every value into one of two vectors, keeping input order in
/// each.
///
/// `lefts.len() + rights.len()` always equals the number of inputs.
///
/// # Examples
///
/// ```rust
/// use focal::control::Either;
/// use focal::partition::partition_map;
///
/// let result = partition_map(1..=6, |n| if n % 2 == 0 { Either::Left(n) } else { Either::Right(n * 10) });
/// assert_eq!(result.lefts, vec![2, 4, 6]);
/// assert_eq!(result.rights, vec![10, 30, 50]);
/// ```
pub fn partition_map<I, L, R, F>(values: I, transform: F) -> Partitioned<Vec<L>, Vec<R>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Either<L, R>,
{
    partition_into(values, transform)
}

impl<L, R> Either<L, R> {
    /// Reclassifies this single value into a partition.
    ///
    /// An `Either` holds exactly one element, so one side of the result
    /// holds one value and the other side is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::control::Either;
    /// use focal::partition::Partitioned;
    ///
    /// let reading: Either<i32, String> = Either::Left(2);
    /// let result = reading.partition_map(|either| either.bimap(|n| n + n, |s| s.repeat(2)));
    /// assert_eq!(result, Partitioned::new(vec![4], Vec::new()));
    /// ```
    pub fn partition_map<C, D, F>(self, transform: F) -> Partitioned<Vec<C>, Vec<D>>
    where
        F: FnOnce(Self) -> Either<C, D>,
    {
        transform(self).fold(
            |left| Partitioned::new(vec![left], Vec::new()),
            |right| Partitioned::new(Vec::new(), vec![right]),
        )
    }
}

/// Transforms every value and keeps the present results, in order.
///
/// # Examples
///
/// ```rust
/// use focal::partition::filter_map;
///
/// let numbers = filter_map(vec!["1", "two", "3"], |text| text.parse::<i32>().ok());
/// assert_eq!(numbers, vec![1, 3]);
/// ```
pub fn filter_map<I, B, F>(values: I, transform: F) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    let mut transform = transform;
    partition_into::<_, _, _, _, Discard, _>(values, |value| {
        transform(value).map_or(Either::Right(()), Either::Left)
    })
    .lefts
}

/// Keeps the values satisfying `predicate`, in order.
///
/// This is the left side of partitioning by `predicate`.
pub fn filter<I, P>(values: I, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut predicate = predicate;
    partition_into::<_, _, _, _, Discard, _>(values, |value| {
        if predicate(&value) {
            Either::Left(value)
        } else {
            Either::Right(value)
        }
    })
    .lefts
}

/// Keeps the present values of a sequence of options, in order.
///
/// # Examples
///
/// ```rust
/// use focal::partition::filtered;
///
/// assert_eq!(filtered(vec![Some(1), None, Some(2), None, Some(3)]), vec![1, 2, 3]);
/// ```
pub fn filtered<I, T>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    filter_map(values, |value| value)
}

/// Splits a sequence of `Either`s by side, in order.
pub fn partitioned<I, L, R>(values: I) -> Partitioned<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    partition_map(values, |value| value)
}
