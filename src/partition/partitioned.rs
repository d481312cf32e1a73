//! The two-sided result of a partition.

/// The outputs of a partition: everything routed left, everything routed
/// right.
///
/// `Ls` and `Rs` are the output containers. Sequence partitions produce
/// `Vec`s that keep the input order; keyed partitions produce maps.
///
/// # Examples
///
/// ```rust
/// use focal::control::Either;
/// use focal::partition::{partition_map, Partitioned};
///
/// let result = partition_map(vec!["1", "x", "3"], |text| {
///     text.parse::<i32>().map_or_else(|_| Either::Right(text), Either::Left)
/// });
///
/// assert_eq!(result, Partitioned { lefts: vec![1, 3], rights: vec!["x"] });
/// let (numbers, words) = result.into_parts();
/// assert_eq!(numbers.len() + words.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partitioned<Ls, Rs> {
    /// The values routed to `Either::Left`.
    pub lefts: Ls,
    /// The values routed to `Either::Right`.
    pub rights: Rs,
}

impl<Ls, Rs> Partitioned<Ls, Rs> {
    /// Creates a partition result from its two sides.
    #[inline]
    #[must_use]
    pub const fn new(lefts: Ls, rights: Rs) -> Self {
        Self { lefts, rights }
    }

    /// Splits into `(lefts, rights)`.
    #[inline]
    pub fn into_parts(self) -> (Ls, Rs) {
        (self.lefts, self.rights)
    }

    /// Swaps the two sides.
    #[inline]
    pub fn swap(self) -> Partitioned<Rs, Ls> {
        Partitioned {
            lefts: self.rights,
            rights: self.lefts,
        }
    }
}

impl<Ls, Rs> From<Partitioned<Ls, Rs>> for (Ls, Rs) {
    fn from(partitioned: Partitioned<Ls, Rs>) -> Self {
        partitioned.into_parts()
    }
}

/// An output container that drops everything it receives.
///
/// Used as the unwanted side of a partition, which is how filtering is
/// expressed as partitioning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Discard;

impl<T> Extend<T> for Discard {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        values.into_iter().for_each(drop);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::Partitioned;

    #[test]
    fn test_partitioned_serde_roundtrip() {
        let partitioned = Partitioned::new(vec![1, 2], vec!["x".to_string()]);
        let json = serde_json::to_string(&partitioned).unwrap();
        assert_eq!(json, r#"{"lefts":[1,2],"rights":["x"]}"#);
        let decoded: Partitioned<Vec<i32>, Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, partitioned);
    }
}
