//! Error types for optics that can miss their focus.

/// An index setter was applied to a sequence too short to hold its index.
///
/// The untouched sequence travels with the error so the caller keeps
/// ownership of it.
///
/// # Examples
///
/// ```rust
/// use focal::optics::index;
///
/// let error = index(2).try_modify(vec!["Tacos"], |food| food).unwrap_err();
/// assert_eq!(
///     format!("{error}"),
///     "index 2 is out of bounds for a sequence of length 1"
/// );
/// assert_eq!(error.into_source(), vec!["Tacos"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfBounds<S> {
    /// The index that was requested.
    pub index: usize,
    /// The length of the sequence at the time of the request.
    pub length: usize,
    source: S,
}

impl<S> OutOfBounds<S> {
    /// Creates a new error carrying the untouched sequence.
    #[must_use]
    pub const fn new(index: usize, length: usize, source: S) -> Self {
        Self {
            index,
            length,
            source,
        }
    }

    /// Hands back the untouched sequence.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S> std::fmt::Display for OutOfBounds<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} is out of bounds for a sequence of length {}",
            self.index, self.length
        )
    }
}

impl<S: std::fmt::Debug> std::error::Error for OutOfBounds<S> {}
