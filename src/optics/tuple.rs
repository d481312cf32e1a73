//! Positional setters for tuples.
//!
//! `first()`, `second()`, `third()` and `fourth()` focus on a tuple
//! component by position. Unlike field setters they may change nothing but
//! that one component; the other components are moved through untouched.
//!
//! # Examples
//!
//! ```
//! use focal::optics::{first, second, Setter};
//!
//! let pair = (42, "Blob");
//! assert_eq!(first().modify(pair, |n: i32| n.to_string().len() as i32), (2, "Blob"));
//! assert_eq!(second().set(pair, "Blobby"), (42, "Blobby"));
//!
//! let nested = ((1, true), "x");
//! let flipped = first().compose(second()).modify(nested, |flag: bool| !flag);
//! assert_eq!(flipped, ((1, false), "x"));
//! ```

use std::marker::PhantomData;

use super::setter::Setter;

/// The setter of the tuple component at position `N` (zero-based) of the
/// tuple type `S`.
///
/// Implemented for tuples of arity two through four. `S` is normally left to
/// inference.
pub struct TupleSlot<S, const N: usize> {
    _marker: PhantomData<fn(S) -> S>,
}

impl<S, const N: usize> TupleSlot<S, N> {
    const SLOT: Self = Self {
        _marker: PhantomData,
    };
}

impl<S, const N: usize> Clone for TupleSlot<S, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, const N: usize> Copy for TupleSlot<S, N> {}

impl<S, const N: usize> std::fmt::Debug for TupleSlot<S, N> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TupleSlot")
            .field("position", &N)
            .finish()
    }
}

/// Focuses on the first component of a tuple.
#[must_use]
pub const fn first<S>() -> TupleSlot<S, 0> {
    TupleSlot::SLOT
}

/// Focuses on the second component of a tuple.
#[must_use]
pub const fn second<S>() -> TupleSlot<S, 1> {
    TupleSlot::SLOT
}

/// Focuses on the third component of a tuple.
#[must_use]
pub const fn third<S>() -> TupleSlot<S, 2> {
    TupleSlot::SLOT
}

/// Focuses on the fourth component of a tuple.
#[must_use]
pub const fn fourth<S>() -> TupleSlot<S, 3> {
    TupleSlot::SLOT
}

/// Focuses on the tuple component at position `N`.
///
/// # Example
///
/// ```
/// use focal::optics::{nth, Setter};
///
/// let triple = ("a", 1, 'c');
/// assert_eq!(nth::<1, _>().modify(triple, |n: i32| n + 1), ("a", 2, 'c'));
/// ```
#[must_use]
pub const fn nth<const N: usize, S>() -> TupleSlot<S, N> {
    TupleSlot::SLOT
}

macro_rules! tuple_slot {
    ($index:tt => $focus:ident; $($element:ident),+) => {
        impl<$($element),+> Setter<($($element,)+), $focus> for TupleSlot<($($element,)+), $index> {
            fn modify<F>(&self, source: ($($element,)+), function: F) -> ($($element,)+)
            where
                F: FnMut($focus) -> $focus,
            {
                let mut function = function;
                let mut source = source;
                source.$index = function(source.$index);
                source
            }
        }
    };
}

tuple_slot!(0 => T0; T0, T1);
tuple_slot!(1 => T1; T0, T1);

tuple_slot!(0 => T0; T0, T1, T2);
tuple_slot!(1 => T1; T0, T1, T2);
tuple_slot!(2 => T2; T0, T1, T2);

tuple_slot!(0 => T0; T0, T1, T2, T3);
tuple_slot!(1 => T1; T0, T1, T2, T3);
tuple_slot!(2 => T2; T0, T1, T2, T3);
tuple_slot!(3 => T3; T0, T1, T2, T3);

static_assertions::assert_impl_all!(TupleSlot<(String, Vec<u8>), 0>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_first_updates_only_first() {
        let pair = (1, "blob".to_string());
        assert_eq!(first().modify(pair, |n: i32| n + 1), (2, "blob".to_string()));
    }

    #[rstest]
    fn test_third_of_triple() {
        let triple = (1, 2, 3);
        assert_eq!(third().set(triple, 30), (1, 2, 30));
    }

    #[rstest]
    fn test_fourth_of_quadruple() {
        let quadruple = ('a', 'b', 'c', 'd');
        assert_eq!(
            fourth().modify(quadruple, |c: char| c.to_ascii_uppercase()),
            ('a', 'b', 'c', 'D')
        );
    }

    #[rstest]
    fn test_nested_composition() {
        let nested = (("x", 1), 2);
        let updated = first().compose(second()).modify(nested, |n: i32| n * 10);
        assert_eq!(updated, (("x", 10), 2));
    }
}
