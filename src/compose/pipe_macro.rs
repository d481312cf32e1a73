//! The `pipe!` macro for left-to-right application.
//!
//! Pipelines read in the order data flows, which is the natural way to
//! apply a sequence of setters to a value.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(h, g, f)(x)`.
///
/// Each function only needs to implement [`FnOnce`].
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ## Applying setters in sequence
///
/// ```
/// use std::collections::BTreeSet;
/// use focal::optics::{member, Setter};
/// use focal::pipe;
///
/// let mut toggle_two = member(2).update(|present: bool| !present);
/// let mut toggle_five = member(5).update(|present: bool| !present);
///
/// let result = pipe!(BTreeSet::from([1, 2, 3, 4]), toggle_two, toggle_five);
/// assert_eq!(result, BTreeSet::from([1, 3, 4, 5]));
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use focal::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(10, f, g, h), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
