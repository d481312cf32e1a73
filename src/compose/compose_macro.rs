//! The `compose!` macro for n-ary function composition.
//!
//! [`compose()`](crate::compose::compose) covers the two-function case; the
//! macro extends it to any number of functions, which is how longer update
//! pipelines are usually written.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ## Building an update function
///
/// ```
/// use focal::compose;
///
/// let trim = |name: String| name.trim().to_string();
/// let capitalize = |name: String| {
///     let mut characters = name.chars();
///     characters
///         .next()
///         .map(|first| first.to_uppercase().chain(characters).collect::<String>())
///         .unwrap_or_default()
/// };
/// let greet = |name: String| format!("Hello, {name}");
///
/// let update = compose!(greet, capitalize, trim);
/// assert_eq!(update("  blob ".to_string()), "Hello, Blob");
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use focal::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn test_compose_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = compose!(add_one, double);
        assert_eq!(composed(5), 11);
    }

    #[test]
    fn test_compose_three_with_strings() {
        let exclaim = |text: String| format!("{text}!");
        let shout = |text: String| text.to_uppercase();
        let greet = |name: &str| format!("hi {name}");
        let composed = compose!(exclaim, shout, greet);
        assert_eq!(composed("blob"), "HI BLOB!");
    }
}
