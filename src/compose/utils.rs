//! Helper functions (combinators) for function composition.
//!
//! - [`compose`]: Backward composition of two unary functions (B combinator)
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Composes two functions right-to-left: `compose(f, g)(x) == f(g(x))`.
///
/// This is the foundation every getter and setter pipeline is built on.
/// Composition is associative and [`identity`] is its unit.
///
/// # Examples
///
/// ```
/// use focal::compose::compose;
///
/// let bee = "bee@co.domain".to_string();
/// let blob = "blob@pointfree.co".to_string();
///
/// let is_staff = |email: &String| email.ends_with("@pointfree.co");
/// let is_customer = compose(|staff: bool| !staff, is_staff);
/// assert!(is_customer(&bee));
/// assert!(!is_customer(&blob));
/// ```
///
/// # Associativity
///
/// ```
/// use focal::compose::compose;
///
/// let f = |x: i32| x + 1;
/// let g = |x: i32| x * 2;
/// let h = |x: i32| x - 3;
///
/// let left = compose(compose(f, g), h);
/// let right = compose(f, compose(g, h));
/// assert_eq!(left(10), right(10));
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition, and
/// the update function under which every setter must leave its source
/// untouched.
///
/// # Examples
///
/// ```
/// use focal::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Handy as the update function of a setter when the new value does not
/// depend on the old one.
///
/// # Examples
///
/// ```
/// use focal::compose::constant;
///
/// let always_earth = constant::<_, String>("Earth".to_string());
/// assert_eq!(always_earth("Mars".to_string()), "Earth");
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g(b, a)` such that `g(b, a) == f(a, b)`.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use focal::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_applies_inner_first() {
        let composed = compose(|x: i32| x + 1, |x: i32| x * 2);
        assert_eq!(composed(5), 11);
    }

    #[test]
    fn test_compose_changes_types() {
        let composed = compose(|text: String| text.len(), |number: i32| number.to_string());
        assert_eq!(composed(12345), 5);
    }

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        assert_eq!(flipped_power(3, 2), 8);
    }
}
