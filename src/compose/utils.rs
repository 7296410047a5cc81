//! Small combinators that show up between composed functions.

use std::fmt::Debug;

/// Returns its argument.
///
/// The unit of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave as `f`.
///
/// ```
/// use lambox::compose::identity;
///
/// assert_eq!(identity("unchanged"), "unchanged");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields a clone of `value`.
///
/// ```
/// use lambox::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// ```
/// use lambox::compose::flip;
///
/// let concat = |a: String, b: &str| a + b;
/// let suffix = flip(concat);
/// let fastest = suffix(" is the fastest", "Aston Martin One-77".to_string());
/// assert_eq!(fastest, "Aston Martin One-77 is the fastest");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Returns a pass-through function that logs each value it sees.
///
/// Every call emits a `tracing` debug event on the `lambox::trace` target
/// with `tag` and the value's `Debug` form, then returns the value
/// untouched. Dropping it between two stages of a [`compose!`](crate::compose!)
/// shows what the left stage actually receives.
///
/// ```
/// use lambox::compose;
/// use lambox::compose::trace;
///
/// let words = compose!(
///     |words: Vec<&str>| words.len(),
///     trace("after split"),
///     |s: &'static str| s.split(' ').collect::<Vec<_>>()
/// );
/// assert_eq!(words("The world is a vampire"), 5);
/// ```
pub fn trace<T: Debug>(tag: &'static str) -> impl Fn(T) -> T {
    move |value| {
        tracing::debug!(target: "lambox::trace", tag, value = ?value);
        value
    }
}
