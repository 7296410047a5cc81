/// Passes a value through functions left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, the same as `compose!(h, g, f)(x)`
/// but applied at once. Each function is called exactly once, so `FnOnce`
/// closures are accepted.
///
/// # Examples
///
/// ```
/// use lambox::pipe;
///
/// let dasherized = pipe!(
///     "The world  is a vampire",
///     |s: &str| s.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>(),
///     |words: Vec<String>| words.join("-")
/// );
/// assert_eq!(dasherized, "the-world-is-a-vampire");
/// ```
///
/// ```
/// use lambox::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}
