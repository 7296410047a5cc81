/// Composes functions right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function sees the
/// input first. Each output type must match the input type of the function
/// to its left.
///
/// - `compose!(f)` is `f`
/// - `compose!(f, g, ..)` is a `move` closure owning every function
///
/// The result implements `Fn` when every composed function does, so it can
/// be called repeatedly and composed again.
///
/// # Examples
///
/// ```
/// use lambox::compose;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // increment(double(square(3)))
/// assert_eq!(compose!(increment, double, square)(3), 19);
/// ```
///
/// Types change along the chain:
///
/// ```
/// use lambox::compose;
///
/// let digits = compose!(|s: String| s.len(), |n: u64| n.to_string());
/// assert_eq!(digits(12_345), 5);
/// ```
///
/// Grouping does not matter:
///
/// ```
/// use lambox::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(compose!(f, compose!(g, h))(10), compose!(compose!(f, g), h)(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let rest = $crate::compose!($($rest),+);
        move |input| outer(rest(input))
    }};
}
