//! Currying for two- and three-argument functions.
//!
//! A curried function takes its arguments one at a time. Every partial
//! application is itself an `Fn` closure that can be called many times, so
//! each captured argument is cloned into the final call.

/// Curries a two-argument function.
///
/// `curry2!(f)(a)(b)` is `f(a, b)`. The first argument must be `Clone`.
///
/// # Examples
///
/// ```
/// use lambox::curry2;
///
/// let match_with = curry2!(|pattern: char, s: &str| s.matches(pattern).count());
///
/// let count_spaces = match_with(' ');
/// assert_eq!(count_spaces("hello world"), 1);
/// assert_eq!(count_spaces("a b c"), 2);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// `curry3!(f)(a)(b)(c)` is `f(a, b, c)`. The first two arguments must be
/// `Clone`.
///
/// # Examples
///
/// ```
/// use lambox::curry3;
///
/// let clamp = curry3!(|low: i32, high: i32, x: i32| x.max(low).min(high));
/// let percentage = clamp(0)(100);
///
/// assert_eq!(percentage(140), 100);
/// assert_eq!(percentage(-5), 0);
/// assert_eq!(percentage(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    #[test]
    fn curry2_applies_in_order() {
        let subtract = curry2!(|a: i32, b: i32| a - b);
        assert_eq!(subtract(10)(3), 7);
        assert_eq!(curry2!(add)(5)(3), 8);
    }

    #[test]
    fn partial_application_is_reusable() {
        let curried = curry2!(add);
        let add_five = curried(5);
        let add_ten = curried(10);
        assert_eq!(add_five(1), 6);
        assert_eq!(add_five(2), 7);
        assert_eq!(add_ten(1), 11);
    }

    #[test]
    fn curry3_clones_non_copy_arguments() {
        let join = curry3!(|a: String, b: String, c: &str| format!("{a}{b}{c}"));
        let prefix = join("x".to_string())("y".to_string());
        assert_eq!(prefix("1"), "xy1");
        assert_eq!(prefix("2"), "xy2");
    }
}
