#![cfg(feature = "control")]
//! Tests for the fixed-point combinator.
//!
//! For a recursion template `h` and `g = fix(h)`, `g(x) == h(g)(x)` must hold
//! across the domain.

use std::rc::Rc;

use lambox::control::{Either, Maybe, Recursive, either, fix, maybe, y};
use proptest::prelude::*;
use rstest::rstest;

fn factorial_template(recurse: Recursive<u64, u64>) -> impl Fn(u64) -> u64 {
    move |n| if n <= 1 { 1 } else { n * recurse(n - 1) }
}

fn fibonacci_template(recurse: Recursive<u32, u64>) -> impl Fn(u32) -> u64 {
    move |n| if n == 1 || n == 2 { 1 } else { recurse(n - 1) + recurse(n - 2) }
}

#[rstest]
#[case(5, 120)]
#[case(0, 1)]
#[case(12, 479_001_600)]
fn factorial_without_named_recursion(#[case] input: u64, #[case] expected: u64) {
    assert_eq!(y(factorial_template)(input), expected);
}

#[rstest]
#[case(1, 1)]
#[case(2, 1)]
#[case(7, 13)]
#[case(15, 610)]
fn fibonacci_without_named_recursion(#[case] input: u32, #[case] expected: u64) {
    assert_eq!(y(fibonacci_template)(input), expected);
}

#[rstest]
fn fix_and_y_agree() {
    let via_fix = fix(factorial_template);
    let via_y = y(factorial_template);
    for n in 0..=20 {
        assert_eq!(via_fix(n), via_y(n));
    }
}

#[rstest]
fn derived_function_is_reusable_and_shareable() {
    let factorial = fix(factorial_template);
    let shared = Rc::clone(&factorial);
    assert_eq!(factorial(6), 720);
    assert_eq!(shared(6), 720);
    assert_eq!(factorial(3), 6);
}

#[rstest]
fn template_may_capture_its_environment() {
    let modulus = 1_000_007_u64;
    let power_of_two = fix(move |recurse: Recursive<u32, u64>| {
        move |n: u32| if n == 0 { 1 } else { recurse(n - 1) * 2 % modulus }
    });
    assert_eq!(power_of_two(10), 1024);
    assert_eq!(power_of_two(20), (1 << 20) % modulus);
}

#[rstest]
fn recursion_over_containers() {
    // Sum the leading run of present values.
    let sum_present = fix(|recurse: Recursive<Vec<Maybe<u32>>, u32>| {
        move |mut rest: Vec<Maybe<u32>>| {
            if rest.is_empty() {
                return 0;
            }
            let head = rest.remove(0);
            maybe(0, |value: u32| value + recurse(rest), head)
        }
    });
    let values = vec![Maybe::of(1), Maybe::of(2), Maybe::nothing(), Maybe::of(100)];
    assert_eq!(sum_present(values), 3);
}

#[rstest]
fn recursion_returning_either() {
    let checked_factorial = fix(|recurse: Recursive<u64, Either<String, u64>>| {
        move |n: u64| {
            if n <= 1 {
                Either::Right(1)
            } else {
                recurse(n - 1).flat_map(|previous| {
                    n.checked_mul(previous)
                        .map_or_else(|| Either::Left(format!("overflow at {n}")), Either::Right)
                })
            }
        }
    });

    let render = |result: Either<String, u64>| either(|error: String| error, |n: u64| n.to_string(), result);
    assert_eq!(render(checked_factorial(20)), "2432902008176640000");
    assert_eq!(render(checked_factorial(21)), "overflow at 21");
}

proptest! {
    #[test]
    fn prop_fixed_point_equation_factorial(n in 0_u64..=20) {
        let g = fix(factorial_template);
        prop_assert_eq!(g(n), factorial_template(Rc::clone(&g))(n));
    }

    #[test]
    fn prop_fixed_point_equation_fibonacci(n in 1_u32..=25) {
        let g = y(fibonacci_template);
        prop_assert_eq!(g(n), fibonacci_template(Rc::clone(&g))(n));
    }
}
