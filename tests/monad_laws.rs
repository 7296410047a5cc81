//! Property-based tests for the Monad laws.
//!
//! - **Left Identity**: `of(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(of) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

#![cfg(all(feature = "control", feature = "effect"))]

use lambox::control::{Either, Maybe};
use lambox::effect::IO;
use lambox::typeclass::{Identity, Monad, Pointed};
use proptest::prelude::*;

fn halve(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::of(n / 2) } else { Maybe::nothing() }
}

fn positive(n: i32) -> Either<String, i32> {
    if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) }
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| Identity::of(n.wrapping_mul(3));
        prop_assert_eq!(<Identity<i32> as Pointed>::of(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_identity_right_identity(value in any::<i32>()) {
        let container = Identity::of(value);
        prop_assert_eq!(container.flat_map(Identity::of), container);
    }
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<i32> as Pointed>::of(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>()) {
        let container = Maybe::from_option(value);
        prop_assert_eq!(Monad::flat_map(container, Maybe::of), container);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>()) {
        let container = Maybe::from_option(value);
        let decrement = |n: i32| Maybe::of(n.wrapping_sub(1));

        let left = container.flat_map(halve).flat_map(decrement);
        let right = container.flat_map(move |x| halve(x).flat_map(decrement));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Either<String, i32> as Pointed>::of(value).flat_map(positive), positive(value));
    }

    #[test]
    fn prop_either_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let container: Either<String, i32> = Either::from(value);
        prop_assert_eq!(container.clone().flat_map(Either::of), container);
    }

    #[test]
    fn prop_either_associativity(value in any::<i32>()) {
        let below_limit = |n: i32| {
            if n < 1_000 { Either::Right(n) } else { Either::Left("too large".to_string()) }
        };

        let left = positive(value).flat_map(below_limit);
        let right = positive(value).flat_map(move |x| Either::of(x).flat_map(below_limit));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// IO
// =============================================================================

proptest! {
    #[test]
    fn prop_io_left_identity(value in any::<i32>()) {
        let function = |n: i32| IO::of(n.wrapping_add(10));
        prop_assert_eq!(IO::of(value).flat_map(function).run(), function(value).run());
    }

    #[test]
    fn prop_io_right_identity(value in any::<i32>()) {
        let io = IO::of(value);
        prop_assert_eq!(io.clone().flat_map(IO::of).run(), io.run());
    }

    #[test]
    fn prop_io_associativity(value in any::<i32>()) {
        let function1 = |n: i32| IO::of(n.wrapping_add(1));
        let function2 = |n: i32| IO::of(n.wrapping_mul(2));

        let left = IO::of(value).flat_map(function1).flat_map(function2);
        let right = IO::of(value).flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left.run(), right.run());
    }
}
