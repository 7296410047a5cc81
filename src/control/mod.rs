//! Control structures for functional programming.
//!
//! - [`Maybe`]: A value that may be absent; absence short-circuits `map`
//! - [`Either`]: A `Left` failure or a `Right` success; `Left` short-circuits `map`
//! - [`fix`]: The fixed-point combinator, recursion without named bindings
//!
//! Values leave `Maybe` and `Either` through [`maybe`] and [`either`], which
//! are the only places a branch-dependent result escapes the container.
//!
//! # Examples
//!
//! ## Absence
//!
//! ```rust
//! use lambox::control::{Maybe, maybe};
//!
//! fn withdraw(amount: u32, balance: u32) -> Maybe<u32> {
//!     if balance >= amount { Maybe::of(balance - amount) } else { Maybe::nothing() }
//! }
//!
//! let report = |m: Maybe<u32>| {
//!     maybe("You're broke!".to_string(), |left: u32| format!("Your balance is ${left}"), m)
//! };
//! assert_eq!(report(withdraw(20, 200)), "Your balance is $180");
//! assert_eq!(report(withdraw(20, 10)), "You're broke!");
//! ```
//!
//! ## Anonymous Recursion
//!
//! ```rust
//! use lambox::control::{Recursive, fix};
//!
//! let fibonacci = fix(|recurse: Recursive<u32, u64>| {
//!     move |n: u32| if n == 1 || n == 2 { 1 } else { recurse(n - 1) + recurse(n - 2) }
//! });
//! assert_eq!(fibonacci(7), 13);
//! ```

mod either;
mod fix;
mod maybe;

pub use either::{Either, either};
pub use fix::{Recursive, fix, y};
pub use maybe::{Maybe, maybe};
