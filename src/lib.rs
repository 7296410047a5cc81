//! # lambox
//!
//! Functor containers, composition helpers and a fixed-point combinator.
//!
//! ## Overview
//!
//! - **Type Classes**: `TypeConstructor`, `Functor`, `Pointed`, `Monad`, and
//!   the `Identity` container they are modelled on
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`, `curry3!`
//!   plus the `identity`, `constant`, `flip` and `trace` helpers
//! - **Control Structures**: `Maybe`, `Either` and the `fix` combinator for
//!   anonymous recursion
//! - **Effects**: `IO` for deferred synchronous effects, `Task` for deferred
//!   computations that settle through a reject or resolve callback
//!
//! Every container is immutable. Transformations return a new container and
//! values only escape through the terminal operations (`maybe`, `either`,
//! `IO::run`, `Task::fork`).
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and `Identity`
//! - `compose`: Function composition utilities
//! - `control`: `Maybe`, `Either`, `fix`
//! - `effect`: `IO`, `Task`
//! - `async`: Bridge from `Task` to `std::future::Future`
//! - `serde`: Serialization of the data containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambox::prelude::*;
//!
//! let message = either(
//!     |error: String| error,
//!     |value: i32| format!("got {value}"),
//!     Either::<String, i32>::of(20).map(|x| x + 1),
//! );
//! assert_eq!(message, "got 21");
//!
//! let factorial = fix(|recurse: Recursive<u64, u64>| {
//!     move |n: u64| if n <= 1 { 1 } else { n * recurse(n - 1) }
//! });
//! assert_eq!(factorial(5), 120);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lambox::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
