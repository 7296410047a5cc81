//! Type class traits for the container algebra.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Shape-preserving transformation of the held value
//! - [`Pointed`]: The `of` constructor lifting a plain value
//! - [`Monad`]: Sequencing with `flat_map`
//! - [`Identity`]: The container with no extra behaviour (alias [`Container`])
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. `TypeConstructor::WithType<B>`
//! names "the same container holding a `B`", which is enough to state
//! `fmap` and `flat_map` once for every container.
//!
//! # Examples
//!
//! ```rust
//! use lambox::typeclass::{Functor, Identity, Pointed};
//!
//! let four = Identity::of(2).fmap(|two| two + 2);
//! assert_eq!(four, Identity::new(4));
//! ```
//!
//! Functions generic over the container only need the trait bounds:
//!
//! ```rust
//! use lambox::typeclass::{Functor, Identity};
//!
//! fn stringify<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| n.to_string())
//! }
//!
//! assert_eq!(stringify(Identity::new(7)), Identity::new("7".to_string()));
//! ```

mod functor;
mod higher;
mod identity;
mod monad;
mod pointed;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::{Container, Identity};
pub use monad::Monad;
pub use pointed::Pointed;
