//! Monad type class - sequencing computations within a container.
//!
//! `flat_map` runs a function that itself returns a container and flattens
//! the nested result. Unlike `fmap`, a `Maybe` returned by the function is not
//! left nested inside the outer `Maybe`.
//!
//! # Laws
//!
//! Using [`Pointed::of`](super::Pointed::of) as the unit:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::of(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::of) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for containers that support dependent sequencing.
///
/// The failure shapes short-circuit exactly as they do for `fmap`: an absent
/// `Maybe`, a `Left`, or a rejected `Task` never invokes the function.
///
/// # Examples
///
/// ```rust
/// use lambox::typeclass::{Identity, Monad};
///
/// let result = Identity::new(5).flat_map(|n| Identity::new(n * 2));
/// assert_eq!(result, Identity::new(10));
/// ```
pub trait Monad: Functor {
    /// Applies a container-returning function and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map`, matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> Identity<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
