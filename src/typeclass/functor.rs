//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, implemented by every container
//! in the crate. A functor applies a function to the value it holds and
//! rewraps the result without changing its own shape: a `Left` stays a
//! `Left`, an absent `Maybe` stays absent, an `IO` stays deferred.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(g).fmap(f) == fa.fmap(|x| f(g(x)))
//! ```
//!
//! For `IO` and `Task` "equal" means "produces the same outcome when run or
//! forked".
//!
//! # Why `Fn`
//!
//! `IO::run` and `Task::fork` may be called any number of times, and each call
//! re-executes the composed chain. A mapped function therefore has to be
//! callable more than once, so `fmap` takes `Fn`. The containers that only
//! ever call the function once also expose an inherent `map` taking `FnOnce`.
//!
//! # Examples
//!
//! ```rust
//! use lambox::typeclass::{Functor, Identity};
//!
//! let wrapped = Identity::new(5);
//! let transformed: Identity<String> = wrapped.fmap(|n| n.to_string());
//! assert_eq!(transformed, Identity::new("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for containers that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(g).fmap(f) == fa.fmap(|x| f(g(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// Short-circuiting containers (`Maybe`, `Either`, `Task`) skip the
    /// function entirely when they hold no value to apply it to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::typeclass::{Functor, Identity};
    ///
    /// let doubled = Identity::new(21).fmap(|n| n * 2);
    /// assert_eq!(doubled.into_inner(), 42);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(move |_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(5).replace("replaced"), Identity::new("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(5).void(), Identity::new(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}
