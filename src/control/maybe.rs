//! Maybe type - a container whose value may be absent.
//!
//! Once a `Maybe` is absent every further `map` is skipped and the absence is
//! carried to the end of the chain, where [`maybe`] turns it into a default.
//!
//! # Examples
//!
//! ```rust
//! use lambox::control::Maybe;
//!
//! fn safe_head(values: Vec<i32>) -> Option<i32> {
//!     values.first().copied()
//! }
//!
//! assert_eq!(Maybe::of(vec![1, 2, 3]).map_option(safe_head), Maybe::of(1));
//! assert!(Maybe::of(Vec::new()).map_option(safe_head).is_nothing());
//! ```

use crate::typeclass::{Functor, Monad, Pointed, TypeConstructor};

/// A value that is either present or absent.
///
/// The slot is private; construct with [`of`](Self::of),
/// [`nothing`](Self::nothing) or [`from_option`](Self::from_option).
///
/// `map` does not flatten: mapping a function that returns `Option<B>` gives a
/// `Maybe<Option<B>>`, a present value holding an absent one. Use
/// [`map_option`](Self::map_option) to treat a `None` result as absence, or
/// [`flat_map`](Self::flat_map) for functions returning `Maybe`.
///
/// # Examples
///
/// ```rust
/// use lambox::control::Maybe;
///
/// let street = Maybe::of("Shady Ln.").map(str::to_uppercase);
/// assert_eq!(street.into_option(), Some("SHADY LN.".to_string()));
///
/// let missing: Maybe<&str> = Maybe::nothing();
/// assert!(missing.map(str::to_uppercase).is_nothing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maybe<A> {
    value: Option<A>,
}

impl<A> Maybe<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self { value: Some(value) }
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self { value: None }
    }

    /// Wraps a value that may be missing; `None` becomes absent.
    #[inline]
    pub const fn from_option(value: Option<A>) -> Self {
        Self { value }
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_just(&self) -> bool {
        self.value.is_some()
    }

    /// Applies `function` to a present value. An absent `Maybe` stays absent
    /// and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(2).map(|n| n + 2), Maybe::of(4));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n + 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Maybe::from_option(self.value.map(function))
    }

    /// Applies a function whose result may be missing, treating `None` as
    /// absence.
    #[inline]
    pub fn map_option<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Maybe::from_option(self.value.and_then(function))
    }

    /// Applies a `Maybe`-returning function and flattens the result.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self.value {
            Some(value) => function(value),
            None => Maybe::nothing(),
        }
    }

    /// Returns the held value, or `default` when absent.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.value.unwrap_or(default)
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.value
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        Maybe::from_option(self.value.as_ref())
    }
}

/// Releases the value held by a `Maybe`.
///
/// Returns `default` when `container` is absent, otherwise `function` applied
/// to the held value. `function` is never called on an absent value. Both
/// outcomes share the return type `T`.
///
/// # Examples
///
/// ```rust
/// use lambox::control::{Maybe, maybe};
///
/// assert_eq!(maybe(0, |n: i32| n * 10, Maybe::of(4)), 40);
/// assert_eq!(maybe(0, |n: i32| n * 10, Maybe::nothing()), 0);
/// ```
pub fn maybe<A, T, F>(default: T, function: F, container: Maybe<A>) -> T
where
    F: FnOnce(A) -> T,
{
    match container.value {
        Some(value) => function(value),
        None => default,
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        Self::from_option(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(container: Maybe<A>) -> Self {
        container.into_option()
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A> Pointed for Maybe<A> {
    #[inline]
    fn of(value: A) -> Self {
        Self::of(value)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> Maybe<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
