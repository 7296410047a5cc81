//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the plainest container in the crate: it holds one value and
//! its `map` always applies the function. It is the reference model the
//! other containers are compared against, and it is also exported as
//! [`Container`].

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// The held value is private. The only ways to reach it are the consuming
/// [`into_inner`](Self::into_inner) and the shared [`as_inner`](Self::as_inner);
/// there is no mutable access, so a wrapped value changes only by building a
/// new `Identity` through [`map`](Self::map).
///
/// # Examples
///
/// ```rust
/// use lambox::typeclass::Identity;
///
/// let wrapped = Identity::of(2).map(|two| two + 2);
/// assert_eq!(wrapped.into_inner(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A> {
    value: A,
}

/// The untyped "container" name for [`Identity`].
pub type Container<A> = Identity<A>;

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self { value }
    }

    /// Wraps a value. Same as [`new`](Self::new).
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::new(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.value
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.value
    }

    /// Applies `function` to the held value and rewraps the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::typeclass::Identity;
    ///
    /// let length = Identity::new("flamethrowers").map(str::len);
    /// assert_eq!(length, Identity::new(13));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(self.value))
    }

    /// Applies an `Identity`-returning function without nesting the wrapper.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.value)
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

static_assertions::assert_impl_all!(Identity<i32>: Copy, Send, Sync);
