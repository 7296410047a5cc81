//! Either type - a tagged failure or a success.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`, exactly one of them, and the tag
//! never changes after construction. It is right-biased: `map` transforms a
//! `Right` payload and passes a `Left` through untouched, so the first failure
//! in a chain is the one that reaches [`either`].
//!
//! # Examples
//!
//! ```rust
//! use lambox::control::{Either, either};
//!
//! fn parse_age(input: &str) -> Either<String, u8> {
//!     input.parse::<u8>().map_err(|_| format!("not an age: {input}")).into()
//! }
//!
//! let next_year = |input: &str| {
//!     either(|reason: String| reason, |age: u8| age.to_string(), parse_age(input).map(|age| age + 1))
//! };
//! assert_eq!(next_year("41"), "42");
//! assert_eq!(next_year("forty"), "not an age: forty");
//! ```

use crate::typeclass::{Functor, Monad, Pointed, TypeConstructor};

/// A value that is either a `Left` failure or a `Right` success.
///
/// Both variants can never be populated at once; the enum makes that shape
/// unrepresentable. Dispatch is always by pattern on the tag, never by
/// inspecting the payload.
///
/// # Type Parameters
///
/// * `L` - The failure payload, commonly a descriptive message
/// * `R` - The success payload
///
/// # Examples
///
/// ```rust
/// use lambox::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let failure: Either<String, i32> = Either::left("bad".to_string());
/// assert_eq!(failure.map(|x| x * 2), Either::Left("bad".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure branch.
    Left(L),
    /// The success branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a `Left`.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Builds a `Right`.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Wraps a success value. Same as [`right`](Self::right).
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Tag Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a `Right` payload. A `Left` is returned unchanged
    /// and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(5);
    /// assert_eq!(right.map(|x| x + 1), Either::Right(6));
    ///
    /// let left: Either<&str, i32> = Either::Left("stop");
    /// assert_eq!(left.map(|x| x + 1), Either::Left("stop"));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a `Left` payload, leaving a `Right` unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the tag, keeping the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Applies an `Either`-returning function to a `Right` payload and
    /// flattens the result. A `Left` short-circuits.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either` by applying exactly one of two functions.
    ///
    /// Method form of [`either`]; note the handlers come in the same order.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the variants: `Left(l)` becomes `Right(l)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the `Left` payload, if any.
    #[inline]
    pub fn left_value(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the `Right` payload, if any.
    #[inline]
    pub fn right_value(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }
}

/// Releases the payload of an `Either`.
///
/// Dispatches on the tag and calls exactly one handler: `on_left` for a
/// `Left`, `on_right` for a `Right`. Both handlers must return the same `T`,
/// so a branch can never hand back a differently typed result.
///
/// # Examples
///
/// ```rust
/// use lambox::control::{Either, either};
///
/// let show = |e: Either<&str, i32>| either(|reason: &str| reason.to_string(), |x: i32| (x * 2).to_string(), e);
/// assert_eq!(show(Either::Right(5)), "10");
/// assert_eq!(show(Either::Left("bad")), "bad");
/// ```
pub fn either<L, R, T, F, G>(on_left: F, on_right: G, container: Either<L, R>) -> T
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> T,
{
    container.fold(on_left, on_right)
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<L, R> Pointed for Either<L, R> {
    #[inline]
    fn of(value: R) -> Self {
        Self::Right(value)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
