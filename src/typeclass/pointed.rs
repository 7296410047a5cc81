//! Pointed type class - lifting a plain value into a container.

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for containers with a canonical way to wrap a single value.
///
/// `of` is the "static constructor" every container exposes: the plain
/// `Identity`, a present `Maybe`, a `Right`, an `IO` returning the value, a
/// `Task` resolving with it.
///
/// # Laws
///
/// Combined with [`Functor`](super::Functor):
///
/// ```text
/// Self::of(a).fmap(f) == Self::of(f(a))
/// ```
///
/// # Examples
///
/// ```rust
/// use lambox::typeclass::{Identity, Pointed};
///
/// fn lift<P: Pointed<Inner = i32>>(value: i32) -> P {
///     P::of(value)
/// }
///
/// let wrapped: Identity<i32> = lift(3);
/// assert_eq!(wrapped.into_inner(), 3);
/// ```
pub trait Pointed: TypeConstructor {
    /// Wraps `value` in the container's default shape.
    fn of(value: Self::Inner) -> Self;
}

impl<A> Pointed for Identity<A> {
    #[inline]
    fn of(value: A) -> Self {
        Self::new(value)
    }
}
