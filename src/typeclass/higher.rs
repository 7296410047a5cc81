//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `IO<_>` as bare type constructors.
//! [`TypeConstructor`] works around this by pairing a container applied to
//! some `A` with a GAT that re-applies the same container to another type.
//! `Functor`, `Pointed` and `Monad` are all stated in terms of it.
//!
//! # Example
//!
//! ```rust
//! use lambox::typeclass::{Identity, TypeConstructor};
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Identity<i32>>();
//!
//! type Relabelled = <Identity<i32> as TypeConstructor>::WithType<String>;
//! let relabelled: Relabelled = Identity::new("forty-two".to_string());
//! assert_eq!(relabelled.into_inner(), "forty-two");
//! ```

/// A container type applied to its inner type.
///
/// # Associated Types
///
/// - `Inner`: The type the container currently holds.
/// - `WithType<B>`: The same container shape holding a `B` instead. Any
///   parameters other than the held value (the `Left` type of `Either`, the
///   rejection type of `Task`) are carried over unchanged.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type of the value held by the container.
    type Inner;

    /// The same container applied to `B`.
    ///
    /// The `TypeConstructor<Inner = B>` bound keeps transformations chainable.
    type WithType<B>: TypeConstructor<Inner = B>;
}
