//! IO - deferred synchronous side effects.
//!
//! An `IO<A>` describes a computation producing an `A` that may perform side
//! effects. Nothing runs at construction or at `map` time; the composed chain
//! runs only when [`IO::run`] is called, at the program's edge.
//!
//! `run` borrows the `IO`, so it can be called again. Every call re-executes
//! every composed effect from the innermost thunk outwards.
//!
//! # Examples
//!
//! ```rust
//! use lambox::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     21
//! })
//! .map(|x| x * 2);
//!
//! // Not executed yet
//! assert_eq!(executed.get(), 0);
//!
//! assert_eq!(io.run(), 42);
//! assert_eq!(io.run(), 42);
//! assert_eq!(executed.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Functor, Monad, Pointed, TypeConstructor};

/// A deferred computation producing a value of type `A`.
///
/// # Monad Laws
///
/// Equality means "running both produces the same value and effects":
///
/// 1. **Left Identity**: `IO::of(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::of) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    thunk: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Wraps a thunk. The thunk is not called until [`run`](Self::run).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::effect::IO;
    ///
    /// let io = IO::new(|| 10 + 20);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            thunk: Rc::new(thunk),
        }
    }

    /// Wraps a plain value. Each run returns a clone of it.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the composed chain and returns its result.
    ///
    /// This is the only place the effects of an `IO` happen.
    pub fn run(&self) -> A {
        tracing::trace!(target: "lambox::io", "running IO chain");
        (self.thunk)()
    }

    /// Returns a new `IO` whose thunk is `function` after this one.
    ///
    /// Neither thunk is called by `map` itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::effect::IO;
    ///
    /// let io = IO::of(21).map(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let thunk = self.thunk;
        IO::new(move || function(thunk()))
    }

    /// Chains an `IO`-returning function, running the returned `IO` as part
    /// of this chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::effect::IO;
    ///
    /// let io = IO::of(10).flat_map(|x| IO::of(x * 2));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        let thunk = self.thunk;
        IO::new(move || function(thunk()).run())
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two actions, keeping the second result.
    ///
    /// The first action still runs for its effects.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs both actions, this one first, and combines their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::effect::IO;
    ///
    /// let io = IO::of(10).map2(IO::of(20), |a, b| a + b);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.thunk;
        IO::new(move || {
            let a = first();
            function(a, other.run())
        })
    }
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Functor for IO<A> {
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A: Clone + 'static> Pointed for IO<A> {
    fn of(value: A) -> Self {
        Self::of(value)
    }
}

impl<A: 'static> Monad for IO<A> {
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);
