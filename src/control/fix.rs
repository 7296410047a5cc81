//! Fixed-point combinator - recursion without named bindings.
//!
//! [`fix`] turns a recursion template, a function that receives "the
//! recursive call" as its argument and returns the real function body, into
//! an ordinary recursive function. The closure passed in never refers to
//! itself by name.
//!
//! The construction is the applicative-order Y combinator:
//!
//! ```text
//! w(fn) = h(v -> fn(fn)(v))
//! Y(h)  = w(w)
//! ```
//!
//! and the result satisfies the fixed-point equation `Y(h) == h(Y(h))`.
//!
//! Termination belongs to the template: the combinator checks no base case,
//! and recursion depth uses the call stack like any named recursion.
//!
//! # Examples
//!
//! ```rust
//! use lambox::control::{Recursive, fix};
//!
//! let factorial = fix(|recurse: Recursive<u64, u64>| {
//!     move |n: u64| if n <= 1 { 1 } else { n * recurse(n - 1) }
//! });
//! assert_eq!(factorial(5), 120);
//! assert_eq!(factorial(10), 3_628_800);
//! ```

use std::rc::Rc;

/// A shared, repeatedly callable function from `A` to `B`.
///
/// This is both what a recursion template receives as its recursive call and
/// what [`fix`] returns.
pub type Recursive<A, B> = Rc<dyn Fn(A) -> B>;

/// A function that accepts itself, the `fn` in `fn(fn)`.
///
/// Rust has no equirecursive function types, so self-application goes
/// through this newtype.
struct SelfApplicable<A, B>(Rc<dyn Fn(&SelfApplicable<A, B>) -> Recursive<A, B>>);

impl<A, B> Clone for SelfApplicable<A, B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, B> SelfApplicable<A, B> {
    /// `fn(fn)`
    fn apply_to_self(&self) -> Recursive<A, B> {
        (self.0)(self)
    }
}

/// Derives the fixed point of a recursion template.
///
/// `template` receives a [`Recursive`] standing for the finished function and
/// returns the body that may call it. The returned function `g` behaves
/// exactly as `template(g)`.
///
/// # Examples
///
/// ```rust
/// use lambox::control::{Recursive, fix};
///
/// let fibonacci = fix(|recurse: Recursive<u32, u64>| {
///     move |n: u32| if n == 1 || n == 2 { 1 } else { recurse(n - 1) + recurse(n - 2) }
/// });
/// assert_eq!(fibonacci(7), 13);
/// ```
///
/// Templates that never reach a base case recurse until the stack is
/// exhausted, the same as unbounded named recursion.
pub fn fix<A, B, H, G>(template: H) -> Recursive<A, B>
where
    A: 'static,
    B: 'static,
    H: Fn(Recursive<A, B>) -> G + 'static,
    G: Fn(A) -> B + 'static,
{
    let template = Rc::new(template);
    let w = SelfApplicable(Rc::new(move |this: &SelfApplicable<A, B>| -> Recursive<A, B> {
        let this = this.clone();
        // Eta-expansion: `this.apply_to_self()` must stay behind `move |v|`.
        // Passing `this.apply_to_self()` directly evaluates fn(fn) eagerly,
        // which calls back into this closure before the template's base case
        // is ever checked and never returns.
        let recurse: Recursive<A, B> = Rc::new(move |v| this.apply_to_self()(v));
        Rc::new(template(recurse))
    }));
    w.apply_to_self()
}

/// The Y combinator. Same as [`fix`].
pub fn y<A, B, H, G>(template: H) -> Recursive<A, B>
where
    A: 'static,
    B: 'static,
    H: Fn(Recursive<A, B>) -> G + 'static,
    G: Fn(A) -> B + 'static,
{
    fix(template)
}
