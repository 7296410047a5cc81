//! Function composition.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application to a value
//! - [`curry2!`], [`curry3!`]: one argument at a time
//!
//! Combinators:
//!
//! - [`identity`] (I), the unit of composition
//! - [`constant`] (K)
//! - [`flip`] (C)
//! - [`trace`], a pass-through that logs the value flowing between stages
//!
//! # Examples
//!
//! ```
//! use lambox::compose;
//!
//! let to_upper_case = |x: &str| x.to_uppercase();
//! let exclaim = |x: String| x + "!";
//!
//! let shout = compose!(exclaim, to_upper_case);
//! assert_eq!(shout("send in the clowns"), "SEND IN THE CLOWNS!");
//! ```
//!
//! Point-free: the argument is never named.
//!
//! ```
//! use lambox::compose;
//!
//! let snake_case = compose!(
//!     |x: String| x.split_whitespace().collect::<Vec<_>>().join("_"),
//!     |x: &str| x.to_lowercase()
//! );
//! assert_eq!(snake_case("Hello  World"), "hello_world");
//! ```
//!
//! # Laws
//!
//! ```text
//! compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
//! compose!(identity, f) == compose!(f, identity) == f
//! flip(flip(f)) == f
//! ```

mod compose_macro;
mod curry_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity, trace};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::pipe;
