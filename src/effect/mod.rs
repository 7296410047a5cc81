//! Deferred effects.
//!
//! Both types here describe work without doing it. Building, mapping and
//! chaining them is pure; the effects happen only at an explicit edge.
//!
//! - [`IO`]: a synchronous computation, executed by [`IO::run`]
//! - [`Task`]: a computation that settles later through a [`Reject`] or
//!   [`Resolve`] handle, executed by [`Task::fork`]
//!
//! # IO
//!
//! ```rust
//! use lambox::effect::IO;
//!
//! let io = IO::of(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::of(x + 1));
//!
//! // Nothing has run yet
//! assert_eq!(io.run(), 21);
//! ```
//!
//! # Task
//!
//! ```rust
//! use lambox::effect::Task;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let lookup = |id: u32| {
//!     Task::new(move |reject, resolve| {
//!         if id == 0 { reject.reject("unknown id".to_string()) } else { resolve.resolve(id * 10) }
//!     })
//! };
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! for id in [0, 4] {
//!     let on_error = Rc::clone(&seen);
//!     let on_value = Rc::clone(&seen);
//!     lookup(id).map(|n| n + 1).fork(
//!         move |error: String| on_error.borrow_mut().push(error),
//!         move |n| on_value.borrow_mut().push(n.to_string()),
//!     );
//! }
//! assert_eq!(*seen.borrow(), vec!["unknown id", "41"]);
//! ```

mod error;
mod io;
mod task;

pub use error::SettleError;
pub use io::IO;
pub use task::{Reject, Resolve, Task};
