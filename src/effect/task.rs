//! Task - deferred computations that settle through callbacks.
//!
//! A `Task<E, A>` wraps a computation that, once forked, eventually calls
//! exactly one of two handles: [`Reject`] with an `E` or [`Resolve`] with an
//! `A`. Building and mapping a task never runs it; [`Task::fork`] does.
//!
//! Each fork gets its own one-shot latch shared by that fork's two handles.
//! A handle is consumed when fired, and firing the second handle of a pair
//! after the first is a contract violation (see [`Resolve::resolve`]). Forks
//! of the same task share no state.
//!
//! # Examples
//!
//! ```rust
//! use lambox::effect::Task;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let fetch = Task::<String, u32>::new(|_reject, resolve| resolve.resolve(41));
//! let next = fetch.map(|n| n + 1);
//!
//! let seen = Rc::new(RefCell::new(None));
//! let sink = Rc::clone(&seen);
//! next.fork(|error| panic!("{error}"), move |n| *sink.borrow_mut() = Some(n));
//! assert_eq!(*seen.borrow(), Some(42));
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::error::SettleError;
use crate::typeclass::{Functor, Monad, Pointed, TypeConstructor};

/// Set once either handle of a fork fires.
type Latch = Rc<Cell<bool>>;

/// The rejection handle passed to a task's computation.
pub struct Reject<E> {
    latch: Latch,
    callback: Box<dyn FnOnce(E)>,
}

/// The resolution handle passed to a task's computation.
pub struct Resolve<A> {
    latch: Latch,
    callback: Box<dyn FnOnce(A)>,
}

impl<E: 'static> Reject<E> {
    fn new<F>(latch: Latch, callback: F) -> Self
    where
        F: FnOnce(E) + 'static,
    {
        Self {
            latch,
            callback: Box::new(callback),
        }
    }

    /// Settles the fork with `error`.
    ///
    /// # Panics
    ///
    /// Panics if the paired [`Resolve`] already fired.
    pub fn reject(self, error: E) {
        if let Err(violation) = self.try_reject(error) {
            tracing::error!(target: "lambox::task", %violation, "reject called on a settled fork");
            panic!("{violation}");
        }
    }

    /// Settles the fork with `error`, or reports that it had already settled.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::AlreadySettled`] if the paired [`Resolve`]
    /// already fired; the rejection handler is not called.
    pub fn try_reject(self, error: E) -> Result<(), SettleError> {
        if self.latch.replace(true) {
            return Err(SettleError::AlreadySettled);
        }
        (self.callback)(error);
        Ok(())
    }

    /// Returns whether the fork has settled through either handle.
    pub fn is_settled(&self) -> bool {
        self.latch.get()
    }

    fn contramap<D, F>(self, function: F) -> Reject<D>
    where
        D: 'static,
        F: FnOnce(D) -> E + 'static,
    {
        let Self { latch, callback } = self;
        Reject::new(latch, move |error| callback(function(error)))
    }
}

impl<A: 'static> Resolve<A> {
    fn new<F>(latch: Latch, callback: F) -> Self
    where
        F: FnOnce(A) + 'static,
    {
        Self {
            latch,
            callback: Box::new(callback),
        }
    }

    /// Settles the fork with `value`.
    ///
    /// # Panics
    ///
    /// Panics if the paired [`Reject`] already fired.
    pub fn resolve(self, value: A) {
        if let Err(violation) = self.try_resolve(value) {
            tracing::error!(target: "lambox::task", %violation, "resolve called on a settled fork");
            panic!("{violation}");
        }
    }

    /// Settles the fork with `value`, or reports that it had already settled.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::AlreadySettled`] if the paired [`Reject`]
    /// already fired; the resolution handler is not called.
    pub fn try_resolve(self, value: A) -> Result<(), SettleError> {
        if self.latch.replace(true) {
            return Err(SettleError::AlreadySettled);
        }
        (self.callback)(value);
        Ok(())
    }

    /// Returns whether the fork has settled through either handle.
    pub fn is_settled(&self) -> bool {
        self.latch.get()
    }

    fn contramap<D, F>(self, function: F) -> Resolve<D>
    where
        D: 'static,
        F: FnOnce(D) -> A + 'static,
    {
        let Self { latch, callback } = self;
        Resolve::new(latch, move |value| callback(function(value)))
    }
}

impl<E> fmt::Debug for Reject<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Reject")
            .field("settled", &self.latch.get())
            .finish_non_exhaustive()
    }
}

impl<A> fmt::Debug for Resolve<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Resolve")
            .field("settled", &self.latch.get())
            .finish_non_exhaustive()
    }
}

/// A deferred computation that rejects with `E` or resolves with `A`.
///
/// # Functor Behaviour
///
/// `map(f)` wraps the resolve handle so that resolving with `a` resolves the
/// outer fork with `f(a)`. A rejection passes straight through and `f` is
/// never applied.
pub struct Task<E, A> {
    computation: Rc<dyn Fn(Reject<E>, Resolve<A>)>,
}

impl<E: 'static, A: 'static> Task<E, A> {
    /// Wraps a computation. It is not called until [`fork`](Self::fork).
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Reject<E>, Resolve<A>) + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// A task that resolves with a clone of `value` on every fork.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_, resolve| resolve.resolve(value.clone()))
    }

    /// A task that rejects with a clone of `error` on every fork.
    pub fn rejected(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |reject, _| reject.reject(error.clone()))
    }

    /// Runs the computation with fresh handles wrapping `on_reject` and
    /// `on_resolve`.
    ///
    /// Forking again runs the computation again, independently.
    pub fn fork<R, S>(&self, on_reject: R, on_resolve: S)
    where
        R: FnOnce(E) + 'static,
        S: FnOnce(A) + 'static,
    {
        tracing::trace!(target: "lambox::task", "forking task");
        let latch = Rc::new(Cell::new(false));
        let reject = Reject::new(Rc::clone(&latch), on_reject);
        let resolve = Resolve::new(latch, on_resolve);
        (self.computation)(reject, resolve);
    }

    /// Transforms the resolved value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::effect::Task;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let called = Rc::new(Cell::new(false));
    /// let flag = Rc::clone(&called);
    /// let failing = Task::<&str, i32>::rejected("offline").map(move |n| {
    ///     flag.set(true);
    ///     n * 2
    /// });
    ///
    /// failing.fork(|reason| assert_eq!(reason, "offline"), |_| unreachable!());
    /// assert!(!called.get());
    /// ```
    pub fn map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let computation = self.computation;
        let function = Rc::new(function);
        Task::new(move |reject, resolve: Resolve<B>| {
            let function = Rc::clone(&function);
            computation(reject, resolve.contramap(move |value| function(value)));
        })
    }

    /// Transforms the rejection value, leaving a resolution untouched.
    pub fn map_rejected<D, F>(self, function: F) -> Task<D, A>
    where
        F: Fn(E) -> D + 'static,
        D: 'static,
    {
        let computation = self.computation;
        let function = Rc::new(function);
        Task::new(move |reject: Reject<D>, resolve| {
            let function = Rc::clone(&function);
            computation(reject.contramap(move |error| function(error)), resolve);
        })
    }

    /// Chains a task-returning function: once this task resolves, the task
    /// it maps to runs with the same outer handles. A rejection of either
    /// stage rejects the whole chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::effect::Task;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let total = Rc::new(Cell::new(0));
    /// let sink = Rc::clone(&total);
    /// Task::<String, i32>::of(20)
    ///     .flat_map(|n| Task::of(n + 22))
    ///     .fork(|error| panic!("{error}"), move |n| sink.set(n));
    /// assert_eq!(total.get(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + 'static,
        B: 'static,
    {
        let computation = self.computation;
        let function = Rc::new(function);
        Task::new(move |reject: Reject<E>, resolve: Resolve<B>| {
            // The first stage settles through its own latch; the outer
            // handles are taken by whichever first-stage handle fires.
            let outer_reject = Rc::new(RefCell::new(Some(reject)));
            let stage_latch = Rc::new(Cell::new(false));

            let reject_slot = Rc::clone(&outer_reject);
            let stage_reject = Reject::new(Rc::clone(&stage_latch), move |error| {
                let taken = reject_slot.borrow_mut().take();
                if let Some(reject) = taken {
                    reject.reject(error);
                }
            });

            let function = Rc::clone(&function);
            let stage_resolve = Resolve::new(stage_latch, move |value| {
                let taken = outer_reject.borrow_mut().take();
                if let Some(reject) = taken {
                    (function(value).computation)(reject, resolve);
                }
            });

            computation(stage_reject, stage_resolve);
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn chain<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Returns a future that forks this task when first polled.
    ///
    /// The future yields `Ok(Ok(a))` on resolution, `Ok(Err(e))` on
    /// rejection, and `Err(SettleError::Abandoned)` if the computation drops
    /// both handles without settling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambox::effect::Task;
    ///
    /// let task = Task::<String, i32>::of(21).map(|n| n * 2);
    /// let outcome = futures::executor::block_on(task.to_future());
    /// assert_eq!(outcome, Ok(Ok(42)));
    /// ```
    #[cfg(feature = "async")]
    pub fn to_future(
        &self,
    ) -> impl std::future::Future<Output = Result<Result<A, E>, SettleError>> + use<E, A> {
        let task = self.clone();
        async move {
            let (sender, receiver) = futures::channel::oneshot::channel();
            let resolve_sender = Rc::new(RefCell::new(Some(sender)));
            let reject_sender = Rc::clone(&resolve_sender);
            task.fork(
                move |error| {
                    if let Some(sender) = reject_sender.borrow_mut().take() {
                        let _ = sender.send(Err(error));
                    }
                },
                move |value| {
                    if let Some(sender) = resolve_sender.borrow_mut().take() {
                        let _ = sender.send(Ok(value));
                    }
                },
            );
            receiver.await.map_err(|_| SettleError::Abandoned)
        }
    }
}

impl<E, A> Clone for Task<E, A> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<E, A> fmt::Debug for Task<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Task(<deferred>)")
    }
}

impl<E, A> TypeConstructor for Task<E, A> {
    type Inner = A;
    type WithType<B> = Task<E, B>;
}

impl<E: 'static, A: 'static> Functor for Task<E, A> {
    fn fmap<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<E: 'static, A: Clone + 'static> Pointed for Task<E, A> {
    fn of(value: A) -> Self {
        Self::of(value)
    }
}

impl<E: 'static, A: 'static> Monad for Task<E, A> {
    fn flat_map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_not_impl_any!(Task<String, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Forks `task` and records what it settled with.
    fn outcome<E: 'static, A: 'static>(task: &Task<E, A>) -> Option<Result<A, E>> {
        let slot = Rc::new(RefCell::new(None));
        let reject_slot = Rc::clone(&slot);
        let resolve_slot = Rc::clone(&slot);
        task.fork(
            move |error| *reject_slot.borrow_mut() = Some(Err(error)),
            move |value| *resolve_slot.borrow_mut() = Some(Ok(value)),
        );
        slot.borrow_mut().take()
    }

    #[rstest]
    fn construction_does_not_run_computation() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let task = Task::<(), i32>::new(move |_, resolve| {
            counter.set(counter.get() + 1);
            resolve.resolve(1);
        })
        .map(|n| n + 1);
        assert_eq!(runs.get(), 0);

        assert_eq!(outcome(&task), Some(Ok(2)));
        assert_eq!(outcome(&task), Some(Ok(2)));
        assert_eq!(runs.get(), 2);
    }

    #[rstest]
    fn rejection_short_circuits_map() {
        let applied = Rc::new(Cell::new(false));
        let flag = Rc::clone(&applied);
        let task = Task::<&str, i32>::rejected("boom").map(move |n| {
            flag.set(true);
            n
        });
        assert_eq!(outcome(&task), Some(Err("boom")));
        assert!(!applied.get());
    }

    #[rstest]
    fn map_rejected_transforms_only_failures() {
        let failed = Task::<&str, i32>::rejected("boom").map_rejected(str::len);
        assert_eq!(outcome(&failed), Some(Err(4)));

        let succeeded = Task::<&str, i32>::of(7).map_rejected(str::len);
        assert_eq!(outcome(&succeeded), Some(Ok(7)));
    }

    #[rstest]
    #[case(Task::of(4), Some(Ok(5)))]
    #[case(Task::rejected("first"), Some(Err("first")))]
    fn flat_map_propagates_first_stage(
        #[case] task: Task<&'static str, i32>,
        #[case] expected: Option<Result<i32, &'static str>>,
    ) {
        let chained = task.flat_map(|n| Task::of(n + 1));
        assert_eq!(outcome(&chained), expected);
    }

    #[rstest]
    fn flat_map_propagates_second_stage_rejection() {
        let chained: Task<String, i32> =
            Task::<String, i32>::of(1).chain(|n| Task::rejected(format!("stage two got {n}")));
        assert_eq!(outcome(&chained), Some(Err("stage two got 1".to_string())));
    }

    #[rstest]
    fn second_settle_is_reported_by_try_resolve() {
        let report = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&report);
        let task = Task::<i32, i32>::new(move |reject, resolve| {
            reject.reject(1);
            *sink.borrow_mut() = Some(resolve.try_resolve(2));
        });
        assert_eq!(outcome(&task), Some(Err(1)));
        assert_eq!(*report.borrow(), Some(Err(SettleError::AlreadySettled)));
    }

    #[rstest]
    #[should_panic(expected = "task already settled")]
    fn second_settle_panics() {
        let task = Task::<i32, i32>::new(|reject, resolve| {
            resolve.resolve(1);
            reject.reject(2);
        });
        task.fork(|_| {}, |_| {});
    }

    #[rstest]
    fn mapped_resolve_shares_the_latch() {
        let task = Task::<i32, i32>::new(|reject, resolve| {
            assert!(!resolve.is_settled());
            reject.reject(0);
            assert!(resolve.is_settled());
            assert_eq!(resolve.try_resolve(1), Err(SettleError::AlreadySettled));
        })
        .map(|n| n * 10);
        assert_eq!(outcome(&task), Some(Err(0)));
    }

    #[rstest]
    fn forks_do_not_share_latches() {
        let task = Task::<(), &str>::of("again");
        assert_eq!(outcome(&task), Some(Ok("again")));
        assert_eq!(outcome(&task), Some(Ok("again")));
    }

    #[rstest]
    fn deferred_resolution_settles_later() {
        let parked = Rc::new(RefCell::new(None));
        let park = Rc::clone(&parked);
        let task = Task::<(), i32>::new(move |_, resolve| {
            *park.borrow_mut() = Some(resolve);
        })
        .map(|n| n * 3);

        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        task.fork(|()| {}, move |n| sink.set(n));
        assert_eq!(seen.get(), 0);

        let resolve: Option<Resolve<i32>> = parked.borrow_mut().take();
        if let Some(resolve) = resolve {
            resolve.resolve(5);
        }
        assert_eq!(seen.get(), 15);
    }
}
