//! Stack-safe recursion via trampolining.
//!
//! This module provides the `Trampoline<'a, A>` type. A recursive step is
//! returned as data (a suspended thunk) instead of being called, and
//! [`Trampoline::run`] drives the thunks in a loop. The native call stack
//! therefore stays at a constant depth no matter how many steps the
//! computation takes.
//!
//! # Motivation
//!
//! Rust does not guarantee tail call optimization. A traversal written as
//! plain recursion over a sequence of 100 000 elements needs 100 000 stack
//! frames and overflows small default stacks. The traversal driver in
//! [`crate::typeclass`] expresses each element as one trampoline step.
//!
//! # Lifetimes
//!
//! Unlike a `'static`-only trampoline, `Trampoline<'a, A>` lets thunks borrow
//! data that lives for `'a`. This is what allows traversing a borrowed slice
//! without cloning it.
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::control::Trampoline;
//!
//! fn sum_to(n: u64, accumulator: u64) -> Trampoline<'static, u64> {
//!     if n == 0 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::suspend(move || sum_to(n - 1, accumulator + n))
//!     }
//! }
//!
//! assert_eq!(sum_to(100_000, 0).run(), 5_000_050_000);
//! ```

use super::either::Either;

/// The deferred rest of a trampolined computation.
pub type Thunk<'a, A> = Box<dyn FnOnce() -> Trampoline<'a, A> + 'a>;

/// One reified step of a computation.
///
/// A trampoline is exactly one of:
///
/// 1. `Done(A)` - the computation has finished with value `A`
/// 2. `Suspend(thunk)` - invoking `thunk` yields the next step
///
/// Creating a `Suspend` never runs its thunk. Only [`run`](Self::run) and
/// [`resume`](Self::resume) do.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::control::Trampoline;
///
/// let finished = Trampoline::done(42);
/// assert!(finished.is_done());
///
/// let pending = Trampoline::suspend(|| Trampoline::done(42));
/// assert!(pending.is_suspended());
/// assert_eq!(pending.run(), 42);
/// ```
pub enum Trampoline<'a, A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation needs another step.
    Suspend(Thunk<'a, A>),
}

impl<'a, A> Trampoline<'a, A> {
    /// Creates a completed trampoline.
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a suspended trampoline that continues with `thunk`.
    ///
    /// The thunk is not evaluated until the trampoline is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::control::Trampoline;
    /// use std::cell::Cell;
    ///
    /// let evaluated = Cell::new(false);
    /// let trampoline = Trampoline::suspend(|| {
    ///     evaluated.set(true);
    ///     Trampoline::done(1)
    /// });
    /// assert!(!evaluated.get());
    /// assert_eq!(trampoline.run(), 1);
    /// assert!(evaluated.get());
    /// ```
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'a,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Alias for [`done`](Self::done).
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::done(value)
    }

    /// Returns `true` if this step holds a final value.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns `true` if this step still has a thunk to run.
    #[inline]
    pub const fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspend(_))
    }

    /// Runs the trampoline to completion and returns the final value.
    ///
    /// Each thunk returns to this loop before the next one is invoked, so the
    /// native stack depth is constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::control::Trampoline;
    ///
    /// fn count_down(n: u64) -> Trampoline<'static, u64> {
    ///     if n == 0 {
    ///         Trampoline::done(0)
    ///     } else {
    ///         Trampoline::suspend(move || count_down(n - 1))
    ///     }
    /// }
    ///
    /// assert_eq!(count_down(1_000_000).run(), 0);
    /// ```
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => current = thunk(),
            }
        }
    }

    /// Takes at most one step.
    ///
    /// Returns `Right(value)` if the computation is complete, or
    /// `Left(thunk)` if there is more work to do. Useful for interleaving a
    /// computation with other work or for stepping through it in tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::control::{Either, Trampoline};
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    ///
    /// match trampoline.resume() {
    ///     Either::Left(thunk) => assert_eq!(thunk().run(), 42),
    ///     Either::Right(_) => unreachable!("a suspended step is never done"),
    /// }
    /// ```
    pub fn resume(self) -> Either<Thunk<'a, A>, A> {
        match self {
            Self::Done(value) => Either::Right(value),
            Self::Suspend(thunk) => Either::Left(thunk),
        }
    }

    /// Applies a function to the final value.
    ///
    /// The function runs after the last step; the mapping does not add a
    /// stack frame per step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(21));
    /// assert_eq!(trampoline.map(|x| x * 2).run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Trampoline<'a, B>
    where
        A: 'a,
        F: FnOnce(A) -> B + 'a,
    {
        match self {
            Self::Done(value) => Trampoline::Done(function(value)),
            Self::Suspend(thunk) => Trampoline::suspend(move || Trampoline::Done(function(thunk().run()))),
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Trampoline<'_, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
        }
    }
}

// Thunks are plain boxed closures with no Send bound.
static_assertions::assert_not_impl_any!(Trampoline<'static, i32>: Send, Sync);
