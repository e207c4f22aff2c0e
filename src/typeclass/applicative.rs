//! Applicative type class - lifting values and applying functions in a context.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a plain value into the context
//! - `apply`: apply a wrapped function to a wrapped value
//! - `map2`: combine two wrapped values with a binary function
//!
//! These three operations are all the traversal driver needs. The order in
//! which an instance combines the effects of `apply`'s two arguments (left
//! first, then right) is what makes a traversal report effects in element
//! order.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! C::apply(C::pure(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! C::apply(C::pure(f), C::pure(x)) == C::pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! C::apply(u, C::pure(y)) == C::apply(C::pure(|f| f(y)), u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::typeclass::{Applicative, OptionContext};
//!
//! let x: Option<i32> = OptionContext::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = OptionContext::map2(Some(1), Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//!
//! let increment: Option<fn(i32) -> i32> = Some(|n| n + 1);
//! assert_eq!(OptionContext::apply(increment, Some(5)), Some(6));
//! ```

use super::context::{
    IdentityContext, OptionContext, ResultContext, ValidationContext, WriterContext,
};
use super::functor::Functor;
use super::identity::Identity;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::writer::Writer;

/// A context supporting lifting values and combining independent computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the context, with no effect.
    fn pure<A>(value: A) -> Self::Wrapped<A>;

    /// Applies a wrapped function to a wrapped value.
    ///
    /// The effect of `function` comes before the effect of `wrapped`.
    fn apply<A, B, F>(function: Self::Wrapped<F>, wrapped: Self::Wrapped<A>) -> Self::Wrapped<B>
    where
        F: FnOnce(A) -> B;

    /// Combines two wrapped values using a binary function.
    ///
    /// The effect of `first` comes before the effect of `second`.
    fn map2<A, B, Output, F>(
        first: Self::Wrapped<A>,
        second: Self::Wrapped<B>,
        function: F,
    ) -> Self::Wrapped<Output>
    where
        F: FnOnce(A, B) -> Output;

    /// Combines two wrapped values into a wrapped pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::{Applicative, OptionContext};
    ///
    /// assert_eq!(OptionContext::product(Some(1), Some("a")), Some((1, "a")));
    /// assert_eq!(OptionContext::product(Some(1), None::<&str>), None);
    /// ```
    #[inline]
    fn product<A, B>(first: Self::Wrapped<A>, second: Self::Wrapped<B>) -> Self::Wrapped<(A, B)> {
        Self::map2::<A, B, (A, B), _>(first, second, |a, b| (a, b))
    }
}

// =============================================================================
// Option
// =============================================================================

impl Applicative for OptionContext {
    #[inline]
    fn pure<A>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Option<F>, wrapped: Option<A>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match (function, wrapped) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }

    #[inline]
    fn map2<A, B, Output, F>(first: Option<A>, second: Option<B>, function: F) -> Option<Output>
    where
        F: FnOnce(A, B) -> Output,
    {
        match (first, second) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result (fail-fast)
// =============================================================================

impl<E> Applicative for ResultContext<E> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Result<F, E>, wrapped: Result<A, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match (function, wrapped) {
            (Ok(function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map2<A, B, Output, F>(first: Result<A, E>, second: Result<B, E>, function: F) -> Result<Output, E>
    where
        F: FnOnce(A, B) -> Output,
    {
        match (first, second) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Result (accumulating)
// =============================================================================

impl<E: Semigroup> Applicative for ValidationContext<E> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Result<F, E>, wrapped: Result<A, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        Self::map2::<F, A, B, _>(function, wrapped, |function, value| function(value))
    }

    #[inline]
    fn map2<A, B, Output, F>(first: Result<A, E>, second: Result<B, E>, function: F) -> Result<Output, E>
    where
        F: FnOnce(A, B) -> Output,
    {
        match (first, second) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(left), Err(right)) => Err(left.combine(right)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Identity
// =============================================================================

impl Applicative for IdentityContext {
    #[inline]
    fn pure<A>(value: A) -> Identity<A> {
        Identity(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Identity<F>, wrapped: Identity<A>) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity((function.into_inner())(wrapped.into_inner()))
    }

    #[inline]
    fn map2<A, B, Output, F>(first: Identity<A>, second: Identity<B>, function: F) -> Identity<Output>
    where
        F: FnOnce(A, B) -> Output,
    {
        Identity(function(first.into_inner(), second.into_inner()))
    }
}

// =============================================================================
// Writer
// =============================================================================

impl<W: Monoid> Applicative for WriterContext<W> {
    #[inline]
    fn pure<A>(value: A) -> Writer<W, A> {
        Writer::pure(value)
    }

    #[inline]
    fn apply<A, B, F>(function: Writer<W, F>, wrapped: Writer<W, A>) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Self::map2::<F, A, B, _>(function, wrapped, |function, value| function(value))
    }

    #[inline]
    fn map2<A, B, Output, F>(first: Writer<W, A>, second: Writer<W, B>, function: F) -> Writer<W, Output>
    where
        F: FnOnce(A, B) -> Output,
    {
        let (a, left) = first.run();
        let (b, right) = second.run();
        Writer::new(function(a, b), left.combine(right))
    }
}
