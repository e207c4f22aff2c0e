//! Functor type class - mapping inside a context.
//!
//! `Functor` is defined on a context marker (see [`Context`]) rather than on
//! the wrapped value, so generic code names the context once and maps
//! `C::Wrapped<A>` to `C::Wrapped<B>` for any `A` and `B`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! C::fmap(|x| x, fa) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! C::fmap(g, C::fmap(f, fa)) == C::fmap(|x| g(f(x)), fa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::typeclass::{Functor, OptionContext};
//!
//! assert_eq!(OptionContext::fmap(|n: i32| n.to_string(), Some(5)), Some("5".to_string()));
//! assert_eq!(OptionContext::fmap(|n: i32| n.to_string(), None), None);
//! ```

use super::context::{
    IdentityContext, OptionContext, ResultContext, ValidationContext, WriterContext,
};
use super::higher::Context;
use super::identity::Identity;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::writer::Writer;

/// A context whose wrapped values can have a function mapped over them.
pub trait Functor: Context {
    /// Applies a function to the value(s) inside the context.
    ///
    /// The shape of the context (presence, error, log) is preserved.
    fn fmap<A, B, F>(function: F, wrapped: Self::Wrapped<A>) -> Self::Wrapped<B>
    where
        F: FnOnce(A) -> B;

    /// Replaces the value inside the context, keeping its effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::{Functor, ResultContext};
    ///
    /// let replaced = ResultContext::<String>::replace(Ok::<i32, String>(1), "one");
    /// assert_eq!(replaced, Ok("one"));
    /// ```
    fn replace<A, B>(wrapped: Self::Wrapped<A>, value: B) -> Self::Wrapped<B> {
        Self::fmap::<A, B, _>(move |_| value, wrapped)
    }
}

// =============================================================================
// Option
// =============================================================================

impl Functor for OptionContext {
    #[inline]
    fn fmap<A, B, F>(function: F, wrapped: Option<A>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.map(function)
    }
}

// =============================================================================
// Result (fail-fast and accumulating share the same mapping)
// =============================================================================

impl<E> Functor for ResultContext<E> {
    #[inline]
    fn fmap<A, B, F>(function: F, wrapped: Result<A, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.map(function)
    }
}

impl<E: Semigroup> Functor for ValidationContext<E> {
    #[inline]
    fn fmap<A, B, F>(function: F, wrapped: Result<A, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.map(function)
    }
}

// =============================================================================
// Identity
// =============================================================================

impl Functor for IdentityContext {
    #[inline]
    fn fmap<A, B, F>(function: F, wrapped: Identity<A>) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(wrapped.into_inner()))
    }
}

// =============================================================================
// Writer
// =============================================================================

impl<W: Monoid> Functor for WriterContext<W> {
    #[inline]
    fn fmap<A, B, F>(function: F, wrapped: Writer<W, A>) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        let (value, output) = wrapped.run();
        Writer::new(function(value), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionContext::fmap(|x| x * 2, input), expected);
    }

    #[rstest]
    fn result_fmap_preserves_error() {
        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(ResultContext::<&str>::fmap(|x: i32| x + 1, failed), Err("boom"));
        assert_eq!(ResultContext::<&str>::fmap(|x: i32| x + 1, Ok(1)), Ok(2));
    }

    #[rstest]
    fn validation_fmap_preserves_error() {
        let failed: Result<i32, Vec<&str>> = Err(vec!["boom"]);
        assert_eq!(
            ValidationContext::<Vec<&str>>::fmap(|x: i32| x + 1, failed),
            Err(vec!["boom"])
        );
    }

    #[rstest]
    fn identity_fmap_applies_function() {
        assert_eq!(IdentityContext::fmap(|s: &str| s.len(), Identity("four")), Identity(4));
    }

    #[rstest]
    fn writer_fmap_keeps_output() {
        let writer = Writer::new(2, vec!["two"]);
        let mapped = WriterContext::<Vec<&str>>::fmap(|x| x * 10, writer);
        assert_eq!(mapped.run(), (20, vec!["two"]));
    }

    #[rstest]
    fn replace_keeps_effect() {
        assert_eq!(OptionContext::replace(Some(1), 'x'), Some('x'));
        assert_eq!(OptionContext::replace(None::<i32>, 'x'), None);
    }
}
