//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the wrapped type of [`IdentityContext`](super::IdentityContext).
//! Traversing in it applies the element function with no effect at all, which
//! makes it the reference point for the traversal identity law.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::{Identity, IdentityContext, Traversable};
///
/// let doubled = vec![1, 2, 3].traverse::<IdentityContext, _, _>(|x| Identity(x * 2));
/// assert_eq!(doubled.into_inner(), vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
