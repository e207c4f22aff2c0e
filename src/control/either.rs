//! Either type - one of two alternatives.
//!
//! `Either<L, R>` is the result of a single trampoline step
//! ([`Trampoline::resume`](super::Trampoline::resume)): `Left` carries the
//! pending thunk, `Right` carries the finished value.
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::control::Either;
//!
//! let pending: Either<&str, i32> = Either::Left("more work");
//! let finished: Either<&str, i32> = Either::Right(42);
//!
//! assert!(pending.is_left());
//! assert_eq!(finished.right(), Some(42));
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By the convention used throughout this crate, `Right` is the completed
/// alternative and `Left` is the one that still needs attention.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into an `Option` of the right value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}
