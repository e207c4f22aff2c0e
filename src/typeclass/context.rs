//! Marker types naming the applicative contexts this crate can traverse in.
//!
//! A marker is never instantiated; it only selects a [`Context`] at the type
//! level, for example `xs.traverse::<OptionContext, _, _>(f)`.
//!
//! | Marker | `Wrapped<T>` | Failure behaviour |
//! |---|---|---|
//! | [`OptionContext`] | `Option<T>` | any `None` makes the whole result `None` |
//! | [`ResultContext<E>`] | `Result<T, E>` | the leftmost `Err` wins |
//! | [`ValidationContext<E>`] | `Result<T, E>` | every `Err` is combined, left to right |
//! | [`IdentityContext`] | `Identity<T>` | no effect |
//! | [`WriterContext<W>`] | `Writer<W, T>` | no failure; logs are combined left to right |

use std::marker::PhantomData;

use super::higher::Context;
use super::identity::Identity;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::writer::Writer;

/// The `Option` context: computations that may produce nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionContext;

/// The `Result` context with fail-fast semantics.
///
/// Combining two failures keeps the left one.
pub struct ResultContext<E>(PhantomData<fn() -> E>);

/// The `Result` context with error accumulation.
///
/// Combining two failures keeps both, joined with [`Semigroup::combine`]
/// (left operand first). The error type must therefore be a `Semigroup`,
/// typically `Vec<_>` or `String`.
pub struct ValidationContext<E: Semigroup>(PhantomData<fn() -> E>);

/// The identity context: plain values, no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityContext;

/// The writer context: values paired with an accumulated log.
pub struct WriterContext<W: Monoid>(PhantomData<fn() -> W>);

impl Context for OptionContext {
    type Wrapped<T> = Option<T>;
}

impl<E> Context for ResultContext<E> {
    type Wrapped<T> = Result<T, E>;
}

impl<E: Semigroup> Context for ValidationContext<E> {
    type Wrapped<T> = Result<T, E>;
}

impl Context for IdentityContext {
    type Wrapped<T> = Identity<T>;
}

impl<W: Monoid> Context for WriterContext<W> {
    type Wrapped<T> = Writer<W, T>;
}
