//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module provides two complementary encodings:
//!
//! - [`TypeConstructor`] is implemented by an *applied* type (`Option<i32>`)
//!   and exposes its inner type and the same constructor applied elsewhere.
//! - [`Context`] is implemented by a zero-sized *marker* type
//!   (`OptionContext`) and names the constructor itself. Capabilities such as
//!   `Functor` and `Applicative` are defined on markers, which lets generic
//!   code (the traversal driver) produce `Wrapped<Vec<B>>` from
//!   `Wrapped<B>` without the compiler having to relate two projections.
//!
//! # Example
//!
//! ```rust
//! use seqtraverse::typeclass::{Context, OptionContext, TypeConstructor};
//!
//! fn wrapped_none<C: Context>() -> Option<C::Wrapped<String>>
//! where
//!     C::Wrapped<String>: Default,
//! {
//!     Some(Default::default())
//! }
//!
//! assert_eq!(wrapped_none::<OptionContext>(), Some(None));
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Option<i32>>();
//! ```

/// A type constructor applied to some type.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

/// A type constructor named by a marker type.
///
/// `C::Wrapped<T>` is the constructor applied to `T`. Because the marker
/// stays fixed while `T` varies, `C::Wrapped<A>` and `C::Wrapped<B>` are
/// known to share a constructor, which [`TypeConstructor`] alone cannot
/// express.
///
/// # Example
///
/// ```rust
/// use seqtraverse::typeclass::{Context, ResultContext};
///
/// type Parsed = <ResultContext<String> as Context>::Wrapped<i32>;
/// let value: Parsed = Ok(1);
/// assert_eq!(value, Ok::<i32, String>(1));
/// ```
pub trait Context {
    /// The constructor applied to `T`.
    type Wrapped<T>: TypeConstructor<Inner = T>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
