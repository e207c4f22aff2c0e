//! # seqtraverse
//!
//! Stack-safe folding and traversal of ordered sequences.
//!
//! ## Overview
//!
//! - **Fold engine**: [`fold_right`](typeclass::fold_right) and
//!   [`fold_left`](typeclass::fold_left), iterative folds over any
//!   double-ended sequence
//! - **Traversal**: [`traverse_array`](typeclass::traverse_array), which maps
//!   a sequence with an effectful function and collects the results inside
//!   any [`Applicative`](typeclass::Applicative) context, in constant stack
//!   space
//! - **Contexts**: `Option`, fail-fast `Result`, error-accumulating
//!   validation, `Identity` and `Writer`
//! - **Trampoline**: the [`Trampoline`](control::Trampoline) that the
//!   traversal driver runs on, usable on its own for deep recursion
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type classes, contexts and the traversal driver
//! - `control`: Trampoline and Either
//! - `serde`: `Serialize`/`Deserialize` for `Identity`, `Writer` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqtraverse::prelude::*;
//!
//! let doubled = vec![1, 2, 3].traverse_option(|x| Some(x * 2));
//! assert_eq!(doubled, Some(vec![2, 4, 6]));
//!
//! let large: Vec<u32> = (0..100_000).collect();
//! let total = large.traverse_option(Some).map(|values| values.len());
//! assert_eq!(total, Some(100_000));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqtraverse::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
