//! Type classes for folding and traversing ordered sequences.
//!
//! - [`Foldable`]: reducing a sequence to a summary value
//! - [`Traversable`]: mapping a sequence with effects, collecting the results
//! - [`Functor`], [`Applicative`]: the operations a traversal needs from its context
//! - [`Semigroup`], [`Monoid`]: combining errors and logs
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. Two traits built on Generic Associated
//! Types stand in for them:
//!
//! - [`TypeConstructor`] is implemented by applied types such as `Vec<T>` and
//!   lets a container name itself with a different element type.
//! - [`Context`] is implemented by zero-sized markers such as
//!   [`OptionContext`]; `C::Wrapped<T>` is the wrapped type for any `T`.
//!   `Functor` and `Applicative` are defined on these markers, which is what
//!   lets [`traverse_array`] be written once for every context.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: the identity functor
//! - [`Writer`]: a value paired with accumulated output
//! - [`Sum`], [`Product`]: numeric wrappers for the two monoid operations
//!
//! # Examples
//!
//! ## Folding
//!
//! ```rust
//! use seqtraverse::typeclass::{fold_left, fold_right};
//!
//! assert_eq!(fold_right(|x, acc: String| format!("({x} {acc})"), String::from("nil"), [1, 2]), "(1 (2 nil))");
//! assert_eq!(fold_left(|acc: i32, x| acc * 10 + x, 0, [1, 2, 3]), 123);
//! ```
//!
//! ## Traversing
//!
//! ```rust
//! use seqtraverse::typeclass::{Traversable, ValidationContext, traverse_array};
//!
//! let parsed: Result<Vec<i32>, std::num::ParseIntError> =
//!     vec!["1", "2", "3"].traverse_result(|s| s.parse::<i32>());
//! assert_eq!(parsed, Ok(vec![1, 2, 3]));
//!
//! let checked = traverse_array::<ValidationContext<String>, _, _, _>(["a", "", "c", ""], |s| {
//!     if s.is_empty() { Err(String::from("empty;")) } else { Ok(s.len()) }
//! });
//! assert_eq!(checked, Err(String::from("empty;empty;")));
//! ```

mod applicative;
mod context;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;
mod writer;

pub use applicative::Applicative;
pub use context::{IdentityContext, OptionContext, ResultContext, ValidationContext, WriterContext};
pub use foldable::{Foldable, fold_left, fold_right};
pub use functor::Functor;
pub use higher::{Context, TypeConstructor};
pub use identity::Identity;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::{Traversable, sequence_array, traverse_array, traverse_array_};
pub use wrappers::{Product, Sum};
pub use writer::Writer;
