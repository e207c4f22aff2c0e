//! Control structures for stack-safe evaluation.
//!
//! - [`Trampoline`]: a computation reified as a sequence of steps
//! - [`Either`]: the result of a single trampoline step
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::control::Trampoline;
//!
//! fn factorial(n: u64, accumulator: u64) -> Trampoline<'static, u64> {
//!     if n <= 1 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::suspend(move || factorial(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(factorial(10, 1).run(), 3_628_800);
//! ```

mod either;
mod trampoline;

pub use either::Either;
pub use trampoline::{Thunk, Trampoline};
