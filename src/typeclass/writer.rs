//! Writer - a value paired with accumulated output.
//!
//! `Writer<W, A>` is the wrapped type of [`WriterContext`](super::WriterContext).
//! It is a strict pair: the output has already been produced when the value
//! exists. Combining two writers appends the right output to the left one, so
//! traversing in this context records one entry per element in element
//! order.
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::typeclass::{Traversable, Writer};
//!
//! let (doubled, log) = vec![1, 2, 3]
//!     .traverse_writer(|x| Writer::new(x * 2, vec![format!("saw {x}")]))
//!     .run();
//!
//! assert_eq!(doubled, vec![2, 4, 6]);
//! assert_eq!(log, vec!["saw 1", "saw 2", "saw 3"]);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A value of type `A` together with output of type `W`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    value: A,
    output: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a writer from a value and the output it produced.
    #[inline]
    pub const fn new(value: A, output: W) -> Self {
        Self { value, output }
    }

    /// Splits the writer into its value and output.
    #[inline]
    pub fn run(self) -> (A, W) {
        (self.value, self.output)
    }

    /// Returns the value, discarding the output.
    #[inline]
    pub fn eval(self) -> A {
        self.value
    }

    /// Returns the output, discarding the value.
    #[inline]
    pub fn exec(self) -> W {
        self.output
    }

    /// Borrows the value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Borrows the output.
    #[inline]
    pub const fn output(&self) -> &W {
        &self.output
    }
}

impl<W: Monoid, A> Writer<W, A> {
    /// Wraps a value with empty output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::pure(1);
    /// assert_eq!(writer.run(), (1, String::new()));
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(value, W::empty())
    }
}

impl<W> Writer<W, ()> {
    /// Produces output without a meaningful value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::Writer;
    ///
    /// assert_eq!(Writer::tell(vec!["entry"]).exec(), vec!["entry"]);
    /// ```
    pub const fn tell(output: W) -> Self {
        Self::new((), output)
    }
}

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}
