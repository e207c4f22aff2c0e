//! Foldable type class - reducing an ordered sequence to a single value.
//!
//! This module provides the fold engine ([`fold_right`], [`fold_left`]) and
//! the [`Foldable`] trait, implemented for `Vec<T>` on top of it.
//!
//! Both folds are plain loops: they make exactly one call to the combining
//! function per element and use constant stack space, so they are safe for
//! sequences of any length.
//!
//! # Order
//!
//! ```text
//! fold_right(f, init, [x0, x1, .., xn]) == f(x0, f(x1, .. f(xn, init)))
//! fold_left(f, init, [x0, x1, .., xn])  == f(..f(f(init, x0), x1).., xn)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::typeclass::{fold_left, fold_right};
//!
//! // Right fold with prepend rebuilds the sequence.
//! let rebuilt = fold_right(
//!     |element, mut accumulator: Vec<i32>| {
//!         accumulator.insert(0, element);
//!         accumulator
//!     },
//!     Vec::new(),
//!     vec![1, 2, 3],
//! );
//! assert_eq!(rebuilt, vec![1, 2, 3]);
//!
//! let scaled = fold_left(
//!     |mut accumulator: Vec<i32>, element| {
//!         accumulator.push(element * 10);
//!         accumulator
//!     },
//!     Vec::new(),
//!     [1, 2, 3],
//! );
//! assert_eq!(scaled, vec![10, 20, 30]);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// Folds a sequence from its last element to its first.
///
/// For each element `x`, in reverse order, the accumulator becomes
/// `function(x, accumulator)`: the element is the first argument. Returns
/// `init` unchanged for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::fold_right;
///
/// let digits = fold_right(|digit, text: String| format!("{digit}{text}"), String::new(), [1, 2, 3]);
/// assert_eq!(digits, "123");
///
/// assert_eq!(fold_right(|x: i32, acc: i32| x - acc, 7, Vec::new()), 7);
/// ```
pub fn fold_right<I, B, F>(mut function: F, init: B, elements: I) -> B
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(I::Item, B) -> B,
{
    let mut accumulator = init;
    for element in elements.into_iter().rev() {
        accumulator = function(element, accumulator);
    }
    accumulator
}

/// Folds a sequence from its first element to its last.
///
/// For each element `x`, in order, the accumulator becomes
/// `function(accumulator, x)`: the accumulator is the first argument.
/// Returns `init` unchanged for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::fold_left;
///
/// assert_eq!(fold_left(|acc: i32, x: &i32| acc - x, 10, &[1, 2, 3]), 4);
/// ```
pub fn fold_left<I, B, F>(mut function: F, init: B, elements: I) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
{
    let mut accumulator = init;
    for element in elements {
        accumulator = function(accumulator, element);
    }
    accumulator
}

/// A type class for ordered sequences that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`, `length`, `to_list`, `find`, `exists`, `for_all`
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
/// let sum = values.clone().fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 15);
///
/// let sum: Sum<i32> = values.fold_map(Sum);
/// assert_eq!(sum.0, 15);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::{Foldable, Product};
    ///
    /// let product: Product<i32> = vec![1, 2, 3, 4].fold_map(Product);
    /// assert_eq!(product.0, 24);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.clone().find(|element| *element > 3), Some(4));
    /// assert_eq!(values.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// An empty structure satisfies every predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        fold_left(function, init, self)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        fold_right(function, init, self)
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    /// Optimized implementation for Vec - returns self.
    #[inline]
    fn to_list(self) -> Self {
        self
    }

    /// Optimized implementation for Vec - stops at the first match.
    fn find<P>(self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().find(|element| predicate(element))
    }
}
