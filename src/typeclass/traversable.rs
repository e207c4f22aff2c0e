//! Traversable type class - mapping with effects and collecting results.
//!
//! Traversal applies an effectful function to every element of an ordered
//! sequence and collects the results inside the effect: parsing a
//! `Vec<&str>` with a function returning `Option<i32>` yields
//! `Some(Vec<i32>)` when every parse succeeds and `None` otherwise.
//!
//! # Stack safety
//!
//! The natural definition of traversal recurses once per element:
//!
//! ```text
//! traverse(f, [x, ..rest]) = apply(fmap(prepend, f(x)), traverse(f, rest))
//! ```
//!
//! which needs as many native stack frames as there are elements. Here the
//! recursion is reified instead. [`traverse_array`] first applies the element
//! function to every element, first to last, so side effects of the function
//! happen in element order. It then walks the wrapped results from the last
//! to the first, and every one becomes a [`Trampoline`] step whose thunk
//! combines it with the already built tail. [`Trampoline::run`] drives the
//! steps in a loop, so the driver's stack depth is constant whatever the
//! length of the input. Walking from the back and *prepending* keeps the
//! result, and the order in which effects are combined, in element order.
//!
//! # Examples
//!
//! ```rust
//! use seqtraverse::typeclass::Traversable;
//!
//! let strings = vec!["1", "2", "3"];
//! let numbers: Option<Vec<i32>> = strings.traverse_option(|s| s.parse().ok());
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let with_error = vec!["1", "not a number", "3"];
//! let result: Option<Vec<i32>> = with_error.traverse_option(|s| s.parse().ok());
//! assert_eq!(result, None);
//! ```

use std::collections::VecDeque;

use crate::control::Trampoline;

use super::applicative::Applicative;
use super::context::{OptionContext, ResultContext, ValidationContext, WriterContext};
use super::foldable::{Foldable, fold_left};
use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::writer::Writer;

/// Prepends one traversed element to the already built tail.
type Prepend<'a, B> = Box<dyn FnOnce(VecDeque<B>) -> VecDeque<B> + 'a>;

fn prepend<'a, B: 'a>(head: B) -> Prepend<'a, B> {
    Box::new(move |mut tail| {
        tail.push_front(head);
        tail
    })
}

/// Builds the next trampoline step of a traversal.
///
/// `elements` holds the elements not yet visited. If it is exhausted the
/// step is `Done(accumulator)`. Otherwise its last element is taken and the
/// step is a suspended thunk that computes `build_from(last, accumulator)`
/// and then builds the following step. Building a step never runs
/// `build_from`.
fn go<'a, I, W, F>(accumulator: W, mut elements: I, mut build_from: F) -> Trampoline<'a, W>
where
    I: DoubleEndedIterator + 'a,
    W: 'a,
    F: FnMut(I::Item, W) -> W + 'a,
{
    match elements.next_back() {
        None => Trampoline::done(accumulator),
        Some(last) => Trampoline::suspend(move || {
            let next = build_from(last, accumulator);
            go(next, elements, build_from)
        }),
    }
}

/// Traverses an ordered sequence in the applicative context `C`.
///
/// Applies `function` to every element, first to last, and combines the
/// wrapped results into a wrapped `Vec`, preserving element order. Each
/// result is combined as `C::apply(C::fmap(prepend, function(x)), tail)`,
/// starting from `C::pure(empty)`. Whatever `function` and the context's operations
/// do (short-circuit to `None`, carry an error, append to a log) passes
/// through unchanged.
///
/// The driver loop runs in constant stack space; only `function` and the
/// context's own operations can add stack frames.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::{OptionContext, traverse_array};
///
/// let doubled = traverse_array::<OptionContext, _, _, _>(vec![1, 2, 3], |x| Some(x * 2));
/// assert_eq!(doubled, Some(vec![2, 4, 6]));
///
/// let failed = traverse_array::<OptionContext, _, _, _>(vec![1, 2, 3], |x| {
///     if x == 2 { None } else { Some(x) }
/// });
/// assert_eq!(failed, None);
///
/// // Borrowed input works too.
/// let words = ["a", "bb", "ccc"];
/// let lengths = traverse_array::<OptionContext, _, _, _>(&words, |word| Some(word.len()));
/// assert_eq!(lengths, Some(vec![1, 2, 3]));
/// ```
pub fn traverse_array<C, I, B, F>(elements: I, mut function: F) -> C::Wrapped<Vec<B>>
where
    C: Applicative,
    I: IntoIterator,
    F: FnMut(I::Item) -> C::Wrapped<B>,
{
    let wrapped_elements = fold_left(
        |mut wrapped_elements: Vec<C::Wrapped<B>>, element| {
            wrapped_elements.push(function(element));
            wrapped_elements
        },
        Vec::new(),
        elements,
    );

    let build_from = |wrapped: C::Wrapped<B>, tail: C::Wrapped<VecDeque<B>>| {
        let lifted = C::fmap::<B, Prepend<'_, B>, _>(prepend, wrapped);
        C::apply::<VecDeque<B>, VecDeque<B>, Prepend<'_, B>>(lifted, tail)
    };

    let seed = C::pure::<VecDeque<B>>(VecDeque::new());
    let collected = go(seed, wrapped_elements.into_iter(), build_from).run();
    C::fmap::<VecDeque<B>, Vec<B>, _>(Vec::from, collected)
}

/// Turns a sequence of wrapped values into a wrapped sequence.
///
/// Equivalent to traversing with the identity function.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::{ResultContext, sequence_array};
///
/// let all_ok: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2)];
/// assert_eq!(sequence_array::<ResultContext<&str>, _, _>(all_ok), Ok(vec![1, 2]));
///
/// let one_err: Vec<Result<i32, &str>> = vec![Ok(1), Err("bad"), Err("worse")];
/// assert_eq!(sequence_array::<ResultContext<&str>, _, _>(one_err), Err("bad"));
/// ```
pub fn sequence_array<C, I, A>(elements: I) -> C::Wrapped<Vec<A>>
where
    C: Applicative,
    I: IntoIterator<Item = C::Wrapped<A>>,
{
    traverse_array::<C, I, A, _>(elements, |element| element)
}

/// Traverses for the effects only, discarding the collected values.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::{Writer, WriterContext, traverse_array_};
///
/// let log = traverse_array_::<WriterContext<String>, _, _, _>(["a", "b"], |s| {
///     Writer::new(s.len(), s.to_uppercase())
/// });
/// assert_eq!(log.run(), ((), String::from("AB")));
/// ```
pub fn traverse_array_<C, I, B, F>(elements: I, function: F) -> C::Wrapped<()>
where
    C: Applicative,
    I: IntoIterator,
    F: FnMut(I::Item) -> C::Wrapped<B>,
{
    C::replace::<Vec<B>, ()>(traverse_array::<C, I, B, F>(elements, function), ())
}

/// A type class for sequences that can be traversed with effects.
///
/// `traverse` is generic over the applicative context; the remaining
/// methods fix the context for the common cases.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// xs.traverse::<IdentityContext, _, _>(Identity) == Identity(xs)
/// ```
///
/// ## Naturality
///
/// ```text
/// t(xs.traverse::<F, _, _>(f)) == xs.traverse::<G, _, _>(|x| t(f(x)))
/// ```
///
/// for every applicative morphism `t` from `F` to `G`.
///
/// # Examples
///
/// ```rust
/// use seqtraverse::typeclass::Traversable;
///
/// fn validate_positive(number: i32) -> Result<i32, &'static str> {
///     if number > 0 { Ok(number) } else { Err("must be positive") }
/// }
///
/// assert_eq!(vec![1, 2, 3].traverse_result(validate_positive), Ok(vec![1, 2, 3]));
/// assert_eq!(vec![1, -2, 3].traverse_result(validate_positive), Err("must be positive"));
/// ```
pub trait Traversable: Foldable {
    /// Applies an effectful function to each element and collects the
    /// results inside the context `C`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::{Identity, IdentityContext, Traversable};
    ///
    /// let lengths = vec!["a", "bb"].traverse::<IdentityContext, _, _>(|s| Identity(s.len()));
    /// assert_eq!(lengths, Identity(vec![1, 2]));
    /// ```
    fn traverse<C, B, F>(self, function: F) -> C::Wrapped<Self::WithType<B>>
    where
        C: Applicative,
        F: FnMut(Self::Inner) -> C::Wrapped<B>;

    /// Traverses with a function returning `Option`.
    ///
    /// The result is `Some` if every application returns `Some`, `None`
    /// otherwise.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>,
        Self: Sized,
    {
        self.traverse::<OptionContext, B, F>(function)
    }

    /// Traverses with a function returning `Result`.
    ///
    /// The result is `Ok` if every application returns `Ok`; otherwise it is
    /// the error of the first failing element.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>,
        Self: Sized,
    {
        self.traverse::<ResultContext<E>, B, F>(function)
    }

    /// Traverses with a function returning `Result`, reporting every error.
    ///
    /// Errors of all failing elements are combined in element order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::Traversable;
    ///
    /// let checked = vec![1, -2, 3, -4].traverse_validated(|n: i32| {
    ///     if n > 0 { Ok(n) } else { Err(vec![format!("{n} is negative")]) }
    /// });
    /// assert_eq!(checked, Err(vec!["-2 is negative".to_string(), "-4 is negative".to_string()]));
    /// ```
    fn traverse_validated<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        E: Semigroup,
        F: FnMut(Self::Inner) -> Result<B, E>,
        Self: Sized,
    {
        self.traverse::<ValidationContext<E>, B, F>(function)
    }

    /// Traverses with a function returning a `Writer`, concatenating the
    /// outputs in element order.
    fn traverse_writer<B, W, F>(self, function: F) -> Writer<W, Self::WithType<B>>
    where
        W: Monoid,
        F: FnMut(Self::Inner) -> Writer<W, B>,
        Self: Sized,
    {
        self.traverse::<WriterContext<W>, B, F>(function)
    }

    /// Turns a structure of `Option`s inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::Traversable;
    ///
    /// assert_eq!(vec![Some(1), Some(2)].sequence_option(), Some(vec![1, 2]));
    /// assert_eq!(vec![Some(1), None].sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out, keeping the first error.
    fn sequence_result<E>(self) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }

    /// Applies an `Option`-returning function for its effects only.
    fn traverse_option_<F>(self, function: F) -> Option<()>
    where
        F: FnMut(Self::Inner) -> Option<()>,
        Self: Sized,
    {
        self.traverse_option(function).map(|_| ())
    }

    /// Alias for `traverse_option_`.
    fn for_each_option<F>(self, function: F) -> Option<()>
    where
        F: FnMut(Self::Inner) -> Option<()>,
        Self: Sized,
    {
        self.traverse_option_(function)
    }

    /// Applies a `Result`-returning function for its effects only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtraverse::typeclass::Traversable;
    ///
    /// let result: Result<(), &str> = vec![1, 2, 3].traverse_result_(|element| {
    ///     if element > 0 { Ok(()) } else { Err("must be positive") }
    /// });
    /// assert_eq!(result, Ok(()));
    /// ```
    fn traverse_result_<E, F>(self, function: F) -> Result<(), E>
    where
        F: FnMut(Self::Inner) -> Result<(), E>,
        Self: Sized,
    {
        self.traverse_result(function).map(|_| ())
    }

    /// Alias for `traverse_result_`.
    fn for_each_result<E, F>(self, function: F) -> Result<(), E>
    where
        F: FnMut(Self::Inner) -> Result<(), E>,
        Self: Sized,
    {
        self.traverse_result_(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Traversable for Vec<T> {
    #[inline]
    fn traverse<C, B, F>(self, function: F) -> C::Wrapped<Vec<B>>
    where
        C: Applicative,
        F: FnMut(T) -> C::Wrapped<B>,
    {
        traverse_array::<C, Self, B, F>(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::typeclass::{Identity, IdentityContext};
    use rstest::rstest;
    use std::cell::RefCell;

    fn count_steps(trampoline: Trampoline<'_, i32>) -> usize {
        let mut steps = 0;
        let mut current = trampoline;
        loop {
            match current.resume() {
                Either::Right(_) => return steps,
                Either::Left(thunk) => {
                    steps += 1;
                    current = thunk();
                }
            }
        }
    }

    #[rstest]
    fn go_with_no_elements_is_done() {
        let step = go(7, std::iter::empty::<i32>(), |x, acc| x + acc);
        assert!(step.is_done());
        assert_eq!(step.run(), 7);
    }

    #[rstest]
    fn go_takes_one_step_per_element() {
        let step = go(0, [1, 2, 3, 4].into_iter(), |x, acc| x + acc);
        assert!(step.is_suspended());
        assert_eq!(count_steps(step), 4);
    }

    #[rstest]
    fn go_does_not_run_build_from_until_resumed() {
        let calls = RefCell::new(Vec::new());
        let step = go(0, [1, 2, 3].into_iter(), |x, acc| {
            calls.borrow_mut().push(x);
            x + acc
        });
        assert!(calls.borrow().is_empty());

        let Either::Left(thunk) = step.resume() else {
            panic!("expected a pending step");
        };
        let _ = thunk();
        assert_eq!(*calls.borrow(), vec![3]);
    }

    #[rstest]
    fn go_visits_elements_from_the_back() {
        let visited = go(Vec::new(), ['a', 'b', 'c'].into_iter(), |x, mut acc: Vec<char>| {
            acc.push(x);
            acc
        })
        .run();
        assert_eq!(visited, vec!['c', 'b', 'a']);
    }

    #[rstest]
    fn traverse_array_doubles_in_option() {
        let result = traverse_array::<OptionContext, _, _, _>(vec![1, 2, 3], |x| Some(x * 2));
        assert_eq!(result, Some(vec![2, 4, 6]));
    }

    #[rstest]
    fn traverse_array_fails_on_none() {
        let result = traverse_array::<OptionContext, _, _, _>(vec![1, 2, 3], |x| {
            if x == 2 { None } else { Some(x) }
        });
        assert_eq!(result, None);
    }

    #[rstest]
    fn traverse_array_of_empty_is_pure_empty() {
        let empty: Vec<i32> = Vec::new();
        let result = traverse_array::<OptionContext, _, i32, _>(empty, |_| None);
        assert_eq!(result, Some(Vec::new()));
    }

    #[rstest]
    fn traverse_array_invokes_function_from_first_to_last() {
        let invoked = RefCell::new(Vec::new());
        let result = traverse_array::<IdentityContext, _, _, _>(&[1, 2, 3], |x| {
            invoked.borrow_mut().push(*x);
            Identity(*x)
        });
        assert_eq!(result, Identity(vec![1, 2, 3]));
        assert_eq!(invoked.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn traverse_result_invokes_function_in_order_after_failure() {
        let invoked = RefCell::new(Vec::new());
        let result: Result<Vec<i32>, i32> = vec![1, 2, 3].traverse_result(|x| {
            invoked.borrow_mut().push(x);
            if x == 1 { Err(x) } else { Ok(x) }
        });
        assert_eq!(result, Err(1));
        assert_eq!(invoked.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn for_each_result_performs_effects_in_order() {
        let seen = RefCell::new(Vec::new());
        let result: Result<(), ()> = vec![1, 2, 3].for_each_result(|x| {
            seen.borrow_mut().push(x);
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn traverse_result_keeps_first_error_in_element_order() {
        let result: Result<Vec<i32>, String> =
            vec![1, -2, -3].traverse_result(|n| if n > 0 { Ok(n) } else { Err(format!("bad {n}")) });
        assert_eq!(result, Err("bad -2".to_string()));
    }

    #[rstest]
    fn traverse_writer_logs_in_element_order() {
        let (values, log) = vec!['x', 'y', 'z']
            .traverse_writer(|c| Writer::new(c.to_ascii_uppercase(), c.to_string()))
            .run();
        assert_eq!(values, vec!['X', 'Y', 'Z']);
        assert_eq!(log, "xyz");
    }

    #[rstest]
    fn sequence_result_propagates_error() {
        let values: Vec<Result<i32, &str>> = vec![Ok(1), Err("e1"), Err("e2")];
        let sequenced: Result<Vec<i32>, &str> = values.sequence_result();
        assert_eq!(sequenced, Err("e1"));
    }

    #[rstest]
    fn sequence_array_in_validation_collects_all_errors() {
        let values: Vec<Result<i32, Vec<&str>>> = vec![Err(vec!["e1"]), Ok(2), Err(vec!["e3"])];
        assert_eq!(
            sequence_array::<ValidationContext<Vec<&str>>, _, _>(values),
            Err(vec!["e1", "e3"])
        );
    }

    #[rstest]
    fn traverse_array_discarding_keeps_effect() {
        assert_eq!(
            traverse_array_::<OptionContext, _, _, _>([1, 2], Some),
            Some(())
        );
        assert_eq!(
            traverse_array_::<OptionContext, _, i32, _>([1, 2], |_| None),
            None
        );
    }

    #[rstest]
    fn for_each_variants_report_success() {
        assert_eq!(vec![1, 2].for_each_option(|_| Some(())), Some(()));
        assert_eq!(vec![1, 2].for_each_result(|_| Ok::<(), ()>(())), Ok(()));
    }

    #[rstest]
    fn traverse_option_discarding_fails_on_none() {
        assert_eq!(
            vec![1, 2, 3].traverse_option_(|x| if x == 3 { None } else { Some(()) }),
            None
        );
    }
}
