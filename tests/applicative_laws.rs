//! Property-based tests for Functor and Applicative laws of each context.
//!
//! - **Functor Identity**: `C::fmap(|x| x, fa) == fa`
//! - **Applicative Identity**: `C::apply(C::pure(|x| x), v) == v`
//! - **Homomorphism**: `C::apply(C::pure(f), C::pure(x)) == C::pure(f(x))`
//! - **Interchange**: `C::apply(u, C::pure(y)) == C::apply(C::pure(|f| f(y)), u)`
//! - **Left-to-right effects**: `map2` combines the left effect first

#![cfg(feature = "typeclass")]

use proptest::prelude::*;
use seqtraverse::typeclass::{
    Applicative, Functor, Identity, IdentityContext, OptionContext, ResultContext,
    ValidationContext, Writer, WriterContext,
};

fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn id(value: i32) -> i32 {
    value
}

// =============================================================================
// Functor Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_option_functor_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionContext::fmap(|x: i32| x, value), value);
    }

    #[test]
    fn prop_result_functor_identity(value in prop::result::maybe_ok(any::<i32>(), any::<u8>())) {
        prop_assert_eq!(ResultContext::<u8>::fmap(|x: i32| x, value), value);
    }

    #[test]
    fn prop_writer_functor_composition(value in any::<i32>(), log in ".{0,8}") {
        let writer = Writer::new(value, log);
        let left = WriterContext::<String>::fmap(double, WriterContext::<String>::fmap(double, writer.clone()));
        let right = WriterContext::<String>::fmap(|x| double(double(x)), writer);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Applicative Identity and Homomorphism
// =============================================================================

proptest! {
    #[test]
    fn prop_option_applicative_identity(value in any::<Option<i32>>()) {
        let identity = OptionContext::pure(id as fn(i32) -> i32);
        prop_assert_eq!(OptionContext::apply(identity, value), value);
    }

    #[test]
    fn prop_validation_applicative_identity(value in prop::result::maybe_ok(any::<i32>(), prop::collection::vec(any::<u8>(), 1..4))) {
        let identity = ValidationContext::<Vec<u8>>::pure(id as fn(i32) -> i32);
        prop_assert_eq!(ValidationContext::<Vec<u8>>::apply(identity, value.clone()), value);
    }

    #[test]
    fn prop_identity_homomorphism(value in any::<i32>()) {
        let left = IdentityContext::apply(IdentityContext::pure(double as fn(i32) -> i32), IdentityContext::pure(value));
        prop_assert_eq!(left, Identity(double(value)));
    }

    #[test]
    fn prop_writer_homomorphism(value in any::<i32>()) {
        let left = WriterContext::<Vec<u8>>::apply(
            WriterContext::<Vec<u8>>::pure(double as fn(i32) -> i32),
            WriterContext::<Vec<u8>>::pure(value),
        );
        prop_assert_eq!(left, Writer::pure(double(value)));
    }
}

// =============================================================================
// Interchange
// =============================================================================

proptest! {
    /// C::apply(u, C::pure(y)) == C::apply(C::pure(|f| f(y)), u)
    #[test]
    fn prop_option_interchange(present in any::<bool>(), value in any::<i32>()) {
        let function = present.then_some(double as fn(i32) -> i32);
        let left = OptionContext::apply(function, OptionContext::pure(value));
        let right = OptionContext::apply(
            OptionContext::pure(move |f: fn(i32) -> i32| f(value)),
            function,
        );
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_writer_interchange(value in any::<i32>(), log in ".{0,8}") {
        let function = Writer::new(double as fn(i32) -> i32, log);
        let left = WriterContext::<String>::apply(function.clone(), WriterContext::<String>::pure(value));
        let right = WriterContext::<String>::apply(
            WriterContext::<String>::pure(move |f: fn(i32) -> i32| f(value)),
            function,
        );
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Effect Order
// =============================================================================

proptest! {
    #[test]
    fn prop_writer_map2_output_is_left_then_right(left in ".{0,8}", right in ".{0,8}") {
        let combined = WriterContext::<String>::map2(
            Writer::new(1, left.clone()),
            Writer::new(2, right.clone()),
            |a, b| a + b,
        );
        prop_assert_eq!(combined.run(), (3, format!("{left}{right}")));
    }

    #[test]
    fn prop_validation_map2_errors_are_left_then_right(left in any::<u8>(), right in any::<u8>()) {
        let combined = ValidationContext::<Vec<u8>>::map2(
            Err::<i32, _>(vec![left]),
            Err::<i32, _>(vec![right]),
            |a, b| a + b,
        );
        prop_assert_eq!(combined, Err(vec![left, right]));
    }

    #[test]
    fn prop_result_map2_keeps_left_error(left in any::<u8>(), right in any::<u8>()) {
        let combined = ResultContext::<u8>::map2(Err::<i32, _>(left), Err::<i32, _>(right), |a, b| a + b);
        prop_assert_eq!(combined, Err(left));
    }
}
