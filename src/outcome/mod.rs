//! Success-or-failure values with a typed error channel.
//!
//! [`Outcome<T, E>`] is a closed two-variant sum type: `Ok(value)` or
//! `Err(error)`, fixed at construction. The error type is unconstrained:
//! an `Err` payload can be a string, an enum, a number, anything; it does
//! not have to implement [`std::error::Error`].
//!
//! The module splits into three layers:
//!
//! - this file: the type, its factories, and the pure combinators;
//! - [`catching`]: the panic-boundary adapters that bridge Rust's unwind
//!   channel into the `Outcome` model ([`run_catching`],
//!   [`Outcome::and_then_catching`], [`Outcome::or_else_catching`]);
//! - [`binding`]: the short-circuit protocol that lets a sequence of
//!   fallible steps read as straight-line code.
//!
//! # Error channel discipline
//!
//! [`and_then`](Outcome::and_then) preserves the error type: a failed
//! receiver passes through unexamined. Changing the error type is the job
//! of [`map_err`](Outcome::map_err) and the recovery combinator
//! [`or_else`](Outcome::or_else).

pub mod binding;
pub mod catching;

pub use binding::binding;
pub use catching::{run_catching, Caught, CaughtPanic};

use crate::maybe::Maybe;
use std::fmt;

/// A success-or-failure value with a typed error payload.
///
/// Interconverts losslessly with [`std::result::Result`] via
/// [`from_std`](Outcome::from_std) / [`into_std`](Outcome::into_std); on
/// top of the std surface it adds the nullable/non-null factory pairs, the
/// panic-catching adapters, and the binding protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an Outcome may be an Err that should be handled"]
pub enum Outcome<T, E> {
    /// A successful outcome.
    Ok(T),
    /// A failed outcome holding an error payload.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // ========================================================================
    // Factories
    // ========================================================================

    /// Constructs a successful outcome.
    pub const fn ok_of(value: T) -> Self {
        Self::Ok(value)
    }

    /// Constructs a failed outcome.
    pub const fn err_of(error: E) -> Self {
        Self::Err(error)
    }

    /// Constructs a successful outcome from a payload that must not be
    /// absent.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `None` (a precondition violation). Use
    /// [`ok_of_nullable`](Outcome::ok_of_nullable) when absence is valid
    /// payload.
    #[track_caller]
    pub fn ok_of_non_null(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Ok(v),
            None => panic!("Outcome::ok_of_non_null called with an absent payload"),
        }
    }

    /// Constructs a failed outcome from an error payload that must not be
    /// absent.
    ///
    /// # Panics
    ///
    /// Panics if `error` is `None` (a precondition violation). Use
    /// [`err_of_nullable`](Outcome::err_of_nullable) when absence is valid
    /// payload.
    #[track_caller]
    pub fn err_of_non_null(error: Option<E>) -> Self {
        match error {
            Some(e) => Self::Err(e),
            None => panic!("Outcome::err_of_non_null called with an absent payload"),
        }
    }

    /// Constructs a successful outcome whose payload is allowed to be
    /// absent: the absence stays in the payload type instead of being
    /// rejected.
    ///
    /// The counterpart of [`ok_of_non_null`](Outcome::ok_of_non_null) for
    /// boundaries where a missing value is valid data.
    pub const fn ok_of_nullable(value: Option<T>) -> Outcome<Option<T>, E> {
        Outcome::Ok(value)
    }

    /// Constructs a failed outcome whose error payload is allowed to be
    /// absent, kept in the payload type.
    pub const fn err_of_nullable(error: Option<E>) -> Outcome<T, Option<E>> {
        Outcome::Err(error)
    }

    // ========================================================================
    // Predicates and borrows
    // ========================================================================

    /// Returns true for `Ok`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns true for `Err`.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on `Err`; the panic message includes the error
    /// payload's `Debug` rendering, so an error that is itself an
    /// [`std::error::Error`] surfaces its diagnostics.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => panic!("called `Outcome::unwrap()` on an `Err` value: {e:?}"),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` (and the error's `Debug` rendering) on `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => panic!("{msg}: {e:?}"),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics when called on `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(v) => panic!("called `Outcome::unwrap_err()` on an `Ok` value: {v:?}"),
            Self::Err(e) => e,
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` on `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(v) => panic!("{msg}: {v:?}"),
            Self::Err(e) => e,
        }
    }

    /// Returns the success value, or `default` on `Err`.
    #[must_use = "if the fallback is unused, consider `unwrap`"]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error payload.
    /// `f` is never evaluated for a successful receiver.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => f(e),
        }
    }

    /// Returns the error payload, or `default` on `Ok`.
    #[must_use = "if the fallback is unused, consider `unwrap_err`"]
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Self::Ok(_) => default,
            Self::Err(e) => e,
        }
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    /// Transforms the success value, passing `Err` through untouched.
    ///
    /// Panics from `f` propagate uncaught; `map` is not a failure
    /// boundary, see [`and_then_catching`](Outcome::and_then_catching) for
    /// one.
    pub fn map<V>(self, f: impl FnOnce(T) -> V) -> Outcome<V, E> {
        match self {
            Self::Ok(v) => Outcome::Ok(f(v)),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Transforms the error payload, passing `Ok` through untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(f(e)),
        }
    }

    /// Monadic bind: chains a computation that itself may fail with the
    /// same error type.
    ///
    /// `f` runs only under `Ok`; a failed receiver passes through
    /// unexamined, its error type preserved.
    pub fn and_then<V>(self, f: impl FnOnce(T) -> Outcome<V, E>) -> Outcome<V, E> {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Recovery: the dual of [`and_then`](Outcome::and_then).
    ///
    /// `f` runs only under `Err` and may change the error type; a
    /// successful receiver passes through unexamined.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => f(e),
        }
    }

    /// Reinterprets success as failure and vice versa, same payload.
    ///
    /// An involution: `o.swap().swap() == o`.
    pub fn swap(self) -> Outcome<E, T> {
        match self {
            Self::Ok(v) => Outcome::Err(v),
            Self::Err(e) => Outcome::Ok(e),
        }
    }

    // ========================================================================
    // Projections to Maybe
    // ========================================================================

    /// Projects `Ok` to a present value, discarding the error payload of an
    /// `Err`.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(v) => Maybe::Some(v),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Projects `Err` to a present error payload, discarding the success
    /// value of an `Ok`.
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(e) => Maybe::Some(e),
        }
    }

    // ========================================================================
    // Std conversions
    // ========================================================================

    /// Converts from the std result type. Total in both directions.
    pub fn from_std(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }

    /// Converts into the std result type, the host early-return carrier.
    /// [`bind`](Outcome::bind) is the binding-protocol alias of this
    /// operation.
    pub fn into_std(self) -> Result<T, E> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        Self::from_std(value)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_std()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn unwrap_returns_success_value() {
        init_test("unwrap_returns_success_value");
        let res: Outcome<&str, i32> = Outcome::ok_of("e");
        let v = res.unwrap();
        crate::assert_with_log!(v == "e", "unwrap", "e", v);
        crate::test_complete!("unwrap_returns_success_value");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value: 3")]
    fn unwrap_err_variant_panics() {
        let res: Outcome<&str, i32> = Outcome::err_of(3);
        let _ = res.unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_err()` on an `Ok` value")]
    fn unwrap_err_on_ok_panics() {
        let res: Outcome<&str, i32> = Outcome::ok_of("e");
        let _ = res.unwrap_err();
    }

    #[test]
    fn unwrap_err_returns_payload() {
        init_test("unwrap_err_returns_payload");
        let res: Outcome<&str, i32> = Outcome::err_of(3);
        let e = res.unwrap_err();
        crate::assert_with_log!(e == 3, "unwrap_err", 3, e);
        crate::test_complete!("unwrap_err_returns_payload");
    }

    #[test]
    #[should_panic(expected = "absent payload")]
    fn ok_of_non_null_rejects_absent() {
        let _ = Outcome::<i32, String>::ok_of_non_null(None);
    }

    #[test]
    #[should_panic(expected = "absent payload")]
    fn err_of_non_null_rejects_absent() {
        let _ = Outcome::<i32, String>::err_of_non_null(None);
    }

    #[test]
    fn non_null_factories_accept_present() {
        init_test("non_null_factories_accept_present");
        let ok = Outcome::<i32, String>::ok_of_non_null(Some(1));
        crate::assert_with_log!(ok.is_ok(), "ok", true, ok.is_ok());
        let err = Outcome::<i32, String>::err_of_non_null(Some("bad".into()));
        crate::assert_with_log!(err.is_err(), "err", true, err.is_err());
        crate::test_complete!("non_null_factories_accept_present");
    }

    #[test]
    fn nullable_factories_keep_absence_in_payload() {
        init_test("nullable_factories_keep_absence_in_payload");
        let ok = Outcome::<i32, String>::ok_of_nullable(None);
        let inner = ok.unwrap();
        crate::assert_with_log!(inner.is_none(), "ok payload absent", true, inner.is_none());
        let err = Outcome::<i32, String>::err_of_nullable(None);
        let inner = err.unwrap_err();
        crate::assert_with_log!(inner.is_none(), "err payload absent", true, inner.is_none());
        crate::test_complete!("nullable_factories_keep_absence_in_payload");
    }

    #[test]
    fn map_transforms_success_channel_only() {
        init_test("map_transforms_success_channel_only");
        let bytes = Outcome::<&str, i32>::ok_of("E").map(str::as_bytes);
        crate::assert_with_log!(bytes == Outcome::ok_of(b"E".as_slice()), "mapped", "Ok([69])", bytes);
        let err = Outcome::<i32, i32>::err_of(19).map(|_| 4);
        let payload = err.unwrap_err();
        crate::assert_with_log!(payload == 19, "err untouched", 19, payload);
        crate::test_complete!("map_transforms_success_channel_only");
    }

    #[test]
    fn map_err_transforms_error_channel_only() {
        init_test("map_err_transforms_error_channel_only");
        let res: Outcome<&str, i32> = Outcome::err_of(0xE);
        let mapped = res.map_err(|e| e.to_string());
        let payload = mapped.unwrap_err();
        crate::assert_with_log!(payload == "14", "mapped err", "14", payload);

        let ok: Outcome<i32, i32> = Outcome::<i32, i32>::ok_of(5).map_err(|e| e + 1);
        crate::assert_with_log!(ok == Outcome::ok_of(5), "ok untouched", Outcome::<i32, i32>::ok_of(5), ok);
        crate::test_complete!("map_err_transforms_error_channel_only");
    }

    #[test]
    fn and_then_chains_under_ok() {
        init_test("and_then_chains_under_ok");
        let res: Outcome<&str, i32> = Outcome::ok_of("e");
        let chained = res.and_then(|s| Outcome::ok_of(s.len()));
        crate::assert_with_log!(chained == Outcome::ok_of(1), "chained", Outcome::<usize, i32>::ok_of(1), chained);

        let failed: Outcome<usize, i32> = Outcome::err_of(9).and_then(|s: usize| Outcome::ok_of(s));
        let payload = failed.unwrap_err();
        crate::assert_with_log!(payload == 9, "err passes through", 9, payload);
        crate::test_complete!("and_then_chains_under_ok");
    }

    #[test]
    fn or_else_recovers_from_err() {
        init_test("or_else_recovers_from_err");
        let res: Outcome<String, i32> = Outcome::err_of(3);
        let recovered = res.or_else(|e: i32| Outcome::<String, i32>::ok_of((e + 2).to_string()));
        let v = recovered.clone().unwrap();
        crate::assert_with_log!(v == "5", "recovered", "5", v);

        // A successful receiver passes through a failing recovery unexamined.
        let kept = recovered.or_else(|_| Outcome::<String, i32>::err_of(4));
        let v = kept.unwrap();
        crate::assert_with_log!(v == "5", "ok passthrough", "5", v);
        crate::test_complete!("or_else_recovers_from_err");
    }

    #[test]
    fn unwrap_fallbacks() {
        init_test("unwrap_fallbacks");
        let ten: Outcome<i32, i32> = Outcome::ok_of(10);
        crate::assert_with_log!(ten.unwrap_or(3) == 10, "ok unwrap_or", 10, ten.unwrap_or(3));
        let err: Outcome<i32, i32> = Outcome::err_of(10);
        crate::assert_with_log!(err.unwrap_or(3) == 3, "err unwrap_or", 3, err.unwrap_or(3));

        let lazily = Outcome::<i32, i32>::err_of(4).unwrap_or_else(|e| e * 2);
        crate::assert_with_log!(lazily == 8, "unwrap_or_else", 8, lazily);

        let ok_err = Outcome::<i32, i32>::ok_of(10).unwrap_err_or(4);
        crate::assert_with_log!(ok_err == 4, "ok unwrap_err_or", 4, ok_err);
        let err_err = Outcome::<i32, i32>::err_of(10).unwrap_err_or(3);
        crate::assert_with_log!(err_err == 10, "err unwrap_err_or", 10, err_err);
        crate::test_complete!("unwrap_fallbacks");
    }

    #[test]
    fn expect_forms_carry_caller_messages() {
        init_test("expect_forms_carry_caller_messages");
        let v = Outcome::<i32, String>::ok_of(5).expect("lookup should succeed");
        crate::assert_with_log!(v == 5, "expect", 5, v);
        let e = Outcome::<i32, String>::err_of("late".into()).expect_err("lookup should fail");
        crate::assert_with_log!(e == "late", "expect_err", "late", e);
        crate::test_complete!("expect_forms_carry_caller_messages");
    }

    #[test]
    #[should_panic(expected = "lookup should succeed: \"late\"")]
    fn expect_on_err_panics_with_message_and_payload() {
        let res: Outcome<i32, String> = Outcome::err_of("late".into());
        let _ = res.expect("lookup should succeed");
    }

    #[test]
    fn swap_is_an_involution() {
        init_test("swap_is_an_involution");
        let res: Outcome<i32, String> = Outcome::ok_of(3);
        let swapped = res.clone().swap();
        let e = swapped.clone().unwrap_err();
        crate::assert_with_log!(e == 3, "ok becomes err", 3, e);
        let back = swapped.swap();
        crate::assert_with_log!(back == res, "involution", res, back);
        crate::test_complete!("swap_is_an_involution");
    }

    #[test]
    fn projections_discard_the_other_channel() {
        init_test("projections_discard_the_other_channel");
        let ok_proj = Outcome::<i32, &str>::ok_of(3).ok();
        crate::assert_with_log!(ok_proj.is_some(), "ok() of Ok", true, ok_proj.is_some());
        let none_proj = Outcome::<i32, &str>::err_of("x").ok();
        crate::assert_with_log!(none_proj.is_none(), "ok() of Err", true, none_proj.is_none());

        let err_proj = Outcome::<i32, &str>::err_of("x").err();
        crate::assert_with_log!(err_proj.is_some(), "err() of Err", true, err_proj.is_some());
        let none_err = Outcome::<i32, &str>::ok_of(3).err();
        crate::assert_with_log!(none_err.is_none(), "err() of Ok", true, none_err.is_none());
        crate::test_complete!("projections_discard_the_other_channel");
    }

    #[test]
    fn projection_lift_round_trip() {
        init_test("projection_lift_round_trip");
        let ok: Outcome<i32, &str> = Outcome::ok_of(3);
        let round = ok.ok().ok_or("replacement");
        crate::assert_with_log!(round == ok, "ok round trip", ok, round);

        let err: Outcome<i32, &str> = Outcome::err_of("original");
        let replaced = err.ok().ok_or("replacement");
        let payload = replaced.unwrap_err();
        crate::assert_with_log!(payload == "replacement", "err payload replaced", "replacement", payload);
        crate::test_complete!("projection_lift_round_trip");
    }

    #[test]
    fn std_round_trip() {
        init_test("std_round_trip");
        let ok: Outcome<i32, String> = Outcome::ok_of(1);
        let round = Outcome::from_std(ok.clone().into_std());
        crate::assert_with_log!(round == ok, "ok round trip", ok, round);

        let err: Outcome<i32, String> = Outcome::err_of("bad".into());
        let round = Outcome::from_std(err.clone().into_std());
        crate::assert_with_log!(round == err, "err round trip", err, round);
        crate::test_complete!("std_round_trip");
    }

    #[test]
    fn from_impls_match_from_std() {
        init_test("from_impls_match_from_std");
        let o: Outcome<i32, String> = Ok(3).into();
        crate::assert_with_log!(o == Outcome::ok_of(3), "from result", Outcome::<i32, String>::ok_of(3), o);
        let r: Result<i32, String> = Outcome::ok_of(3).into();
        crate::assert_with_log!(r == Ok(3), "into result", Ok::<i32, String>(3), r);
        crate::test_complete!("from_impls_match_from_std");
    }
}
