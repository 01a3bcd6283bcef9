//! Panic-boundary adapters: the designed seam between the unwind channel
//! and the [`Outcome`] model.
//!
//! Three adapter families live here:
//!
//! - [`run_catching`]: evaluate a fresh computation, capturing any panic
//!   into `Err(CaughtPanic)`.
//! - [`Outcome::and_then_catching`] /
//!   [`Outcome::and_then_catching_with`]: chain a panic-prone step onto an
//!   existing outcome without losing an already-present error payload.
//! - [`Outcome::or_else_catching`] / [`Outcome::or_else_catching_as`]:
//!   recover from a failure with a panic-prone step.
//!
//! # The uniform failure channel
//!
//! A chain of catching steps needs one error type that can hold both "the
//! step panicked" and "an earlier step already failed with a typed error".
//! [`Caught<E>`] is that channel: `Panicked(CaughtPanic)` or `Carried(E)`.
//! Because the carrier is generic, the original payload stays fully typed
//! and [`Caught::into_carried`] recovers it losslessly, with no downcasting.
//!
//! [`Outcome::into_caught`] lifts an arbitrary error channel into the
//! uniform one; after that single entry point, every
//! [`and_then_catching`](Outcome::and_then_catching) step preserves the
//! channel, so a failed step passes through later steps unchanged.

use super::Outcome;
use crate::maybe::Maybe;
use std::any::{type_name, Any};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A captured unwind payload.
///
/// Preserves the raw panic payload for later [`downcast`](CaughtPanic::downcast)
/// alongside a rendered message (extracted when the payload is a `&str` or
/// `String`, as produced by the `panic!` macro family).
#[derive(thiserror::Error)]
#[error("panicked: {message}")]
pub struct CaughtPanic {
    message: String,
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    /// Constructs a payload from a message, for tests and for synthesizing
    /// panic-shaped failures.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            payload: Box::new(message.clone()),
            message,
        }
    }

    /// Wraps the payload carried out of [`catch_unwind`].
    pub(crate) fn from_unwind(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_owned()
        };
        Self { message, payload }
    }

    /// The rendered panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Borrows the raw payload.
    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Consumes the capture, returning the raw payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Attempts to take the payload as a concrete type, handing the capture
    /// back intact when the payload is something else.
    pub fn downcast<F: Any>(self) -> Result<F, CaughtPanic> {
        match self.payload.downcast::<F>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self {
                message: self.message,
                payload,
            }),
        }
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtPanic")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// The uniform failure channel produced by the catching adapters.
///
/// Exactly one of:
///
/// - `Panicked`: the wrapped computation panicked;
/// - `Carried`: the receiver was already failed, and the original error
///   payload rides through untouched and fully typed.
///
/// Equality compares carried payloads only; a `Panicked` value never
/// compares equal to anything (panic payloads are opaque), so `Caught`
/// offers `PartialEq` but not `Eq`.
#[derive(Debug)]
pub enum Caught<E> {
    /// The wrapped computation panicked.
    Panicked(CaughtPanic),
    /// An error payload from before the catch boundary, carried through.
    Carried(E),
}

impl<E> Caught<E> {
    /// Returns true when this failure is a captured panic.
    #[must_use]
    pub const fn is_panicked(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Returns true when this failure carries a pre-existing error payload.
    #[must_use]
    pub const fn is_carried(&self) -> bool {
        matches!(self, Self::Carried(_))
    }

    /// Borrows the carried payload, if any.
    pub const fn carried(&self) -> Maybe<&E> {
        match self {
            Self::Carried(e) => Maybe::Some(e),
            Self::Panicked(_) => Maybe::None,
        }
    }

    /// Recovers the carried payload. Total and lossless for `Carried`
    /// values; this is what makes round-tripping a typed error through
    /// the catching channel free.
    pub fn into_carried(self) -> Maybe<E> {
        match self {
            Self::Carried(e) => Maybe::Some(e),
            Self::Panicked(_) => Maybe::None,
        }
    }

    /// Borrows the captured panic, if any.
    pub const fn panicked(&self) -> Maybe<&CaughtPanic> {
        match self {
            Self::Panicked(p) => Maybe::Some(p),
            Self::Carried(_) => Maybe::None,
        }
    }

    /// Consumes the failure, returning the captured panic, if any.
    pub fn into_panicked(self) -> Maybe<CaughtPanic> {
        match self {
            Self::Panicked(p) => Maybe::Some(p),
            Self::Carried(_) => Maybe::None,
        }
    }
}

impl<E> From<CaughtPanic> for Caught<E> {
    fn from(panic: CaughtPanic) -> Self {
        Self::Panicked(panic)
    }
}

impl<E: PartialEq> PartialEq for Caught<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Carried(a), Self::Carried(b)) => a == b,
            _ => false,
        }
    }
}

impl<E: fmt::Display> fmt::Display for Caught<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked(p) => write!(f, "step panicked: {}", p.message()),
            Self::Carried(e) => write!(f, "carried error: {e}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for Caught<E> {}

/// Evaluates a zero-argument computation, capturing any panic.
///
/// Returns `Ok` with the computation's value on normal return, and
/// `Err(CaughtPanic)` if the computation panics (any panic, not a
/// narrower subset). This is the sole bridge from the unwind channel into
/// the `Outcome` model for fresh computations; for chaining onto an
/// existing outcome see [`Outcome::and_then_catching`].
///
/// # Example
///
/// ```
/// use bivalent::run_catching;
///
/// fn div(a: i32, b: i32) -> i32 {
///     a / b
/// }
///
/// assert_eq!(run_catching(|| "ok").unwrap(), "ok");
///
/// let failed = run_catching(|| div(10, 0));
/// assert!(failed.is_err());
/// ```
pub fn run_catching<T>(f: impl FnOnce() -> T) -> Outcome<T, CaughtPanic> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(v) => Outcome::Ok(v),
        Err(payload) => Outcome::Err(CaughtPanic::from_unwind(payload)),
    }
}

impl<T, E> Outcome<T, E> {
    /// Lifts the error channel into the uniform caught channel.
    ///
    /// The single entry point into a catching chain: after this, every
    /// [`and_then_catching`](Outcome::and_then_catching) step keeps the
    /// channel type stable, so an earlier failure passes through later
    /// steps unchanged.
    pub fn into_caught(self) -> Outcome<T, Caught<E>> {
        self.map_err(Caught::Carried)
    }

    /// Chains a panic-prone step, capturing its panic into the error
    /// channel.
    ///
    /// `Ok(v)` evaluates `f(v)` under a catch boundary: a normal return
    /// yields `Ok`, a panic yields `Err(E::from(panic))`. `Err` passes
    /// through **unchanged** without evaluating `f`.
    ///
    /// The `E: From<CaughtPanic>` bound is what keeps the channel uniform:
    /// it holds for [`CaughtPanic`] itself (so [`run_catching`] chains
    /// directly) and for [`Caught<E>`] (enter with
    /// [`into_caught`](Outcome::into_caught) or
    /// [`and_then_catching_with`](Outcome::and_then_catching_with)).
    ///
    /// # Example
    ///
    /// ```
    /// use bivalent::{Caught, Outcome};
    ///
    /// fn div(a: i32, b: i32) -> i32 {
    ///     a / b
    /// }
    ///
    /// let chained: Outcome<String, Caught<i32>> = Outcome::ok_of(3)
    ///     .into_caught()
    ///     .and_then_catching(|_| 34)
    ///     .and_then_catching(|x| div(x, x - x))
    ///     .and_then_catching(|x| x.to_string());
    ///
    /// // The divide-by-zero panic is captured once, then carried through
    /// // the final step unchanged.
    /// assert!(chained.unwrap_err().is_panicked());
    /// ```
    pub fn and_then_catching<V>(self, f: impl FnOnce(T) -> V) -> Outcome<V, E>
    where
        E: From<CaughtPanic>,
    {
        match self {
            Self::Ok(v) => match catch_unwind(AssertUnwindSafe(move || f(v))) {
                Ok(out) => Outcome::Ok(out),
                Err(payload) => Outcome::Err(E::from(CaughtPanic::from_unwind(payload))),
            },
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// As [`and_then_catching`](Outcome::and_then_catching), with a caller
    /// supplied conversion for a pre-existing error payload.
    ///
    /// `Err(e)` becomes `Err(handler(e))` without evaluating `f`; this is
    /// the one-step entry from a heterogeneous error channel into a
    /// catching chain (`handler = Caught::Carried` reproduces the default
    /// lift).
    pub fn and_then_catching_with<V, F>(
        self,
        f: impl FnOnce(T) -> V,
        handler: impl FnOnce(E) -> F,
    ) -> Outcome<V, F>
    where
        F: From<CaughtPanic>,
    {
        match self {
            Self::Ok(v) => match catch_unwind(AssertUnwindSafe(move || f(v))) {
                Ok(out) => Outcome::Ok(out),
                Err(payload) => Outcome::Err(F::from(CaughtPanic::from_unwind(payload))),
            },
            Self::Err(e) => Outcome::Err(handler(e)),
        }
    }

    /// Recovers from a failure with a panic-prone step.
    ///
    /// `Err(e)` evaluates `f(e)` under a catch boundary: a normal return
    /// yields `Ok`, a panic yields `Err(CaughtPanic)`. `Ok` passes through
    /// without evaluating `f`.
    pub fn or_else_catching(self, f: impl FnOnce(E) -> T) -> Outcome<T, CaughtPanic> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => match catch_unwind(AssertUnwindSafe(move || f(e))) {
                Ok(v) => Outcome::Ok(v),
                Err(payload) => Outcome::Err(CaughtPanic::from_unwind(payload)),
            },
        }
    }

    /// As [`or_else_catching`](Outcome::or_else_catching), declaring the
    /// concrete error type the recovery step fails with.
    ///
    /// A panic from `f` must carry a payload downcastable to `F` (as
    /// produced by [`std::panic::panic_any`]).
    ///
    /// # Panics
    ///
    /// A payload that does not downcast to `F` means the declared recovery
    /// error type was wrong: a contract violation, which panics rather than
    /// being folded into the `Outcome`.
    #[track_caller]
    pub fn or_else_catching_as<F: Any>(self, f: impl FnOnce(E) -> T) -> Outcome<T, F> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => match catch_unwind(AssertUnwindSafe(move || f(e))) {
                Ok(v) => Outcome::Ok(v),
                Err(payload) => match CaughtPanic::from_unwind(payload).downcast::<F>() {
                    Ok(error) => Outcome::Err(error),
                    Err(caught) => panic!(
                        "recovery panic payload is not a {}: {}",
                        type_name::<F>(),
                        caught.message()
                    ),
                },
            },
        }
    }
}
