//! The short-circuit binding protocol: railway-oriented composition.
//!
//! A binding body composes N fallible steps so that the first failure
//! aborts the remainder, while the code reads as if no failure were
//! possible:
//!
//! ```
//! use bivalent::{binding, Outcome};
//!
//! fn parse(s: &str) -> Outcome<i32, String> {
//!     Outcome::from_std(s.parse::<i32>().map_err(|e| e.to_string()))
//! }
//!
//! let sum: Outcome<i32, String> = binding(|| {
//!     let a = parse("2").bind()?;
//!     let b = parse("40").bind()?;
//!     Ok(a + b)
//! });
//! assert_eq!(sum, Outcome::ok_of(42));
//!
//! let aborted: Outcome<i32, String> = binding(|| {
//!     let a = parse("2").bind()?;
//!     let b = parse("forty").bind()?; // aborts here
//!     Ok(a + b)
//! });
//! assert!(aborted.is_err());
//! ```
//!
//! # Mechanics
//!
//! Rust has first-class early return, so the protocol is plain data flow:
//! [`Outcome::bind`] hands the value to the `?` operator as a
//! [`std::result::Result`], and `?` performs the short-circuit. There is no
//! unwinding and no control signal value that could leak out of its scope:
//! the body's declared error type binds every `bind()?` inside it, and the
//! compiler rejects a mismatched one (modulo the `From` conversions `?`
//! always applies).
//!
//! [`binding`] itself is **not** a failure boundary: panics from the body
//! propagate. Pair it with the [`catching`](super::catching) adapters when
//! a step can panic.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// The designated extraction operation of a binding body.
    ///
    /// `Ok(v)` yields `v` through the `?` operator; `Err(e)` short-circuits
    /// the enclosing [`binding`] body, preserving the error's static type.
    ///
    /// Outside a binding body this is simply
    /// [`into_std`](Outcome::into_std).
    pub fn bind(self) -> Result<T, E> {
        self.into_std()
    }
}

/// Runs a composed fallible computation, rebuilding an [`Outcome`] from its
/// early return.
///
/// The body may call [`bind()?`](Outcome::bind) zero or more times on
/// intermediate outcomes. A normal return wraps `Ok`; the first failed
/// `bind()?` aborts the body and reconstructs `Err` with the original
/// payload.
///
/// # Example
///
/// ```
/// use bivalent::{binding, Outcome};
///
/// let failed: Outcome<String, i32> = Outcome::err_of(3);
/// assert_eq!(binding(|| Ok(failed.bind()?)), Outcome::err_of(3));
///
/// let recovered: Outcome<String, i32> = Outcome::err_of(3);
/// let out: Outcome<String, i32> = binding(|| {
///     let v = recovered.or_else(|_| Outcome::<String, i32>::ok_of("4".to_string())).bind()?;
///     Ok(v)
/// });
/// assert_eq!(out, Outcome::ok_of("4".to_string()));
/// ```
pub fn binding<T, E>(body: impl FnOnce() -> Result<T, E>) -> Outcome<T, E> {
    Outcome::from_std(body())
}
