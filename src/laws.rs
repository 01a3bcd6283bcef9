//! Algebraic laws of the two value families.
//!
//! This module is the formal **law sheet** for the crate's combinator
//! algebra, documenting every law the [`Maybe`](crate::maybe::Maybe) and
//! [`Outcome`](crate::outcome::Outcome) combinators commit to preserving.
//! API changes must not violate these laws; the property suite in
//! `tests/property_laws.rs` exercises each row over generated data.
//!
//! # Law Classification
//!
//! Each law is classified as:
//!
//! - **Unconditional**: holds for all values of the types involved.
//! - **For pure functions**: quantified over caller-supplied functions and
//!   holds whenever those functions are pure (no panics, no observable
//!   side effects). The library cannot constrain what a closure does; the
//!   law describes the algebra under the intended usage.
//!
//! # Law Sheet
//!
//! ## Functor (both families, both channels)
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | FUNCTOR-ID | `x.map(id) = x` | Unconditional |
//! | FUNCTOR-COMP | `x.map(f).map(g) = x.map(g ∘ f)` | For pure functions |
//! | ERR-FUNCTOR-ID | `x.map_err(id) = x` | Unconditional |
//! | ERR-FUNCTOR-COMP | `x.map_err(f).map_err(g) = x.map_err(g ∘ f)` | For pure functions |
//!
//! ## Monad (both families)
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | MONAD-LEFT-ID | `unit(v).and_then(f) = f(v)` | For pure functions |
//! | MONAD-RIGHT-ID | `x.and_then(unit) = x` | Unconditional |
//! | MONAD-ASSOC | `x.and_then(f).and_then(g) = x.and_then(v -> f(v).and_then(g))` | For pure functions |
//!
//! ## Choice and short-circuit
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | OR-ELSE-LAZY | `Some(v).or_else(f)` never evaluates `f` | Unconditional |
//! | OR-NONE-UNIT | `none.or(x) = x` and `x.or(none) = x` | Unconditional |
//! | AND-NONE-ABSORB | `none.and(x) = none` | Unconditional |
//! | XOR-EXCLUSIVE | `xor` is `Some` iff exactly one operand is | Unconditional |
//! | MAP-DEFAULT-TOTAL | `x.map_default(f, d)` is always populated | For pure functions |
//! | BIND-ERR-PASS | `Err(e).and_then(f) = Err(e)` without evaluating `f` | Unconditional |
//! | RECOVER-OK-PASS | `Ok(v).or_else(f) = Ok(v)` without evaluating `f` | Unconditional |
//!
//! ## Structure
//!
//! | Law | Statement | Classification |
//! |-----|-----------|----------------|
//! | SWAP-INVOLUTION | `o.swap().swap() = o` | Unconditional |
//! | PROJECT-LIFT | `o.ok().ok_or(e) = o` for `Ok`, `Err(e)` for `Err` | Unconditional |
//! | STD-ROUND-TRIP | `from_std(into_std(x)) = x`, both families | Unconditional |
//! | CARRIED-LOSSLESS | `Carried(e).into_carried() = Some(e)` | Unconditional |
//! | BINDING-EQUIV | `binding(\|\| Ok(o.bind()?)) = o` | Unconditional |

use std::fmt;

/// Every committed algebraic law, identified by name.
///
/// This enum is a machine-readable catalog of the law sheet; each variant
/// maps to one row of the tables above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    // --- Functor ---
    /// `x.map(id) = x`.
    FunctorIdentity,
    /// `x.map(f).map(g) = x.map(g ∘ f)`.
    FunctorComposition,
    /// `x.map_err(id) = x`.
    ErrorFunctorIdentity,
    /// `x.map_err(f).map_err(g) = x.map_err(g ∘ f)`.
    ErrorFunctorComposition,

    // --- Monad ---
    /// `unit(v).and_then(f) = f(v)`.
    MonadLeftIdentity,
    /// `x.and_then(unit) = x`.
    MonadRightIdentity,
    /// `x.and_then(f).and_then(g) = x.and_then(v -> f(v).and_then(g))`.
    MonadAssociativity,

    // --- Choice and short-circuit ---
    /// A populated receiver never evaluates an `or_else` supplier.
    OrElseShortCircuit,
    /// The empty variant is the identity element of `or`.
    OrNoneUnit,
    /// The empty variant absorbs through `and`.
    AndNoneAbsorb,
    /// `xor` is populated iff exactly one operand is.
    XorExclusivity,
    /// `map_default` always produces a populated value.
    MapDefaultTotal,
    /// A failed receiver passes through `and_then` without evaluating `f`.
    BindErrPassthrough,
    /// A successful receiver passes through `or_else` without evaluating `f`.
    RecoverOkPassthrough,

    // --- Structure ---
    /// `o.swap().swap() = o`.
    SwapInvolution,
    /// `o.ok().ok_or(e)` reconstructs `Ok` and replaces the payload of `Err`.
    ProjectionLiftRoundTrip,
    /// `from_std(into_std(x)) = x` for both families.
    StdRoundTrip,
    /// `Caught::Carried(e).into_carried() = Some(e)`.
    CarriedLossless,
    /// `binding(|| Ok(o.bind()?)) = o`.
    BindingEquivalence,
}

impl Law {
    /// Every law in the sheet, in catalog order.
    pub const ALL: [Law; 19] = [
        Law::FunctorIdentity,
        Law::FunctorComposition,
        Law::ErrorFunctorIdentity,
        Law::ErrorFunctorComposition,
        Law::MonadLeftIdentity,
        Law::MonadRightIdentity,
        Law::MonadAssociativity,
        Law::OrElseShortCircuit,
        Law::OrNoneUnit,
        Law::AndNoneAbsorb,
        Law::XorExclusivity,
        Law::MapDefaultTotal,
        Law::BindErrPassthrough,
        Law::RecoverOkPassthrough,
        Law::SwapInvolution,
        Law::ProjectionLiftRoundTrip,
        Law::StdRoundTrip,
        Law::CarriedLossless,
        Law::BindingEquivalence,
    ];

    /// The law's identifier as it appears in the law sheet tables.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FunctorIdentity => "FUNCTOR-ID",
            Self::FunctorComposition => "FUNCTOR-COMP",
            Self::ErrorFunctorIdentity => "ERR-FUNCTOR-ID",
            Self::ErrorFunctorComposition => "ERR-FUNCTOR-COMP",
            Self::MonadLeftIdentity => "MONAD-LEFT-ID",
            Self::MonadRightIdentity => "MONAD-RIGHT-ID",
            Self::MonadAssociativity => "MONAD-ASSOC",
            Self::OrElseShortCircuit => "OR-ELSE-LAZY",
            Self::OrNoneUnit => "OR-NONE-UNIT",
            Self::AndNoneAbsorb => "AND-NONE-ABSORB",
            Self::XorExclusivity => "XOR-EXCLUSIVE",
            Self::MapDefaultTotal => "MAP-DEFAULT-TOTAL",
            Self::BindErrPassthrough => "BIND-ERR-PASS",
            Self::RecoverOkPassthrough => "RECOVER-OK-PASS",
            Self::SwapInvolution => "SWAP-INVOLUTION",
            Self::ProjectionLiftRoundTrip => "PROJECT-LIFT",
            Self::StdRoundTrip => "STD-ROUND-TRIP",
            Self::CarriedLossless => "CARRIED-LOSSLESS",
            Self::BindingEquivalence => "BINDING-EQUIV",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classification of how broadly a law applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawClassification {
    /// Holds for all values of the types involved.
    Unconditional,
    /// Quantified over caller-supplied functions; holds whenever those
    /// functions are pure.
    ForPureFunctions,
}

/// A single entry in the law sheet: identifier, classification, statement.
#[derive(Debug, Clone)]
pub struct LawEntry {
    /// The law identifier.
    pub law: Law,
    /// How broadly the law applies.
    pub classification: LawClassification,
    /// Human-readable statement of the law.
    pub statement: &'static str,
}

/// The complete law sheet.
#[must_use]
pub fn law_sheet() -> Vec<LawEntry> {
    use LawClassification::{ForPureFunctions, Unconditional};

    vec![
        LawEntry {
            law: Law::FunctorIdentity,
            classification: Unconditional,
            statement: "x.map(id) = x",
        },
        LawEntry {
            law: Law::FunctorComposition,
            classification: ForPureFunctions,
            statement: "x.map(f).map(g) = x.map(g after f)",
        },
        LawEntry {
            law: Law::ErrorFunctorIdentity,
            classification: Unconditional,
            statement: "x.map_err(id) = x",
        },
        LawEntry {
            law: Law::ErrorFunctorComposition,
            classification: ForPureFunctions,
            statement: "x.map_err(f).map_err(g) = x.map_err(g after f)",
        },
        LawEntry {
            law: Law::MonadLeftIdentity,
            classification: ForPureFunctions,
            statement: "unit(v).and_then(f) = f(v)",
        },
        LawEntry {
            law: Law::MonadRightIdentity,
            classification: Unconditional,
            statement: "x.and_then(unit) = x",
        },
        LawEntry {
            law: Law::MonadAssociativity,
            classification: ForPureFunctions,
            statement: "x.and_then(f).and_then(g) = x.and_then(v -> f(v).and_then(g))",
        },
        LawEntry {
            law: Law::OrElseShortCircuit,
            classification: Unconditional,
            statement: "a populated receiver never evaluates an or_else supplier",
        },
        LawEntry {
            law: Law::OrNoneUnit,
            classification: Unconditional,
            statement: "none.or(x) = x and x.or(none) = x",
        },
        LawEntry {
            law: Law::AndNoneAbsorb,
            classification: Unconditional,
            statement: "none.and(x) = none",
        },
        LawEntry {
            law: Law::XorExclusivity,
            classification: Unconditional,
            statement: "xor is populated iff exactly one operand is",
        },
        LawEntry {
            law: Law::MapDefaultTotal,
            classification: ForPureFunctions,
            statement: "x.map_default(f, d) is always populated",
        },
        LawEntry {
            law: Law::BindErrPassthrough,
            classification: Unconditional,
            statement: "Err(e).and_then(f) = Err(e) without evaluating f",
        },
        LawEntry {
            law: Law::RecoverOkPassthrough,
            classification: Unconditional,
            statement: "Ok(v).or_else(f) = Ok(v) without evaluating f",
        },
        LawEntry {
            law: Law::SwapInvolution,
            classification: Unconditional,
            statement: "o.swap().swap() = o",
        },
        LawEntry {
            law: Law::ProjectionLiftRoundTrip,
            classification: Unconditional,
            statement: "o.ok().ok_or(e) = o for Ok, Err(e) for Err",
        },
        LawEntry {
            law: Law::StdRoundTrip,
            classification: Unconditional,
            statement: "from_std(into_std(x)) = x for both families",
        },
        LawEntry {
            law: Law::CarriedLossless,
            classification: Unconditional,
            statement: "Caught::Carried(e).into_carried() = Some(e)",
        },
        LawEntry {
            law: Law::BindingEquivalence,
            classification: Unconditional,
            statement: "binding(|| Ok(o.bind()?)) = o",
        },
    ]
}
