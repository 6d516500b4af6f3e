//! # mathparse
//!
//! mathparse evaluates arithmetic expressions in which variables are bound to
//! equal-length numeric vectors. Operators (`^`, `*`, `/`, `+`, `-`) follow
//! ordinary precedence, `(` `)` and `[` `]` group, and every operator
//! broadcasts elementwise between scalars and vectors.
//!
//! ```
//! use mathparse::{Bindings, evaluate};
//!
//! let bindings = Bindings::new(5).with("a", [0.0, 1.0, 2.0, 3.0, 4.0])
//!                                .with("b", [0.0, 1.0, 2.0, 3.0, 4.0]);
//!
//! let output = evaluate("a * b", &bindings);
//! assert_eq!(output.vector, Some(vec![0.0, 1.0, 4.0, 9.0, 16.0]));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for every evaluation stage.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting, binding or evaluating an expression, together with the
/// non-fatal tokenizer warnings.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches positions and names to errors for diagnostics.
/// - Maps every error to a coarse [`error::FailureKind`].
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module holds the lexer, binder, converter and evaluator, the value
/// type they share, and the [`Context`] that drives them.
pub mod interpreter;

pub use crate::{
    error::Error,
    interpreter::{
        binder::{Binding, Bindings, UnboundPolicy},
        context::{Context, Evaluation, Output},
    },
};

/// Evaluates an expression with the default settings, returning NaN on
/// failure.
///
/// # Example
/// ```
/// use mathparse::{Bindings, evaluate};
///
/// assert_eq!(evaluate("(3 + 4) * 2", &Bindings::default()).value, 14.0);
/// assert!(evaluate("", &Bindings::default()).value.is_nan());
/// ```
#[must_use]
pub fn evaluate(expression: &str, bindings: &Bindings) -> Output {
    Context::new().evaluate(expression, bindings)
}

/// Evaluates an expression with the default settings, reporting why it
/// failed.
///
/// # Errors
/// Returns an error if tokenizing, binding, conversion or evaluation fails.
///
/// # Example
/// ```
/// use mathparse::{Bindings, error::FailureKind, try_evaluate};
///
/// let err = try_evaluate("(1 + 2]", &Bindings::default()).unwrap_err();
/// assert_eq!(err.kind(), FailureKind::MismatchedGrouping);
/// ```
pub fn try_evaluate(expression: &str, bindings: &Bindings) -> Result<Evaluation, Error> {
    Context::new().try_evaluate(expression, bindings)
}
