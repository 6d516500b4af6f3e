use thiserror::Error;

/// Front-end errors.
///
/// Defines the failures that can occur while tokenizing an expression or
/// reordering its tokens into postfix order. These are detected before any
/// operand is touched.
pub mod parse_error;
/// Back-end errors.
///
/// Contains the failures raised while attaching vector bindings to variables
/// or while walking the postfix sequence, such as unbound variables, operand
/// stack underflow, or vectors of the wrong length.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseWarning};
pub use runtime_error::RuntimeError;

/// Any failure that makes an evaluation call produce no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Tokenizing or postfix conversion failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Binding or evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The category of a failure, without its positional details.
///
/// Useful for callers that only want to branch on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    EmptyExpression,
    MismatchedGrouping,
    UnclosedGrouping,
    UnboundVariable,
    DuplicateBinding,
    LengthMismatch,
    StackUnderflow,
    UnbalancedOperands,
}

impl Error {
    /// Returns the failure category of this error.
    ///
    /// # Example
    /// ```
    /// use mathparse::{Bindings, error::FailureKind, try_evaluate};
    ///
    /// let err = try_evaluate("   ", &Bindings::default()).unwrap_err();
    /// assert_eq!(err.kind(), FailureKind::EmptyExpression);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Parse(ParseError::EmptyExpression) => FailureKind::EmptyExpression,
            Self::Parse(ParseError::MismatchedGrouping { .. }) => FailureKind::MismatchedGrouping,
            Self::Parse(ParseError::UnclosedGrouping { .. }) => FailureKind::UnclosedGrouping,
            Self::Runtime(RuntimeError::UnboundVariable { .. }) => FailureKind::UnboundVariable,
            Self::Runtime(RuntimeError::DuplicateBinding { .. }) => FailureKind::DuplicateBinding,
            Self::Runtime(RuntimeError::LengthMismatch { .. }) => FailureKind::LengthMismatch,
            Self::Runtime(RuntimeError::StackUnderflow { .. }) => FailureKind::StackUnderflow,
            Self::Runtime(RuntimeError::UnbalancedOperands { .. }) => {
                FailureKind::UnbalancedOperands
            },
        }
    }
}
