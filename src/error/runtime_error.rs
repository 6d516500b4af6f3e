use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while binding variables or walking the
/// postfix sequence.
pub enum RuntimeError {
    /// A variable appears in the expression but no vector was supplied for it.
    #[error("Unbound variable '{name}'.")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// The same variable name was bound more than once.
    #[error("Variable '{name}' is bound more than once.")]
    DuplicateBinding {
        /// The name of the variable.
        name: String,
    },
    /// A vector does not have the length fixed for this call.
    #[error("Vector '{name}' has length {found}, expected {expected}.")]
    LengthMismatch {
        /// The variable the vector belongs to, or the operator being applied.
        name:     String,
        /// The length every vector must share.
        expected: usize,
        /// The length actually supplied.
        found:    usize,
    },
    /// An operator was reached with fewer than two operands available.
    #[error("Error at position {position}: Operator '{operator}' is missing an operand.")]
    StackUnderflow {
        /// The operator symbol.
        operator: char,
        /// Byte offset in the whitespace-stripped expression.
        position: usize,
    },
    /// Evaluation did not finish with exactly one operand.
    #[error("Expression left {remaining} operands on the stack, expected exactly one.")]
    UnbalancedOperands {
        /// How many operands were left.
        remaining: usize,
    },
}
