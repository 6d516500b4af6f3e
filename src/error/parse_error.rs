use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during tokenizing or postfix
/// conversion.
pub enum ParseError {
    /// The expression contained nothing but whitespace.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// A closing delimiter had no matching opening delimiter, or closed a
    /// group opened with the other delimiter style.
    #[error("Error at position {position}: '{found}' does not close any open group.")]
    MismatchedGrouping {
        /// The closing delimiter encountered.
        found:    char,
        /// Byte offset in the whitespace-stripped expression.
        position: usize,
    },
    /// An opening delimiter was never closed.
    #[error("Error at position {position}: '{found}' is never closed.")]
    UnclosedGrouping {
        /// The opening delimiter left open.
        found:    char,
        /// Byte offset in the whitespace-stripped expression.
        position: usize,
    },
}

/// Non-fatal anomalies found while tokenizing.
///
/// These never abort an evaluation; they are reported alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// A character outside the recognized set was dropped.
    #[error("Warning at position {position}: ignored unknown character '{character}'.")]
    UnknownCharacter {
        /// The dropped character.
        character: char,
        /// Byte offset in the whitespace-stripped expression.
        position:  usize,
    },
}
