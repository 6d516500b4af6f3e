/// Represents a binary arithmetic operator.
///
/// Every operator is left-associative, `^` included: `2 ^ 3 ^ 2` is
/// `(2 ^ 3) ^ 2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Exponentiation (`^`)
    Pow,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// Higher binds tighter: `^` is 3, `*` and `/` are 2, `+` and `-` are 1.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::operator::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// The source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pow => '^',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Applies the operator to two scalars, `left` first.
    ///
    /// Arithmetic follows IEEE-754: dividing by zero gives an infinity or NaN
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(5.0, 2.0), 3.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 4.0), 0.25);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Pow => left.powf(right),
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Add => left + right,
            Self::Sub => left - right,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
