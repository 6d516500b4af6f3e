use crate::{
    error::{Error, ParseError, ParseWarning},
    interpreter::{
        binder::{Bindings, UnboundPolicy, bind_variables},
        converter::to_postfix,
        evaluator::evaluate_postfix,
        lexer::tokenize,
        value::Value,
    },
};

/// Stores the evaluation settings.
///
/// A `Context` carries no state between calls: every evaluation tokenizes,
/// binds, converts and evaluates from scratch, so one context can be shared
/// freely and evaluating the same input twice gives identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// How variables without a supplied vector are treated.
    pub unbound_policy: UnboundPolicy,
}

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The final operand.
    pub value:    Value,
    /// Anomalies that were skipped while tokenizing.
    pub warnings: Vec<ParseWarning>,
}

/// The plain numeric result of an evaluation.
///
/// On failure `value` is NaN and `vector` is `None`. A vector-valued result
/// reports `0.0` in `value` and the elements in `vector`.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// The scalar result, or NaN on failure.
    pub value:  f64,
    /// The vector result, if the expression produced one.
    pub vector: Option<Vec<f64>>,
}

impl Output {
    /// The result of a failed evaluation.
    pub const FAILURE: Self = Self { value:  f64::NAN,
                                     vector: None, };

    /// Whether this output signals a failed evaluation.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.value.is_nan() && self.vector.is_none()
    }
}

impl From<Evaluation> for Output {
    fn from(evaluation: Evaluation) -> Self {
        match evaluation.value {
            Value::Scalar(value) => Self { value,
                                           vector: None },
            Value::Vector(values) => Self { value:  0.0,
                                            vector: Some(values.to_vec()), },
        }
    }
}

impl Context {
    /// Creates a context with the default settings: unbound variables fail.
    #[must_use]
    pub const fn new() -> Self {
        Self { unbound_policy: UnboundPolicy::Fail }
    }

    /// Returns this context with a different unbound-variable policy.
    #[must_use]
    pub const fn with_unbound_policy(mut self, policy: UnboundPolicy) -> Self {
        self.unbound_policy = policy;
        self
    }

    /// Evaluates an expression and reports why it failed, if it did.
    ///
    /// Whitespace is removed first. The remaining text is tokenized, the
    /// variables are bound to `bindings`, the tokens are reordered into
    /// postfix order and evaluated.
    ///
    /// # Parameters
    /// - `expression`: The expression text.
    /// - `bindings`: Vectors for the variables of the expression.
    ///
    /// # Returns
    /// The final value and any tokenizer warnings.
    ///
    /// # Errors
    /// Returns an [`Error`] for an empty expression, mismatched grouping,
    /// invalid or missing bindings, or an operator without enough operands.
    ///
    /// # Example
    /// ```
    /// use mathparse::{Bindings, Context, interpreter::value::Value};
    ///
    /// let context = Context::new();
    /// let bindings = Bindings::new(3).with("a", [1.0, 2.0, 4.0]);
    ///
    /// let evaluation = context.try_evaluate("10 / a", &bindings).unwrap();
    /// assert_eq!(evaluation.value, Value::from(vec![10.0, 5.0, 2.5]));
    /// assert!(evaluation.warnings.is_empty());
    /// ```
    pub fn try_evaluate(&self, expression: &str, bindings: &Bindings) -> Result<Evaluation, Error> {
        let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() {
            return Err(ParseError::EmptyExpression.into());
        }

        let lexed = tokenize(&stripped);
        let table = bind_variables(&lexed.variables, bindings, self.unbound_policy)?;
        let postfix = to_postfix(&lexed.tokens, lexed.operator_count)?;
        let value = evaluate_postfix(&lexed.tokens, &postfix, &table, lexed.atom_count)?;

        Ok(Evaluation { value,
                        warnings: lexed.warnings })
    }

    /// Evaluates an expression, collapsing any failure to NaN.
    ///
    /// # Example
    /// ```
    /// use mathparse::{Bindings, Context};
    ///
    /// let context = Context::new();
    ///
    /// assert_eq!(context.evaluate("2 ^ 3 ^ 2", &Bindings::default()).value, 64.0);
    /// assert!(context.evaluate("+", &Bindings::default()).is_failure());
    /// ```
    #[must_use]
    pub fn evaluate(&self, expression: &str, bindings: &Bindings) -> Output {
        match self.try_evaluate(expression, bindings) {
            Ok(evaluation) => evaluation.into(),
            Err(e) => {
                log::debug!("evaluation of '{expression}' failed: {e}");
                Output::FAILURE
            },
        }
    }
}
