use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, operator::BinaryOperator, value::Value},
};

/// Applies a binary operator to two operands, broadcasting over vectors.
///
/// - Scalar with scalar: ordinary arithmetic.
/// - Vector with vector: index for index; lengths must match.
/// - Scalar with vector, or vector with scalar: the scalar is applied at every
///   position.
///
/// `left` is always the left operand, so `5 - [1, 2]` is `[4, 3]` and
/// `10 / [1, 2]` is `[10, 5]`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: The operand pushed first.
/// - `right`: The operand pushed last.
///
/// # Returns
/// A scalar when both operands are scalars, otherwise a vector.
///
/// # Errors
/// `RuntimeError::LengthMismatch` if both operands are vectors of different
/// lengths.
///
/// # Example
/// ```
/// use mathparse::interpreter::{
///     evaluator::broadcast::eval_binary, operator::BinaryOperator, value::Value,
/// };
///
/// let left = Value::Scalar(5.0);
/// let right = Value::from(vec![1.0, 2.0, 3.0]);
///
/// let r = eval_binary(BinaryOperator::Sub, &left, &right).unwrap();
/// assert_eq!(r, Value::from(vec![4.0, 3.0, 2.0]));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Scalar(l), Value::Scalar(r)) => Ok(Value::Scalar(op.apply(*l, *r))),

        (Value::Vector(l), Value::Vector(r)) => {
            if l.len() != r.len() {
                return Err(RuntimeError::LengthMismatch { name:     op.to_string(),
                                                          expected: l.len(),
                                                          found:    r.len(), });
            }

            Ok(Value::Vector(l.iter()
                              .zip(r.iter())
                              .map(|(l, r)| op.apply(*l, *r))
                              .collect()))
        },

        (Value::Scalar(l), Value::Vector(r)) => {
            Ok(Value::Vector(r.iter().map(|r| op.apply(*l, *r)).collect()))
        },

        (Value::Vector(l), Value::Scalar(r)) => {
            Ok(Value::Vector(l.iter().map(|l| op.apply(*l, *r)).collect()))
        },
    }
}
