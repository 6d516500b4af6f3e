use crate::{
    error::RuntimeError,
    interpreter::{binder::BindingTable, lexer::Token, value::Value},
};

/// Elementwise application of binary operators.
///
/// Implements the broadcast rule between scalars and vectors while keeping
/// left and right operands in their original order.
pub mod broadcast;

/// Result type used by the binding and evaluation stages.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix sequence with an operand stack.
///
/// Numbers and variables push their operand. An operator pops the top operand
/// as its right side and the one below it as its left side, applies the
/// broadcast rule and pushes the result. Evaluation must end with exactly one
/// operand on the stack.
///
/// # Parameters
/// - `tokens`: The token arena produced by the lexer.
/// - `postfix`: Indices into `tokens` in postfix order.
/// - `table`: Operand of every variable.
/// - `atom_count`: Number of non-operator tokens, used to size the stack.
///
/// # Returns
/// The final operand, a scalar or a vector.
///
/// # Errors
/// - `RuntimeError::StackUnderflow` if an operator has fewer than two
///   operands.
/// - `RuntimeError::UnbalancedOperands` if the stack does not end with exactly
///   one operand.
/// - `RuntimeError::UnboundVariable` if a variable is missing from `table`.
/// - `RuntimeError::LengthMismatch` if two vectors differ in length.
///
/// # Example
/// ```
/// use mathparse::interpreter::{
///     binder::BindingTable, converter::to_postfix, evaluator::evaluate_postfix, lexer::tokenize,
///     value::Value,
/// };
///
/// let lexed = tokenize("3+4*2");
/// let postfix = to_postfix(&lexed.tokens, lexed.operator_count).unwrap();
/// let value = evaluate_postfix(&lexed.tokens, &postfix, &BindingTable::new(), lexed.atom_count);
///
/// assert_eq!(value.unwrap(), Value::Scalar(11.0));
/// ```
pub fn evaluate_postfix(tokens: &[(Token, usize)],
                        postfix: &[usize],
                        table: &BindingTable,
                        atom_count: usize)
                        -> EvalResult<Value> {
    let mut stack: Vec<Value> = Vec::with_capacity(atom_count);

    for &index in postfix {
        let (token, position) = &tokens[index];
        match token {
            Token::Number(value) => stack.push(Value::Scalar(*value)),
            Token::Variable(name) => {
                let value =
                    table.get(name)
                         .cloned()
                         .ok_or_else(|| RuntimeError::UnboundVariable { name: name.clone() })?;
                stack.push(value);
            },
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::StackUnderflow { operator: op.symbol(),
                                                              position: *position, });
                };
                stack.push(broadcast::eval_binary(*op, &left, &right)?);
            },
            // The converter consumes every delimiter.
            Token::GroupOpen(_) | Token::GroupClose(_) => {},
        }
    }

    match stack.pop() {
        Some(value) if stack.is_empty() => Ok(value),
        Some(_) => Err(RuntimeError::UnbalancedOperands { remaining: stack.len() + 1 }),
        None => Err(RuntimeError::UnbalancedOperands { remaining: 0 }),
    }
}
