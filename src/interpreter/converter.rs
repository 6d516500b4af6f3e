use crate::{
    error::ParseError,
    interpreter::lexer::{Token, delimiter},
};

/// Result type used by the tokenizing and conversion stages.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders a token sequence into postfix (reverse Polish) order.
///
/// Tokens are not copied: the result is a list of indices into `tokens`.
/// Numbers and variables go straight to the output. Opening delimiters are
/// pushed onto the stack. A closing delimiter pops entries to the output until
/// the opening delimiter it pairs with, and both delimiters are discarded. An
/// operator first pops every stacked operator of greater or equal precedence,
/// which makes all operators, `^` included, left-associative.
///
/// # Parameters
/// - `tokens`: Tokens with their byte offsets, as produced by the lexer.
/// - `operator_count`: Number of operator tokens, used to size the stack.
///
/// # Returns
/// Indices into `tokens` in postfix order.
///
/// # Errors
/// - `ParseError::MismatchedGrouping` if a closing delimiter has no open
///   group, or the innermost open group uses the other delimiter style.
/// - `ParseError::UnclosedGrouping` if a group is still open at the end.
///
/// # Example
/// ```
/// use mathparse::interpreter::{converter::to_postfix, lexer::tokenize};
///
/// let lexed = tokenize("(3+4)*2");
/// let postfix = to_postfix(&lexed.tokens, lexed.operator_count).unwrap();
///
/// // 3 4 + 2 *
/// assert_eq!(postfix, vec![1, 3, 2, 6, 5]);
/// ```
pub fn to_postfix(tokens: &[(Token, usize)], operator_count: usize) -> ParseResult<Vec<usize>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<usize> = Vec::with_capacity(operator_count);

    for (index, (token, position)) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) | Token::Variable(_) => output.push(index),
            Token::GroupOpen(_) => stack.push(index),
            Token::GroupClose(close) => {
                close_group(tokens, &mut stack, &mut output, token, *close, *position)?;
            },
            Token::Operator(op) => {
                while let Some(&top) = stack.last()
                      && let Token::Operator(stacked) = &tokens[top].0
                      && stacked.precedence() >= op.precedence()
                {
                    output.push(top);
                    stack.pop();
                }
                stack.push(index);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if let (Token::GroupOpen(open), position) = &tokens[top] {
            return Err(ParseError::UnclosedGrouping { found:    delimiter(*open),
                                                      position: *position, });
        }
        output.push(top);
    }

    log::trace!("postfix order: {output:?}");
    Ok(output)
}

/// Pops the stack to the output until the group closed by `token` is found.
fn close_group(tokens: &[(Token, usize)],
               stack: &mut Vec<usize>,
               output: &mut Vec<usize>,
               token: &Token,
               close: u8,
               position: usize)
               -> ParseResult<()> {
    let mismatch = || ParseError::MismatchedGrouping { found: delimiter(close),
                                                       position };

    loop {
        let top = stack.pop().ok_or_else(mismatch)?;
        match &tokens[top].0 {
            Token::GroupOpen(open) if token.closes(*open) => return Ok(()),
            Token::GroupOpen(_) => return Err(mismatch()),
            _ => output.push(top),
        }
    }
}
