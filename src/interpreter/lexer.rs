use std::collections::HashSet;

use logos::Logos;

use crate::{error::ParseWarning, interpreter::operator::BinaryOperator};

/// Scope id of `(`.
pub const PAREN_OPEN: u8 = 1;
/// Scope id of `)`.
pub const PAREN_CLOSE: u8 = 2;
/// Scope id of `[`.
pub const BRACKET_OPEN: u8 = 3;
/// Scope id of `]`.
pub const BRACKET_CLOSE: u8 = 4;

/// Represents a lexical token in a whitespace-free expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Exactly one payload is carried per kind: a value, a name, an operator, or
/// a grouping scope id.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", accumulate_number)]
    #[regex(r"\.[0-9]*", accumulate_number)]
    Number(f64),
    /// Variable names such as `x` or `speed`. Digits directly after a name
    /// belong to it, so `a1` is one variable.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// `^`, `*`, `/`, `+` or `-`.
    #[token("^", |_| BinaryOperator::Pow)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    Operator(BinaryOperator),
    /// `(` or `[`, tagged with its scope id.
    #[token("(", |_| PAREN_OPEN)]
    #[token("[", |_| BRACKET_OPEN)]
    GroupOpen(u8),
    /// `)` or `]`, tagged with its scope id.
    #[token(")", |_| PAREN_CLOSE)]
    #[token("]", |_| BRACKET_CLOSE)]
    GroupClose(u8),
}

impl Token {
    /// Whether this is a close token ending the scope opened by `open`.
    ///
    /// A close id pairs only with the open id immediately below it.
    #[must_use]
    pub const fn closes(&self, open: u8) -> bool {
        matches!(self, Self::GroupClose(close) if *close == open + 1)
    }
}

/// Returns the delimiter character written for a grouping scope id.
#[must_use]
pub const fn delimiter(scope: u8) -> char {
    match scope {
        PAREN_OPEN => '(',
        PAREN_CLOSE => ')',
        BRACKET_OPEN => '[',
        BRACKET_CLOSE => ']',
        _ => '?',
    }
}

/// The tokenized form of one expression.
///
/// Tokens are stored in source order together with their byte offset. The
/// counts are used to size the operator and operand stacks of later stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexed {
    /// Tokens paired with their byte offset in the expression.
    pub tokens:         Vec<(Token, usize)>,
    /// Number of operator tokens.
    pub operator_count: usize,
    /// Number of number, variable and grouping tokens.
    pub atom_count:     usize,
    /// Distinct variable names, in order of first occurrence.
    pub variables:      Vec<String>,
    /// Characters that were dropped.
    pub warnings:       Vec<ParseWarning>,
}

/// Tokenizes a whitespace-free expression.
///
/// Unknown characters are logged, recorded as warnings and skipped; they
/// never stop the scan.
///
/// # Parameters
/// - `expression`: The expression with all whitespace already removed.
///
/// # Returns
/// A [`Lexed`] holding the tokens, the stack-sizing counts and the distinct
/// variable names.
///
/// # Example
/// ```
/// use mathparse::interpreter::lexer::{Token, tokenize};
///
/// let lexed = tokenize("(a1+2.5)*b");
///
/// assert_eq!(lexed.operator_count, 2);
/// assert_eq!(lexed.atom_count, 5);
/// assert_eq!(lexed.variables, vec!["a1".to_string(), "b".to_string()]);
/// assert_eq!(lexed.tokens[3].0, Token::Number(2.5));
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Lexed {
    let mut lexed = Lexed::default();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;

        match token {
            Ok(token) => {
                if matches!(token, Token::Operator(_)) {
                    lexed.operator_count += 1;
                } else {
                    lexed.atom_count += 1;
                }
                lexed.tokens.push((token, position));
            },
            Err(()) => {
                for (offset, character) in lexer.slice().char_indices() {
                    log::warn!("ignoring unknown character '{character}' at {}",
                               position + offset);
                    lexed.warnings
                         .push(ParseWarning::UnknownCharacter { character,
                                                                position: position + offset });
                }
            },
        }
    }

    lexed.variables = collect_variables(&lexed.tokens);
    lexed
}

/// Collects distinct variable names in order of first occurrence.
fn collect_variables(tokens: &[(Token, usize)]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for (token, _) in tokens {
        if let Token::Variable(name) = token
           && seen.insert(name.as_str())
        {
            names.push(name.clone());
        }
    }

    names
}

/// Builds a number from its digits.
///
/// Integer digits accumulate by shifting the value one decimal place left.
/// After the point, the k-th digit contributes `digit / 10^k`.
fn accumulate_number(lex: &logos::Lexer<Token>) -> f64 {
    let mut value = 0.0;
    let mut fraction_digits: Option<i32> = None;

    for character in lex.slice().chars() {
        if character == '.' {
            fraction_digits = Some(0);
            continue;
        }

        let Some(digit) = character.to_digit(10).map(f64::from) else {
            continue;
        };

        match fraction_digits.as_mut() {
            Some(count) => {
                *count += 1;
                value += digit / 10f64.powi(*count);
            },
            None => value = value * 10.0 + digit,
        }
    }

    value
}
