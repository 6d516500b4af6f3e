/// The binder module attaches caller-supplied vectors to variables.
///
/// It defines the structured input type for vector bindings, validates that
/// every vector has the length fixed for the call, and builds the table the
/// evaluator consults when it meets a variable.
///
/// # Responsibilities
/// - Validates vector lengths and rejects duplicate names up front.
/// - Applies the configured policy to variables that have no binding.
pub mod binder;
/// Evaluation settings and the pipeline driver.
///
/// Ties the stages together: whitespace removal, tokenizing, binding,
/// postfix conversion and evaluation. Exposes both the structured and the
/// NaN-on-failure entry points.
pub mod context;
/// The converter module reorders tokens into postfix order.
///
/// An explicit-stack (shunting-yard) pass that resolves operator precedence
/// and grouping scopes, producing indices into the token arena.
///
/// # Responsibilities
/// - Emits operands immediately and operators by precedence.
/// - Matches closing delimiters to the innermost open group.
/// - Reports mismatched or unclosed groups.
pub mod converter;
/// The evaluator module walks the postfix sequence.
///
/// Uses an operand stack and the broadcast rule to reduce the sequence to one
/// scalar or vector.
///
/// # Responsibilities
/// - Applies operators with left and right operands in their original order.
/// - Reports operand stack underflow and leftover operands.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// Reads a whitespace-free expression and produces numbers, variables,
/// operators and grouping delimiters, along with the counts later stages use
/// to size their stacks.
///
/// # Responsibilities
/// - Classifies characters into tokens; unknown characters are skipped with a
///   warning.
/// - Collects the distinct variable names in order of first occurrence.
pub mod lexer;
/// Binary arithmetic operators and their precedence.
pub mod operator;
/// The operand type used during evaluation.
pub mod value;
