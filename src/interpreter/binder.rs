use std::collections::{HashMap, HashSet};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, value::Value},
};

/// A single named vector supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Variable name as written in the expression.
    pub name:   String,
    /// The vector bound to the name.
    pub values: Vec<f64>,
}

/// The vectors supplied for one evaluation call.
///
/// Every vector must have exactly `len` elements; this is checked by
/// [`bind_variables`] before anything is evaluated.
///
/// # Example
/// ```
/// use mathparse::Bindings;
///
/// let bindings = Bindings::new(3).with("a", [1.0, 2.0, 3.0])
///                                .with("b", vec![4.0, 5.0, 6.0]);
///
/// assert_eq!(bindings.len, 3);
/// assert_eq!(bindings.vectors.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    /// The length shared by every vector.
    pub len:     usize,
    /// The named vectors.
    pub vectors: Vec<Binding>,
}

impl Bindings {
    /// Creates an empty set of bindings whose vectors will have `len`
    /// elements.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len,
               vectors: Vec::new() }
    }

    /// Adds a named vector.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.vectors.push(Binding { name:   name.into(),
                                    values: values.into(), });
        self
    }

    /// Whether no vector was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// What happens to a variable that has no supplied vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnboundPolicy {
    /// Fail the evaluation with [`RuntimeError::UnboundVariable`].
    #[default]
    Fail,
    /// Treat the variable as the scalar `0`.
    Zero,
}

/// Maps each variable of an expression to its operand.
pub type BindingTable = HashMap<String, Value>;

/// Attaches the supplied vectors to the variables of an expression.
///
/// All bindings are validated first: every vector must have `bindings.len`
/// elements and no name may be bound twice. Then each variable name found by
/// the lexer is looked up. Bindings for names the expression does not use are
/// ignored.
///
/// # Parameters
/// - `variables`: Distinct variable names of the expression.
/// - `bindings`: The caller's vectors.
/// - `policy`: How to treat a variable without a binding.
///
/// # Returns
/// A table from every variable name to its operand.
///
/// # Errors
/// - `RuntimeError::LengthMismatch` if a vector has the wrong length.
/// - `RuntimeError::DuplicateBinding` if a name is bound twice.
/// - `RuntimeError::UnboundVariable` if a variable has no vector and the
///   policy is [`UnboundPolicy::Fail`].
pub fn bind_variables(variables: &[String],
                      bindings: &Bindings,
                      policy: UnboundPolicy)
                      -> EvalResult<BindingTable> {
    let mut seen = HashSet::new();
    for binding in &bindings.vectors {
        if binding.values.len() != bindings.len {
            return Err(RuntimeError::LengthMismatch { name:     binding.name.clone(),
                                                      expected: bindings.len,
                                                      found:    binding.values.len(), });
        }
        if !seen.insert(binding.name.as_str()) {
            return Err(RuntimeError::DuplicateBinding { name: binding.name.clone() });
        }
    }

    let mut table = BindingTable::with_capacity(variables.len());
    for name in variables {
        let value = match bindings.vectors.iter().find(|b| &b.name == name) {
            Some(binding) => Value::Vector(binding.values.as_slice().into()),
            None => match policy {
                UnboundPolicy::Fail => {
                    return Err(RuntimeError::UnboundVariable { name: name.clone() });
                },
                UnboundPolicy::Zero => Value::Scalar(0.0),
            },
        };
        table.insert(name.clone(), value);
    }

    for binding in &bindings.vectors {
        if !table.contains_key(&binding.name) {
            log::debug!("ignoring binding for unused variable '{}'", binding.name);
        }
    }

    Ok(table)
}
