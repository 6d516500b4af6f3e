use std::rc::Rc;

/// Represents an operand during evaluation.
///
/// An operand is either a single number or a vector whose length is fixed for
/// the whole evaluation call. Vectors are shared, so pushing the same bound
/// variable twice does not copy its elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single double precision number.
    Scalar(f64),
    /// A vector of numbers.
    Vector(Rc<[f64]>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v.into())
    }
}

impl Value {
    /// Returns the scalar, or `None` for a vector.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Vector(_) => None,
        }
    }

    /// Returns the elements, or `None` for a scalar.
    #[must_use]
    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v),
        }
    }

    /// Whether the value is a vector.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Vector(values) => {
                write!(f, "[")?;

                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
