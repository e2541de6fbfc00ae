use std::fmt;

use crate::{matrix::Matrix, vector::Vector, Error};

pub mod ops;

/// A script-visible value: the closed set of types the operator table is
/// defined over.
///
/// The scripting surface has no compile-time overloading, so operators
/// inspect the variant pair at runtime ([`ops`]) and pick their behavior
/// from the types and dimensions they find. `Str` is part of the union
/// because the per-element-product operator falls back to string
/// concatenation and must both accept and produce textual operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain number.
    Scalar(f32),
    /// A string.
    Str(String),
    /// A vector of dimension 2, 3, or 4.
    Vector(Vector),
    /// A square matrix of order 2, 3, or 4.
    Matrix(Matrix),
}

impl Value {
    /// Constructs a vector value from its components.
    ///
    /// This is the script-facing constructor: 2 to 4 components are
    /// accepted, any other count is an [`Error::InvalidDimension`].
    pub fn vector(components: &[f32]) -> Result<Value, Error> {
        Vector::from_components(components).map(Value::Vector)
    }

    /// Constructs a matrix value from row-major entries.
    ///
    /// This is the script-facing constructor: 4, 9, or 16 entries are
    /// accepted, any other count is an [`Error::InvalidDimension`].
    pub fn matrix(entries: &[f32]) -> Result<Value, Error> {
        Matrix::from_entries(entries).map(Value::Matrix)
    }

    /// Returns `true` if the value is a vector of any dimension.
    ///
    /// Predicates never fail; they return `false` for everything else.
    pub fn is_vector(&self) -> bool {
        matches!(self, Value::Vector(_))
    }

    /// Returns `true` if the value is a vector of dimension `dim`.
    pub fn is_vector_of_dimension(&self, dim: usize) -> bool {
        matches!(self, Value::Vector(v) if v.dim() == dim)
    }

    /// Returns `true` if the value is a matrix of any order.
    pub fn is_matrix(&self) -> bool {
        matches!(self, Value::Matrix(_))
    }

    /// Returns `true` if the value is a matrix of order `order`.
    pub fn is_matrix_of_order(&self, order: usize) -> bool {
        matches!(self, Value::Matrix(m) if m.order() == order)
    }

    /// Returns the value's script-facing type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "number",
            Value::Str(_) => "string",
            Value::Vector(v) => v.type_name(),
            Value::Matrix(m) => m.type_name(),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vector> for Value {
    fn from(value: Vector) -> Self {
        Value::Vector(value)
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Value::Matrix(value)
    }
}

/// The canonical textual form, as used by the concatenation fallback.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Str(s) => f.write_str(s),
            Value::Vector(v) => write!(f, "{v}"),
            Value::Matrix(m) => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mat3, vec2, vec3};

    #[test]
    fn predicates() {
        let v = Value::Vector(vec3(1.0, 2.0, 3.0));
        assert!(v.is_vector());
        assert!(v.is_vector_of_dimension(3));
        assert!(!v.is_vector_of_dimension(2));
        assert!(!v.is_matrix());

        let m = Value::Matrix(mat3([0.0; 9]));
        assert!(m.is_matrix());
        assert!(m.is_matrix_of_order(3));
        assert!(!m.is_matrix_of_order(4));
        assert!(!m.is_vector());

        assert!(!Value::Scalar(1.0).is_vector());
        assert!(!Value::Str("vec2(1,2)".into()).is_vector_of_dimension(2));
    }

    #[test]
    fn constructors() {
        assert_eq!(
            Value::vector(&[1.0, 2.0]),
            Ok(Value::Vector(vec2(1.0, 2.0))),
        );
        assert_eq!(
            Value::vector(&[1.0; 5]),
            Err(Error::InvalidDimension { count: 5 }),
        );
        assert_eq!(
            Value::matrix(&[1.0; 10]),
            Err(Error::InvalidDimension { count: 10 }),
        );
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Scalar(0.0).type_name(), "number");
        assert_eq!(Value::Str(String::new()).type_name(), "string");
        assert_eq!(Value::Vector(vec2(0.0, 0.0)).type_name(), "vec2");
        assert_eq!(Value::Matrix(mat3([0.0; 9])).type_name(), "mat33");
    }

    #[test]
    fn display() {
        assert_eq!(Value::Scalar(1.5).to_string(), "1.5");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::Vector(vec2(1.0, 2.0)).to_string(), "vec2(1,2)");
    }
}
