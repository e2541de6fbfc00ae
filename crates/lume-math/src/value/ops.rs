//! The polymorphic operator table.
//!
//! Every operator the scripting surface exposes is a free function over
//! [`Value`]s. Each one matches on the variant pair and delegates to the
//! typed methods on [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix),
//! so the full dispatch for an operator reads top to bottom in one place.
//! Operands are only borrowed; results are always freshly constructed
//! values.
//!
//! ```
//! use lume_math::{ops, vec2, Value};
//!
//! let a = Value::Vector(vec2(1.0, 2.0));
//! let b = Value::Vector(vec2(3.0, 4.0));
//! // Multiplying two vectors resolves to their dot product.
//! assert_eq!(ops::mul(&a, &b), Ok(Value::Scalar(11.0)));
//! ```

use crate::{Error, Value, Vector};

/// Unary negation; element-wise on vectors and matrices.
pub fn neg(value: &Value) -> Result<Value, Error> {
    match value {
        Value::Scalar(s) => Ok(Value::Scalar(-s)),
        Value::Vector(v) => Ok(Value::Vector(-*v)),
        Value::Matrix(m) => Ok(Value::Matrix(-*m)),
        Value::Str(_) => Err(unsupported("-", value, value)),
    }
}

/// Addition; vector dimensions and matrix orders must match exactly.
pub fn add(lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a + b)),
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.add(b)?)),
        (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.add(b)?)),
        _ => Err(unsupported("+", lhs, rhs)),
    }
}

/// Subtraction; vector dimensions and matrix orders must match exactly.
pub fn sub(lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a - b)),
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.sub(b)?)),
        (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.sub(b)?)),
        _ => Err(unsupported("-", lhs, rhs)),
    }
}

/// Multiplication, resolved by the operand types:
///
/// - vector × scalar (either order) is a scaled copy,
/// - vector × vector is the dot product (a scalar, not a vector),
/// - matrix × matrix is the standard product (inner dimensions checked
///   before any computation),
/// - matrix × vector applies the linear map (the vector's dimension must
///   equal the matrix order),
/// - matrix × scalar (either order) scales every entry.
pub fn mul(lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a * b)),
        (Value::Vector(v), Value::Scalar(s)) | (Value::Scalar(s), Value::Vector(v)) => {
            Ok(Value::Vector(*v * *s))
        }
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Scalar(a.dot(b)?)),
        (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.mul(b)?)),
        (Value::Matrix(m), Value::Vector(v)) => Ok(Value::Vector(m.mul_vector(v)?)),
        (Value::Matrix(m), Value::Scalar(s)) | (Value::Scalar(s), Value::Matrix(m)) => {
            Ok(Value::Matrix(*m * *s))
        }
        _ => Err(unsupported("*", lhs, rhs)),
    }
}

/// Division by a scalar.
///
/// A scalar-first matrix division also divides the entries by the scalar;
/// there is no entry-wise reciprocal form. Vectors only divide with the
/// scalar on the right.
pub fn div(lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a / b)),
        (Value::Vector(v), Value::Scalar(s)) => Ok(Value::Vector(*v / *s)),
        (Value::Matrix(m), Value::Scalar(s)) | (Value::Scalar(s), Value::Matrix(m)) => {
            Ok(Value::Matrix(*m / *s))
        }
        _ => Err(unsupported("/", lhs, rhs)),
    }
}

/// The wedge product `a ^ b`, specific to the operand dimension:
///
/// - dimension 2: the signed scalar cross `a.x*b.y - a.y*b.x`,
/// - dimension 3: the cross-product vector,
/// - dimension 4: unsupported.
pub fn pow(lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs, rhs) {
        (Value::Vector(a), Value::Vector(b)) => {
            if a.dim() != b.dim() {
                return Err(Error::DimensionMismatch {
                    expected: a.dim(),
                    got: b.dim(),
                });
            }
            match a.dim() {
                2 => Ok(Value::Scalar(a.perp_dot(b)?)),
                3 => Ok(Value::Vector(a.cross(b)?)),
                _ => Err(unsupported("^", lhs, rhs)),
            }
        }
        _ => Err(unsupported("^", lhs, rhs)),
    }
}

/// The per-element product, with a textual fallback.
///
/// Two vectors of equal dimension (or two matrices of equal order) multiply
/// element-wise. Any other pairing concatenates the operands' canonical
/// textual forms into a string value.
pub fn concat(lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs, rhs) {
        (Value::Vector(a), Value::Vector(b)) => Ok(Value::Vector(a.permul(b)?)),
        (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.permul(b)?)),
        _ => Ok(Value::Str(format!("{lhs}{rhs}"))),
    }
}

/// Equality: same variant, same shape, all components equal.
pub fn eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Vector(a), Value::Vector(b)) => a == b,
        (Value::Matrix(a), Value::Matrix(b)) => a == b,
        _ => false,
    }
}

/// Strict ordering.
///
/// Scalars compare natively. Vectors compare by dimension first (shorter
/// sorts before longer), then by component from the highest index down to
/// the lowest, so the last component is the primary sort key. Pairs the
/// ordering is not defined for compare as `false`.
pub fn lt(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => a < b,
        (Value::Vector(a), Value::Vector(b)) => vector_lt(a, b, true),
        _ => false,
    }
}

/// Partial ordering; same rules as [`lt`] with the final comparison
/// inclusive.
pub fn le(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Scalar(a), Value::Scalar(b)) => a <= b,
        (Value::Vector(a), Value::Vector(b)) => vector_lt(a, b, false),
        _ => false,
    }
}

fn vector_lt(a: &Vector, b: &Vector, strict: bool) -> bool {
    if a.dim() != b.dim() {
        return a.dim() < b.dim();
    }
    let (av, bv) = (a.components(), b.components());
    for i in (1..a.dim()).rev() {
        if av[i] != bv[i] {
            return av[i] < bv[i];
        }
    }
    if strict {
        av[0] < bv[0]
    } else {
        av[0] <= bv[0]
    }
}

/// The length operator: a vector's dimension or a matrix's row count.
pub fn len(value: &Value) -> Result<usize, Error> {
    match value {
        Value::Vector(v) => Ok(v.dim()),
        Value::Matrix(m) => Ok(m.rows()),
        _ => Err(unsupported("#", value, value)),
    }
}

fn unsupported(op: &'static str, lhs: &Value, rhs: &Value) -> Error {
    Error::UnsupportedOperation {
        op,
        lhs: lhs.type_name(),
        rhs: rhs.type_name(),
    }
}
