use crate::vector::Axis;

/// Errors reported by the value engine.
///
/// Every failure is raised synchronously at the point of violation and
/// returned to the caller; the engine never produces partial results and
/// never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A constructor received a component count that does not map to a
    /// supported dimension.
    #[error("invalid dimension: {count} components")]
    InvalidDimension { count: usize },

    /// A binary operation was applied to operands of incompatible dimension
    /// or order.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A named component was written outside the vector's dimension.
    #[error("cannot set component {axis} of a vec{dim}")]
    ComponentOutOfRange { axis: Axis, dim: usize },

    /// A 1-based row or column index fell outside the valid range.
    #[error("index out of bounds: {index} (valid range 1..={bound})")]
    IndexOutOfBounds { index: usize, bound: usize },

    /// The operator is not defined for the given operand types.
    #[error("`{op}` is not defined for operand types {lhs}, {rhs}")]
    UnsupportedOperation {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },
}
