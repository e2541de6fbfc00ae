//! Dynamic-dimension vector and matrix values for the Lume scripting
//! runtime.
//!
//! # Motivation
//!
//! Lume scripts manipulate vectors and matrices whose shape is only known at
//! runtime: to a script, a value is "a vector", not a `Vec3<f32>`. Existing
//! Rust linear-algebra libraries resolve shapes at compile time (fixed types
//! or const generics), which makes them a poor substrate for a dynamically
//! typed scripting surface: every operator would need its own matrix of
//! monomorphic entry points. This crate instead keeps the dimension inside
//! the value and resolves operator behavior by inspecting the operands.
//!
//! # Goals & Non-Goals
//!
//! - Support exactly the shapes real-time graphics scripts use: vectors of
//!   dimension 2 to 4 and square matrices of order 2 to 4. Nothing larger,
//!   nothing sparse, nothing symbolic.
//! - Resolve operators from the runtime types and dimensions of their
//!   operands (the [`ops`] module), and report every violation as a value
//!   ([`Error`]) rather than a panic, so the embedding runtime can surface
//!   script errors.
//! - Keep the in-place and value-returning forms of each mutating operation
//!   separately named (`normalize_in_place` vs. `normalized`,
//!   `transpose_in_place` vs. `transposed`).
//! - No SIMD layout guarantees. Consumers that upload values to the GPU read
//!   the valid slots through [`Vector::components`] and [`Matrix::entries`].
//!
//! # Example
//!
//! ```
//! use lume_math::{ops, transform::model, vec3, Value};
//!
//! // Script-level values with runtime dispatch:
//! let a = Value::vector(&[1.0, 0.0, 0.0])?;
//! let b = Value::vector(&[0.0, 1.0, 0.0])?;
//! assert_eq!(ops::pow(&a, &b)?, Value::Vector(vec3(0.0, 0.0, 1.0)));
//!
//! // Typed transform builders:
//! let spin = model::rotate(&vec3(0.0, 0.0, 1.0), 0.5)?;
//! assert_eq!(spin.order(), 4);
//! # Ok::<(), lume_math::Error>(())
//! ```

mod error;
mod matrix;
pub mod transform;
mod value;
mod vector;

pub use error::Error;
pub use matrix::{mat2, mat3, mat4, Matrix, Row, RowMut};
pub use value::{ops, Value};
pub use vector::{vec2, vec3, vec4, Axis, Vector};
