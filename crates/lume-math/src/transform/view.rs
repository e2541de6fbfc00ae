//! View transforms: placing the camera.

use crate::{
    matrix::{mat4, Matrix},
    vector::Vector,
    Error,
};

/// Builds a view matrix for a camera at `eye` looking towards `center`.
///
/// All three arguments must be 3-dimensional vectors. `up` only provides a
/// rough orientation; the actual up direction is re-derived so the camera
/// basis comes out orthonormal: forward = normalize(center - eye),
/// side = normalize(forward x up), and the effective up is side x forward.
/// The eye translation is baked into the last column.
///
/// # Examples
///
/// ```
/// # use lume_math::{transform::view, vec3, vec4};
/// let m = view::look_at(
///     &vec3(0.0, 0.0, 5.0),
///     &vec3(0.0, 0.0, 0.0),
///     &vec3(0.0, 1.0, 0.0),
/// ).unwrap();
/// // Looking down -z from z=5: the origin lands 5 units in front of the eye.
/// assert_eq!(m.mul_vector(&vec4(0.0, 0.0, 0.0, 1.0)), Ok(vec4(0.0, 0.0, -5.0, 1.0)));
/// ```
pub fn look_at(eye: &Vector, center: &Vector, up: &Vector) -> Result<Matrix, Error> {
    for v in [eye, center, up] {
        if v.dim() != 3 {
            return Err(Error::DimensionMismatch {
                expected: 3,
                got: v.dim(),
            });
        }
    }

    let f = center.sub(eye)?.normalized();
    let s = f.cross(up)?.normalized();
    let u = s.cross(&f)?;

    let (es, eu, ef) = (eye.dot(&s)?, eye.dot(&u)?, eye.dot(&f)?);
    #[rustfmt::skip]
    let m = mat4([
         s[0],  s[1],  s[2], -es,
         u[0],  u[1],  u[2], -eu,
        -f[0], -f[1], -f[2],  ef,
          0.0,   0.0,   0.0, 1.0,
    ]);
    Ok(m)
}
