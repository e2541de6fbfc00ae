//! Projection transforms: mapping the view volume onto the screen.

use std::f32::consts::PI;

use crate::matrix::{mat4, Matrix};

/// Builds an orthographic projection for the given clip rectangle.
///
/// With `depth: None` the z row is fixed instead of mapping a near/far
/// range: every input depth lands on -1. With `Some((near, far))` depths
/// between the planes map linearly into the canonical volume.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, depth: Option<(f32, f32)>) -> Matrix {
    let (l, r, b, t) = (left, right, bottom, top);
    match depth {
        None => {
            #[rustfmt::skip]
            let m = mat4([
                2.0 / (r - l),           0.0, 0.0, (l + r) / (l - r),
                          0.0, 2.0 / (t - b), 0.0, (b + t) / (b - t),
                          0.0,           0.0, 0.0,              -1.0,
                          0.0,           0.0, 0.0,               1.0,
            ]);
            m
        }
        Some((n, f)) => {
            #[rustfmt::skip]
            let m = mat4([
                2.0 / (r - l),           0.0,           0.0, (l + r) / (l - r),
                          0.0, 2.0 / (t - b),           0.0, (b + t) / (b - t),
                          0.0,           0.0, 2.0 / (n - f), (n + f) / (n - f),
                          0.0,           0.0,           0.0,               1.0,
            ]);
            m
        }
    }
}

/// Builds a perspective projection from a vertical field of view (in
/// degrees) and an aspect ratio.
///
/// With `depth: None` the third and fourth rows are both `(0, 0, -1, 0)`:
/// the matrix projects without mapping a depth range. With
/// `Some((near, far))` the standard near/far mapping applies.
pub fn perspective(fovy_degrees: f32, aspect: f32, depth: Option<(f32, f32)>) -> Matrix {
    let f = 1.0 / (fovy_degrees * PI / 360.0).tan();
    match depth {
        None => {
            #[rustfmt::skip]
            let m = mat4([
                f / aspect, 0.0,  0.0, 0.0,
                       0.0,   f,  0.0, 0.0,
                       0.0, 0.0, -1.0, 0.0,
                       0.0, 0.0, -1.0, 0.0,
            ]);
            m
        }
        Some((near, far)) => {
            #[rustfmt::skip]
            let m = mat4([
                f / aspect, 0.0,                         0.0,                              0.0,
                       0.0,   f,                         0.0,                              0.0,
                       0.0, 0.0, (far + near) / (near - far), 2.0 * far * near / (near - far),
                       0.0, 0.0,                        -1.0,                              0.0,
            ]);
            m
        }
    }
}

/// Builds a general off-center frustum projection from the near-plane
/// rectangle and the depth range.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix {
    let (l, r, b, t, n, f) = (left, right, bottom, top, near, far);
    #[rustfmt::skip]
    let m = mat4([
        2.0 * n / (r - l),               0.0, (r + l) / (r - l),                   0.0,
                      0.0, 2.0 * n / (t - b), (t + b) / (t - b),                   0.0,
                      0.0,               0.0, (n + f) / (n - f), 2.0 * f * n / (n - f),
                      0.0,               0.0,              -1.0,                   0.0,
    ]);
    m
}
