use std::fmt;

use crate::{matrix::Matrix, Error};

mod ops;

/// Names of the addressable components of a [`Vector`].
///
/// Axes map positionally: `x` is index 0, `y` is 1, `z` is 2, and `w` is 3.
/// `w` addresses the fourth component only; it is not an alias for anything
/// else, so it is valid exclusively on 4-dimensional vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    /// All axes, in component order.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Returns the 0-based component index this axis addresses.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }

    /// Returns the axis name as it appears in scripts.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::W => "w",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vector of dimension 2, 3, or 4.
///
/// The dimension is chosen at construction and fixed for the lifetime of the
/// value; storage always has capacity for 4 components, of which only the
/// first [`dim`](Self::dim) are meaningful.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create
///   vectors directly from their components.
/// - [`Vector::from_components`] creates a vector from a slice, reporting
///   [`Error::InvalidDimension`] for unsupported lengths. This is the entry
///   point the scripting surface uses.
///
/// # Mutation
///
/// Values are mutable in place through [`set`](Self::set),
/// [`map`](Self::map), [`reset`](Self::reset) and
/// [`normalize_in_place`](Self::normalize_in_place). Everything else,
/// arithmetic included, returns a new vector and leaves the operands
/// untouched.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    dim: usize,
    v: [f32; 4],
}

impl Vector {
    /// Creates a vector from a slice of components.
    ///
    /// 2 to 4 components are accepted; any other count is an
    /// [`Error::InvalidDimension`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// assert_eq!(Vector::from_components(&[1.0, 2.0]), Ok(vec2(1.0, 2.0)));
    /// assert!(Vector::from_components(&[1.0]).is_err());
    /// ```
    pub fn from_components(components: &[f32]) -> Result<Self, Error> {
        match components.len() {
            dim @ 2..=4 => {
                let mut v = [0.0; 4];
                v[..dim].copy_from_slice(components);
                Ok(Self { dim, v })
            }
            count => Err(Error::InvalidDimension { count }),
        }
    }

    /// Builds a vector from the leading `dim` slots of `v`.
    pub(crate) fn from_parts(dim: usize, v: [f32; 4]) -> Self {
        debug_assert!((2..=4).contains(&dim));
        Self { dim, v }
    }

    /// Returns the vector's dimension (2, 3, or 4).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the script-facing type name (`"vec2"`, `"vec3"`, or `"vec4"`).
    pub fn type_name(&self) -> &'static str {
        match self.dim {
            2 => "vec2",
            3 => "vec3",
            _ => "vec4",
        }
    }

    /// Returns the valid components as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).components(), &[1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub fn components(&self) -> &[f32] {
        &self.v[..self.dim]
    }

    /// Reads the component addressed by `axis`.
    ///
    /// Returns [`None`] when the axis lies outside the vector's dimension
    /// (reading `z` of a `vec2`, or `w` of anything but a `vec4`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let v = vec2(1.0, 2.0);
    /// assert_eq!(v.get(Axis::Y), Some(2.0));
    /// assert_eq!(v.get(Axis::Z), None);
    /// ```
    pub fn get(&self, axis: Axis) -> Option<f32> {
        self.components().get(axis.index()).copied()
    }

    /// Writes the component addressed by `axis`.
    ///
    /// Writing outside the vector's dimension is an
    /// [`Error::ComponentOutOfRange`].
    pub fn set(&mut self, axis: Axis, value: f32) -> Result<(), Error> {
        if axis.index() >= self.dim {
            return Err(Error::ComponentOutOfRange {
                axis,
                dim: self.dim,
            });
        }
        self.v[axis.index()] = value;
        Ok(())
    }

    /// Applies `f` to each component in place, passing the component's value
    /// and axis, and returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let mut v = vec2(1.0, 2.0);
    /// v.map(|c, _axis| c * 10.0);
    /// assert_eq!(v, vec2(10.0, 20.0));
    /// ```
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f32, Axis) -> f32,
    {
        for i in 0..self.dim {
            self.v[i] = f(self.v[i], Axis::ALL[i]);
        }
        self
    }

    /// Overwrites all components at once.
    ///
    /// The slice length must equal the vector's dimension; the dimension
    /// itself never changes after construction.
    pub fn reset(&mut self, components: &[f32]) -> Result<&mut Self, Error> {
        if components.len() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                got: components.len(),
            });
        }
        self.v[..self.dim].copy_from_slice(components);
        Ok(self)
    }

    /// Returns the squared Euclidean length.
    pub fn length2(&self) -> f32 {
        self.components().iter().map(|c| c * c).sum()
    }

    /// Returns the Euclidean length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// Both vectors must have the same dimension.
    pub fn distance_to(&self, other: &Vector) -> Result<f32, Error> {
        Ok(self.sub(other)?.length())
    }

    /// Adds `other` element-wise, returning a new vector.
    ///
    /// Operand dimensions must match exactly, else
    /// [`Error::DimensionMismatch`].
    pub fn add(&self, other: &Vector) -> Result<Vector, Error> {
        self.check_dim(other)?;
        let mut out = *self;
        for i in 0..self.dim {
            out.v[i] += other.v[i];
        }
        Ok(out)
    }

    /// Subtracts `other` element-wise, returning a new vector.
    pub fn sub(&self, other: &Vector) -> Result<Vector, Error> {
        self.check_dim(other)?;
        let mut out = *self;
        for i in 0..self.dim {
            out.v[i] -= other.v[i];
        }
        Ok(out)
    }

    /// Multiplies element-wise ("permul"), returning a new vector.
    pub fn permul(&self, other: &Vector) -> Result<Vector, Error> {
        self.check_dim(other)?;
        let mut out = *self;
        for i in 0..self.dim {
            out.v[i] *= other.v[i];
        }
        Ok(out)
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(&b), Ok(3.0));
    /// ```
    pub fn dot(&self, other: &Vector) -> Result<f32, Error> {
        self.check_dim(other)?;
        Ok(self
            .components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Computes the perpendicular dot product (the signed 2D cross product)
    /// `self.x * other.y - self.y * other.x`.
    ///
    /// Defined for 2-dimensional vectors only.
    pub fn perp_dot(&self, other: &Vector) -> Result<f32, Error> {
        self.check_dim(other)?;
        if self.dim != 2 {
            return Err(Error::UnsupportedOperation {
                op: "perp_dot",
                lhs: self.type_name(),
                rhs: other.type_name(),
            });
        }
        Ok(self.v[0] * other.v[1] - self.v[1] * other.v[0])
    }

    /// Computes the 3D cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs; swapping the operands
    /// negates it. Defined for 3-dimensional vectors only.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Ok(vec3(0.0, 0.0, 1.0)));
    /// ```
    pub fn cross(&self, other: &Vector) -> Result<Vector, Error> {
        self.check_dim(other)?;
        if self.dim != 3 {
            return Err(Error::UnsupportedOperation {
                op: "cross",
                lhs: self.type_name(),
                rhs: other.type_name(),
            });
        }
        let (a, b) = (&self.v, &other.v);
        Ok(vec3(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ))
    }

    /// Returns a copy of `self` scaled to unit length.
    ///
    /// A zero-length input produces NaN components; callers that care must
    /// check [`length`](Self::length) first.
    pub fn normalized(&self) -> Vector {
        *self / self.length()
    }

    /// Scales `self` to unit length in place and returns it for chaining.
    pub fn normalize_in_place(&mut self) -> &mut Self {
        let len = self.length();
        for c in &mut self.v[..self.dim] {
            *c /= len;
        }
        self
    }

    /// Projects `self` onto `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let v = vec2(1.0, 1.0).project_on(&vec2(2.0, 0.0));
    /// assert_eq!(v, Ok(vec2(1.0, 0.0)));
    /// ```
    pub fn project_on(&self, other: &Vector) -> Result<Vector, Error> {
        let s = self.dot(other)? / other.length2();
        Ok(*other * s)
    }

    /// Reflects `self` over the axis spanned by `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let v = vec2(1.0, 1.0).mirror_on(&vec2(2.0, 0.0));
    /// assert_eq!(v, Ok(vec2(1.0, -1.0)));
    /// ```
    pub fn mirror_on(&self, other: &Vector) -> Result<Vector, Error> {
        let s = 2.0 * self.dot(other)? / other.length2();
        let mut out = *self;
        for i in 0..self.dim {
            out.v[i] = s * other.v[i] - self.v[i];
        }
        Ok(out)
    }

    /// Builds a square matrix of order [`dim`](Self::dim) with `self` on the
    /// diagonal and zero everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let m = vec2(1.0, 2.0).to_diagonal_matrix();
    /// assert_eq!(m, mat2([1.0, 0.0, 0.0, 2.0]));
    /// ```
    pub fn to_diagonal_matrix(&self) -> Matrix {
        Matrix::from_diagonal(self)
    }

    fn check_dim(&self, other: &Vector) -> Result<(), Error> {
        if self.dim == other.dim {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dim,
                got: other.dim,
            })
        }
    }
}

/// The canonical textual form: `vecN(c0,c1,...)`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec{}(", self.dim)?;
        for (i, c) in self.components().iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

/// Constructs a 2-dimensional vector.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vector {
    Vector {
        dim: 2,
        v: [x, y, 0.0, 0.0],
    }
}

/// Constructs a 3-dimensional vector.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vector {
    Vector {
        dim: 3,
        v: [x, y, z, 0.0],
    }
}

/// Constructs a 4-dimensional vector.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vector {
    Vector {
        dim: 4,
        v: [x, y, z, w],
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn construction() {
        for count in [0, 1, 5, 9] {
            assert_eq!(
                Vector::from_components(&vec![1.0; count]),
                Err(Error::InvalidDimension { count }),
            );
        }
        assert_eq!(Vector::from_components(&[1.0, 2.0, 3.0]).unwrap().dim(), 3);
    }

    #[test]
    fn named_access() {
        let mut v = vec2(1.0, 2.0);
        assert_eq!(v.get(Axis::X), Some(1.0));
        assert_eq!(v.get(Axis::Y), Some(2.0));
        assert_eq!(v.get(Axis::Z), None);
        assert_eq!(v.get(Axis::W), None);

        v.set(Axis::X, 777.0).unwrap();
        assert_eq!(v, vec2(777.0, 2.0));
        assert_eq!(
            v.set(Axis::Z, 0.0),
            Err(Error::ComponentOutOfRange {
                axis: Axis::Z,
                dim: 2
            }),
        );

        // `w` addresses the fourth component, never anything else.
        let mut v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.get(Axis::W), Some(4.0));
        v.set(Axis::W, 0.5).unwrap();
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 0.5));
        assert_eq!(vec3(1.0, 2.0, 3.0).get(Axis::W), None);
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0, 4.0).length2(), 25.0);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(vec2(0.0, 5.0).distance_to(&vec2(0.0, -5.0)), Ok(10.0));
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(0.0, 0.0, 4.0).normalized(), vec3(0.0, 0.0, 1.0));

        let mut v = vec2(-3.0, 4.0);
        v.normalize_in_place();
        assert_abs_diff_eq!(v, vec2(-0.6, 0.8));

        // Zero-length input propagates NaN instead of being special-cased.
        let z = vec2(0.0, 0.0).normalized();
        assert!(z.components().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn dot_and_cross() {
        assert_eq!(
            vec3(1.0, 3.0, -5.0).dot(&vec3(4.0, -2.0, -1.0)),
            Ok(3.0)
        );
        assert_eq!(
            vec2(1.0, 0.0).dot(&vec3(1.0, 0.0, 0.0)),
            Err(Error::DimensionMismatch {
                expected: 2,
                got: 3
            }),
        );

        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y), Ok(z));
        assert_eq!(y.cross(&x), Ok(-z));

        assert_eq!(vec2(1.0, 0.0).perp_dot(&vec2(0.0, 1.0)), Ok(1.0));
        assert_eq!(vec2(0.0, 1.0).perp_dot(&vec2(1.0, 0.0)), Ok(-1.0));
        assert!(vec3(1.0, 0.0, 0.0)
            .perp_dot(&vec3(0.0, 1.0, 0.0))
            .is_err());
    }

    #[test]
    fn project_and_mirror() {
        let a = vec2(1.0, 1.0);
        let b = vec2(2.0, 0.0);
        assert_eq!(a.project_on(&b), Ok(vec2(1.0, 0.0)));
        assert_eq!(a.mirror_on(&b), Ok(vec2(1.0, -1.0)));

        let a = vec3(2.0, 3.0, 4.0);
        let b = vec3(0.0, 1.0, 0.0);
        assert_eq!(a.project_on(&b), Ok(vec3(0.0, 3.0, 0.0)));
    }

    #[test]
    fn map_passes_axes() {
        let mut seen = Vec::new();
        let mut v = vec3(1.0, 2.0, 3.0);
        v.map(|c, axis| {
            seen.push(axis.name());
            c + 1.0
        });
        assert_eq!(v, vec3(2.0, 3.0, 4.0));
        assert_eq!(seen, ["x", "y", "z"]);
    }

    #[test]
    fn reset() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v.reset(&[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(v, vec3(4.0, 5.0, 6.0));
        assert_eq!(
            v.reset(&[1.0, 2.0]),
            Err(Error::DimensionMismatch {
                expected: 3,
                got: 2
            }),
        );
    }

    #[test]
    fn diagonal_matrix() {
        let m = vec3(1.0, 2.0, 3.0).to_diagonal_matrix();
        assert_eq!(m.order(), 3);
        assert_eq!(m.entries(), &[1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1.0, 2.0, 3.0)), "vec3(1,2,3)");
        assert_eq!(format!("{}", vec2(0.5, -1.0)), "vec2(0.5,-1)");
    }
}
