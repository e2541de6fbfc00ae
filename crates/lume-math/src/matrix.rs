use std::fmt;

use crate::{vector::Vector, Error};

mod ops;
mod row;

pub use row::{Row, RowMut};

/// A square matrix of order 2, 3, or 4, stored row-major.
///
/// The order is chosen at construction and fixed for the lifetime of the
/// value; storage always has capacity for 16 entries, of which only the
/// leading `rows * cols` are meaningful. Rows and columns are tracked
/// separately to leave room for rectangular shapes later, but only square
/// configurations are constructible today.
///
/// # Construction
///
/// - The freestanding [`mat2`], [`mat3`] and [`mat4`] functions create
///   matrices from row-major entry arrays.
/// - [`Matrix::from_entries`] accepts a slice of 4, 9, or 16 entries and
///   reports [`Error::InvalidDimension`] otherwise. This is the entry point
///   the scripting surface uses.
/// - [`Matrix::from_diagonal`] builds a diagonal matrix from a vector.
///
/// # Element Access
///
/// All indexed access is 1-based and bounds-checked against the actual
/// order, matching the scripting surface: [`get`](Self::get) and
/// [`set`](Self::set) address single entries, [`row`](Self::row) and
/// [`row_mut`](Self::row_mut) hand out transient [`Row`]/[`RowMut`] views.
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    m: [f32; 16],
}

impl Matrix {
    /// Creates a matrix from a slice of row-major entries.
    ///
    /// 4, 9, or 16 entries are accepted (orders 2, 3, and 4); any other
    /// count is an [`Error::InvalidDimension`].
    pub fn from_entries(entries: &[f32]) -> Result<Self, Error> {
        let order = match entries.len() {
            4 => 2,
            9 => 3,
            16 => 4,
            count => return Err(Error::InvalidDimension { count }),
        };
        let mut m = [0.0; 16];
        m[..entries.len()].copy_from_slice(entries);
        Ok(Self {
            rows: order,
            cols: order,
            m,
        })
    }

    /// Creates a square matrix with `diagonal`'s components on the diagonal
    /// and zero everywhere else. The order equals the vector's dimension.
    pub fn from_diagonal(diagonal: &Vector) -> Self {
        let order = diagonal.dim();
        let mut out = Self {
            rows: order,
            cols: order,
            m: [0.0; 16],
        };
        for (i, c) in diagonal.components().iter().enumerate() {
            out.m[i * order + i] = *c;
        }
        out
    }

    /// Returns the matrix order. Row and column counts are always equal.
    #[inline]
    pub fn order(&self) -> usize {
        self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the script-facing type name (`"mat22"`, `"mat33"`, or
    /// `"mat44"`).
    pub fn type_name(&self) -> &'static str {
        match self.rows {
            2 => "mat22",
            3 => "mat33",
            _ => "mat44",
        }
    }

    /// Returns the valid entries as a row-major slice.
    #[inline]
    pub fn entries(&self) -> &[f32] {
        &self.m[..self.rows * self.cols]
    }

    /// Reads the entry at 1-based `(row, col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let m = mat2([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.get(2, 1), Ok(3.0));
    /// assert!(m.get(3, 1).is_err());
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<f32, Error> {
        let (r, c) = (self.check_row(row)?, self.check_col(col)?);
        Ok(self.m[r * self.cols + c])
    }

    /// Writes the entry at 1-based `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), Error> {
        let (r, c) = (self.check_row(row)?, self.check_col(col)?);
        self.m[r * self.cols + c] = value;
        Ok(())
    }

    /// Returns a read-only view of the 1-based `row`.
    pub fn row(&self, row: usize) -> Result<Row<'_>, Error> {
        let r = self.check_row(row)?;
        Ok(Row::new(&self.m[r * self.cols..(r + 1) * self.cols]))
    }

    /// Returns a mutable view of the 1-based `row`.
    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_>, Error> {
        let r = self.check_row(row)?;
        let cols = self.cols;
        Ok(RowMut::new(&mut self.m[r * cols..(r + 1) * cols]))
    }

    /// Applies `f` to each entry in place, passing the entry's value and its
    /// 1-based row and column, and returns `self` for chaining.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f32, usize, usize) -> f32,
    {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let i = r * self.cols + c;
                self.m[i] = f(self.m[i], r + 1, c + 1);
            }
        }
        self
    }

    /// Overwrites all entries at once, row-major.
    ///
    /// The slice length must equal the entry count; the order itself never
    /// changes after construction.
    pub fn reset(&mut self, entries: &[f32]) -> Result<&mut Self, Error> {
        let len = self.rows * self.cols;
        if entries.len() != len {
            return Err(Error::DimensionMismatch {
                expected: len,
                got: entries.len(),
            });
        }
        self.m[..len].copy_from_slice(entries);
        Ok(self)
    }

    /// Adds `other` entry-wise; both matrices must have the same order.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, Error> {
        self.check_order(other)?;
        let mut out = *self;
        for i in 0..self.rows * self.cols {
            out.m[i] += other.m[i];
        }
        Ok(out)
    }

    /// Subtracts `other` entry-wise; both matrices must have the same order.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, Error> {
        self.check_order(other)?;
        let mut out = *self;
        for i in 0..self.rows * self.cols {
            out.m[i] -= other.m[i];
        }
        Ok(out)
    }

    /// Multiplies entry-wise ("permul"); both matrices must have the same
    /// order.
    pub fn permul(&self, other: &Matrix) -> Result<Matrix, Error> {
        self.check_order(other)?;
        let mut out = *self;
        for i in 0..self.rows * self.cols {
            out.m[i] *= other.m[i];
        }
        Ok(out)
    }

    /// Multiplies `self * other` with standard row-by-column accumulation.
    ///
    /// The inner dimensions are checked before any computation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let m = mat2([0.0, 1.0, 2.0, 3.0]);
    /// let id = mat2([1.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(m.mul(&id), Ok(m));
    /// ```
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch {
                expected: self.cols,
                got: other.rows,
            });
        }
        let mut out = Matrix {
            rows: self.rows,
            cols: other.cols,
            m: [0.0; 16],
        };
        for i in 0..self.rows {
            for k in 0..other.cols {
                out.m[i * out.cols + k] = (0..self.cols)
                    .map(|r| self.m[i * self.cols + r] * other.m[r * other.cols + k])
                    .sum();
            }
        }
        Ok(out)
    }

    /// Applies `self` to a column vector; the vector's dimension must equal
    /// the matrix order.
    pub fn mul_vector(&self, vector: &Vector) -> Result<Vector, Error> {
        if self.cols != vector.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.cols,
                got: vector.dim(),
            });
        }
        let mut out = [0.0; 4];
        for (i, slot) in out.iter_mut().take(self.rows).enumerate() {
            *slot = (0..self.cols)
                .map(|k| self.m[i * self.cols + k] * vector[k])
                .sum();
        }
        Ok(Vector::from_parts(self.rows, out))
    }

    /// Returns the determinant.
    ///
    /// Each supported order uses its closed-form formula; order 4 expands
    /// cofactors along the first row. Other orders are unreachable because
    /// construction forbids them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// assert_eq!(mat2([1.0, 0.0, 0.0, 1.0]).determinant(), 1.0);
    /// assert_eq!(mat2([1.0, 2.0, 3.0, 4.0]).determinant(), -2.0);
    /// ```
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        match self.cols {
            2 => m[0] * m[3] - m[1] * m[2],
            3 => {
                m[0] * (m[4] * m[8] - m[5] * m[7])
                    + m[1] * (m[5] * m[6] - m[8] * m[3])
                    + m[2] * (m[3] * m[7] - m[4] * m[6])
            }
            _ => {
                // 3x3 minor over rows 2-4 and the given columns.
                let minor = |c0: usize, c1: usize, c2: usize| {
                    m[4 + c0] * (m[8 + c1] * m[12 + c2] - m[8 + c2] * m[12 + c1])
                        - m[4 + c1] * (m[8 + c0] * m[12 + c2] - m[8 + c2] * m[12 + c0])
                        + m[4 + c2] * (m[8 + c0] * m[12 + c1] - m[8 + c1] * m[12 + c0])
                };
                m[0] * minor(1, 2, 3) - m[1] * minor(0, 2, 3) + m[2] * minor(0, 1, 3)
                    - m[3] * minor(0, 1, 2)
            }
        }
    }

    /// Returns the transpose as a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let m = mat2([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.transposed(), mat2([1.0, 3.0, 2.0, 4.0]));
    /// assert_eq!(m.transposed().transposed(), m);
    /// ```
    pub fn transposed(&self) -> Matrix {
        let mut out = *self;
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.m[c * self.cols + r] = self.m[r * self.cols + c];
            }
        }
        out
    }

    /// Transposes `self` in place and returns it for chaining.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        for r in 0..self.rows {
            for c in r + 1..self.cols {
                self.m.swap(r * self.cols + c, c * self.cols + r);
            }
        }
        self
    }

    /// Returns the diagonal entries as a vector, one component per row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lume_math::*;
    /// let m = mat2([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), vec2(1.0, 4.0));
    /// ```
    pub fn trace(&self) -> Vector {
        let mut diag = [0.0; 4];
        for (i, slot) in diag.iter_mut().take(self.rows).enumerate() {
            *slot = self.m[i * self.cols + i];
        }
        Vector::from_parts(self.rows, diag)
    }

    fn check_row(&self, row: usize) -> Result<usize, Error> {
        if (1..=self.rows).contains(&row) {
            Ok(row - 1)
        } else {
            Err(Error::IndexOutOfBounds {
                index: row,
                bound: self.rows,
            })
        }
    }

    fn check_col(&self, col: usize) -> Result<usize, Error> {
        if (1..=self.cols).contains(&col) {
            Ok(col - 1)
        } else {
            Err(Error::IndexOutOfBounds {
                index: col,
                bound: self.cols,
            })
        }
    }

    fn check_order(&self, other: &Matrix) -> Result<(), Error> {
        if self.rows == other.rows && self.cols == other.cols {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.rows,
                got: other.rows,
            })
        }
    }
}

/// The canonical textual form: `matNN(...)`, entries comma-separated with a
/// space between rows.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mat{}{}(", self.rows, self.cols)?;
        for r in 0..self.rows {
            if r != 0 {
                f.write_str(" ")?;
            }
            for c in 0..self.cols {
                write!(f, "{}", self.m[r * self.cols + c])?;
                if r + 1 != self.rows || c + 1 != self.cols {
                    f.write_str(",")?;
                }
            }
        }
        f.write_str(")")
    }
}

/// Constructs a 2x2 matrix from row-major entries.
#[inline]
pub const fn mat2(e: [f32; 4]) -> Matrix {
    Matrix {
        rows: 2,
        cols: 2,
        m: [
            e[0], e[1], e[2], e[3], 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ],
    }
}

/// Constructs a 3x3 matrix from row-major entries.
#[inline]
pub const fn mat3(e: [f32; 9]) -> Matrix {
    Matrix {
        rows: 3,
        cols: 3,
        m: [
            e[0], e[1], e[2], e[3], e[4], e[5], e[6], e[7], e[8], 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.0,
        ],
    }
}

/// Constructs a 4x4 matrix from row-major entries.
#[inline]
pub const fn mat4(e: [f32; 16]) -> Matrix {
    Matrix {
        rows: 4,
        cols: 4,
        m: e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3};

    #[test]
    fn construction() {
        for count in [0, 1, 2, 3, 5, 8, 12, 15, 17] {
            assert_eq!(
                Matrix::from_entries(&vec![1.0; count]),
                Err(Error::InvalidDimension { count }),
            );
        }
        assert_eq!(Matrix::from_entries(&[1.0; 9]).unwrap().order(), 3);
        assert_eq!(mat4([0.0; 16]).order(), 4);
    }

    #[test]
    fn indexed_access() {
        let mut m = mat2([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(1, 1), Ok(1.0));
        assert_eq!(m.get(2, 1), Ok(3.0));
        assert_eq!(
            m.get(0, 1),
            Err(Error::IndexOutOfBounds { index: 0, bound: 2 }),
        );
        assert_eq!(
            m.get(1, 3),
            Err(Error::IndexOutOfBounds { index: 3, bound: 2 }),
        );

        m.set(2, 2, 777.0).unwrap();
        assert_eq!(m.get(2, 2), Ok(777.0));
        assert!(m.set(3, 1, 0.0).is_err());
    }

    #[test]
    fn row_views() {
        let mut m = mat3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let row = m.row(2).unwrap();
        assert_eq!(row.get(1), Ok(4.0));
        assert_eq!(row.get(3), Ok(6.0));
        assert_eq!(
            row.get(4),
            Err(Error::IndexOutOfBounds { index: 4, bound: 3 }),
        );
        assert!(m.row(4).is_err());

        m.row_mut(3).unwrap().set(2, 0.5).unwrap();
        assert_eq!(m.get(3, 2), Ok(0.5));
    }

    #[test]
    fn add_sub() {
        let a = mat2([1.0, 2.0, 3.0, 4.0]);
        let b = mat2([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(a.add(&b), Ok(mat2([5.0, 5.0, 5.0, 5.0])));
        assert_eq!(a.sub(&a), Ok(mat2([0.0; 4])));
        assert_eq!(
            a.add(&mat3([0.0; 9])),
            Err(Error::DimensionMismatch {
                expected: 2,
                got: 3
            }),
        );
    }

    #[test]
    fn mul() {
        let a = mat2([1.0, 2.0, 3.0, 4.0]);
        let b = mat2([5.0, 6.0, 7.0, 8.0]);
        assert_eq!(a.mul(&b), Ok(mat2([19.0, 22.0, 43.0, 50.0])));
        assert!(a.mul(&mat3([0.0; 9])).is_err());
    }

    #[test]
    fn mul_vector() {
        let m = mat2([0.0, 1.0, 2.0, 3.0]);
        assert_eq!(m.mul_vector(&vec2(4.0, 5.0)), Ok(vec2(5.0, 23.0)));
        assert_eq!(
            m.mul_vector(&vec3(1.0, 2.0, 3.0)),
            Err(Error::DimensionMismatch {
                expected: 2,
                got: 3
            }),
        );
    }

    #[test]
    fn permul() {
        let a = mat2([1.0, 2.0, 3.0, 4.0]);
        let b = mat2([2.0, 2.0, 2.0, 2.0]);
        assert_eq!(a.permul(&b), Ok(mat2([2.0, 4.0, 6.0, 8.0])));
    }

    #[test]
    fn determinant() {
        assert_eq!(mat2([0.0; 4]).determinant(), 0.0);
        assert_eq!(mat2([1.0, 0.0, 0.0, 1.0]).determinant(), 1.0);
        assert_eq!(mat2([1.0, 2.0, 3.0, 4.0]).determinant(), -2.0);

        #[rustfmt::skip]
        let m = mat3([
            -2.0, -1.0,  2.0,
             2.0,  1.0,  4.0,
            -3.0,  3.0, -1.0,
        ]);
        assert_eq!(m.determinant(), 54.0);
        assert_eq!(m.transposed().determinant(), 54.0);

        #[rustfmt::skip]
        let m = mat4([
            1.0, 0.0, 2.0, 0.0,
            0.0, 3.0, 0.0, 4.0,
            5.0, 0.0, 6.0, 0.0,
            0.0, 7.0, 0.0, 8.0,
        ]);
        // block-diagonal after a row/column permutation: det = (6-10)*(24-28)
        assert_eq!(m.determinant(), 16.0);
        assert_eq!(m.transposed().determinant(), 16.0);
    }

    #[test]
    fn transpose() {
        let mut m = mat3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = m.transposed();
        assert_eq!(t.entries(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(t.transposed(), m);

        m.transpose_in_place();
        assert_eq!(m, t);
    }

    #[test]
    fn trace_is_a_vector() {
        let m = mat3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.trace(), vec3(1.0, 5.0, 9.0));
    }

    #[test]
    fn map_and_reset() {
        let mut m = mat2([1.0, 2.0, 3.0, 4.0]);
        let mut seen = Vec::new();
        m.map(|e, r, c| {
            seen.push((r, c));
            e * 2.0
        });
        assert_eq!(m, mat2([2.0, 4.0, 6.0, 8.0]));
        assert_eq!(seen, [(1, 1), (1, 2), (2, 1), (2, 2)]);

        m.reset(&[9.0, 8.0, 7.0, 6.0]).unwrap();
        assert_eq!(m, mat2([9.0, 8.0, 7.0, 6.0]));
        assert!(m.reset(&[1.0; 9]).is_err());
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{}", mat2([1.0, 2.0, 3.0, 4.0])),
            "mat22(1,2, 3,4)"
        );
    }
}
