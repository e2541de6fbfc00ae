use crate::Error;

/// A read-only view of one matrix row.
///
/// Views are handed out by [`Matrix::row`](super::Matrix::row) and use the
/// same 1-based, bounds-checked column addressing as the owning matrix. They
/// borrow the matrix storage directly and are meant to be consumed on the
/// spot, not stored; the borrow checker keeps them from outliving the
/// matrix.
#[derive(Debug)]
pub struct Row<'m> {
    cells: &'m [f32],
}

impl<'m> Row<'m> {
    pub(super) fn new(cells: &'m [f32]) -> Self {
        Self { cells }
    }

    /// Reads the entry at the 1-based `col`.
    pub fn get(&self, col: usize) -> Result<f32, Error> {
        match self.cells.get(col.wrapping_sub(1)) {
            Some(value) => Ok(*value),
            None => Err(Error::IndexOutOfBounds {
                index: col,
                bound: self.cells.len(),
            }),
        }
    }

    /// Returns the number of columns in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A mutable view of one matrix row; see [`Row`].
#[derive(Debug)]
pub struct RowMut<'m> {
    cells: &'m mut [f32],
}

impl<'m> RowMut<'m> {
    pub(super) fn new(cells: &'m mut [f32]) -> Self {
        Self { cells }
    }

    /// Reads the entry at the 1-based `col`.
    pub fn get(&self, col: usize) -> Result<f32, Error> {
        match self.cells.get(col.wrapping_sub(1)) {
            Some(value) => Ok(*value),
            None => Err(Error::IndexOutOfBounds {
                index: col,
                bound: self.cells.len(),
            }),
        }
    }

    /// Writes the entry at the 1-based `col`.
    pub fn set(&mut self, col: usize, value: f32) -> Result<(), Error> {
        let bound = self.cells.len();
        match self.cells.get_mut(col.wrapping_sub(1)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index: col, bound }),
        }
    }

    /// Returns the number of columns in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{mat2, Error};

    #[test]
    fn one_based_bounds() {
        let m = mat2([1.0, 2.0, 3.0, 4.0]);
        let row = m.row(1).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(1), Ok(1.0));
        assert_eq!(row.get(2), Ok(2.0));
        assert_eq!(
            row.get(0),
            Err(Error::IndexOutOfBounds { index: 0, bound: 2 }),
        );
        assert_eq!(
            row.get(3),
            Err(Error::IndexOutOfBounds { index: 3, bound: 2 }),
        );
    }

    #[test]
    fn writes_through_to_the_matrix() {
        let mut m = mat2([1.0, 2.0, 3.0, 4.0]);
        {
            let mut row = m.row_mut(2).unwrap();
            row.set(1, 30.0).unwrap();
            assert_eq!(row.set(5, 0.0), Err(Error::IndexOutOfBounds { index: 5, bound: 2 }));
        }
        assert_eq!(m, mat2([1.0, 2.0, 30.0, 4.0]));
    }
}
