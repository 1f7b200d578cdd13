use itertools::iproduct;
use log::{debug, trace};

use crate::error::MatrixError;
use crate::matrix::element::{is_falsy, Element, Field};
use crate::matrix::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Determinant by Laplace expansion along the first row.
    ///
    /// This is O(n!) and meant for small matrices; zero cells in the first
    /// row are skipped without expanding their minors.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.require_square("compute the determinant of")?;
        Ok(self.laplace_determinant())
    }

    /// Signed minor `(-1)^(row+col) * det(minor(row, col))`.
    pub fn cofactor_entry(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.require_square("compute a cofactor of")?;
        if row >= self.num_rows() || col >= self.num_columns() {
            return Err(MatrixError::out_of_bounds((row, col), self.shape()));
        }
        Ok(self.signed_minor(row, col))
    }

    pub fn cofactor(&self) -> Result<Matrix<T>, MatrixError> {
        self.require_square("compute the cofactor of")?;

        let n = self.num_rows();
        Ok(Matrix::from_cells(
            n,
            n,
            iproduct!(0..n, 0..n)
                .map(|(i, j)| self.signed_minor(i, j))
                .collect(),
        ))
    }

    pub fn adjugate(&self) -> Result<Matrix<T>, MatrixError> {
        Ok(self.cofactor()?.transpose())
    }

    fn laplace_determinant(&self) -> T {
        let n = self.num_rows();
        match n {
            // empty product
            0 => T::one(),
            1 => self.at(0, 0).clone(),
            _ => {
                trace!("expanding {n}x{n} determinant along the first row");
                (0..n)
                    .filter(|&j| !self.at(0, j).is_zero())
                    .fold(T::zero(), |acc, j| {
                        acc + self.at(0, j).clone() * self.signed_minor(0, j)
                    })
            }
        }
    }

    fn signed_minor(&self, row: usize, col: usize) -> T {
        let minor = self.omit_row(row).omit_column(col).laplace_determinant();
        if (row + col) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }
}

impl<T: Field> Matrix<T> {
    /// `adjugate / det`; a zero or NaN determinant is reported as singular.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        self.require_square("compute the inverse of")?;

        let det = self.laplace_determinant();
        if is_falsy(&det) {
            debug!("refusing to invert singular {}x{} matrix", self.num_rows(), self.num_columns());
            return Err(MatrixError::Singular);
        }

        Ok(self.adjugate()?.scale(T::one() / det))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
