use crate::error::MatrixError;
use crate::matrix::element::{is_falsy, Element};
use crate::matrix::matrix::Matrix;

impl<T: Element> Matrix<T> {
    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_columns()
    }

    pub fn is_symmetric(&self) -> bool {
        self.transpose() == *self
    }

    pub fn is_skew_symmetric(&self) -> bool {
        self.transpose().scale(-T::one()) == *self
    }

    /// Every cell strictly below the main diagonal is zero (or NaN).
    pub fn is_upper_triangular(&self) -> bool {
        (0..self.num_rows())
            .all(|i| (0..i.min(self.num_columns())).all(|j| is_falsy(self.at(i, j))))
    }

    pub fn is_lower_triangular(&self) -> bool {
        self.transpose().is_upper_triangular()
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    /// Non-square matrices are simply not the identity.
    pub fn is_identity(&self) -> bool {
        self.is_square() && Matrix::<T>::identity(self.num_rows()) == *self
    }

    /// Some cell is neither zero nor NaN.
    pub fn is_non_zero(&self) -> bool {
        self.values().any(|value| !is_falsy(value))
    }

    /// Only an exactly zero determinant counts; a NaN one does not.
    pub fn is_singular(&self) -> Result<bool, MatrixError> {
        Ok(self.determinant()?.is_zero())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
