use itertools::Itertools;
use log::trace;
use std::ops;

use crate::error::MatrixError;
use crate::matrix::element::{Element, Field};
use crate::matrix::matrix::Matrix;

impl<T: Element> Matrix<T> {
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::dimension_mismatch(
                "add",
                self.shape(),
                other.shape(),
            ));
        }

        Ok(Matrix::from_cells(
            self.num_rows(),
            self.num_columns(),
            self.values()
                .zip_eq(other.values())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        ))
    }

    /// `self - other`, computed as `(-1 * other) + self`.
    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        other.scale(-T::one()).add(self)
    }

    pub fn scale(&self, scalar: T) -> Matrix<T> {
        self.map(|value| scalar.clone() * value.clone())
    }

    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.num_columns() != other.num_rows() {
            return Err(MatrixError::IncompatibleDimensions {
                left_cols: self.num_columns(),
                right_rows: other.num_rows(),
            });
        }
        Ok(self.product(other))
    }

    /// Non-negative integer power, available for every element type.
    pub fn pow_unsigned(&self, exponent: u64) -> Result<Matrix<T>, MatrixError> {
        self.require_square("raise to an exponent")?;
        Ok(self.power(exponent))
    }

    // Exponentiation by squaring; `self` must be square.
    fn power(&self, exponent: u64) -> Matrix<T> {
        match exponent {
            0 => Matrix::identity(self.num_rows()),
            e if e % 2 == 1 => {
                trace!("power {e}: one multiplication by the base");
                self.power(e - 1).product(self)
            }
            e => {
                trace!("power {e}: squaring power {}", e / 2);
                let half = self.power(e / 2);
                half.product(&half)
            }
        }
    }

    // Callers check `self.num_columns() == rhs.num_rows()`.
    fn product(&self, rhs: &Matrix<T>) -> Matrix<T> {
        let inner = self.num_columns();
        Matrix::from_cells(
            self.num_rows(),
            rhs.num_columns(),
            (0..self.num_rows())
                .flat_map(|i| {
                    (0..rhs.num_columns()).map(move |j| {
                        (0..inner).fold(T::zero(), |acc, k| {
                            acc + self.at(i, k).clone() * rhs.at(k, j).clone()
                        })
                    })
                })
                .collect(),
        )
    }
}

impl<T: Field> Matrix<T> {
    /// Integer power; negative exponents invert the positive power.
    pub fn pow(&self, exponent: i64) -> Result<Matrix<T>, MatrixError> {
        self.require_square("raise to an exponent")?;

        let power = self.power(exponent.unsigned_abs());
        if exponent < 0 {
            return power.inverse();
        }
        Ok(power)
    }

    /// Same as [`Matrix::pow`] for exponents coming from untyped callers.
    ///
    /// Exponents beyond the `i64` range saturate.
    pub fn powf(&self, exponent: f64) -> Result<Matrix<T>, MatrixError> {
        self.require_square("raise to an exponent")?;
        if !exponent.is_finite() || exponent.fract() != 0.0 {
            return Err(MatrixError::NonIntegerExponent { exponent });
        }
        self.pow(exponent as i64)
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Matrix::add(self, rhs)
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Matrix::subtract(self, rhs)
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Matrix::multiply(self, rhs)
    }
}

impl<T: Element> ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.scale(-T::one())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
