//! Immutable rectangular matrices with exact cofactor-based linear algebra.
//!
//! Every operation borrows its receiver and returns a new [`Matrix`]; nothing
//! is ever mutated in place. Cells can be any [`Element`], machine integers
//! included; inversion and negative powers need a [`Field`] such as `f64` or
//! the exact rational [`Fraction`].

pub mod error;

pub mod matrix {
    pub mod element;
    pub mod matrix;
    pub mod matrix_det;
    pub mod matrix_ops;
    pub mod matrix_pred;

    #[cfg(test)]
    pub(crate) mod testing;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

pub use error::{FractionError, MatrixError};
pub use matrix::element::{Element, Field};
pub use matrix::matrix::Matrix;
pub use rings::fraction::Fraction;
