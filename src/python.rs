use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

/// Immutable matrix of floats. Every method returns a new matrix.
#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: Matrix<f64>,
}

impl From<Matrix<f64>> for PyMatrix {
    fn from(inner: Matrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    /// Accepts `Matrix([[1, 2], [3, 4]])` as well as `Matrix([1, 2], [3, 4])`.
    #[new]
    #[pyo3(signature = (*rows))]
    fn new(rows: &Bound<'_, PyTuple>) -> PyResult<Self> {
        if rows.len() == 1 {
            if let Ok(lines) = rows.get_item(0)?.extract::<Vec<Vec<f64>>>() {
                return Ok(Matrix::from_list(lines)?.into());
            }
        }
        let lines: Vec<Vec<f64>> = rows.extract()?;
        Ok(Matrix::from_list(lines)?.into())
    }

    #[staticmethod]
    fn identity(size: usize) -> Self {
        Matrix::<f64>::identity(size).into()
    }

    #[staticmethod]
    fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::<f64>::zeros(rows, cols).into()
    }

    fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    fn num_rows(&self) -> usize {
        self.inner.num_rows()
    }

    fn num_columns(&self) -> usize {
        self.inner.num_columns()
    }

    /// `None` when the position is outside the matrix.
    fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.inner.get(row, col).copied()
    }

    fn get_row(&self, row: usize) -> Self {
        self.inner.get_row(row).into()
    }

    fn get_column(&self, col: usize) -> Self {
        self.inner.get_column(col).into()
    }

    #[pyo3(signature = (start, end=None))]
    fn slice_rows(&self, start: usize, end: Option<usize>) -> Self {
        self.inner.slice_rows(start, end).into()
    }

    #[pyo3(signature = (start, end=None))]
    fn slice_columns(&self, start: usize, end: Option<usize>) -> Self {
        self.inner.slice_columns(start, end).into()
    }

    #[pyo3(signature = (row_start, row_end=None, col_start=0, col_end=None))]
    fn slice_block(
        &self,
        row_start: usize,
        row_end: Option<usize>,
        col_start: usize,
        col_end: Option<usize>,
    ) -> Self {
        self.inner
            .slice_block(row_start, row_end, col_start, col_end)
            .into()
    }

    fn omit_row(&self, row: usize) -> Self {
        self.inner.omit_row(row).into()
    }

    fn omit_column(&self, col: usize) -> Self {
        self.inner.omit_column(col).into()
    }

    fn replace(&self, row: usize, col: usize, value: f64) -> PyResult<Self> {
        Ok(self.inner.replace(row, col, value)?.into())
    }

    fn combine_horizontal(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.combine_horizontal(&other.inner)?.into())
    }

    fn combine_vertical(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.combine_vertical(&other.inner)?.into())
    }

    fn transpose(&self) -> Self {
        self.inner.transpose().into()
    }

    #[getter]
    #[allow(non_snake_case)]
    fn T(&self) -> Self {
        self.transpose()
    }

    fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    fn adjugate(&self) -> PyResult<Self> {
        Ok(self.inner.adjugate()?.into())
    }

    fn inverse(&self) -> PyResult<Self> {
        Ok(self.inner.inverse()?.into())
    }

    fn add(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.add(&other.inner)?.into())
    }

    fn subtract(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.subtract(&other.inner)?.into())
    }

    fn multiply(&self, other: &PyMatrix) -> PyResult<Self> {
        Ok(self.inner.multiply(&other.inner)?.into())
    }

    fn scale(&self, scalar: f64) -> Self {
        self.inner.scale(scalar).into()
    }

    /// Raises to an integer power; `2.5` is rejected, `2.0` is accepted.
    fn pow(&self, exponent: f64) -> PyResult<Self> {
        Ok(self.inner.powf(exponent)?.into())
    }

    fn __add__(&self, other: &PyMatrix) -> PyResult<Self> {
        self.add(other)
    }

    fn __sub__(&self, other: &PyMatrix) -> PyResult<Self> {
        self.subtract(other)
    }

    fn __matmul__(&self, other: &PyMatrix) -> PyResult<Self> {
        self.multiply(other)
    }

    fn __neg__(&self) -> Self {
        self.scale(-1.0)
    }

    fn __eq__(&self, other: &PyMatrix) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!("Matrix({})", self.inner)
    }

    fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    fn is_symmetric(&self) -> bool {
        self.inner.is_symmetric()
    }

    fn is_skew_symmetric(&self) -> bool {
        self.inner.is_skew_symmetric()
    }

    fn is_upper_triangular(&self) -> bool {
        self.inner.is_upper_triangular()
    }

    fn is_lower_triangular(&self) -> bool {
        self.inner.is_lower_triangular()
    }

    fn is_diagonal(&self) -> bool {
        self.inner.is_diagonal()
    }

    fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    fn is_non_zero(&self) -> bool {
        self.inner.is_non_zero()
    }

    fn is_singular(&self) -> PyResult<bool> {
        Ok(self.inner.is_singular()?)
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn exact_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    Ok(())
}
