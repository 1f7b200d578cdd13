use itertools::Itertools;
use std::fmt;
use std::ops::Range;

use crate::error::MatrixError;
use crate::matrix::element::{same_value, Element};

/// Immutable, row-major rectangular grid of cells.
///
/// Operations borrow `self` and return freshly built matrices, so a value can
/// be shared between callers (and threads) without any aliasing concerns.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Debug, Clone, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Builds a matrix from row literals, converting each cell with `From`.
///
/// ```
/// use exact_matrix::{matrix, Matrix};
///
/// let m: Matrix<f64> = matrix![[1, 2], [3, 4]].unwrap();
/// assert_eq!(m.get(1, 0), Some(&3.0));
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($cell:expr),* $(,)?]),* $(,)?) => {
        $crate::matrix::matrix::Matrix::from_list(::std::vec![
            $(::std::vec![$(::core::convert::From::from($cell)),*]),*
        ])
    };
}

/// Half-open `start..end` clamped into `0..len`; `None` means "to the end".
fn clamp_range(len: usize, start: usize, end: Option<usize>) -> Range<usize> {
    let end = end.map_or(len, |e| e.min(len));
    start.min(end)..end
}

impl<T> Matrix<T> {
    /// Builds a matrix from a list of rows, rejecting ragged input.
    ///
    /// An empty list gives the 0x0 matrix.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(Matrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    /// Variadic-style entry point: any iterable of iterable rows.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        Self::from_list(rows.into_iter().map(|r| r.into_iter().collect()).collect())
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Matrix { rows, cols, cells }
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell at `(row, col)`, or `None` when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(self.at(row, col))
        } else {
            None
        }
    }

    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Cells in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix::from_cells(self.rows, self.cols, self.cells.iter().map(f).collect())
    }
}

impl<T: Clone> Matrix<T> {
    pub fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|i| self.row_slice(i).to_vec()).collect()
    }

    /// Row `row` as a 1xN matrix (0xN when out of range).
    pub fn get_row(&self, row: usize) -> Matrix<T> {
        self.slice_rows(row, Some(row.saturating_add(1)))
    }

    /// Column `col` as an Nx1 matrix (Nx0 when out of range).
    pub fn get_column(&self, col: usize) -> Matrix<T> {
        self.slice_columns(col, Some(col.saturating_add(1)))
    }

    pub fn slice_rows(&self, start: usize, end: Option<usize>) -> Matrix<T> {
        let range = clamp_range(self.rows, start, end);
        Matrix::from_cells(
            range.len(),
            self.cols,
            self.cells[range.start * self.cols..range.end * self.cols].to_vec(),
        )
    }

    pub fn slice_columns(&self, start: usize, end: Option<usize>) -> Matrix<T> {
        let range = clamp_range(self.cols, start, end);
        Matrix::from_cells(
            self.rows,
            range.len(),
            (0..self.rows)
                .flat_map(|i| self.row_slice(i)[range.clone()].iter().cloned())
                .collect(),
        )
    }

    pub fn slice_block(
        &self,
        row_start: usize,
        row_end: Option<usize>,
        col_start: usize,
        col_end: Option<usize>,
    ) -> Matrix<T> {
        self.slice_rows(row_start, row_end)
            .slice_columns(col_start, col_end)
    }

    /// Copy without row `row`; an out-of-range index removes nothing.
    pub fn omit_row(&self, row: usize) -> Matrix<T> {
        let rows = if row < self.rows { self.rows - 1 } else { self.rows };
        Matrix::from_cells(
            rows,
            self.cols,
            (0..self.rows)
                .filter(|&i| i != row)
                .flat_map(|i| self.row_slice(i).iter().cloned())
                .collect(),
        )
    }

    /// Copy without column `col`; an out-of-range index removes nothing.
    pub fn omit_column(&self, col: usize) -> Matrix<T> {
        let cols = if col < self.cols { self.cols - 1 } else { self.cols };
        Matrix::from_cells(
            self.rows,
            cols,
            (0..self.rows)
                .flat_map(|i| {
                    self.row_slice(i)
                        .iter()
                        .enumerate()
                        .filter(move |&(j, _)| j != col)
                        .map(|(_, v)| v.clone())
                })
                .collect(),
        )
    }

    /// Copy with the cell at `(row, col)` set to `value`.
    pub fn replace(&self, row: usize, col: usize, value: T) -> Result<Matrix<T>, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::out_of_bounds((row, col), self.shape()));
        }

        let mut cells = self.cells.clone();
        cells[row * self.cols + col] = value;
        Ok(Matrix::from_cells(self.rows, self.cols, cells))
    }

    /// Places `other` to the right of `self`.
    pub fn combine_horizontal(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.rows != other.rows {
            return Err(MatrixError::dimension_mismatch(
                "horizontally combine",
                self.shape(),
                other.shape(),
            ));
        }

        Ok(Matrix::from_cells(
            self.rows,
            self.cols + other.cols,
            (0..self.rows)
                .flat_map(|i| self.row_slice(i).iter().chain(other.row_slice(i)).cloned())
                .collect(),
        ))
    }

    /// Places `other` below `self`.
    pub fn combine_vertical(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != other.cols {
            return Err(MatrixError::dimension_mismatch(
                "vertically combine",
                self.shape(),
                other.shape(),
            ));
        }

        Ok(Matrix::from_cells(
            self.rows + other.rows,
            self.cols,
            self.cells.iter().chain(other.cells.iter()).cloned().collect(),
        ))
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_cells(
            self.cols,
            self.rows,
            (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c).clone()))
                .collect(),
        )
    }
}

impl<T: Element> Matrix<T> {
    pub fn identity(size: usize) -> Matrix<T> {
        Matrix::from_cells(
            size,
            size,
            (0..size)
                .flat_map(|i| (0..size).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        )
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix<T> {
        Matrix::from_cells(rows, cols, vec![T::zero(); rows * cols])
    }

    pub(crate) fn require_square(&self, operation: &'static str) -> Result<(), MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::not_square(operation, self.shape()));
        }
        Ok(())
    }
}

/// Cell-wise equality where NaN equals NaN, so a matrix always equals itself.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| same_value(a, b))
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        Matrix::from_list(lines)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}]", self.row_slice(i).iter().join(", "))?;
        }
        write!(f, "]")
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::testing::{random_matrix, seeded_rng};

    fn m() -> Matrix<i64> {
        matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]].unwrap()
    }

    #[test]
    fn test_construction() {
        let a: Matrix<i64> = matrix![[1, 2], [3, 4]].unwrap();
        let b = Matrix::from_list(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
        let c = Matrix::from_rows([[1i64, 2], [3, 4]]).unwrap();
        let d = Matrix::try_from(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
        assert_eq!(a.to_list(), vec![vec![1, 2], vec![3, 4]]);

        let row: Matrix<i64> = matrix![[4, 5, 6]].unwrap();
        assert_eq!(row.shape(), (1, 3));
    }

    #[test]
    fn test_ragged_rows() {
        let err = Matrix::from_list(vec![vec![1i64, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );

        let err = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0]]);
        assert!(matches!(err, Err(MatrixError::RaggedRows { row: 2, .. })));
    }

    #[test]
    fn test_empty_matrix() {
        let empty = Matrix::<i64>::from_list(vec![]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
        assert_eq!(empty.get(0, 0), None);
        assert_eq!(empty.to_string(), "[]");

        let no_rows = m().slice_rows(3, None);
        assert_eq!(no_rows.shape(), (0, 3));
        assert_ne!(no_rows, empty);
    }

    #[test]
    fn test_accessors() {
        let m = m();
        assert_eq!(m.num_rows(), 3);
        assert_eq!(m.num_columns(), 3);
        assert_eq!(m.get(0, 1), Some(&2));
        assert_eq!(m.get(1, 2), Some(&6));
        assert_eq!(m.get(500, 0), None);
        assert_eq!(m.get(0, 500), None);
        assert_eq!(m.get(0, 3), None);

        assert_eq!(m.get_row(1), matrix![[4, 5, 6]].unwrap());
        assert_eq!(m.get_column(2), matrix![[3], [6], [9]].unwrap());
        assert_eq!(m.get_row(9).shape(), (0, 3));
        assert_eq!(m.get_column(9).shape(), (3, 0));
        assert_eq!(m.values().copied().collect::<Vec<_>>(), (1..=9).collect::<Vec<i64>>());
    }

    #[test]
    fn test_slices() {
        let m = m();
        assert_eq!(m.slice_rows(0, Some(2)), matrix![[1, 2, 3], [4, 5, 6]].unwrap());
        assert_eq!(m.slice_columns(1, None), matrix![[2, 3], [5, 6], [8, 9]].unwrap());
        assert_eq!(m.slice_block(1, Some(2), 1, Some(3)), matrix![[5, 6]].unwrap());

        // out-of-range bounds clamp
        assert_eq!(m.slice_rows(1, Some(100)), matrix![[4, 5, 6], [7, 8, 9]].unwrap());
        assert_eq!(m.slice_columns(2, Some(1)).shape(), (3, 0));
        assert_eq!(m.slice_rows(7, Some(9)).shape(), (0, 3));
    }

    #[test]
    fn test_omit() {
        let m = m();
        assert_eq!(m.omit_row(2), matrix![[1, 2, 3], [4, 5, 6]].unwrap());
        assert_eq!(m.omit_column(1), matrix![[1, 3], [4, 6], [7, 9]].unwrap());
        assert_eq!(m.omit_row(3), m);
        assert_eq!(m.omit_column(3), m);
        assert_eq!(m.omit_row(0).omit_row(0).omit_row(0).shape(), (0, 3));
    }

    #[test]
    fn test_combine() {
        let small: Matrix<i64> = matrix![[1, 2], [3, 4]].unwrap();
        let constant: Matrix<i64> = matrix![[5, 5], [5, 5]].unwrap();

        assert_eq!(
            small.combine_horizontal(&constant).unwrap(),
            matrix![[1, 2, 5, 5], [3, 4, 5, 5]].unwrap()
        );
        assert_eq!(
            small.combine_vertical(&constant).unwrap(),
            matrix![[1, 2], [3, 4], [5, 5], [5, 5]].unwrap()
        );

        assert_eq!(
            small.combine_horizontal(&m()),
            Err(MatrixError::dimension_mismatch(
                "horizontally combine",
                (2, 2),
                (3, 3)
            ))
        );
        assert!(matches!(
            small.combine_vertical(&m()),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert_eq!(
            m().slice_rows(3, None).combine_vertical(&m()).unwrap(),
            m()
        );
    }

    #[test]
    fn test_replace() {
        let m = m();
        let replaced = m.replace(1, 2, 90).unwrap();
        assert_eq!(replaced, matrix![[1, 2, 3], [4, 5, 90], [7, 8, 9]].unwrap());
        assert_eq!(m.get(1, 2), Some(&6));

        assert_eq!(
            m.replace(3, 0, 1),
            Err(MatrixError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert!(m.replace(0, 3, 1).is_err());
    }

    #[test]
    fn test_transpose() {
        assert_eq!(m().transpose(), matrix![[1, 4, 7], [2, 5, 8], [3, 6, 9]].unwrap());

        let not_square: Matrix<i64> = matrix![[1, 2, 3], [4, 5, 6]].unwrap();
        assert_eq!(not_square.transpose(), matrix![[1, 4], [2, 5], [3, 6]].unwrap());
        assert_eq!(not_square.transpose().transpose(), not_square);
    }

    #[test]
    fn test_transpose_involution() {
        let mut rng = seeded_rng(11);
        for rows in 1..5 {
            for cols in 1..5 {
                let a = random_matrix(&mut rng, rows, cols);
                assert_eq!(a.transpose().transpose(), a);
                assert_eq!(a.transpose().shape(), (cols, rows));
            }
        }
    }

    #[test]
    fn test_transpose_without_rows() {
        let wide = m().slice_rows(3, None);
        assert_eq!(wide.shape(), (0, 3));

        let tall = wide.transpose();
        assert_eq!(tall.shape(), (3, 0));
        assert_eq!(tall.transpose(), wide);
        assert_ne!(tall.transpose(), Matrix::from_list(vec![]).unwrap());
    }

    #[test]
    fn test_equality_treats_nan_as_equal() {
        let nan: Matrix<f64> = matrix![[1, f64::NAN]].unwrap();
        assert_eq!(nan, nan.clone());
        assert_ne!(nan, matrix![[1, 2]].unwrap());
        assert_ne!(nan, matrix![[f64::NAN, 1]].unwrap());
        assert_ne!(nan, nan.transpose());
    }

    #[test]
    fn test_operations_leave_receiver_untouched() {
        let m = m();
        let snapshot = m.to_list();
        let _ = m.transpose();
        let _ = m.omit_row(0);
        let _ = m.omit_column(0);
        let _ = m.replace(0, 0, 100);
        let _ = m.slice_block(0, Some(2), 0, Some(2));
        let _ = m.combine_vertical(&m);
        assert_eq!(m.to_list(), snapshot);
    }

    #[test]
    fn test_factories() {
        let id: Matrix<i64> = Matrix::identity(3);
        assert_eq!(id, matrix![[1, 0, 0], [0, 1, 0], [0, 0, 1]].unwrap());
        let zeros: Matrix<i64> = Matrix::zeros(2, 3);
        assert_eq!(zeros, matrix![[0, 0, 0], [0, 0, 0]].unwrap());
        assert_eq!(Matrix::<i64>::identity(0).shape(), (0, 0));
    }

    #[test]
    fn test_display_and_map() {
        let m: Matrix<f64> = matrix![[1, 2], [3.5, 4]].unwrap();
        assert_eq!(m.to_string(), "[[1, 2], [3.5, 4]]");
        assert_eq!(m.map(|v| v * 2.0), matrix![[2, 4], [7, 8]].unwrap());
    }
}
