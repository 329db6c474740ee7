use crate::error::{LinalgError, Result};
use crate::matrix::scalar::Scalar;
use std::ops;

/// Dense `rows x cols` matrix, stored row-major. Either size may be zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    pub fn new(rows: usize, cols: usize) -> Matrix<T> {
        Matrix::filled(rows, cols, T::zero())
    }

    pub fn filled(rows: usize, cols: usize, value: T) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    pub fn from_fn(rows: usize, cols: usize, mut cell: impl FnMut(usize, usize) -> T) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            cells: (0..rows)
                .flat_map(|i| (0..cols).map(move |j| (i, j)))
                .map(|(i, j)| cell(i, j))
                .collect(),
        }
    }

    /// Builds a matrix from its rows. Short rows are padded with zeros up to
    /// the longest one.
    pub fn from_list(lines: Vec<Vec<T>>) -> Matrix<T> {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        Matrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat(T::zero()).take(pad))
                })
                .collect(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn identity(n: usize) -> Matrix<T> {
        Matrix::eye(n, n)
    }

    /// Ones on the main diagonal, zeros elsewhere. Need not be square.
    pub fn eye(rows: usize, cols: usize) -> Matrix<T> {
        Matrix::from_fn(rows, cols, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    pub(crate) fn scale_row(&mut self, row: usize, factor: &T) {
        for x in &mut self.cells[row * self.cols..(row + 1) * self.cols] {
            *x = x.clone() * factor.clone();
        }
    }

    /// `row[target] -= factor * row[source]`
    pub(crate) fn eliminate_row(&mut self, target: usize, source: usize, factor: &T) {
        for k in 0..self.cols {
            let b = self.at(source, k) * factor.clone();
            let cell = &mut self.cells[target * self.cols + k];
            *cell = cell.clone() - b;
        }
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols, self.rows, |i, j| self.at(j, i))
    }

    pub fn scale(&self, k: &T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| x.clone() * k.clone()).collect(),
        }
    }

    pub(crate) fn require_square(&self, op: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                op,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// `self^exponent` by repeated squaring. A negative exponent inverts the
    /// positive power, so it fails with `Degenerate` on a singular matrix.
    pub fn pow(&self, exponent: i64) -> Result<Matrix<T>> {
        self.require_square("pow")?;

        let positive = self.pow_unsigned(exponent.unsigned_abs())?;
        if exponent < 0 {
            return positive.inverse();
        }
        Ok(positive)
    }

    fn pow_unsigned(&self, mut exponent: u64) -> Result<Matrix<T>> {
        let mut result = Matrix::identity(self.rows);
        let mut base = self.clone();

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = (&result * &base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = (&base * &base)?;
            }
        }

        Ok(result)
    }

    fn zip_with(
        &self,
        rhs: &Matrix<T>,
        op: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(a.to_owned(), b.to_owned()))
                .collect(),
        })
    }
}

impl<T: Scalar> ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T: Scalar> ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: Scalar> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }
}

impl<T: Scalar> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(rhs, "sub", |a, b| a - b)
    }
}

impl<T: Scalar> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                op: "mul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(Matrix::from_fn(self.rows, rhs.cols, |i, j| {
            (0..self.cols).fold(T::zero(), |acc, k| acc + self.at(i, k) * rhs.at(k, j))
        }))
    }
}

impl<T: Scalar> ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| -x.clone()).collect(),
        }
    }
}

impl<T: Scalar> ops::Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
