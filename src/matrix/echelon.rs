use crate::error::{LinalgError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;

/// Receives every row operation performed by [`eliminate`], in the order it
/// is applied, so a second structure can follow the same pivot decisions.
pub trait RowObserver<T> {
    fn swap(&mut self, _a: usize, _b: usize) {}

    fn scale(&mut self, _row: usize, _factor: &T) {}

    /// `row[target] -= factor * row[source]`
    fn eliminate(&mut self, _target: usize, _source: usize, _factor: &T) {}
}

impl<T> RowObserver<T> for () {}

impl<T: Scalar> RowObserver<T> for Matrix<T> {
    fn swap(&mut self, a: usize, b: usize) {
        self.swap_rows(a, b);
    }

    fn scale(&mut self, row: usize, factor: &T) {
        self.scale_row(row, factor);
    }

    fn eliminate(&mut self, target: usize, source: usize, factor: &T) {
        self.eliminate_row(target, source, factor);
    }
}

/// Mirrors row swaps onto a parallel list and ignores the arithmetic.
pub struct SwapMirror<'a, V>(pub &'a mut [V]);

impl<T, V> RowObserver<T> for SwapMirror<'_, V> {
    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

/// Outcome of a reduction: the rank and, for each of the first `rank` rows,
/// the column holding its leading 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echelon {
    pub rank: usize,
    pub pivots: Vec<usize>,
}

/// Gauss-Jordan elimination to reduced row echelon form, in place.
///
/// Columns are scanned left to right. The first row at or below the current
/// pivot row with a non-zero entry is rotated up by adjacent swaps, so rows
/// not chosen keep their relative order. The pivot row is divided by the
/// pivot and the column is cleared in every other row. Columns without a
/// candidate are free and do not consume a pivot row.
pub fn eliminate<T, O>(mat: &mut Matrix<T>, observer: &mut O) -> Echelon
where
    T: Scalar,
    O: RowObserver<T> + ?Sized,
{
    let mut pivots = vec![];
    let mut row = 0;

    for col in 0..mat.cols() {
        if row >= mat.rows() {
            break;
        }

        let Some(found) = (row..mat.rows()).find(|&r| !mat.at(r, col).is_zero()) else {
            continue;
        };

        for x in (row..found).rev() {
            mat.swap_rows(x, x + 1);
            observer.swap(x, x + 1);
        }

        let inv = T::one() / mat.at(row, col);
        mat.scale_row(row, &inv);
        observer.scale(row, &inv);

        for r in 0..mat.rows() {
            if r == row {
                continue;
            }

            let factor = mat.at(r, col);
            if factor.is_zero() {
                continue;
            }
            mat.eliminate_row(r, row, &factor);
            observer.eliminate(r, row, &factor);
        }

        pivots.push(col);
        row += 1;
    }

    Echelon { rank: row, pivots }
}

impl<T: Scalar> Matrix<T> {
    pub fn reduce(&mut self) -> Echelon {
        eliminate(self, &mut ())
    }

    pub fn echelon_form(&self) -> (Matrix<T>, Echelon) {
        let mut mat = self.clone();
        let echelon = mat.reduce();
        (mat, echelon)
    }

    pub fn rank(&self) -> usize {
        self.echelon_form().1.rank
    }

    pub fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows() {
            let pivot_col_opt = self.row(i).iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    if (i + 1..self.rows()).any(|r| self.row(r).iter().any(|x| !x.is_zero())) {
                        return false;
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !self.at(i, pivot_col).is_one() {
                        return false;
                    }

                    if (0..self.rows()).any(|r| r != i && !self.at(r, pivot_col).is_zero()) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Inverse by eliminating `[self | I]`: the identity follows every row
    /// operation applied to `self`.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.require_square("inverse")?;

        let mut help = self.clone();
        let mut inverse = Matrix::identity(self.rows());
        eliminate(&mut help, &mut inverse);

        if help != Matrix::identity(self.rows()) {
            return Err(LinalgError::Degenerate { op: "inverse" });
        }
        Ok(inverse)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
