use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;
use std::ops;

/// A matrix of unspecified size, given by a function of `(row, col)`.
///
/// It only becomes concrete when combined with a [`Matrix`], which fixes its
/// shape, so `A - k` can be written for `A - k * I` with `k` on the diagonal.
pub struct LazyMatrix<'a, T> {
    cell: Box<dyn Fn(usize, usize) -> T + 'a>,
}

impl<'a, T: Scalar + 'a> LazyMatrix<'a, T> {
    pub fn from_fn(cell: impl Fn(usize, usize) -> T + 'a) -> Self {
        Self {
            cell: Box::new(cell),
        }
    }

    /// `value` on the diagonal, zero elsewhere.
    pub fn scalar(value: T) -> Self {
        Self::from_fn(move |i, j| if i == j { value.clone() } else { T::zero() })
    }

    pub fn materialize(&self, rows: usize, cols: usize) -> Matrix<T> {
        Matrix::from_fn(rows, cols, |i, j| (self.cell)(i, j))
    }
}

impl<'a, T: Scalar + 'a> ops::Neg for LazyMatrix<'a, T> {
    type Output = LazyMatrix<'a, T>;

    fn neg(self) -> LazyMatrix<'a, T> {
        LazyMatrix::from_fn(move |i, j| -(self.cell)(i, j))
    }
}

impl<'a, T: Scalar + 'a> ops::Add for LazyMatrix<'a, T> {
    type Output = LazyMatrix<'a, T>;

    fn add(self, rhs: LazyMatrix<'a, T>) -> LazyMatrix<'a, T> {
        LazyMatrix::from_fn(move |i, j| (self.cell)(i, j) + (rhs.cell)(i, j))
    }
}

impl<'a, T: Scalar + 'a> ops::Sub for LazyMatrix<'a, T> {
    type Output = LazyMatrix<'a, T>;

    fn sub(self, rhs: LazyMatrix<'a, T>) -> LazyMatrix<'a, T> {
        self + (-rhs)
    }
}

impl<T: Scalar> Matrix<T> {
    pub fn add_lazy(&self, lazy: &LazyMatrix<'_, T>) -> Result<Matrix<T>> {
        self + &lazy.materialize(self.rows(), self.cols())
    }

    pub fn sub_lazy(&self, lazy: &LazyMatrix<'_, T>) -> Result<Matrix<T>> {
        self - &lazy.materialize(self.rows(), self.cols())
    }

    /// `self * lazy`, with `lazy` fixed to `cols x cols`.
    pub fn mul_lazy(&self, lazy: &LazyMatrix<'_, T>) -> Result<Matrix<T>> {
        self * &lazy.materialize(self.cols(), self.cols())
    }

    /// `lazy * self`, with `lazy` fixed to `rows x rows`.
    pub fn lazy_mul(lazy: &LazyMatrix<'_, T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        &lazy.materialize(rhs.rows(), rhs.rows()) * rhs
    }

    pub fn lazy_add(lazy: &LazyMatrix<'_, T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        &lazy.materialize(rhs.rows(), rhs.cols()) + rhs
    }

    pub fn lazy_sub(lazy: &LazyMatrix<'_, T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        &lazy.materialize(rhs.rows(), rhs.cols()) - rhs
    }

    /// Cell-wise comparison, `lazy` taking the shape of `self`. With
    /// `LazyMatrix::scalar(T::one())` this is the identity check.
    pub fn eq_lazy(&self, lazy: &LazyMatrix<'_, T>) -> bool {
        (0..self.rows()).all(|i| (0..self.cols()).all(|j| self.at(i, j) == (lazy.cell)(i, j)))
    }
}

impl<T: Scalar> PartialEq<LazyMatrix<'_, T>> for Matrix<T> {
    fn eq(&self, other: &LazyMatrix<'_, T>) -> bool {
        self.eq_lazy(other)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;

    fn q(lines: Vec<Vec<i64>>) -> Matrix<Fraction> {
        Matrix::from_list(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(Fraction::from).collect())
                .collect(),
        )
    }

    #[test]
    fn test_materialize() {
        let k = LazyMatrix::scalar(Fraction::from(3));
        assert_eq!(k.materialize(2, 3), q(vec![vec![3, 0, 0], vec![0, 3, 0]]));
        assert_eq!(k.materialize(0, 0), Matrix::new(0, 0));

        let hilbert = LazyMatrix::from_fn(|i, j| {
            Fraction::from(1) / Fraction::from((i + j + 1) as i64)
        });
        assert_eq!(hilbert.materialize(2, 2).at(1, 1), "1/3".parse::<Fraction>().unwrap());
    }

    #[test]
    fn test_matrix_minus_scalar() {
        let a = q(vec![vec![2, 1], vec![1, 1]]);
        let shifted = a.sub_lazy(&LazyMatrix::scalar(Fraction::from(2))).unwrap();
        assert_eq!(shifted, q(vec![vec![0, 1], vec![1, -1]]));

        let back = shifted.add_lazy(&LazyMatrix::scalar(Fraction::from(2))).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_lazy_arithmetic() {
        let two = LazyMatrix::scalar(Fraction::from(2));
        let ones = LazyMatrix::from_fn(|_, _| Fraction::from(1));
        let combined = two - ones;
        assert_eq!(combined.materialize(2, 2), q(vec![vec![1, -1], vec![-1, 1]]));

        let wide = q(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let doubled = wide.mul_lazy(&LazyMatrix::scalar(Fraction::from(2))).unwrap();
        assert_eq!(doubled, wide.scale(&Fraction::from(2)));
        let tripled = Matrix::lazy_mul(&LazyMatrix::scalar(Fraction::from(3)), &wide).unwrap();
        assert_eq!(tripled, wide.scale(&Fraction::from(3)));
    }

    #[test]
    fn test_lazy_on_the_left() {
        let a = q(vec![vec![2, 1], vec![1, 1]]);
        let k = LazyMatrix::scalar(Fraction::from(5));

        assert_eq!(Matrix::lazy_add(&k, &a).unwrap(), q(vec![vec![7, 1], vec![1, 6]]));
        assert_eq!(Matrix::lazy_sub(&k, &a).unwrap(), q(vec![vec![3, -1], vec![-1, 4]]));
        assert_eq!(
            Matrix::lazy_sub(&k, &a).unwrap(),
            -&a.sub_lazy(&k).unwrap()
        );

        let wide = q(vec![vec![1, 2, 3]]);
        assert_eq!(
            Matrix::lazy_sub(&k, &wide).unwrap(),
            q(vec![vec![4, -2, -3]])
        );
    }

    #[test]
    fn test_compare_with_lazy() {
        let a = q(vec![vec![2, 1], vec![1, 1]]);
        let one = LazyMatrix::scalar(Fraction::from(1));

        assert!((&a * &a.inverse().unwrap()).unwrap() == one);
        assert!(a != one);
        assert!(Matrix::<Fraction>::identity(3).eq_lazy(&one));
        assert!(q(vec![vec![4, 0], vec![0, 4]]).eq_lazy(&LazyMatrix::scalar(Fraction::from(4))));
        assert!(!q(vec![vec![4, 0], vec![1, 4]]).eq_lazy(&LazyMatrix::scalar(Fraction::from(4))));
        assert!(Matrix::<Fraction>::new(0, 0).eq_lazy(&one));
    }
}
