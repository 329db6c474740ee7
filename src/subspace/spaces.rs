use crate::error::Result;
use crate::matrix::lazy::LazyMatrix;
use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;
use crate::subspace::basis::{span, to_basis, to_matrix, Basis};

/// Basis of the solutions of `a x = 0`.
///
/// After reduction, each pivot column is a bound variable and every other
/// column a free one. Each free column `j` yields the vector with `1` at `j`
/// and `-a[i][j]` at the pivot column of row `i`.
pub fn kernel<T: Scalar>(a: &Matrix<T>) -> Basis<T> {
    let (reduced, echelon) = a.echelon_form();
    let bound = &echelon.pivots;

    (0..reduced.cols())
        .filter(|j| !bound.contains(j))
        .map(|free| {
            let mut cur = Matrix::new(reduced.cols(), 1);
            for (i, &col) in bound.iter().enumerate() {
                cur[(col, 0)] = -reduced.at(i, free);
            }
            cur[(free, 0)] = T::one();
            cur
        })
        .collect()
}

pub fn image<T: Scalar>(a: &Matrix<T>) -> Result<Basis<T>> {
    span(to_basis(a))
}

pub fn eigenspace<T: Scalar>(a: &Matrix<T>, k: T) -> Result<Basis<T>> {
    a.require_square("eigenspace")?;
    Ok(kernel(&a.sub_lazy(&LazyMatrix::scalar(k))?))
}

/// Generalized eigenspace of `a` for `k`: the kernel of `(a - k)^n`, where
/// `n`, the size of `a`, bounds every Jordan block.
pub fn root_space<T: Scalar>(a: &Matrix<T>, k: T) -> Result<Basis<T>> {
    a.require_square("root_space")?;
    let shifted = a.sub_lazy(&LazyMatrix::scalar(k))?;
    Ok(kernel(&shifted.pow(a.rows() as i64)?))
}

/// Projection onto `span(u)` along `span(v)`. `u ++ v` must be a basis of the
/// whole space, otherwise `Degenerate`.
pub fn projector<T: Scalar>(u: &[Matrix<T>], v: &[Matrix<T>]) -> Result<Matrix<T>> {
    let k = u.len();
    let f = to_matrix(&[u, v].concat())?;
    let f_inverse = f.inverse()?;

    let d = Matrix::from_fn(f.rows(), f.cols(), |i, j| {
        if i == j && i < k {
            T::one()
        } else {
            T::zero()
        }
    });

    &(&f * &d)? * &f_inverse
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
