use crate::error::{LinalgError, Result};
use crate::matrix::echelon::{eliminate, SwapMirror};
use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;
use crate::subspace::spaces::kernel;

/// Spanning list of column vectors (`height x 1` matrices) of one subspace.
///
/// Only [`span`] guarantees the vectors are linearly independent.
pub type Basis<T> = Vec<Matrix<T>>;

/// Matrix whose columns are the basis vectors. An empty basis gives `0x0`.
pub fn to_matrix<T: Scalar>(basis: &[Matrix<T>]) -> Result<Matrix<T>> {
    let Some(first) = basis.first() else {
        return Ok(Matrix::new(0, 0));
    };

    let height = first.rows();
    if let Some(bad) = basis.iter().find(|v| v.shape() != (height, 1)) {
        return Err(LinalgError::DimensionMismatch {
            op: "to_matrix",
            lhs: (height, 1),
            rhs: bad.shape(),
        });
    }

    Ok(Matrix::from_fn(height, basis.len(), |i, j| basis[j].at(i, 0)))
}

pub fn to_basis<T: Scalar>(matrix: &Matrix<T>) -> Basis<T> {
    (0..matrix.cols())
        .map(|j| Matrix::from_fn(matrix.rows(), 1, |i, _| matrix.at(i, j)))
        .collect()
}

/// Same subspace, same number of vectors, in reduced row echelon form.
/// Two bases of one subspace simplify to the same non-zero vectors.
pub fn simplify<T: Scalar>(basis: &[Matrix<T>]) -> Result<Basis<T>> {
    let mut rows = to_matrix(basis)?.transpose();
    rows.reduce();
    Ok(to_basis(&rows.transpose()))
}

/// Largest linearly independent subsequence found by elimination.
///
/// The vectors are reduced as rows while the same swaps are replayed on the
/// original list, so the survivors are original vectors, never combinations,
/// and they are reordered only by single rotations (`abcd -> dabc`).
pub fn span<T: Scalar>(mut basis: Basis<T>) -> Result<Basis<T>> {
    if basis.is_empty() {
        return Ok(basis);
    }

    let mut rows = to_matrix(&basis)?.transpose();
    let echelon = eliminate(&mut rows, &mut SwapMirror(&mut basis));
    basis.truncate(echelon.rank);

    Ok(basis)
}

pub fn sum<T: Scalar>(mut u: Basis<T>, v: Basis<T>) -> Result<Basis<T>> {
    u.extend(v);
    span(u)
}

/// Basis of `U ∩ V`.
///
/// Every kernel vector of `[U | V]` holds coefficients `(a, b)` with
/// `U a = -V b`, so `U a` lies in both subspaces.
pub fn intersection<T: Scalar>(u: Basis<T>, v: Basis<T>) -> Result<Basis<T>> {
    if u.is_empty() || v.is_empty() {
        return Ok(vec![]);
    }

    let k = u.len();
    let u_matrix = to_matrix(&u)?;
    let stacked = to_matrix(&[u, v].concat())?;

    let common = kernel(&stacked)
        .into_iter()
        .map(|coords| &u_matrix * &Matrix::from_fn(k, 1, |i, _| coords.at(i, 0)))
        .collect::<Result<Basis<T>>>()?;

    span(common)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
