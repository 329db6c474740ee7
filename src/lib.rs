//! Exact linear algebra over an abstract field: matrices, row reduction,
//! inversion, Leibniz determinants and characteristic polynomials, and
//! subspace operations on bases.

pub mod error;

pub mod matrix {
    pub mod determinant;
    pub mod echelon;
    pub mod lazy;
    pub mod matrix;
    pub mod scalar;
}
pub mod permutation {
    pub mod permutation;
}
pub mod poly {
    pub mod poly;
}
pub mod rings {
    pub mod fraction;
    pub mod zmod;
}
pub mod subspace {
    pub mod basis;
    pub mod spaces;
}

#[cfg(test)]
mod proptests;

pub use error::{LinalgError, Result};
pub use matrix::echelon::{eliminate, Echelon, RowObserver, SwapMirror};
pub use matrix::lazy::LazyMatrix;
pub use matrix::matrix::Matrix;
pub use matrix::scalar::Scalar;
pub use permutation::permutation::Permutation;
pub use poly::poly::Poly;
pub use rings::fraction::Fraction;
pub use rings::zmod::Zmod;
pub use subspace::basis::Basis;
