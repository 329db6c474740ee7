use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;
use crate::permutation::permutation::Permutation;
use crate::poly::poly::Poly;
use num_traits::Zero;

impl<T: Scalar> Matrix<T> {
    /// Leibniz expansion: the signed sum over every permutation `s` of
    /// `prod_i self[i][s(i)]`. Exact, and O(n! * n).
    pub fn determinant(&self) -> Result<T> {
        self.require_square("determinant")?;

        let mut result = T::zero();
        let mut c = Permutation::identity(self.rows());
        loop {
            let current = (0..self.rows())
                .fold(T::from_sign(c.sign()), |acc, i| acc * self.at(i, c[i]));
            result = result + current;

            if !c.next() {
                break;
            }
        }

        Ok(result)
    }

    /// `det(xI - self)`, by the same expansion with each entry replaced by
    /// `x * [i == s(i)] - self[i][s(i)]`.
    ///
    /// Its value at `0` is `(-1)^n * det(self)`.
    pub fn characteristic_poly(&self) -> Result<Poly<T>> {
        self.require_square("characteristic_poly")?;

        let mut result = Poly::zero();
        let mut c = Permutation::identity(self.rows());
        loop {
            let mut current = Poly::constant(T::from_sign(c.sign()));
            for i in 0..self.rows() {
                let diagonal = if i == c[i] { T::one() } else { T::zero() };
                current *= &Poly::from_coefficients(vec![-self.at(i, c[i]), diagonal]);
            }
            result += &current;

            if !c.next() {
                break;
            }
        }

        Ok(result)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
