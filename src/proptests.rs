//! Property-based tests for the algebraic laws the engine must satisfy.

use proptest::prelude::*;

use crate::matrix::matrix::Matrix;
use crate::permutation::permutation::Permutation;
use crate::poly::poly::Poly;
use crate::rings::fraction::Fraction;
use crate::subspace::basis::{intersection, simplify, span, sum, to_basis, Basis};
use crate::subspace::spaces::kernel;

fn small_coeff() -> impl Strategy<Value = Fraction> {
    (-5i64..=5).prop_map(Fraction::from)
}

fn small_poly() -> impl Strategy<Value = Poly<Fraction>> {
    proptest::collection::vec(small_coeff(), 0..=5).prop_map(Poly::from_coefficients)
}

fn square(max: usize) -> impl Strategy<Value = Matrix<Fraction>> {
    (0..=max).prop_flat_map(|n| {
        proptest::collection::vec(small_coeff(), n * n).prop_map(move |cells| {
            Matrix::from_fn(n, n, |i, j| cells[i * n + j].clone())
        })
    })
}

fn rectangle() -> impl Strategy<Value = Matrix<Fraction>> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(-2i64..=2, rows * cols).prop_map(move |cells| {
            Matrix::from_fn(rows, cols, |i, j| Fraction::from(cells[i * cols + j]))
        })
    })
}

fn permutation(n: usize) -> impl Strategy<Value = Permutation> {
    Just((0..n).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|data| Permutation::from_images(data).unwrap())
}

fn is_zero(m: &Matrix<Fraction>) -> bool {
    m.to_list().iter().flatten().all(|x| *x == 0i64)
}

proptest! {
    #[test]
    fn poly_mul_distributes(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn poly_eval_is_a_ring_morphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
        prop_assert_eq!((&a * &b).eval(&x), a.eval(&x) * b.eval(&x));
        prop_assert_eq!((&a - &b).eval(&x), a.eval(&x) - b.eval(&x));
    }

    #[test]
    fn poly_never_stores_zero(a in small_poly()) {
        let cancelled = &a - &a;
        prop_assert_eq!(cancelled.terms().count(), 0);
        prop_assert!(a.terms().all(|(_, c)| *c != 0i64));
    }

    #[test]
    fn sign_is_multiplicative(p in permutation(6), q in permutation(6)) {
        prop_assert_eq!((&p * &q).sign(), p.sign() * q.sign());
        prop_assert_eq!(p.inverse().sign(), p.sign());
    }

    #[test]
    fn pow_adds_exponents(p in permutation(5), a in -6i64..6, b in -6i64..6) {
        prop_assert_eq!(&p.pow(a) * &p.pow(b), p.pow(a + b));
    }

    #[test]
    fn characteristic_poly_at_zero(m in square(4)) {
        let n = m.rows();
        let mut at_zero = m.characteristic_poly().unwrap().eval(&Fraction::from(0));
        if n % 2 == 1 {
            at_zero = -at_zero;
        }
        prop_assert_eq!(at_zero, m.determinant().unwrap());
    }

    #[test]
    fn inverse_exists_iff_determinant_is_non_zero(m in square(4)) {
        let det = m.determinant().unwrap();
        match m.inverse() {
            Ok(inv) => {
                prop_assert!(det != 0i64);
                prop_assert_eq!((&m * &inv).unwrap(), Matrix::identity(m.rows()));
                prop_assert_eq!(inv.determinant().unwrap() * det, 1i64);
            }
            Err(_) => prop_assert_eq!(det, 0i64),
        }
    }

    #[test]
    fn kernel_is_annihilated(m in rectangle()) {
        let ker = kernel(&m);
        prop_assert_eq!(ker.len(), m.cols() - m.rank());
        for v in &ker {
            prop_assert!(is_zero(&(&m * v).unwrap()));
        }
    }

    #[test]
    fn span_of_span_is_same_subspace(m in rectangle()) {
        let basis: Basis<Fraction> = to_basis(&m);
        let once = span(basis.clone()).unwrap();
        let twice = span(once.clone()).unwrap();
        prop_assert!(once.len() <= basis.len());
        prop_assert_eq!(simplify(&twice).unwrap(), simplify(&once).unwrap());
    }

    #[test]
    fn sum_and_intersection_dimensions(a in rectangle(), b in rectangle()) {
        // share the ambient dimension: use a's row count for both
        let height = a.rows();
        let b = Matrix::from_fn(height, b.cols(), |i, j| {
            if i < b.rows() { b.at(i, j) } else { Fraction::from(0) }
        });
        let u = to_basis(&a);
        let v = to_basis(&b);

        let total = sum(u.clone(), v.clone()).unwrap().len();
        let common = intersection(u, v).unwrap().len();
        prop_assert_eq!(total + common, a.rank() + b.rank());
    }
}
