use crate::matrix::scalar::Scalar;
use itertools::iproduct;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::ops;

/// Sparse polynomial in one variable: exponent -> coefficient.
///
/// Zero coefficients are never stored, so two equal polynomials have equal
/// maps and the zero polynomial is the empty map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly<T> {
    coefficients: BTreeMap<usize, T>,
}

impl<T: Scalar> Poly<T> {
    pub fn constant(c: T) -> Self {
        Self::monomial(c, 0)
    }

    pub fn monomial(c: T, exponent: usize) -> Self {
        let mut coefficients = BTreeMap::new();
        if !c.is_zero() {
            coefficients.insert(exponent, c);
        }
        Self { coefficients }
    }

    pub fn x() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// From dense coefficients, lowest degree first.
    pub fn from_coefficients(coefficients: Vec<T>) -> Self {
        Self::from_terms(coefficients.into_iter().enumerate())
    }

    /// From `(exponent, coefficient)` pairs; repeated exponents are summed.
    pub fn from_terms(terms: impl IntoIterator<Item = (usize, T)>) -> Self {
        let mut res = Self::zero();
        for (exponent, c) in terms {
            res.add_term(exponent, c);
        }
        res
    }

    fn add_term(&mut self, exponent: usize, c: T) {
        let sum = match self.coefficients.remove(&exponent) {
            Some(current) => current + c,
            None => c,
        };
        if !sum.is_zero() {
            self.coefficients.insert(exponent, sum);
        }
    }

    pub fn coefficient(&self, exponent: usize) -> T {
        self.coefficients
            .get(&exponent)
            .cloned()
            .unwrap_or_else(T::zero)
    }

    pub fn degree(&self) -> Option<usize> {
        self.coefficients.keys().next_back().copied()
    }

    /// Non-zero terms in increasing exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &T)> + Clone + '_ {
        self.coefficients.iter().map(|(&e, c)| (e, c))
    }

    pub fn eval(&self, x: &T) -> T {
        self.coefficients
            .iter()
            .fold(T::zero(), |acc, (&e, c)| acc + c.clone() * quick_power(x, e))
    }
}

fn quick_power<T: Scalar>(x: &T, mut k: usize) -> T {
    let mut result = T::one();
    let mut base = x.clone();
    while k > 0 {
        if k & 1 == 1 {
            result = result * base.clone();
        }
        k >>= 1;
        if k > 0 {
            base = base.clone() * base;
        }
    }
    result
}

impl<T: Scalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self {
            coefficients: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl<T: Scalar> One for Poly<T> {
    fn one() -> Self {
        Self::constant(T::one())
    }
}

impl<T: Scalar> ops::Add<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: &Poly<T>) -> Poly<T> {
        let mut res = self.clone();
        res += rhs;
        res
    }
}

impl<T: Scalar> ops::Sub<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: &Poly<T>) -> Poly<T> {
        let mut res = self.clone();
        res -= rhs;
        res
    }
}

impl<T: Scalar> ops::Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Poly<T> {
        Poly::from_terms(
            iproduct!(&self.coefficients, &rhs.coefficients)
                .map(|((i, a), (j, b))| (i + j, a.clone() * b.clone())),
        )
    }
}

impl<T: Scalar> ops::Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Poly<T> {
        Poly {
            coefficients: self
                .coefficients
                .iter()
                .map(|(&e, c)| (e, -c.clone()))
                .collect(),
        }
    }
}

impl<T: Scalar> ops::AddAssign<&Poly<T>> for Poly<T> {
    fn add_assign(&mut self, rhs: &Poly<T>) {
        for (e, c) in rhs.terms() {
            self.add_term(e, c.clone());
        }
    }
}

impl<T: Scalar> ops::SubAssign<&Poly<T>> for Poly<T> {
    fn sub_assign(&mut self, rhs: &Poly<T>) {
        for (e, c) in rhs.terms() {
            self.add_term(e, -c.clone());
        }
    }
}

impl<T: Scalar> ops::MulAssign<&Poly<T>> for Poly<T> {
    fn mul_assign(&mut self, rhs: &Poly<T>) {
        *self = &*self * rhs;
    }
}

// Owned forms, needed by `Zero` and `One`

impl<T: Scalar> ops::Add for Poly<T> {
    type Output = Poly<T>;

    fn add(mut self, rhs: Poly<T>) -> Poly<T> {
        self += &rhs;
        self
    }
}

impl<T: Scalar> ops::Mul for Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: Poly<T>) -> Poly<T> {
        &self * &rhs
    }
}

/// Highest degree first, e.g. `x^2 - 3x + 1`. Coefficients are printed with
/// their own `Display`, negative ones detected by comparing with zero.
impl<T: Scalar + fmt::Display + PartialOrd> fmt::Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (idx, (&e, c)) in self.coefficients.iter().rev().enumerate() {
            let negative = *c < T::zero();
            let abs = if negative { -c.clone() } else { c.clone() };

            match (idx, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            if !abs.is_one() || e == 0 {
                write!(f, "{abs}")?;
            }
            match e {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{e}")?,
            }
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
