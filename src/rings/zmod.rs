use num_traits::{One, Zero};
use std::fmt;
use std::ops;

/// Residue modulo the prime `P`, i.e. an element of the field Z/PZ.
///
/// `P` must be prime for division to be exact; it is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zmod<const P: u64> {
    value: u64,
}

impl<const P: u64> Zmod<P> {
    pub fn new(value: u64) -> Self {
        Self { value: value % P }
    }

    /// Maps a signed integer to its residue.
    pub fn from_signed(value: i64) -> Self {
        Self {
            value: value.rem_euclid(P as i64) as u64,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn pow(self, mut exponent: u64) -> Self {
        let mut result = Self::one();
        let mut base = self;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exponent >>= 1;
        }
        result
    }

    /// Inverse by Fermat's little theorem. Panics on zero.
    pub fn inverse(self) -> Self {
        assert!(!self.is_zero(), "Division by zero in Z/{P}Z");
        self.pow(P - 2)
    }
}

impl<const P: u64> ops::Add for Zmod<P> {
    type Output = Zmod<P>;

    fn add(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: ((self.value as u128 + rhs.value as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> ops::Sub for Zmod<P> {
    type Output = Zmod<P>;

    fn sub(self, rhs: Zmod<P>) -> Zmod<P> {
        self + (-rhs)
    }
}

impl<const P: u64> ops::Neg for Zmod<P> {
    type Output = Zmod<P>;

    fn neg(self) -> Zmod<P> {
        Zmod {
            value: (P - self.value) % P,
        }
    }
}

impl<const P: u64> ops::Mul for Zmod<P> {
    type Output = Zmod<P>;

    fn mul(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: ((self.value as u128 * rhs.value as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> ops::Div for Zmod<P> {
    type Output = Zmod<P>;

    fn div(self, rhs: Zmod<P>) -> Zmod<P> {
        self * rhs.inverse()
    }
}

impl<const P: u64> Zero for Zmod<P> {
    fn zero() -> Self {
        Self { value: 0 }
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<const P: u64> One for Zmod<P> {
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const P: u64> fmt::Display for Zmod<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
