use crate::error::LinalgError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always kept in lowest terms with a positive
/// denominator.
#[derive(Debug, Clone, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Panics on a zero denominator.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(num: BigInt) -> Self {
        Self {
            num,
            den: BigInt::one(),
        }
    }
}

/// Parses `"a"` or `"a/b"`.
impl FromStr for Fraction {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, LinalgError> {
        let parse = |part: &str| {
            BigInt::parse_bytes(part.trim().as_bytes(), 10)
                .ok_or_else(|| LinalgError::Parse(format!("invalid number {part:?} in {s:?}")))
        };

        let mut nums = s.split('/');
        let num = parse(nums.next().unwrap_or(""))?;
        let den = match nums.next() {
            Some(den) => parse(den)?,
            None => BigInt::one(),
        };
        if nums.next().is_some() {
            return Err(LinalgError::Parse(format!("too many '/' in {s:?}")));
        }
        if den.is_zero() {
            return Err(LinalgError::Parse(format!("zero denominator in {s:?}")));
        }

        Ok(Fraction::new(num, den))
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{} / {}", self.num, self.den)
    }
}

// Both sides are in lowest terms, so equality is structural.
impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        self.num == rhs.num && self.den == rhs.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Fraction {}
impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        let a = &self.num * &rhs.den;
        let b = &rhs.num * &self.den;
        a.cmp(&b)
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalization() {
        let a = fr("6/-4");
        assert_eq!(a.numer(), &BigInt::from(-3));
        assert_eq!(a.denom(), &BigInt::from(2));
        assert_eq!(a, fr("-3/2"));
        assert_eq!(fr("0/5"), Fraction::zero());
        assert!(fr("8/4").is_integer());
        assert_eq!(fr("8/4"), 2i64);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(fr("1/2") + fr("1/3"), fr("5/6"));
        assert_eq!(fr("1/2") - fr("1/3"), fr("1/6"));
        assert_eq!(fr("2/3") * fr("9/4"), fr("3/2"));
        assert_eq!(fr("2/3") / fr("-4/9"), fr("-3/2"));
        assert_eq!(-fr("2/3"), fr("-2/3"));
        assert_eq!(
            vec![fr("1/2"), fr("1/4"), fr("1/4")].into_iter().sum::<Fraction>(),
            Fraction::one()
        );
    }

    #[test]
    fn test_big_values_stay_exact() {
        let big = fr("100000000000000000000000000000000000000000000000000000000000001/3");
        let back = (big.clone() * fr("3")) / fr("3");
        assert_eq!(back, big);
        assert_eq!((big.clone() - big).to_string(), "0");
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(fr("-1/2") < fr("1/3"));
        assert!(fr("7/3") > fr("2"));
        assert_eq!(fr("7/3").to_string(), "7 / 3");
        assert_eq!(fr("-4").to_string(), "-4");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("abc".parse::<Fraction>(), Err(LinalgError::Parse(_))));
        assert!("1/0".parse::<Fraction>().is_err());
        assert!("1/2/3".parse::<Fraction>().is_err());
        assert!("".parse::<Fraction>().is_err());
    }
}
