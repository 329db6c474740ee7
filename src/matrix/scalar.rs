use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Exact field element the matrix engine is generic over.
///
/// Division by any non-zero value must be exact. Division by zero is never
/// requested by the engine: every pivot is checked with `is_zero` first.
pub trait Scalar:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::fmt::Debug
{
    /// `1` for an even permutation, `-1` for an odd one.
    fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            -Self::one()
        } else {
            Self::one()
        }
    }
}

impl<T> Scalar for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::fmt::Debug
{
}
