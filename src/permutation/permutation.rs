use crate::error::{LinalgError, Result};
use itertools::Itertools;
use std::fmt;
use std::ops;

/// Bijection on `{0, .., n-1}`, stored as its image array: `data[i]` is the
/// image of `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    data: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self {
            data: (0..n).collect(),
        }
    }

    pub fn from_images(data: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; data.len()];
        for &image in &data {
            if image >= data.len() || seen[image] {
                return Err(LinalgError::InvalidPermutation(format!(
                    "{data:?} is not a bijection on 0..{}",
                    data.len()
                )));
            }
            seen[image] = true;
        }
        Ok(Self { data })
    }

    /// The cycle `c[0] -> c[1] -> .. -> c[0]` on `n` points, or on
    /// `max(c) + 1` points when `n` is `None`.
    pub fn cycle(cycle: &[usize], n: Option<usize>) -> Result<Self> {
        let n = n.unwrap_or_else(|| cycle.iter().max().map_or(0, |m| m + 1));
        if !cycle.iter().all_unique() || cycle.iter().any(|&c| c >= n) {
            return Err(LinalgError::InvalidPermutation(format!(
                "{cycle:?} is not a cycle on 0..{n}"
            )));
        }

        let mut res = Self::identity(n);
        for (&from, &to) in cycle.iter().circular_tuple_windows() {
            res.data[from] = to;
        }
        // a 1-cycle is a fixed point
        if let [single] = cycle {
            res.data[*single] = *single;
        }
        Ok(res)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn images(&self) -> &[usize] {
        &self.data
    }

    /// `result(i) = self(second(i))`. Operands of different sizes are
    /// extended with fixed points up to the larger size.
    pub fn compose(&self, second: &Permutation) -> Permutation {
        let n = self.len().max(second.len());
        let data = (0..n)
            .map(|i| {
                let j = second.data.get(i).copied().unwrap_or(i);
                self.data.get(j).copied().unwrap_or(j)
            })
            .collect();
        Permutation { data }
    }

    pub fn reverse(&mut self) -> &mut Self {
        let temp = self.data.clone();
        for (i, &image) in temp.iter().enumerate() {
            self.data[image] = i;
        }
        self
    }

    pub fn inverse(&self) -> Permutation {
        let mut res = self.clone();
        res.reverse();
        res
    }

    pub fn pow(&self, k: i64) -> Permutation {
        let mut res = self.pow_unsigned(k.unsigned_abs());
        if k < 0 {
            res.reverse();
        }
        res
    }

    fn pow_unsigned(&self, k: u64) -> Permutation {
        if k == 0 {
            return Permutation::identity(self.len());
        }

        let half = self.pow_unsigned(k / 2);
        let res = half.compose(&half);
        if k % 2 == 1 {
            res.compose(self)
        } else {
            res
        }
    }

    /// `+1` for even, `-1` for odd.
    pub fn sign(&self) -> i32 {
        let mut even = true;
        let mut used = vec![false; self.len()];

        for &start in &self.data {
            if used[start] {
                continue;
            }
            even ^= true;
            let mut j = start;
            while !used[j] {
                even ^= true;
                used[j] = true;
                j = self.data[j];
            }
        }

        if even {
            1
        } else {
            -1
        }
    }

    /// Steps to the lexicographic successor in place.
    ///
    /// Returns `false` when `self` was the last permutation; it then wraps
    /// around to the identity. Sizes 0 and 1 have a single permutation and
    /// always return `false`.
    pub fn next(&mut self) -> bool {
        let n = self.len();
        if n <= 1 {
            return false;
        }

        let pivot = (0..n - 1).rev().find(|&i| self.data[i] < self.data[i + 1]);
        if let Some(i) = pivot {
            // the suffix after `i` is descending: the rightmost larger element
            // is the smallest one above data[i]
            let j = (i + 1..n)
                .rev()
                .find(|&j| self.data[j] > self.data[i])
                .unwrap_or(i + 1);
            self.data.swap(i, j);
        }

        let start = pivot.map_or(0, |i| i + 1);
        self.data[start..].reverse();

        pivot.is_some()
    }

    /// Every permutation of `n` points in lexicographic order, starting with
    /// the identity.
    pub fn all(n: usize) -> AllPermutations {
        AllPermutations {
            current: Some(Permutation::identity(n)),
        }
    }
}

/// Iterator driven by [`Permutation::next`].
pub struct AllPermutations {
    current: Option<Permutation>,
}

impl Iterator for AllPermutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        let current = self.current.take()?;
        let mut successor = current.clone();
        if successor.next() {
            self.current = Some(successor);
        }
        Some(current)
    }
}

impl ops::Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.data[i]
    }
}

impl ops::Mul<&Permutation> for &Permutation {
    type Output = Permutation;

    fn mul(self, rhs: &Permutation) -> Permutation {
        self.compose(rhs)
    }
}

impl ops::Div<&Permutation> for &Permutation {
    type Output = Permutation;

    fn div(self, rhs: &Permutation) -> Permutation {
        self.compose(&rhs.inverse())
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
