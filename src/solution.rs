//! Bit-vector solution encoding.

use std::fmt;
use std::ops::Index;

/// Inclusion decision per catalog position.
///
/// Entries are expected to be `0` or `1`. The type does not enforce this
/// on construction; the [`Evaluator`](crate::Evaluator) rejects any other
/// value with [`KnapsackError::InvalidIndicator`](crate::KnapsackError).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution(Vec<u8>);

impl Solution {
    /// All-zero solution of length `n`.
    pub fn empty(n: usize) -> Self {
        Self(vec![0; n])
    }

    /// All-one solution of length `n`.
    pub fn full(n: usize) -> Self {
        Self(vec![1; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.0
    }

    /// Whether position `i` is included.
    pub fn is_set(&self, i: usize) -> bool {
        self.0[i] == 1
    }

    /// Toggles position `i` between `0` and `1`.
    pub fn flip(&mut self, i: usize) {
        self.0[i] = if self.0[i] == 1 { 0 } else { 1 };
    }

    /// Returns a copy with position `i` toggled.
    pub fn flipped(&self, i: usize) -> Self {
        let mut next = self.clone();
        next.flip(i);
        next
    }

    /// Number of included positions.
    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }

    /// Positions currently set to `1`.
    pub fn ones(&self) -> Vec<usize> {
        self.positions(1)
    }

    /// Positions currently set to `0`.
    pub fn zeros(&self) -> Vec<usize> {
        self.positions(0)
    }

    fn positions(&self, bit: u8) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == bit)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of positions where `self` and `other` differ.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn hamming_distance(&self, other: &Solution) -> usize {
        assert_eq!(self.len(), other.len(), "solutions must have equal length");
        self.0.iter().zip(&other.0).filter(|(a, b)| a != b).count()
    }
}

impl From<Vec<u8>> for Solution {
    fn from(bits: Vec<u8>) -> Self {
        Self(bits)
    }
}

impl Index<usize> for Solution {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.0[i]
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{b}")?;
        }
        write!(f, "]")
    }
}
