//! Polynomial arithmetic over GF(256)
//!
//! Coefficients are stored highest degree first, so `[1, 3, 2]` is
//! x² + 3x + 2. Operations are pure and allocate a fresh result.

use super::galois::GaloisField;

/// Polynomial with GF(256) coefficients, highest degree first
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl From<Vec<u8>> for Polynomial {
    fn from(coefficients: Vec<u8>) -> Self {
        Self::new(coefficients)
    }
}

impl Polynomial {
    pub fn new(coefficients: Vec<u8>) -> Self {
        Self { coefficients }
    }

    pub fn from_slice(coefficients: &[u8]) -> Self {
        Self::new(coefficients.to_vec())
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self::new(vec![1])
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<u8> {
        self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Formal degree (`len - 1`); leading zeros are not stripped
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn leading_coefficient(&self) -> Option<u8> {
        self.coefficients.first().copied()
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient() == Some(1)
    }

    /// Sum of two polynomials, aligned on their constant terms
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let len = self.len().max(other.len());
        let mut sum = vec![0u8; len];

        for (dst, &c) in sum[len - self.len()..].iter_mut().zip(&self.coefficients) {
            *dst = c;
        }
        for (dst, &c) in sum[len - other.len()..].iter_mut().zip(&other.coefficients) {
            *dst ^= c;
        }

        Polynomial::new(sum)
    }

    /// Product by convolution; length is `len(a) + len(b) - 1`
    pub fn multiply(&self, other: &Polynomial, field: &GaloisField) -> Polynomial {
        if self.is_empty() || other.is_empty() {
            return Polynomial::default();
        }

        let mut product = vec![0u8; self.len() + other.len() - 1];
        for (j, &b) in other.coefficients.iter().enumerate() {
            for (i, &a) in self.coefficients.iter().enumerate() {
                product[i + j] ^= field.multiply(a, b);
            }
        }

        Polynomial::new(product)
    }

    /// Multiply every coefficient by the scalar `k`
    pub fn scale(&self, k: u8, field: &GaloisField) -> Polynomial {
        self.coefficients
            .iter()
            .map(|&c| field.multiply(c, k))
            .collect::<Vec<_>>()
            .into()
    }

    /// Evaluate at `x` using Horner's method
    pub fn evaluate(&self, x: u8, field: &GaloisField) -> u8 {
        let Some((&first, rest)) = self.coefficients.split_first() else {
            return 0;
        };
        rest.iter().fold(first, |acc, &c| field.multiply(acc, x) ^ c)
    }
}
