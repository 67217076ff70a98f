//! Galois Field GF(2^8) arithmetic for Reed-Solomon encoding
//!
//! ## Field Definition
//!
//! - **Primitive polynomial**: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
//! - **Primitive element**: α = 2
//!
//! This is the same field used by QR codes, so generator polynomials built on
//! it match the published QR values.
//!
//! ## Tables
//!
//! Multiplication and division go through a log/antilog pair. The exponent
//! table holds 512 entries: α^0..α^254 followed by a copy of the cycle, so the
//! sum of two logarithms (at most 508) or a shifted difference (at most 509)
//! indexes it directly without a modulo-255 reduction.

use super::error::{RsError, RsResult};
use std::fmt;
use std::sync::OnceLock;

/// Primitive polynomial x⁸ + x⁴ + x³ + x² + 1
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Number of elements in GF(2^8)
pub const FIELD_ORDER: usize = 256;

/// Order of the multiplicative group (period of α)
pub const GROUP_ORDER: usize = FIELD_ORDER - 1;

/// Length of the extended exponent table
pub const EXP_TABLE_LEN: usize = 512;

/// Precomputed exponent/logarithm tables for GF(256)
///
/// Built once and read-only afterwards; share it by reference (or use
/// [`GaloisField::shared`]) across any number of concurrent encoders.
#[derive(Clone, PartialEq, Eq)]
pub struct GaloisField {
    exp: [u8; EXP_TABLE_LEN],
    log: [u8; FIELD_ORDER],
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("primitive_poly", &format_args!("{:#x}", PRIMITIVE_POLY))
            .finish_non_exhaustive()
    }
}

impl GaloisField {
    /// Build the exponent and logarithm tables
    pub fn new() -> Self {
        let mut exp = [0u8; EXP_TABLE_LEN];
        let mut log = [0u8; FIELD_ORDER];

        let mut value = 1u16;
        for i in 0..GROUP_ORDER {
            exp[i] = value as u8;
            log[value as usize] = i as u8;

            value <<= 1;
            if value & 0x100 != 0 {
                value ^= PRIMITIVE_POLY;
            }
        }

        // Second copy of the cycle so log sums never need reducing
        for i in GROUP_ORDER..EXP_TABLE_LEN {
            exp[i] = exp[i - GROUP_ORDER];
        }

        // log[0] stays 0 but is never consulted: zero has no logarithm
        Self { exp, log }
    }

    /// Process-wide field instance, built on first use
    pub fn shared() -> &'static GaloisField {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(GaloisField::new)
    }

    /// Addition (and subtraction) in characteristic 2 is XOR
    #[inline]
    pub fn add(&self, x: u8, y: u8) -> u8 {
        x ^ y
    }

    #[inline]
    pub fn multiply(&self, x: u8, y: u8) -> u8 {
        if x == 0 || y == 0 {
            return 0;
        }
        self.exp[self.log[x as usize] as usize + self.log[y as usize] as usize]
    }

    #[inline]
    pub fn divide(&self, x: u8, y: u8) -> RsResult<u8> {
        if y == 0 {
            return Err(RsError::DivisionByZero);
        }
        if x == 0 {
            return Ok(0);
        }
        let index =
            self.log[x as usize] as usize + GROUP_ORDER - self.log[y as usize] as usize;
        Ok(self.exp[index])
    }

    /// Multiplicative inverse
    pub fn inverse(&self, x: u8) -> RsResult<u8> {
        self.divide(1, x)
    }

    /// α^power for any power, reduced by the group order
    #[inline]
    pub fn alpha_pow(&self, power: usize) -> u8 {
        self.exp[power % GROUP_ORDER]
    }

    /// Raw exponent table entry
    ///
    /// # Panics
    /// Panics if `index >= EXP_TABLE_LEN`.
    #[inline]
    pub fn exp(&self, index: usize) -> u8 {
        self.exp[index]
    }

    /// Discrete logarithm of `x`, `None` for zero
    #[inline]
    pub fn log(&self, x: u8) -> Option<u8> {
        (x != 0).then(|| self.log[x as usize])
    }

    pub fn exp_table(&self) -> &[u8; EXP_TABLE_LEN] {
        &self.exp
    }

    pub fn log_table(&self) -> &[u8; FIELD_ORDER] {
        &self.log
    }
}
