//! Error types for Reed-Solomon encoding

use thiserror::Error;

/// Result type for Reed-Solomon operations
pub type RsResult<T> = Result<T, RsError>;

/// Errors that can occur during field arithmetic or encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Zero has no multiplicative inverse in GF(256)
    #[error("Division by zero in Galois field")]
    DivisionByZero,

    /// Parity length supplied as a signed value was negative
    #[error("Parity length must not be negative, got {0}")]
    NegativeParityLength(i64),

    /// Message symbol does not fit in one byte
    #[error("Symbol {value} at position {position} does not fit in GF(256)")]
    SymbolOutOfRange { position: usize, value: u32 },
}
