//! Reed-Solomon Encoding Module
//!
//! Systematic Reed-Solomon encoding over GF(2^8) with the 0x11D primitive
//! polynomial. Decoding is not provided.

pub mod encoder;
pub mod error;
pub mod galois;
pub mod generator;
pub mod polynomial;

pub use encoder::*;
pub use error::*;
pub use galois::*;
pub use generator::*;
pub use polynomial::*;
