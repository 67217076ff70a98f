//! Systematic Reed-Solomon encoder
//!
//! ## Algorithm
//!
//! Parity is the remainder of `message(x) · x^n` divided by the degree-`n`
//! generator polynomial. The division runs as a linear feedback shift
//! register: the message is only ever read, and an `n`-symbol register is
//! the only mutable state. The codeword is then `message ‖ register`, so the
//! message prefix is copied verbatim rather than restored after the fact.
//!
//! ## Concurrency
//!
//! An encoder only holds a shared reference to the (immutable) field tables
//! and a thread-safe generator cache, so one encoder can serve many threads.
//! [`SystematicEncoder::encode_batch`] uses rayon to encode independent
//! messages in parallel.

use super::error::{RsError, RsResult};
use super::galois::GaloisField;
use super::generator::GeneratorCache;
use log::debug;
use rayon::prelude::*;

/// Message followed by its parity symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codeword {
    bytes: Vec<u8>,
    message_len: usize,
}

impl Codeword {
    /// The systematic prefix, identical to the encoded message
    pub fn message(&self) -> &[u8] {
        &self.bytes[..self.message_len]
    }

    pub fn parity(&self) -> &[u8] {
        &self.bytes[self.message_len..]
    }

    pub fn parity_len(&self) -> usize {
        self.bytes.len() - self.message_len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Codeword {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Codeword> for Vec<u8> {
    fn from(codeword: Codeword) -> Self {
        codeword.bytes
    }
}

/// Systematic encoder over GF(256)
#[derive(Debug)]
pub struct SystematicEncoder<'f> {
    field: &'f GaloisField,
    generators: GeneratorCache,
}

impl Default for SystematicEncoder<'static> {
    fn default() -> Self {
        Self::new(GaloisField::shared())
    }
}

impl<'f> SystematicEncoder<'f> {
    pub fn new(field: &'f GaloisField) -> Self {
        Self {
            field,
            generators: GeneratorCache::new(),
        }
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Encode `message` with `parity_len` parity symbols
    ///
    /// The result has length `message.len() + parity_len`. With
    /// `parity_len == 0` it equals the message; an empty message yields
    /// `parity_len` zero bytes.
    pub fn encode(&self, message: &[u8], parity_len: usize) -> Codeword {
        let parity = self.parity(message, parity_len);

        let mut bytes = Vec::with_capacity(message.len() + parity_len);
        bytes.extend_from_slice(message);
        bytes.extend_from_slice(&parity);

        Codeword {
            bytes,
            message_len: message.len(),
        }
    }

    /// Compute only the parity symbols for `message`
    pub fn parity(&self, message: &[u8], parity_len: usize) -> Vec<u8> {
        let mut register = vec![0u8; parity_len];
        if parity_len == 0 {
            return register;
        }

        let generator = self.generators.get(parity_len, self.field);
        // Leading coefficient is 1 and only cancels the feedback symbol
        let taps = &generator.coefficients()[1..];

        debug!(
            "Encoding {} message symbols with {} parity symbols",
            message.len(),
            parity_len
        );

        for &symbol in message {
            let feedback = symbol ^ register[0];
            register.copy_within(1.., 0);
            register[parity_len - 1] = 0;

            if feedback != 0 {
                for (r, &tap) in register.iter_mut().zip(taps) {
                    *r ^= self.field.multiply(tap, feedback);
                }
            }
        }

        register
    }

    /// Encode untyped symbols, rejecting anything outside GF(256)
    ///
    /// Validation happens before any arithmetic: a negative `parity_len`
    /// fails with [`RsError::NegativeParityLength`] and the first symbol
    /// above 255 fails with [`RsError::SymbolOutOfRange`].
    pub fn encode_symbols(&self, symbols: &[u32], parity_len: i64) -> RsResult<Codeword> {
        let parity_len =
            usize::try_from(parity_len).map_err(|_| RsError::NegativeParityLength(parity_len))?;

        let message = symbols_to_bytes(symbols.iter().copied())?;
        Ok(self.encode(&message, parity_len))
    }

    /// Encode text, one symbol per character code point
    pub fn encode_str(&self, text: &str, parity_len: usize) -> RsResult<Codeword> {
        let message = text_to_message(text)?;
        Ok(self.encode(&message, parity_len))
    }

    /// Encode independent messages in parallel, preserving order
    pub fn encode_batch<M>(&self, messages: &[M], parity_len: usize) -> Vec<Codeword>
    where
        M: AsRef<[u8]> + Sync,
    {
        debug!("Batch encoding {} messages", messages.len());
        messages
            .par_iter()
            .map(|message| self.encode(message.as_ref(), parity_len))
            .collect()
    }
}

/// Convert text to message symbols, one per character code point
///
/// Code points above 255 are rejected with [`RsError::SymbolOutOfRange`];
/// `position` counts characters, not bytes.
pub fn text_to_message(text: &str) -> RsResult<Vec<u8>> {
    symbols_to_bytes(text.chars().map(u32::from))
}

fn symbols_to_bytes(symbols: impl Iterator<Item = u32>) -> RsResult<Vec<u8>> {
    symbols
        .enumerate()
        .map(|(position, value)| {
            u8::try_from(value).map_err(|_| RsError::SymbolOutOfRange { position, value })
        })
        .collect()
}
