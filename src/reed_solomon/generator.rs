//! Generator polynomial construction
//!
//! g(x) = (x + α^0)(x + α^1)...(x + α^(n-1)) for `n` parity symbols.
//! In characteristic 2, `x - α^i` and `x + α^i` are the same factor.

use super::galois::GaloisField;
use super::polynomial::Polynomial;
use log::{debug, trace};
use rustc_hash::FxHashMap as HashMap;
use std::sync::{Arc, Mutex};

/// Build the monic generator polynomial of degree `parity_len`
pub fn generator_polynomial(parity_len: usize, field: &GaloisField) -> Polynomial {
    let mut generator = Polynomial::one();
    for i in 0..parity_len {
        let factor = Polynomial::new(vec![1, field.alpha_pow(i)]);
        generator = generator.multiply(&factor, field);
    }
    trace!(
        "generator degree {}: {:?}",
        parity_len,
        generator.coefficients()
    );
    generator
}

/// Memoizes generator polynomials by degree
///
/// Safe to share between threads; each degree is built at most once per
/// field it is first requested with.
#[derive(Debug, Default)]
pub struct GeneratorCache {
    generators: Mutex<HashMap<usize, Arc<Polynomial>>>,
}

impl GeneratorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch (or build and remember) the generator of degree `parity_len`
    pub fn get(&self, parity_len: usize, field: &GaloisField) -> Arc<Polynomial> {
        let mut generators = self.lock();
        Arc::clone(generators.entry(parity_len).or_insert_with(|| {
            debug!("Building generator polynomial of degree {}", parity_len);
            Arc::new(generator_polynomial(parity_len, field))
        }))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<usize, Arc<Polynomial>>> {
        self.generators
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
