//! Zeta-seasoned SHA-256 generator
//!
//! Every output value is computed independently from its index:
//!
//! 1. Pick `gamma = GAMMA_VALUES[index % 5]`
//! 2. Scale its fractional part by 1e9 and truncate (`scaled`)
//! 3. Hash `"{gamma}{index}{seed}"` with SHA-256, read as a 256-bit
//!    big-endian integer
//! 4. Return `(scaled XOR digest) mod modulus`
//!
//! # Determinism
//!
//! Same seed + modulus → same value at every index, across calls, threads
//! and processes. Nothing is cached or mutated between calls.
//!
//! NOT suitable for security-sensitive randomness: the seed space is small
//! and the construction is public.

use sha2::{Digest, Sha256};
use thiserror::Error;

use super::gamma::{gamma_for_index, scaled_fraction};
use crate::core::config::GeneratorConfig;
use crate::models::{Modulus, Seed};

/// Errors raised by the generator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Seeded generator with random access to every position
///
/// # Example
/// ```
/// use zeta_prng_core::{Modulus, ZetaPrng};
///
/// let prng = ZetaPrng::new(12345, Modulus::DEFAULT);
/// assert_eq!(prng.value_at(0), 1389328440);
///
/// let first: Vec<u128> = prng.iter().take(2).collect();
/// assert_eq!(first, vec![1389328440, 3606444522]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZetaPrng {
    seed: Seed,
    modulus: Modulus,
}

impl ZetaPrng {
    /// Create a generator for an already-validated modulus
    pub fn new(seed: impl Into<Seed>, modulus: Modulus) -> Self {
        Self {
            seed: seed.into(),
            modulus,
        }
    }

    /// Create a generator from a raw modulus
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidArgument` if `modulus <= 0`
    pub fn with_modulus(seed: impl Into<Seed>, modulus: i128) -> Result<Self, GeneratorError> {
        Ok(Self::new(seed, Modulus::new(modulus)?))
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Value at `index`, in `[0, modulus)`
    ///
    /// Equal to `self.generate(index + 1)[index]`.
    pub fn value_at(&self, index: u64) -> u128 {
        let gamma = gamma_for_index(index);
        let scaled = scaled_fraction(gamma);

        let digest = Sha256::digest(hash_key(gamma, index, &self.seed).as_bytes());
        let mut mixed = [0u8; 32];
        mixed.copy_from_slice(&digest);

        // scaled < 2^30, so XOR only touches the low-order (trailing) bytes
        for (byte, s) in mixed[24..].iter_mut().zip(scaled.to_be_bytes()) {
            *byte ^= s;
        }

        let value = self.modulus.reduce_be(&mixed);
        tracing::trace!(index, gamma, scaled, value = %value, "derived value");
        value
    }

    /// Unbounded iterator starting at index 0
    pub fn iter(&self) -> ZetaValues<'_> {
        ZetaValues {
            prng: self,
            index: 0,
        }
    }

    /// First `count` values
    pub fn generate(&self, count: usize) -> Vec<u128> {
        self.iter().take(count).collect()
    }
}

impl<'a> IntoIterator for &'a ZetaPrng {
    type Item = u128;
    type IntoIter = ZetaValues<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over successive positions of a [`ZetaPrng`]
#[derive(Debug, Clone)]
pub struct ZetaValues<'a> {
    prng: &'a ZetaPrng,
    index: u64,
}

impl Iterator for ZetaValues<'_> {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let value = self.prng.value_at(self.index);
        self.index += 1;
        Some(value)
    }

    fn nth(&mut self, n: usize) -> Option<u128> {
        self.index += n as u64;
        self.next()
    }
}

/// Hash input for one position: `"{gamma}{index}{seed}"`, no separators
///
/// `gamma` renders as the shortest decimal that round-trips the `f64`
/// (`21.02204`, never `21.022040`).
pub fn hash_key(gamma: f64, index: u64, seed: &Seed) -> String {
    format!("{}{}{}", gamma, index, seed)
}

/// Generate `count` values in `[0, modulus)` from `seed`
///
/// # Errors
/// Returns `GeneratorError::InvalidArgument` if `modulus <= 0`. No values
/// are produced in that case.
///
/// # Example
/// ```
/// use zeta_prng_core::generate;
///
/// let values = generate(12345, 5, 1 << 32).unwrap();
/// assert_eq!(values, vec![1389328440, 3606444522, 1466141297, 1335388159, 1971548345]);
///
/// assert!(generate(12345, 5, 0).is_err());
/// ```
pub fn generate(
    seed: impl Into<Seed>,
    count: usize,
    modulus: i128,
) -> Result<Vec<u128>, GeneratorError> {
    let prng = ZetaPrng::with_modulus(seed, modulus)?;
    tracing::debug!(seed = %prng.seed(), count, modulus = %prng.modulus(), "generating sequence");
    Ok(prng.generate(count))
}

/// Generate using the count and modulus from a [`GeneratorConfig`]
pub fn generate_with_config(
    seed: impl Into<Seed>,
    config: &GeneratorConfig,
) -> Result<Vec<u128>, GeneratorError> {
    generate(seed, config.count, config.modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_key_layout() {
        assert_eq!(hash_key(21.022040, 1, &Seed::Int(12345)), "21.02204112345");
        assert_eq!(hash_key(14.134725, 10, &Seed::from("ab")), "14.13472510ab");
        assert_eq!(hash_key(32.935062, 4, &Seed::Int(-7)), "32.9350624-7");
    }

    #[test]
    fn test_nth_skips_positions() {
        let prng = ZetaPrng::new(99, Modulus::DEFAULT);
        let mut iter = prng.iter();
        assert_eq!(iter.nth(3), Some(prng.value_at(3)));
        assert_eq!(iter.next(), Some(prng.value_at(4)));
    }

    #[test]
    fn test_zero_modulus_rejected_before_generation() {
        let err = generate(1, 3, 0).unwrap_err();
        assert!(err.to_string().starts_with("Invalid argument"));
    }

    #[test]
    fn test_empty_count() {
        assert!(generate(1, 0, 10).unwrap().is_empty());
    }
}
