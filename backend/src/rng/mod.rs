//! Deterministic random number generation
//!
//! Values are derived from the Riemann zeta zero table mixed with SHA-256
//! digests of `(gamma, index, seed)`.
//! CRITICAL: Output is part of the public contract. Any change to the table,
//! the key layout or the mixing step changes every sequence.

mod gamma;
mod zeta;

pub use gamma::{gamma_for_index, scaled_fraction, GAMMA_VALUES};
pub use zeta::{generate, generate_with_config, hash_key, GeneratorError, ZetaPrng, ZetaValues};
