//! Python bindings
//!
//! Exposes the generator to Python with the same call shape as the original
//! driver: `zeta_prng(seed, n_values=10, modulus=2**32)`.

pub mod prng;
pub mod types;
