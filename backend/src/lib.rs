//! Zeta PRNG Core - Rust Engine
//!
//! Deterministic pseudo-random integers seasoned with the imaginary parts of
//! the first Riemann zeta zeros and mixed through SHA-256.
//!
//! # Architecture
//!
//! - **core**: Configuration and defaults
//! - **models**: Domain types (Seed, Modulus)
//! - **rng**: Constant table and the generator itself
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Output length always equals the requested count
//! 2. Every value satisfies `0 <= value < modulus`
//! 3. Same (seed, count, modulus) → same sequence, always
//!
//! Not for cryptographic use.

// Module declarations
pub mod core;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use crate::core::config::{ConfigError, GeneratorConfig, DEFAULT_COUNT, DEFAULT_MODULUS};
pub use models::{Modulus, Seed};
pub use rng::{generate, generate_with_config, GeneratorError, ZetaPrng, ZetaValues, GAMMA_VALUES};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn zeta_prng_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::prng::PyZetaPrng>()?;
    m.add_function(wrap_pyfunction!(ffi::prng::zeta_prng, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::prng::generate_from_config, m)?)?;
    Ok(())
}
