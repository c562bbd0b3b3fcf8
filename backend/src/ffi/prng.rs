//! PyO3 wrapper for the generator

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{clamp_count, parse_generator_config, parse_modulus, seed_from_py, to_py_err};
use crate::core::config::DEFAULT_COUNT;
use crate::rng::{generate_with_config, ZetaPrng as RustZetaPrng};

/// Generate `n_values` integers in `[0, modulus)` from `seed`
///
/// # Example (from Python)
///
/// ```python
/// from zeta_prng_core import zeta_prng
///
/// print("Generated Random Numbers:", zeta_prng(12345, n_values=5))
/// ```
///
/// The seed is keyed by `str(seed)`, so any Python object is accepted.
/// A negative `n_values` returns an empty list. `modulus` defaults to
/// `2**32` and must lie in `1..=2**127 - 1`.
///
/// # Errors
///
/// - ValueError if `modulus <= 0`
/// - OverflowError if `modulus > 2**127 - 1`
#[pyfunction]
#[pyo3(signature = (seed, n_values = DEFAULT_COUNT as isize, modulus = None))]
pub fn zeta_prng(seed: &Bound<'_, PyAny>, n_values: isize, modulus: Option<i128>) -> PyResult<Vec<u128>> {
    let prng = RustZetaPrng::new(seed_from_py(seed)?, parse_modulus(modulus)?);
    Ok(prng.generate(clamp_count(n_values)))
}

/// Generate using a config dict (`{"n_values": 5, "modulus": 1000}`)
///
/// `count` is accepted in place of `n_values`. Same modulus limits as
/// `zeta_prng`.
#[pyfunction]
pub fn generate_from_config(seed: &Bound<'_, PyAny>, config: &Bound<'_, PyDict>) -> PyResult<Vec<u128>> {
    let config = parse_generator_config(config)?;
    generate_with_config(seed_from_py(seed)?, &config).map_err(to_py_err)
}

/// Python wrapper for a seeded generator
///
/// ```python
/// prng = ZetaPrng(12345)
/// prng.value_at(0)      # 1389328440
/// prng.generate(5)
/// ```
#[pyclass(name = "ZetaPrng")]
pub struct PyZetaPrng {
    inner: RustZetaPrng,
}

#[pymethods]
impl PyZetaPrng {
    #[new]
    #[pyo3(signature = (seed, modulus = None))]
    fn new(seed: &Bound<'_, PyAny>, modulus: Option<i128>) -> PyResult<Self> {
        Ok(PyZetaPrng {
            inner: RustZetaPrng::new(seed_from_py(seed)?, parse_modulus(modulus)?),
        })
    }

    /// Value at a single position
    fn value_at(&self, index: u64) -> u128 {
        self.inner.value_at(index)
    }

    #[pyo3(signature = (n_values = DEFAULT_COUNT as isize))]
    fn generate(&self, n_values: isize) -> Vec<u128> {
        self.inner.generate(clamp_count(n_values))
    }

    #[getter]
    fn modulus(&self) -> u128 {
        self.inner.modulus().get()
    }

    fn __repr__(&self) -> String {
        format!(
            "ZetaPrng(seed={:?}, modulus={})",
            self.inner.seed().to_string(),
            self.inner.modulus()
        )
    }
}
