//! Type conversion utilities for FFI boundary
//!
//! Converts Python objects into generator inputs.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::config::{GeneratorConfig, DEFAULT_COUNT, DEFAULT_MODULUS};
use crate::models::{Modulus, Seed};
use crate::rng::GeneratorError;

/// Extract a field with a default value if missing.
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_with_default<T>(dict: &Bound<'_, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Any Python object becomes a text seed holding `str(obj)`
///
/// This matches how the key is built on the Python side, including for
/// integers beyond 64 bits.
pub fn seed_from_py(seed: &Bound<'_, PyAny>) -> PyResult<Seed> {
    let text: String = seed.str()?.extract()?;
    Ok(Seed::Text(text))
}

/// Map generator errors to `ValueError`
pub fn to_py_err(err: GeneratorError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python counts follow `range(n)`: anything below zero means no values
pub fn clamp_count(n_values: isize) -> usize {
    n_values.max(0) as usize
}

/// Validate an optional modulus, defaulting to 2^32
///
/// Python ints above `i128::MAX` fail conversion with `OverflowError`
/// before reaching this point.
pub fn parse_modulus(modulus: Option<i128>) -> PyResult<Modulus> {
    Modulus::new(modulus.unwrap_or(DEFAULT_MODULUS)).map_err(to_py_err)
}

/// Convert Python dict to GeneratorConfig
///
/// Recognized keys: `n_values` (alias `count`) and `modulus`. A negative
/// count yields no values, as `range(n)` would.
///
/// # Errors
///
/// Returns PyErr if:
/// - Type conversions fail
/// - The modulus is not positive
pub fn parse_generator_config(py_config: &Bound<'_, PyDict>) -> PyResult<GeneratorConfig> {
    let count: isize = match py_config.get_item("n_values")? {
        Some(value) => value.extract()?,
        None => extract_with_default(py_config, "count", DEFAULT_COUNT as isize)?,
    };
    let modulus: i128 = extract_with_default(py_config, "modulus", DEFAULT_MODULUS)?;

    let config = GeneratorConfig::new(clamp_count(count), modulus);
    config.validate().map_err(to_py_err)?;
    Ok(config)
}
