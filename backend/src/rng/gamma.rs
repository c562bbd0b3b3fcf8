//! Riemann zeta zero constants
//!
//! The imaginary parts of the first five non-trivial zeros of the Riemann
//! zeta function, truncated to six decimal places. Each output position
//! draws its "seasoning" from this table, cycling every five indices.
//!
//! CRITICAL: These literals are part of the output format. Changing a digit,
//! or evaluating them with anything other than IEEE-754 `f64` arithmetic,
//! silently changes every generated sequence.

/// Imaginary parts of the first five non-trivial zeta zeros
pub const GAMMA_VALUES: [f64; 5] = [14.134725, 21.022040, 25.010858, 30.424876, 32.935062];

/// Scale applied to the fractional part before truncation
const FRACTION_SCALE: f64 = 1_000_000_000.0;

/// Constant used at a given output position
///
/// # Example
/// ```
/// use zeta_prng_core::rng::gamma_for_index;
///
/// assert_eq!(gamma_for_index(0), gamma_for_index(5));
/// ```
pub fn gamma_for_index(index: u64) -> f64 {
    GAMMA_VALUES[(index % GAMMA_VALUES.len() as u64) as usize]
}

/// Fractional part of `gamma` scaled by one billion and truncated
///
/// Float rounding leaks through here: `14.134725` scales to `134724999`,
/// not `134725000`.
pub fn scaled_fraction(gamma: f64) -> u64 {
    let fraction = gamma - gamma.floor();
    (fraction * FRACTION_SCALE).floor() as u64
}
