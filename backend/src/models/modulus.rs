//! Modulus model
//!
//! The exclusive upper bound on generated values. Callers hand in a signed
//! value so that zero and negative bounds can be rejected explicitly instead
//! of being unrepresentable at the call site.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rng::GeneratorError;

/// Validated, strictly positive modulus
///
/// # Example
/// ```
/// use zeta_prng_core::Modulus;
///
/// let modulus = Modulus::new(1000).unwrap();
/// assert_eq!(modulus.get(), 1000);
///
/// assert!(Modulus::new(0).is_err());
/// assert!(Modulus::new(-5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i128", into = "i128")]
pub struct Modulus(u128);

impl Modulus {
    /// 2^32, the bound used when none is given
    pub const DEFAULT: Modulus = Modulus(1 << 32);

    /// Validate a modulus
    ///
    /// # Errors
    /// Returns `GeneratorError::InvalidArgument` if `value <= 0`
    pub fn new(value: i128) -> Result<Self, GeneratorError> {
        if value <= 0 {
            return Err(GeneratorError::InvalidArgument(format!(
                "modulus must be a positive integer, got {}",
                value
            )));
        }
        Ok(Self(value as u128))
    }

    /// Underlying bound
    pub fn get(self) -> u128 {
        self.0
    }

    /// Reduce a big-endian unsigned integer of any width modulo `self`
    ///
    /// Binary long division, one bit at a time. The remainder stays below
    /// the modulus, which is at most `i128::MAX`, so `rem << 1 | bit` never
    /// overflows `u128`.
    pub fn reduce_be(self, bytes: &[u8]) -> u128 {
        let modulus = self.0;
        let mut rem: u128 = 0;
        for &byte in bytes {
            for shift in (0..8).rev() {
                rem = (rem << 1) | u128::from((byte >> shift) & 1);
                if rem >= modulus {
                    rem -= modulus;
                }
            }
        }
        rem
    }
}

impl Default for Modulus {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i128> for Modulus {
    type Error = GeneratorError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        Modulus::new(value)
    }
}

impl From<Modulus> for i128 {
    fn from(modulus: Modulus) -> Self {
        // new() only admits 1..=i128::MAX
        modulus.0 as i128
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_to_the_32() {
        assert_eq!(Modulus::default().get(), 4_294_967_296);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            Modulus::new(0),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Modulus::new(-5),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Modulus::new(i128::MIN),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_accepts_max() {
        assert_eq!(Modulus::new(i128::MAX).unwrap().get(), i128::MAX as u128);
    }

    #[test]
    fn test_reduce_small_values() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.reduce_be(&[]), 0);
        assert_eq!(m.reduce_be(&[0x00, 0x64]), 100 % 7);
        assert_eq!(m.reduce_be(&[0x01, 0x00, 0x00]), 65536 % 7);
    }

    #[test]
    fn test_reduce_matches_native_u128() {
        let value: u128 = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210;
        for modulus in [1u128, 2, 3, 255, 256, 1 << 32, 1_000_000_007, (1 << 100) + 3] {
            let m = Modulus::new(modulus as i128).unwrap();
            assert_eq!(m.reduce_be(&value.to_be_bytes()), value % modulus);
        }
    }

    #[test]
    fn test_reduce_ignores_leading_zero_bytes() {
        let m = Modulus::new(1_000).unwrap();
        let mut wide = [0u8; 32];
        wide[30] = 0x30;
        wide[31] = 0x39; // 12345
        assert_eq!(m.reduce_be(&wide), 345);
    }

    #[test]
    fn test_modulus_one_always_zero() {
        let m = Modulus::new(1).unwrap();
        assert_eq!(m.reduce_be(&[0xff; 32]), 0);
    }

    #[test]
    fn test_serde_rejects_zero() {
        assert!(serde_json::from_str::<Modulus>("0").is_err());
        let m: Modulus = serde_json::from_str("97").unwrap();
        assert_eq!(m.get(), 97);
    }
}
