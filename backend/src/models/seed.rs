//! Seed model
//!
//! A seed is either a signed integer or free-form text. Both reach the
//! generator through their textual form, which is embedded verbatim in every
//! hash key:
//!
//! - `Int` → decimal, leading `-` for negatives, no padding or `+` sign
//! - `Text` → the string as given (UTF-8, may be empty)
//!
//! So `Seed::Int(12345)` and `Seed::Text("12345".into())` produce the same
//! sequence, while `"012345"` does not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied value that parameterizes a sequence
///
/// # Example
/// ```
/// use zeta_prng_core::Seed;
///
/// let seed = Seed::from(12345);
/// assert_eq!(seed.to_string(), "12345");
///
/// let named = Seed::from("alpha");
/// assert_eq!(named.to_string(), "alpha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Integer seed, rendered in decimal
    Int(i64),

    /// Text seed, rendered verbatim
    Text(String),
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Int(value) => write!(f, "{}", value),
            Seed::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Int(value)
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed::Int(i64::from(value))
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed::Int(i64::from(value))
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        // Values above i64::MAX keep their exact decimal text
        match i64::try_from(value) {
            Ok(v) => Seed::Int(v),
            Err(_) => Seed::Text(value.to_string()),
        }
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}
