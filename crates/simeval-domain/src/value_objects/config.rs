//! Evaluation configuration value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Treatment of zero-magnitude vectors during cosine similarity
///
/// Cosine similarity divides by the product of both norms, so a zero vector
/// leaves it undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroNormPolicy {
    /// Fail the run with [`Error::ZeroNorm`]
    #[default]
    Error,
    /// Yield NaN; a NaN similarity never exceeds a threshold, so the pairing
    /// is always predicted dissimilar
    Nan,
}

impl fmt::Display for ZeroNormPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Nan => write!(f, "nan"),
        }
    }
}

impl FromStr for ZeroNormPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "nan" => Ok(Self::Nan),
            _ => Err(Error::configuration(format!(
                "Invalid zero-norm policy: {s}. Use error or nan"
            ))),
        }
    }
}
