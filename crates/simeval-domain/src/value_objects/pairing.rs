//! Labeled Text Pairing Value Objects
//!
//! A pairing states whether two texts should be judged similar. Labels are
//! serialized as the integers `1` and `-1`; any other value is rejected while
//! parsing, so a loaded pairing is always well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PAIRING_KEY_SEPARATOR;
use crate::error::Error;

/// Similar / dissimilar judgment, serialized as `1` / `-1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Label {
    /// The texts are dissimilar (`-1`)
    Dissimilar,
    /// The texts are similar (`1`)
    Similar,
}

impl Label {
    /// Integer form used in data files
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Similar => 1,
            Self::Dissimilar => -1,
        }
    }

    /// Prediction made by a threshold classifier
    ///
    /// Strictly greater than the threshold means similar. NaN is never
    /// greater than anything, so it predicts dissimilar.
    pub fn predict(similarity: f64, threshold: f64) -> Self {
        if similarity > threshold {
            Self::Similar
        } else {
            Self::Dissimilar
        }
    }
}

impl TryFrom<i64> for Label {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Similar),
            -1 => Ok(Self::Dissimilar),
            other => Err(Error::InvalidLabel { value: other }),
        }
    }
}

impl From<Label> for i64 {
    fn from(label: Label) -> Self {
        label.as_i64()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// Value Object: Labeled Text Pairing
///
/// ## Example
///
/// ```rust
/// use simeval_domain::{Label, Pairing};
///
/// let pairing: Pairing =
///     serde_json::from_str(r#"{"text_1": "Paris", "text_2": "France", "label": 1}"#).unwrap();
/// assert_eq!(pairing.label, Label::Similar);
///
/// let bad = serde_json::from_str::<Pairing>(r#"{"text_1": "a", "text_2": "b", "label": 0}"#);
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// First text
    pub text_1: String,
    /// Second text
    pub text_2: String,
    /// Whether the two texts are similar
    pub label: Label,
}

impl Pairing {
    /// Create a new pairing
    pub fn new<A: Into<String>, B: Into<String>>(text_1: A, text_2: B, label: Label) -> Self {
        Self {
            text_1: text_1.into(),
            text_2: text_2.into(),
            label,
        }
    }

    /// Order-independent identity of the two texts
    pub fn key(&self) -> String {
        pairing_key(&self.text_1, &self.text_2)
    }
}

/// Order-independent key for a pair of texts
pub fn pairing_key(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    format!("{first}{PAIRING_KEY_SEPARATOR}{second}")
}

/// Number of similar and dissimilar pairings in a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    /// Pairings labeled similar
    pub positives: usize,
    /// Pairings labeled dissimilar
    pub negatives: usize,
}

impl LabelCounts {
    /// Total number of pairings
    pub const fn total(&self) -> usize {
        self.positives + self.negatives
    }
}
