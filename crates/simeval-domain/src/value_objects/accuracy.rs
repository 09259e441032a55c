//! Accuracy Result Value Object

use serde::{Deserialize, Serialize};

/// Value Object: Best-Threshold Classification Accuracy
///
/// Terminal output of an evaluation. `message` is the human-readable form,
/// `"{accuracy:.1%} ± {1.96 * standard_error:.1%}"`.
///
/// Older result files name the standard error `se`; both keys deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyResult {
    /// Highest accuracy over the threshold grid, in [0, 1]
    pub accuracy: f64,
    /// Binomial standard error of `accuracy`
    #[serde(alias = "se")]
    pub standard_error: f64,
    /// Accuracy and 95% half-width, both as percentages
    pub message: String,
}
