//! Threshold sweep and accuracy estimation
//!
//! Every threshold `k / 1000` for `k` in `[-1000, 1000)` is tried; a record is
//! predicted similar when its similarity is strictly above the threshold. The
//! best accuracy is reported with the binomial standard error
//! `sqrt(a (1 - a) / n)`.
//!
//! The scan runs in ascending threshold order and keeps the first maximum, but
//! only the accuracy leaves this module, so the winning threshold is never
//! observable. Picking the best of 2000 correlated thresholds biases `a`
//! upwards; the standard error does not account for that.
//!
//! `f64::sqrt` is correctly rounded while a `pow(x, 0.5)` based computation
//! may not be, so the standard error can differ from such tools in the last
//! bit. Only the JSON round-trip of a result is bit-exact.

use simeval_domain::constants::{
    CONFIDENCE_Z_95, THRESHOLD_LOWER_THOUSANDTHS, THRESHOLD_SCALE, THRESHOLD_UPPER_THOUSANDTHS,
};
use simeval_domain::error::{Error, Result};
use simeval_domain::{AccuracyResult, Label, SimilarityRecord};
use tracing::debug;

/// Fraction of records whose threshold prediction matches their label
///
/// Returns NaN for an empty slice; [`accuracy_and_se`] rejects that case
/// before calling this.
pub fn accuracy_at_threshold(records: &[SimilarityRecord], threshold: f64) -> f64 {
    let correct = records
        .iter()
        .filter(|r| Label::predict(r.similarity, threshold) == r.label)
        .count();
    correct as f64 / records.len() as f64
}

/// Best accuracy over the fixed threshold grid, with its standard error
pub fn accuracy_and_se(records: &[SimilarityRecord]) -> Result<AccuracyResult> {
    if records.is_empty() {
        return Err(Error::EmptyRecords);
    }

    let mut best = f64::NEG_INFINITY;
    let mut best_thousandths = THRESHOLD_LOWER_THOUSANDTHS;
    for k in THRESHOLD_LOWER_THOUSANDTHS..THRESHOLD_UPPER_THOUSANDTHS {
        let accuracy = accuracy_at_threshold(records, f64::from(k) / THRESHOLD_SCALE);
        if accuracy > best {
            best = accuracy;
            best_thousandths = k;
        }
    }

    let n = records.len() as f64;
    let standard_error = (best * (1.0 - best) / n).sqrt();
    debug!(
        records = records.len(),
        accuracy = best,
        threshold = f64::from(best_thousandths) / THRESHOLD_SCALE,
        "Threshold sweep finished"
    );

    Ok(AccuracyResult {
        accuracy: best,
        standard_error,
        message: format_message(best, standard_error),
    })
}

/// `"{accuracy:.1%} ± {1.96 * standard_error:.1%}"`
pub fn format_message(accuracy: f64, standard_error: f64) -> String {
    format!(
        "{:.1}% ± {:.1}%",
        accuracy * 100.0,
        CONFIDENCE_Z_95 * standard_error * 100.0
    )
}
