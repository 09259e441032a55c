//! Domain layer constants
//!
//! The threshold grid and the confidence multiplier are fixed so that reported
//! accuracies stay comparable with previously published results. None of these
//! values is exposed as a command-line flag or configuration key.

// ============================================================================
// THRESHOLD SWEEP CONSTANTS
// ============================================================================

/// First threshold of the sweep, in thousandths (inclusive): -1.000
pub const THRESHOLD_LOWER_THOUSANDTHS: i32 = -1000;

/// End of the sweep, in thousandths (exclusive): the last threshold is 0.999
pub const THRESHOLD_UPPER_THOUSANDTHS: i32 = 1000;

/// Divisor turning a thousandths step into a threshold value
pub const THRESHOLD_SCALE: f64 = 1000.0;

// ============================================================================
// REPORTING CONSTANTS
// ============================================================================

/// z-score of a two-sided 95% confidence interval
pub const CONFIDENCE_Z_95: f64 = 1.96;

// ============================================================================
// DATASET PREPARATION CONSTANTS
// ============================================================================

/// Default fraction of pairings held out by a train/test split
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Separator used when building order-independent pairing keys
pub const PAIRING_KEY_SEPARATOR: &str = "___";
