//! Stratified train/test split

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use simeval_domain::error::{Error, Result};
use simeval_domain::Pairing;
use tracing::debug;

/// Pairings divided into a training and a held-out test set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainTestSplit {
    /// Training pairings
    pub train: Vec<Pairing>,
    /// Held-out pairings
    pub test: Vec<Pairing>,
}

/// Split `pairings` so both sides keep the label proportions
///
/// Pairings are stably sorted by label and every `floor(1 / test_fraction)`-th
/// one, starting with the first, goes to the test set. Each side is then
/// shuffled with `rng`. Three pairings at a fraction of 0.5 give one training
/// and two test pairings.
pub fn train_test_split<R: Rng + ?Sized>(
    pairings: &[Pairing],
    test_fraction: f64,
    rng: &mut R,
) -> Result<TrainTestSplit> {
    if !(test_fraction > 0.0 && test_fraction <= 1.0) {
        return Err(Error::invalid_argument(format!(
            "test fraction must be in (0, 1], got {test_fraction}"
        )));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let multiple = (1.0 / test_fraction).floor() as usize;

    let mut sorted = pairings.to_vec();
    sorted.sort_by_key(|p| p.label);

    let mut split = TrainTestSplit::default();
    for (i, pairing) in sorted.into_iter().enumerate() {
        if i % multiple == 0 {
            split.test.push(pairing);
        } else {
            split.train.push(pairing);
        }
    }

    split.train.shuffle(rng);
    split.test.shuffle(rng);
    debug!(
        train = split.train.len(),
        test = split.test.len(),
        "Split pairings"
    );
    Ok(split)
}
