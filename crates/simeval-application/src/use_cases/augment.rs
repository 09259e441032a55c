//! Negative augmentation
//!
//! Datasets of known-similar pairs usually carry few negatives. Texts that
//! were never paired are assumed dissimilar, so unused combinations of the
//! dataset's own texts are added as negatives until both labels are balanced.

use rand::Rng;
use rand::seq::SliceRandom;
use simeval_domain::value_objects::pairing::pairing_key;
use simeval_domain::{Label, Pairing};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::domain_services::count_labels;

/// Balance `pairings` by appending generated negatives
///
/// Adds `positives - negatives` negatives when that is positive and returns
/// the input unchanged otherwise. Candidates are every unordered pair of
/// distinct texts not already paired in either order; a random subset is
/// drawn with `rng`. With too few candidates, all of them are added.
pub fn augment_negatives<R: Rng + ?Sized>(pairings: &[Pairing], rng: &mut R) -> Vec<Pairing> {
    let counts = count_labels(pairings);
    let needed = counts.positives.saturating_sub(counts.negatives);
    if needed == 0 {
        return pairings.to_vec();
    }

    let mut seen_texts = HashSet::new();
    let mut texts: Vec<&str> = Vec::new();
    let mut paired = HashSet::new();
    for pairing in pairings {
        for text in [pairing.text_1.as_str(), pairing.text_2.as_str()] {
            if seen_texts.insert(text) {
                texts.push(text);
            }
        }
        paired.insert(pairing.key());
    }

    let mut candidates: Vec<Pairing> = Vec::new();
    for (i, text_1) in texts.iter().enumerate() {
        for text_2 in &texts[i + 1..] {
            if !paired.contains(&pairing_key(text_1, text_2)) {
                candidates.push(Pairing::new(*text_1, *text_2, Label::Dissimilar));
            }
        }
    }

    if candidates.len() < needed {
        warn!(
            needed,
            available = candidates.len(),
            "Not enough unpaired texts to fully balance labels"
        );
    }

    candidates.shuffle(rng);
    candidates.truncate(needed);
    debug!(added = candidates.len(), "Augmented negatives");

    let mut augmented = pairings.to_vec();
    augmented.extend(candidates);
    augmented
}
