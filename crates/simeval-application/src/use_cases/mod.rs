//! Use cases composed from the domain services

pub mod augment;
pub mod evaluator;
pub mod split;

pub use augment::augment_negatives;
pub use evaluator::{ComparisonReport, SimilarityEvaluator};
pub use split::{TrainTestSplit, train_test_split};
