//! Domain Value Objects
//!
//! Immutable value objects flowing through an evaluation run.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`EmbeddingStore`] | Text → embedding vector mapping loaded from disk |
//! | [`Pairing`] | Two texts plus a similar/dissimilar [`Label`] |
//! | [`SimilarityRecord`] | Computed similarity of one pairing, with its label |
//! | [`AccuracyResult`] | Best-threshold accuracy, standard error and message |
//! | [`ProjectionMatrix`] | Optional linear transform applied before similarity |
//! | [`ZeroNormPolicy`] | How zero-magnitude vectors are treated |

/// Accuracy result value object
pub mod accuracy;
/// Evaluation configuration value objects
pub mod config;
/// Embedding storage value objects
pub mod embedding;
/// Labeled text pairing value objects
pub mod pairing;
/// Projection matrix value object
pub mod projection;
/// Similarity record value object
pub mod similarity;

pub use accuracy::AccuracyResult;
pub use config::ZeroNormPolicy;
pub use embedding::EmbeddingStore;
pub use pairing::{Label, LabelCounts, Pairing};
pub use projection::ProjectionMatrix;
pub use similarity::SimilarityRecord;
