//! # simeval Domain Layer
//!
//! Core types for evaluating how well cosine similarity over text embeddings
//! separates similar from dissimilar text pairs.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Fixed evaluation constants (threshold grid, confidence multiplier) |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`value_objects`] | Embeddings, pairings, similarity records, accuracy results |
//!
//! This crate holds no I/O and no algorithms beyond the invariants of its
//! value objects. Evaluation logic lives in `simeval-application`.

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    AccuracyResult, EmbeddingStore, Label, LabelCounts, Pairing, ProjectionMatrix,
    SimilarityRecord, ZeroNormPolicy,
};
