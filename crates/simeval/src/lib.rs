//! # simeval
//!
//! Measures how well cosine similarity over text embeddings separates
//! similar from dissimilar text pairs, optionally after a learned linear
//! projection.
//!
//! ## Example
//!
//! ```ignore
//! use simeval::application::accuracy_and_se;
//! use simeval::{Label, SimilarityRecord};
//!
//! let records = vec![
//!     SimilarityRecord::new(1.0, Label::Similar),
//!     SimilarityRecord::new(0.0, Label::Dissimilar),
//! ];
//! let result = accuracy_and_se(&records)?;
//! assert_eq!(result.message, "100.0% ± 0.0%");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, constants and the error type
//! - `application` - Similarity, threshold sweep and dataset preparation
//! - `infrastructure` - Configuration, logging and file I/O
//! - `cli` - The `simeval` command line

pub mod cli;

/// Domain layer - value objects, constants and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use simeval_domain::*;
}

/// Application layer - domain services and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use simeval_application::*;
}

/// Infrastructure layer - config, logging and file I/O
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use simeval_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the command line entry point
pub use cli::{Cli, Command, run};
