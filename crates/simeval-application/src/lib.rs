//! Application Layer - simeval
//!
//! Evaluation logic over the domain value objects.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the pure computations (`domain_services`)
//! - Composes them into the operations the command line exposes (`use_cases`)
//! - Performs no I/O; callers hand in fully loaded inputs
//!
//! ## Domain Services
//!
//! - `similarity`: cosine similarity, optionally through a projection matrix
//! - `pairwise`: similarity records for a list of labeled pairings
//! - `accuracy`: threshold sweep, best accuracy and its standard error
//! - `labels`: positive/negative counts
//!
//! ## Use Cases
//!
//! - `evaluator`: end-to-end evaluation and before/after matrix comparison
//! - `augment`: balancing a dataset with generated negative pairings
//! - `split`: stratified train/test split
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `simeval-domain`: value objects, constants and errors
//! - Pure Rust libraries for numerics, randomness and logging

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
