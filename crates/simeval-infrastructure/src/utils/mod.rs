//! Infrastructure utilities
//!
//! Reusable helpers for JSON file I/O.

mod file;

pub use file::FileUtils;
