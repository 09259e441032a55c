//! Configuration management
//!
//! Settings are layered with figment: built-in defaults, then a TOML file,
//! then `SIMEVAL_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AugmentConfig, EvaluationConfig, LoggingConfig, SplitConfig};
