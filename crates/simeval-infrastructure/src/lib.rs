//! # Infrastructure Layer
//!
//! Technical concerns around an evaluation run: where settings come from,
//! where logs go, and how datasets are read from and written to disk.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Data Files
//! | Module | Description |
//! |--------|-------------|
//! | [`io`] | Embeddings, pairings, similarity records and `.npy` matrices |
//! | [`utils`] | JSON file helpers |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod io;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use utils::FileUtils;
