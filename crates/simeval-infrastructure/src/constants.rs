//! Infrastructure layer constants
//!
//! Evaluation constants (threshold grid, confidence multiplier) live in
//! `simeval_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "simeval.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "simeval";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SIMEVAL";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "SIMEVAL_LOG";

/// File stem used when the log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "simeval";

// ============================================================================
// DATA FILE CONSTANTS
// ============================================================================

/// Extension selecting line-delimited JSON for pairing files
pub const JSON_LINES_EXTENSION: &str = "jsonl";

/// Extension selecting CSV (with a `text_1,text_2,label` header) for pairing files
pub const CSV_EXTENSION: &str = "csv";

/// Non-standard JSON token Python's `json` module writes for NaN
pub const PYTHON_NAN_TOKEN: &str = "NaN";
