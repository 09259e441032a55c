//! File I/O utilities
//!
//! Common patterns for JSON serialization, file writing, and error handling.

use crate::error_ext::ErrorContext;
use simeval_domain::error::Result;
use std::path::Path;

/// File utilities for common I/O patterns
///
/// Provides convenience methods that combine multiple operations with proper
/// error handling and consistent error messages.
pub struct FileUtils;

impl FileUtils {
    /// Write compact JSON to file, creating parent directories as needed
    ///
    /// # Arguments
    /// * `path` - The file path to write to
    /// * `value` - The value to serialize and write
    /// * `context` - Description for error messages (e.g., "similarity records")
    pub fn write_json<T: serde::Serialize, P: AsRef<Path>>(
        path: P,
        value: &T,
        context: &str,
    ) -> Result<()> {
        let content = serde_json::to_string(value)
            .io_context(format!("Failed to serialize {context}"))?;
        Self::ensure_dir_write(path, content.as_bytes(), context)
    }

    /// Read JSON from file with proper error handling
    ///
    /// # Arguments
    /// * `path` - The file path to read from
    /// * `context` - Description for error messages (e.g., "embeddings")
    pub fn read_json<T: serde::de::DeserializeOwned, P: AsRef<Path>>(
        path: P,
        context: &str,
    ) -> Result<T> {
        let content = Self::read_to_string(path.as_ref(), context)?;
        serde_json::from_str(&content).io_context(format!(
            "Failed to parse {context} from {}",
            path.as_ref().display()
        ))
    }

    /// Read a whole file as UTF-8 text
    pub fn read_to_string<P: AsRef<Path>>(path: P, context: &str) -> Result<String> {
        std::fs::read_to_string(path.as_ref()).io_context(format!(
            "Failed to read {context} from {}",
            path.as_ref().display()
        ))
    }

    /// Ensure the parent directory exists and write the file
    pub fn ensure_dir_write<P: AsRef<Path>>(path: P, content: &[u8], context: &str) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).io_context(format!(
                "Failed to create directory for {context}: {}",
                parent.display()
            ))?;
        }
        std::fs::write(path, content)
            .io_context(format!("Failed to write {context} to {}", path.display()))
    }
}
