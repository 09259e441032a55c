//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for simeval
///
/// Every variant is fatal for the run that produced it; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O or file format error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A pairing references a text that has no embedding
    #[error("Missing embedding for text: {text:?}")]
    MissingEmbedding {
        /// The text that could not be found
        text: String,
    },

    /// Cosine similarity is undefined for a zero-magnitude vector
    #[error("Zero-norm vector: cosine similarity is undefined")]
    ZeroNorm,

    /// Two vectors (or a vector and a matrix) have incompatible shapes
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Where the mismatch was detected
        context: String,
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// Accuracy was requested for an empty record sequence
    #[error("Cannot estimate accuracy from an empty set of similarity records")]
    EmptyRecords,

    /// A pairing label other than 1 or -1
    #[error("Invalid label {value}: expected 1 or -1")]
    InvalidLabel {
        /// The rejected label value
        value: i64,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Projection matrix could not be read or has an unusable shape
    #[error("Matrix error: {message}")]
    Matrix {
        /// Description of the matrix error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Evaluation error creation methods
impl Error {
    /// Create a missing embedding error
    pub fn missing_embedding<S: Into<String>>(text: S) -> Self {
        Self::MissingEmbedding { text: text.into() }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<S: Into<String>>(context: S, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Matrix error creation methods
impl Error {
    /// Create a matrix error
    pub fn matrix<S: Into<String>>(message: S) -> Self {
        Self::Matrix {
            message: message.into(),
            source: None,
        }
    }

    /// Create a matrix error with source
    pub fn matrix_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Matrix {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
