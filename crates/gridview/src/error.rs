//! Error types for the gridview crate.
//!
//! Filtering itself never fails. These errors only surface while building
//! filter values, validating a schema, or loading configuration.

use thiserror::Error;

/// Errors that can occur when building filters, schemas, or configuration.
#[derive(Debug, Error)]
pub enum GridError {
    /// A date bound could not be parsed.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// A `select` or `multiSelect` field was declared without options.
    #[error("field '{key}' is a {kind} filter but declares no options")]
    MissingOptions { key: String, kind: &'static str },

    /// A `slider` field is missing one of `min`, `max`, or `step`.
    #[error("field '{key}' is a slider filter but is missing min, max or step")]
    MissingSliderBounds { key: String },

    /// Two descriptors share the same key.
    #[error("duplicate field key '{0}'")]
    DuplicateKey(String),

    /// Configuration or schema document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for gridview operations.
pub type Result<T> = std::result::Result<T, GridError>;
