//! Error types for the catalog crate.
//!
//! Everything that can go wrong while reading a post listing ends up
//! here: the file itself, the JSON syntax, or a record whose shape does
//! not match what the scoring and filtering code expects.

use thiserror::Error;

/// Errors that can occur while loading and validating a post listing
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The listing is not valid JSON, or not a JSON array
    #[error("Malformed JSON listing: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A single record didn't have the expected shape
    ///
    /// `record` is the zero-based position of the record in the listing.
    #[error("Parse error at record {record} in {source_name}: {reason}")]
    ParseError {
        source_name: String,
        record: usize,
        reason: String,
    },

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two posts in the same listing share an id
    #[error("Duplicate post id: {id}")]
    DuplicatePost { id: String },

    /// A record parsed but breaks a listing rule (e.g. a repeated category id)
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
