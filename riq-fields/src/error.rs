//! Error types for schema handling

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while loading a list schema.
///
/// Lookups themselves never fail; a miss is reported as `None`.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// The schema document could not be decoded
    #[error("invalid schema document: {0}")]
    Decode(#[from] serde_json::Error),

    /// A field or option id in the schema is not an integer
    #[error("id is not an integer: {id}")]
    NonNumericId { id: String },
}
