//! Unified error types for the domain layer
//!
//! Normalization never fails, so the only errors here come from parsing
//! field names and from reading an uploaded interchange file.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for field names and other value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for SheetField {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "gold" => Ok(Self::Gold),
    ///             _ => Err(DomainError::parse(format!("Unknown sheet field: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Why an uploaded sheet could not be imported.
///
/// Every variant is recoverable: callers fall back to the sheet submitted
/// alongside the upload instead of reporting the failure.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The request carried no `upload` file part.
    #[error("No sheet file was uploaded")]
    MissingUpload,

    /// The bytes are not valid JSON.
    #[error("Uploaded sheet is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// Valid JSON, but not an object keyed by field name.
    #[error("Uploaded sheet must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}
