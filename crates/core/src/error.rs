//! Error types for Structura operations.
//!
//! This module defines the main error type [`StructuraError`] which represents
//! all possible errors that can occur while ingesting a document and producing
//! its structured-data payload.
//!
//! Extraction misses (no FAQ pairs, no steps, no headings) are deliberately
//! NOT errors: they are empty collections, absorbed by the assembler's
//! degrade-to-article rules. Only caller contract violations surface here.
//!
//! # Example
//!
//! ```rust
//! use structura_core::{Document, StructuraError};
//!
//! let result = Document::from_json(&serde_json::Value::Null);
//! assert!(matches!(result, Err(StructuraError::MissingDocument)));
//! ```

use thiserror::Error;

/// Main error type for structured-data synthesis operations.
///
/// Every variant represents a caller contract violation or a serialization
/// failure; content-quality problems (sparse markup, missing structure) never
/// produce an error.
#[derive(Error, Debug)]
pub enum StructuraError {
    /// The caller supplied a null/absent document.
    ///
    /// This is a contract violation of the persistence collaborator and is
    /// never silently defaulted.
    #[error("No document was provided")]
    MissingDocument,

    /// A required document field is absent or has the wrong JSON type.
    ///
    /// Returned by [`crate::Document::from_json`] when, for example, the body
    /// is not a string.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The document's canonical URL cannot be parsed.
    ///
    /// The canonical URL is embedded verbatim in every payload, so an
    /// unparseable one indicates a caller bug and is rejected at ingestion.
    #[error("Invalid canonical URL: {0}")]
    InvalidUrl(String),

    /// JSON serialization errors.
    ///
    /// Wraps serde_json failures from the `to_json` conveniences.
    #[error("Failed to serialize: {0}")]
    Serialization(String),
}

/// Result type alias for StructuraError.
///
/// This is a convenience alias for `std::result::Result<T, StructuraError>`.
pub type Result<T> = std::result::Result<T, StructuraError>;
