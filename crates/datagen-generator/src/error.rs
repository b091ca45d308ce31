//! Error types for request resolution.

use datagen_core::LocaleError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a fake value.
///
/// Every variant is recoverable; callers decide whether to retry, substitute
/// a default or propagate.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Request string does not follow `context(path|path...)`.
    #[error("Malformed request '{request}': {reason}")]
    MalformedRequest { request: String, reason: &'static str },

    /// Locale construction failed (e.g. undefined country/language pairing).
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// No dataset file at the computed location.
    #[error("Dataset not found: {}", .path.display())]
    DatasetNotFound { path: PathBuf },

    /// Dataset file could not be read or is not valid JSON.
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pointer path addresses nothing in the dataset.
    #[error("Attribute not found at '{pointer}'")]
    MissingAttribute { pointer: String },

    /// Addressed node does not have the `{key: [candidates...]}` shape.
    #[error("Schema mismatch at '{pointer}': {reason}")]
    SchemaMismatch { pointer: String, reason: String },
}

impl GeneratorError {
    pub(crate) fn malformed(request: &str, reason: &'static str) -> Self {
        GeneratorError::MalformedRequest {
            request: request.to_string(),
            reason,
        }
    }

    pub(crate) fn mismatch(pointer: &str, reason: impl Into<String>) -> Self {
        GeneratorError::SchemaMismatch {
            pointer: pointer.to_string(),
            reason: reason.into(),
        }
    }
}
