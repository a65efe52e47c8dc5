//! Persistence error types.
//!
//! Storage errors are unrecoverable for the request that hit them: they are propagated to
//! the HTTP boundary and reported as internal server errors, never retried.

use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failure reading or writing a persisted JSON collection.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be read, written or renamed.
    #[error("Failed to access {path:?}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not valid JSON for the collection type.
    #[error("Failed to (de)serialize {path:?}: {source}")]
    Json {
        /// File being accessed
        path: PathBuf,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
