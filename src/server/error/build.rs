//! Build registry error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Build registry error type.
#[derive(Error, Debug)]
pub enum BuildError {
    /// No build is stored under the hash.
    #[error("Build {0:?} not found")]
    NotFound(String),
    /// Both the short hash and its single re-hash are taken by other builds.
    ///
    /// Only reachable with the single re-hash policy; the new build is rejected rather than
    /// overwriting the build already stored under the re-hashed key.
    #[error("Build hash {0:?} collides with an existing build after re-hashing")]
    UnresolvedCollision(String),
    /// Every hash length up to the full digest is taken by other builds.
    #[error("No free build hash left for export")]
    HashSpaceExhausted,
}

impl IntoResponse for BuildError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref hash) => {
                tracing::debug!(hash = %hash, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Build not found")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
