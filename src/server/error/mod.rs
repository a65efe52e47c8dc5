//! Error types for the roster planner server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, storage, roster, builds). All errors implement `IntoResponse` for
//! Axum HTTP responses and use `thiserror` for ergonomic error definitions with automatic
//! `Display` and `Error` trait implementations.

pub mod build;
pub mod config;
pub mod roster;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        build::BuildError, config::ConfigError, roster::RosterError, storage::StorageError,
    },
};

/// Main error type for the server application.
///
/// Aggregates all domain-specific error types into a single unified error type, converted
/// from the domain errors via `?`. The `IntoResponse` implementation maps errors to the
/// appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Storage errors (reading or writing the persisted JSON files), never retried
/// - Roster errors (player not found)
/// - Build errors (unknown hash, unresolved hash collision)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Failure reading or writing a persisted collection.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Roster operation error.
    #[error(transparent)]
    RosterError(#[from] RosterError),
    /// Build registry error.
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For unknown players or build hashes
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            Self::RosterError(err) => err.into_response(),
            Self::BuildError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details such as file paths.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
