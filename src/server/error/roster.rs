use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Roster operation error type.
#[derive(Error, Debug)]
pub enum RosterError {
    /// No roster entry matched the name, compared case-insensitively.
    #[error("Player {0:?} not found in roster")]
    PlayerNotFound(String),
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        match self {
            Self::PlayerNotFound(ref name) => {
                tracing::debug!(name = %name, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Player not found")
            }
        }
    }
}
