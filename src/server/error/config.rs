//! Startup configuration errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Problem with the environment the server was started in.
///
/// Only raised while reading [`Config`](crate::server::config::Config) at startup, where the
/// binary prints it and exits.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable without a default is unset or blank, e.g. `CLASSES_FILE`.
    #[error("{0} is not set, see .env.example")]
    MissingEnvVar(String),
    /// A variable is set to a value that does not parse, e.g. `BUILD_HASH_POLICY=loop`.
    #[error("{var} has an invalid value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
