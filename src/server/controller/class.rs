use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::class::ClassSpecTable, server::model::app::AppState};

pub static CLASS_TAG: &str = "class";

/// Get the class/spec table
///
/// Returns every playable class with its colour and specializations, keyed by class
/// identifier. The table is static for the lifetime of the server.
#[utoipa::path(
    get,
    path = "/api/classes",
    tag = CLASS_TAG,
    responses(
        (status = 200, description = "Class/spec table", body = ClassSpecTable),
    ),
)]
pub async fn get_classes(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.classes.as_ref().clone()))
}
