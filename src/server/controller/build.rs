use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BuildHashDto, ErrorDto, ExportDto},
        player::PlayerEntry,
    },
    server::{
        error::{build::BuildError, Error},
        model::app::AppState,
        service::build::BuildRegistry,
    },
};

pub static BUILD_TAG: &str = "build";

/// Save a roster build
///
/// Stores the export text under a short content hash and returns the hash. Saved builds
/// are immutable.
#[utoipa::path(
    post,
    path = "/api/build",
    tag = BUILD_TAG,
    request_body = ExportDto,
    responses(
        (status = 200, description = "Hash the build was stored under", body = BuildHashDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_build(
    State(state): State<AppState>,
    Json(body): Json<ExportDto>,
) -> Result<impl IntoResponse, Error> {
    let hash = BuildRegistry::new(&state.builds, state.hash_policy)
        .save_build(&body.export)
        .await?;

    Ok((StatusCode::OK, Json(BuildHashDto { hash })))
}

/// Get the export text of a build
#[utoipa::path(
    get,
    path = "/api/build/{hash}",
    tag = BUILD_TAG,
    params(("hash" = String, Path, description = "Build hash")),
    responses(
        (status = 200, description = "Build export text", body = String, content_type = "text/plain"),
        (status = 404, description = "Build not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_build(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let export = BuildRegistry::new(&state.builds, state.hash_policy)
        .get_build(&hash)
        .await?
        .ok_or_else(|| BuildError::NotFound(hash.clone()))?;

    Ok((StatusCode::OK, export))
}

/// Get a build parsed into roster entries
#[utoipa::path(
    get,
    path = "/api/build/{hash}/roster",
    tag = BUILD_TAG,
    params(("hash" = String, Path, description = "Build hash")),
    responses(
        (status = 200, description = "Players of the build", body = Vec<PlayerEntry>),
        (status = 404, description = "Build not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_build_roster(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let roster = BuildRegistry::new(&state.builds, state.hash_policy)
        .get_build_roster(&hash, &state.classes)
        .await?
        .ok_or_else(|| BuildError::NotFound(hash.clone()))?;

    Ok((StatusCode::OK, Json(roster)))
}
