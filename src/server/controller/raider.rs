use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ClassifiedRosterDto, ErrorDto, ExportDto, NewPlayersDto},
        player::PlayerEntry,
        roster::RosterSort,
    },
    server::{error::Error, model::app::AppState, service::roster::RosterService},
};

pub static RAIDER_TAG: &str = "raider";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RolesParams {
    /// `ilvl` to order each role by item level, highest first
    pub sort: Option<RosterSort>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportParams {
    /// Append the invite status as a fourth field
    pub status: Option<bool>,
}

/// Get the current roster
#[utoipa::path(
    get,
    path = "/api/raiders",
    tag = RAIDER_TAG,
    responses(
        (status = 200, description = "Roster in insertion order", body = Vec<PlayerEntry>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_raiders(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let roster = RosterService::new(&state.raiders, &state.classes)
        .list()
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Add one or more players to the roster
///
/// Accepts a single player entry or an array of entries, appended in order.
#[utoipa::path(
    post,
    path = "/api/raiders",
    tag = RAIDER_TAG,
    request_body = NewPlayersDto,
    responses(
        (status = 200, description = "Updated roster", body = Vec<PlayerEntry>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_raiders(
    State(state): State<AppState>,
    Json(players): Json<NewPlayersDto>,
) -> Result<impl IntoResponse, Error> {
    let roster = RosterService::new(&state.raiders, &state.classes)
        .add(players.into_entries())
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Replace the whole roster
#[utoipa::path(
    put,
    path = "/api/raiders",
    tag = RAIDER_TAG,
    request_body = Vec<PlayerEntry>,
    responses(
        (status = 200, description = "Updated roster", body = Vec<PlayerEntry>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_raiders(
    State(state): State<AppState>,
    Json(players): Json<Vec<PlayerEntry>>,
) -> Result<impl IntoResponse, Error> {
    let roster = RosterService::new(&state.raiders, &state.classes)
        .replace(players)
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Remove every player from the roster
#[utoipa::path(
    delete,
    path = "/api/raiders",
    tag = RAIDER_TAG,
    responses(
        (status = 204, description = "Roster emptied"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_raiders(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    RosterService::new(&state.raiders, &state.classes)
        .reset()
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a player by name
///
/// Every entry whose name matches, ignoring case, is removed.
#[utoipa::path(
    delete,
    path = "/api/raiders/{name}",
    tag = RAIDER_TAG,
    params(("name" = String, Path, description = "Player name, case-insensitive")),
    responses(
        (status = 200, description = "Updated roster", body = Vec<PlayerEntry>),
        (status = 404, description = "No player with that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_raider(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let roster = RosterService::new(&state.raiders, &state.classes)
        .delete_by_name(&name)
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Get the roster grouped by role
///
/// Players whose class, spec, role or range cannot be resolved are left out of every role
/// and listed under `skipped`.
#[utoipa::path(
    get,
    path = "/api/roster/roles",
    tag = RAIDER_TAG,
    params(RolesParams),
    responses(
        (status = 200, description = "Roster grouped by role", body = ClassifiedRosterDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_raider_roles(
    State(state): State<AppState>,
    Query(params): Query<RolesParams>,
) -> Result<impl IntoResponse, Error> {
    let classified = RosterService::new(&state.raiders, &state.classes)
        .classified(params.sort.unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(classified)))
}

/// Export the roster as text
///
/// One `name;class;specId` line per player, with `;status` appended when requested.
#[utoipa::path(
    get,
    path = "/api/roster/export",
    tag = RAIDER_TAG,
    params(ExportParams),
    responses(
        (status = 200, description = "Roster export text", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_raiders(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, Error> {
    let export = RosterService::new(&state.raiders, &state.classes)
        .export(params.status.unwrap_or(false))
        .await?;

    Ok((StatusCode::OK, export))
}

/// Replace the roster with players parsed from export text
#[utoipa::path(
    post,
    path = "/api/roster/import",
    tag = RAIDER_TAG,
    request_body = ExportDto,
    responses(
        (status = 200, description = "Imported roster", body = Vec<PlayerEntry>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_raiders(
    State(state): State<AppState>,
    Json(body): Json<ExportDto>,
) -> Result<impl IntoResponse, Error> {
    let roster = RosterService::new(&state.raiders, &state.classes)
        .import(&body.export)
        .await?;

    Ok((StatusCode::OK, Json(roster)))
}
