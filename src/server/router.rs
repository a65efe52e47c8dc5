//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState, util::request::log_request};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/classes` - Class/spec table
/// - `GET /api/raiders` - Current roster
/// - `POST /api/raiders` - Append one or more players
/// - `PUT /api/raiders` - Replace the roster
/// - `DELETE /api/raiders` - Empty the roster
/// - `DELETE /api/raiders/{name}` - Remove players by name, case-insensitive
/// - `GET /api/roster/roles` - Roster grouped by role
/// - `GET /api/roster/export` - Roster as export text
/// - `POST /api/roster/import` - Replace the roster from export text
/// - `POST /api/build` - Save a build, returns its hash
/// - `GET /api/build/{hash}` - Build export text
/// - `GET /api/build/{hash}/roster` - Build parsed into players
///
/// Every API request is logged through [`log_request`].
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state and merged into the main
/// application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Raidcomp", description = "Raid roster planner API"), tags(
        (name = controller::class::CLASS_TAG, description = "Class/spec metadata"),
        (name = controller::raider::RAIDER_TAG, description = "Persisted raid roster"),
        (name = controller::build::BUILD_TAG, description = "Shareable roster builds"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::class::get_classes))
        .routes(routes!(
            controller::raider::get_raiders,
            controller::raider::add_raiders,
            controller::raider::replace_raiders,
            controller::raider::reset_raiders
        ))
        .routes(routes!(controller::raider::delete_raider))
        .routes(routes!(controller::raider::get_raider_roles))
        .routes(routes!(controller::raider::export_raiders))
        .routes(routes!(controller::raider::import_raiders))
        .routes(routes!(controller::build::save_build))
        .routes(routes!(controller::build::get_build))
        .routes(routes!(controller::build::get_build_roster))
        .split_for_parts();

    let routes = routes
        .layer(middleware::from_fn(log_request))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
