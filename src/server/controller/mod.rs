//! HTTP controller endpoints for the roster planner API.
//!
//! This module contains Axum handlers for the class/spec table, the persisted roster and the
//! build registry. Controllers extract request data, call into the services and map results
//! onto HTTP responses; every handler is documented for OpenAPI through utoipa.

pub mod build;
pub mod class;
pub mod raider;
