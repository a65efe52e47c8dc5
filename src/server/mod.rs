//! Server application core modules.
//!
//! This module contains all server-side functionality for the roster planner: configuration,
//! JSON file persistence, the roster service, the content-addressed build registry and the
//! HTTP controllers exposing them. The class/spec table is loaded once at startup and shared
//! read-only through [`model::app::AppState`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
