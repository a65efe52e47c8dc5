//! Server application models.
//!
//! Holds the shared application state handed to every HTTP handler.

pub mod app;
