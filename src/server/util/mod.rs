//! Utility modules for the server application.

pub mod request;
