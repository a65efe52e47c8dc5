//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories: the roster service
//! combines persistence with the shared role classifier and export codec, and the build
//! registry implements content-addressed build storage.

pub mod build;
pub mod roster;
