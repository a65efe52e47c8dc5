//! Domain types shared between the server and the web client.
//!
//! Everything in here is pure: the class/spec metadata table, roster entries, the role
//! classifier and the export text codec. The server wraps these with persistence and HTTP,
//! the client uses the very same classifier to lay out role columns.

pub mod api;
pub mod class;
pub mod export;
pub mod player;
pub mod roster;
