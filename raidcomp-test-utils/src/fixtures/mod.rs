//! Test fixtures for the data files.
//!
//! - `classes` - A small class/spec table covering every role and range
//! - `factory` - Roster entries in their stored JSON form

pub mod classes;
pub mod factory;
