//! Data access layer repositories.
//!
//! Repositories wrap a [`JsonFileStore`](crate::server::storage::JsonFileStore) per
//! collection and expose the collection-level operations services build on. Every mutation
//! runs as a single locked read-modify-write on the underlying store.

pub mod build;
pub mod roster;
