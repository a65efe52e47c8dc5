use std::{path::PathBuf, sync::Arc};

use crate::{
    model::class::ClassSpecTable,
    server::{
        data::{build::BuildStore, roster::RosterStore},
        service::build::HashPolicy,
    },
};

/// State shared by all request handlers.
///
/// The class/spec table is immutable after startup. Each persisted collection has exactly one
/// store instance so its lock serializes every writer of that collection.
#[derive(Clone)]
pub struct AppState {
    pub classes: Arc<ClassSpecTable>,
    pub raiders: Arc<RosterStore>,
    pub builds: Arc<BuildStore>,
    pub hash_policy: HashPolicy,
}

impl AppState {
    pub fn new(
        classes: ClassSpecTable,
        raiders_file: impl Into<PathBuf>,
        builds_file: impl Into<PathBuf>,
        hash_policy: HashPolicy,
    ) -> Self {
        Self {
            classes: Arc::new(classes),
            raiders: Arc::new(RosterStore::new(raiders_file)),
            builds: Arc::new(BuildStore::new(builds_file)),
            hash_policy,
        }
    }
}
