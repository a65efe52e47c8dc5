use std::collections::BTreeMap;

use crate::server::{
    error::{storage::StorageError, Error},
    storage::JsonFileStore,
};

/// Persisted builds, a JSON object from short hash to export text.
pub type BuildStore = JsonFileStore<BTreeMap<String, String>>;

pub struct BuildRepository<'a> {
    store: &'a BuildStore,
}

impl<'a> BuildRepository<'a> {
    /// Creates a new instance of [`BuildRepository`]
    pub fn new(store: &'a BuildStore) -> Self {
        Self { store }
    }

    pub async fn get(&self, hash: &str) -> Result<Option<String>, StorageError> {
        let builds = self.store.load().await?;

        Ok(builds.get(hash).cloned())
    }

    /// Stores `export` under the key picked by `choose_key`.
    ///
    /// `choose_key` sees the current builds while the store is locked and must return either
    /// a free key or a key already holding this exact export; a chosen key is never
    /// overwritten with different content.
    pub async fn insert<F>(&self, export: &str, choose_key: F) -> Result<String, Error>
    where
        F: FnOnce(&BTreeMap<String, String>) -> Result<String, Error>,
    {
        self.store
            .update(|builds| {
                let key = choose_key(builds)?;

                match builds.get(&key) {
                    Some(existing) if existing != export => {
                        return Err(Error::InternalError(format!(
                            "Build key {} chosen for a different export",
                            key
                        )))
                    }
                    Some(_) => (),
                    None => {
                        builds.insert(key.clone(), export.to_string());
                    }
                }

                Ok(key)
            })
            .await
    }
}
