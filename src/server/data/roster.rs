use crate::{
    model::player::PlayerEntry,
    server::{
        error::{roster::RosterError, storage::StorageError, Error},
        storage::JsonFileStore,
    },
};

/// Persisted roster, stored as a JSON array of player entries.
pub type RosterStore = JsonFileStore<Vec<PlayerEntry>>;

pub struct RosterRepository<'a> {
    store: &'a RosterStore,
}

impl<'a> RosterRepository<'a> {
    /// Creates a new instance of [`RosterRepository`]
    pub fn new(store: &'a RosterStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<PlayerEntry>, StorageError> {
        self.store.load().await
    }

    /// Appends entries to the end of the roster, returning the updated roster
    pub async fn append(&self, entries: Vec<PlayerEntry>) -> Result<Vec<PlayerEntry>, StorageError> {
        self.store
            .update(|roster| {
                roster.extend(entries);
                Ok(roster.clone())
            })
            .await
    }

    /// Replaces the whole roster
    pub async fn replace(&self, entries: Vec<PlayerEntry>) -> Result<Vec<PlayerEntry>, StorageError> {
        self.store.save(&entries).await?;

        Ok(entries)
    }

    /// Removes every entry whose name matches case-insensitively.
    ///
    /// Returns [`RosterError::PlayerNotFound`] without touching the file when nothing matched.
    pub async fn delete_by_name(&self, name: &str) -> Result<Vec<PlayerEntry>, Error> {
        self.store
            .update(|roster| {
                let before = roster.len();
                roster.retain(|entry| !entry.matches_name(name));

                if roster.len() == before {
                    return Err(RosterError::PlayerNotFound(name.to_string()).into());
                }

                Ok(roster.clone())
            })
            .await
    }
}
