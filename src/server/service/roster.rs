use dioxus_logger::tracing;

use crate::{
    model::{
        api::ClassifiedRosterDto,
        class::ClassSpecTable,
        export::{parse_export, render_export},
        player::PlayerEntry,
        roster::{classify, RosterSort},
    },
    server::{
        data::roster::{RosterRepository, RosterStore},
        error::Error,
    },
};

/// Service for the persisted raid roster.
///
/// Wraps the roster repository with the class/spec table so the stored roster can be
/// classified by role and converted to and from export text.
pub struct RosterService<'a> {
    store: &'a RosterStore,
    classes: &'a ClassSpecTable,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(store: &'a RosterStore, classes: &'a ClassSpecTable) -> Self {
        Self { store, classes }
    }

    /// Current roster in insertion order.
    pub async fn list(&self) -> Result<Vec<PlayerEntry>, Error> {
        Ok(RosterRepository::new(self.store).get_all().await?)
    }

    /// Appends players to the roster.
    ///
    /// Entries are stored as submitted; names already on the roster are not merged.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerEntry>)` - The updated roster
    /// - `Err(Error::StorageError(_))` - Roster file could not be read or written
    pub async fn add(&self, entries: Vec<PlayerEntry>) -> Result<Vec<PlayerEntry>, Error> {
        let added = entries.len();
        let roster = RosterRepository::new(self.store).append(entries).await?;

        tracing::info!(added = added, total = roster.len(), "Added players to roster");

        Ok(roster)
    }

    /// Replaces the whole roster.
    pub async fn replace(&self, entries: Vec<PlayerEntry>) -> Result<Vec<PlayerEntry>, Error> {
        let roster = RosterRepository::new(self.store).replace(entries).await?;

        tracing::info!(total = roster.len(), "Replaced roster");

        Ok(roster)
    }

    /// Empties the roster.
    pub async fn reset(&self) -> Result<(), Error> {
        RosterRepository::new(self.store).replace(Vec::new()).await?;

        tracing::info!("Reset roster");

        Ok(())
    }

    /// Removes every player whose name matches `name`, ignoring case.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerEntry>)` - The updated roster
    /// - `Err(Error::RosterError(RosterError::PlayerNotFound(_)))` - No player matched, the
    ///   roster is left unchanged
    pub async fn delete_by_name(&self, name: &str) -> Result<Vec<PlayerEntry>, Error> {
        let roster = RosterRepository::new(self.store)
            .delete_by_name(name)
            .await?;

        tracing::info!(name = %name, total = roster.len(), "Removed player from roster");

        Ok(roster)
    }

    /// Roster grouped by role, with header counts and the entries that could not be placed.
    pub async fn classified(&self, sort: RosterSort) -> Result<ClassifiedRosterDto, Error> {
        let roster = self.list().await?;
        let classification = classify(&roster, self.classes, sort);

        Ok(ClassifiedRosterDto {
            summary: classification.buckets.summary(),
            roles: classification.buckets,
            skipped: classification.skipped,
        })
    }

    /// Roster rendered as export text.
    pub async fn export(&self, with_status: bool) -> Result<String, Error> {
        let roster = self.list().await?;

        Ok(render_export(&roster, with_status))
    }

    /// Replaces the roster with the players parsed from export text.
    pub async fn import(&self, text: &str) -> Result<Vec<PlayerEntry>, Error> {
        let entries = parse_export(text, self.classes);

        self.replace(entries).await
    }
}
