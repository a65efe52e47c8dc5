//! Role classification of a roster.
//!
//! Every entry is looked up in the class/spec table and placed into exactly one of the
//! tank, healer, ranged or melee buckets. Entries that cannot be resolved are not an error:
//! they are left out of every bucket and reported back as [`SkippedEntry`] values so callers
//! can show or log them.

use std::cmp::Reverse;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::model::{
    class::{ClassSpecTable, Range, Role},
    player::PlayerEntry,
};

/// Ordering applied inside each bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RosterSort {
    /// Keep roster order
    #[default]
    Insertion,
    /// Highest item level first; equal item levels keep roster order
    Ilvl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RoleBuckets {
    pub tanks: Vec<PlayerEntry>,
    pub healers: Vec<PlayerEntry>,
    pub ranged_dps: Vec<PlayerEntry>,
    pub melee_dps: Vec<PlayerEntry>,
}

impl RoleBuckets {
    /// Number of classified players, never more than the roster length
    pub fn len(&self) -> usize {
        self.tanks.len() + self.healers.len() + self.ranged_dps.len() + self.melee_dps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Header counts shown above each role column
    pub fn summary(&self) -> RoleSummary {
        let ranged = self.ranged_dps.len();
        let melee = self.melee_dps.len();

        RoleSummary {
            total: self.len(),
            tanks: self.tanks.len(),
            healers: self.healers.len(),
            dps: ranged + melee,
            ranged,
            melee,
        }
    }

    fn sort_by_ilvl(&mut self) {
        for bucket in [
            &mut self.tanks,
            &mut self.healers,
            &mut self.ranged_dps,
            &mut self.melee_dps,
        ] {
            // sort_by_key is stable, equal item levels keep their roster order
            bucket.sort_by_key(|entry| Reverse(entry.spec.ilvl.unwrap_or(0)));
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RoleSummary {
    pub total: usize,
    pub tanks: usize,
    pub healers: usize,
    pub dps: usize,
    pub ranged: usize,
    pub melee: usize,
}

/// Why an entry was left out of every bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SkipReason {
    UnknownClass,
    UnknownSpec,
    UnknownRole(String),
    UnknownRange(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SkippedEntry {
    /// Position of the entry in the roster
    pub index: usize,
    pub entry: PlayerEntry,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub buckets: RoleBuckets,
    pub skipped: Vec<SkippedEntry>,
}

/// Partitions a roster into role buckets using the class/spec table.
///
/// Buckets are disjoint and together with `skipped` account for every roster entry exactly
/// once. Duplicate names are classified independently.
pub fn classify(roster: &[PlayerEntry], table: &ClassSpecTable, sort: RosterSort) -> Classification {
    let mut classification = Classification::default();

    for (index, entry) in roster.iter().enumerate() {
        match resolve_bucket(entry, table) {
            Ok(bucket) => {
                let buckets = &mut classification.buckets;
                let target = match bucket {
                    Bucket::Tank => &mut buckets.tanks,
                    Bucket::Healer => &mut buckets.healers,
                    Bucket::Ranged => &mut buckets.ranged_dps,
                    Bucket::Melee => &mut buckets.melee_dps,
                };
                target.push(entry.clone());
            }
            Err(reason) => {
                tracing::debug!(
                    index = index,
                    name = %entry.name,
                    class = %entry.class,
                    spec_id = entry.spec.id,
                    reason = ?reason,
                    "Skipping roster entry that could not be classified"
                );

                classification.skipped.push(SkippedEntry {
                    index,
                    entry: entry.clone(),
                    reason,
                });
            }
        }
    }

    if sort == RosterSort::Ilvl {
        classification.buckets.sort_by_ilvl();
    }

    classification
}

enum Bucket {
    Tank,
    Healer,
    Ranged,
    Melee,
}

fn resolve_bucket(entry: &PlayerEntry, table: &ClassSpecTable) -> Result<Bucket, SkipReason> {
    let class = table.class(&entry.class).ok_or(SkipReason::UnknownClass)?;
    let spec = class
        .specs
        .get(entry.spec.id)
        .ok_or(SkipReason::UnknownSpec)?;

    match &spec.role {
        Role::Tank => Ok(Bucket::Tank),
        Role::Heal => Ok(Bucket::Healer),
        Role::Dps => match &spec.range {
            Some(Range::Ranged) => Ok(Bucket::Ranged),
            Some(Range::Melee) => Ok(Bucket::Melee),
            Some(Range::Other(other)) => Err(SkipReason::UnknownRange(Some(other.clone()))),
            None => Err(SkipReason::UnknownRange(None)),
        },
        Role::Other(other) => Err(SkipReason::UnknownRole(other.clone())),
    }
}
