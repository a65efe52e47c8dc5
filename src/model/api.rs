use serde::{Deserialize, Serialize};

use crate::model::{
    player::PlayerEntry,
    roster::{RoleBuckets, RoleSummary, SkippedEntry},
};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Request body carrying roster export text, used for build saves and imports
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ExportDto {
    /// Semicolon delimited roster records, one per line
    pub export: String,
}

/// Response for a saved build
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BuildHashDto {
    /// Short content hash the build is stored under
    pub hash: String,
}

/// Roster grouped by role along with header counts and any entries that could not be placed
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ClassifiedRosterDto {
    pub roles: RoleBuckets,
    pub summary: RoleSummary,
    pub skipped: Vec<SkippedEntry>,
}

/// Body accepted when adding players, either a single entry or a list of them
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum NewPlayersDto {
    One(PlayerEntry),
    Many(Vec<PlayerEntry>),
}

impl NewPlayersDto {
    pub fn into_entries(self) -> Vec<PlayerEntry> {
        match self {
            Self::One(entry) => vec![entry],
            Self::Many(entries) => entries,
        }
    }
}
