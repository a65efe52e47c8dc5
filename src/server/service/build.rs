//! Content-addressed build registry.
//!
//! A build is a roster snapshot in export text form. It is stored under a short prefix of
//! the SHA-256 of its text so it can be shared as `/build/<hash>`. Builds are immutable once
//! saved and are never evicted.
//!
//! # Hashing
//! - `h0` is the first 7 hex characters of `sha256(export)`.
//! - When `h0` is already taken, `h1` is the first 8 hex characters of `sha256(h0)`.
//!
//! With [`HashPolicy::SingleRehash`] that is the only retry: if `h1` is taken by another
//! build as well, the save fails with [`BuildError::UnresolvedCollision`]. With
//! [`HashPolicy::Extend`] re-hashing continues, each round one character longer, until a free
//! key turns up or the full 64 character digest is exhausted.

use std::{collections::BTreeMap, fmt, str::FromStr};

use dioxus_logger::tracing;
use sha2::{Digest, Sha256};

use crate::{
    model::{class::ClassSpecTable, export::parse_export, player::PlayerEntry},
    server::{
        data::build::{BuildRepository, BuildStore},
        error::{build::BuildError, Error},
    },
};

/// Length of the hash a build is first tried under
pub const SHORT_HASH_LEN: usize = 7;
/// Length of the first re-hash
pub const REHASH_LEN: usize = 8;
/// Hex length of a full SHA-256 digest
const FULL_HASH_LEN: usize = 64;

/// How a build whose short hash is already taken gets its key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashPolicy {
    /// Re-hash once into an 8 character key and give up if that is taken too
    #[default]
    SingleRehash,
    /// Keep re-hashing with one more character each round
    Extend,
}

impl FromStr for HashPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::SingleRehash),
            "extend" => Ok(Self::Extend),
            other => Err(format!(
                "expected \"single\" or \"extend\", got {:?}",
                other
            )),
        }
    }
}

impl fmt::Display for HashPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleRehash => write!(f, "single"),
            Self::Extend => write!(f, "extend"),
        }
    }
}

/// First `len` lowercase hex characters of the SHA-256 of `input`.
pub fn short_hash(input: &str, len: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let full = format!("{:x}", hasher.finalize());

    full[..len.min(FULL_HASH_LEN)].to_string()
}

/// Picks the key `export` is stored under given the builds already saved.
///
/// The returned key is either free or already holds exactly `export`.
pub fn choose_hash(
    builds: &BTreeMap<String, String>,
    export: &str,
    policy: HashPolicy,
) -> Result<String, BuildError> {
    let h0 = short_hash(export, SHORT_HASH_LEN);
    if !builds.contains_key(&h0) {
        return Ok(h0);
    }

    let mut previous = h0;
    let mut len = REHASH_LEN;
    loop {
        if len > FULL_HASH_LEN {
            return Err(BuildError::HashSpaceExhausted);
        }

        let candidate = short_hash(&previous, len);
        match builds.get(&candidate) {
            None => return Ok(candidate),
            Some(existing) if existing == export => return Ok(candidate),
            Some(_) => {
                tracing::warn!(hash = %candidate, "Build hash collision after re-hashing");

                if policy == HashPolicy::SingleRehash {
                    return Err(BuildError::UnresolvedCollision(candidate));
                }
            }
        }

        previous = candidate;
        len += 1;
    }
}

/// Saves and looks up builds.
pub struct BuildRegistry<'a> {
    store: &'a BuildStore,
    policy: HashPolicy,
}

impl<'a> BuildRegistry<'a> {
    /// Creates a new instance of [`BuildRegistry`]
    pub fn new(store: &'a BuildStore, policy: HashPolicy) -> Self {
        Self { store, policy }
    }

    /// Stores a build and returns the hash it can be retrieved with.
    ///
    /// Any text is accepted, the empty string included, and comes back unchanged from
    /// [`Self::get_build`].
    ///
    /// # Returns
    /// - `Ok(String)` - 7 character hash, or a longer one if the short hash was taken
    /// - `Err(Error::BuildError(BuildError::UnresolvedCollision(_)))` - Re-hashed key taken too
    /// - `Err(Error::StorageError(_))` - Build file could not be read or written
    pub async fn save_build(&self, export: &str) -> Result<String, Error> {
        let policy = self.policy;
        let hash = BuildRepository::new(self.store)
            .insert(export, |builds| Ok(choose_hash(builds, export, policy)?))
            .await?;

        tracing::info!(hash = %hash, "Saved build");

        Ok(hash)
    }

    /// Export text stored under `hash`, `None` when unknown.
    pub async fn get_build(&self, hash: &str) -> Result<Option<String>, Error> {
        Ok(BuildRepository::new(self.store).get(hash).await?)
    }

    /// Build parsed back into roster entries for the read-only build view.
    pub async fn get_build_roster(
        &self,
        hash: &str,
        classes: &ClassSpecTable,
    ) -> Result<Option<Vec<PlayerEntry>>, Error> {
        let maybe_export = self.get_build(hash).await?;

        Ok(maybe_export.map(|export| parse_export(&export, classes)))
    }
}
