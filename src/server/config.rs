//! Environment based configuration.

use std::path::PathBuf;

use crate::server::{error::config::ConfigError, service::build::HashPolicy};

static DEFAULT_RAIDERS_FILE: &str = "data/raiders.json";
static DEFAULT_BUILDS_FILE: &str = "data/builds.json";

/// Server configuration read from the environment (and `.env` via dotenvy).
///
/// # Variables
/// - `CLASSES_FILE` - path to the class/spec table JSON (required)
/// - `RAIDERS_FILE` - path to the persisted roster (default `data/raiders.json`)
/// - `BUILDS_FILE` - path to the persisted build map (default `data/builds.json`)
/// - `BUILD_HASH_POLICY` - `single` or `extend` (default `single`)
#[derive(Debug, Clone)]
pub struct Config {
    /// Class/spec table JSON file
    pub classes_file: PathBuf,
    /// Roster JSON file
    pub raiders_file: PathBuf,
    /// Build map JSON file
    pub builds_file: PathBuf,
    /// How build hash collisions are resolved
    pub hash_policy: HashPolicy,
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let classes_file = get("CLASSES_FILE")
            .ok_or_else(|| ConfigError::MissingEnvVar("CLASSES_FILE".to_string()))?;
        let raiders_file = get("RAIDERS_FILE").unwrap_or_else(|| DEFAULT_RAIDERS_FILE.to_string());
        let builds_file = get("BUILDS_FILE").unwrap_or_else(|| DEFAULT_BUILDS_FILE.to_string());
        let hash_policy = match get("BUILD_HASH_POLICY") {
            Some(value) => value
                .parse::<HashPolicy>()
                .map_err(|reason| ConfigError::InvalidEnvValue {
                    var: "BUILD_HASH_POLICY".to_string(),
                    reason,
                })?,
            None => HashPolicy::default(),
        };

        Ok(Self {
            classes_file: PathBuf::from(classes_file),
            raiders_file: PathBuf::from(raiders_file),
            builds_file: PathBuf::from(builds_file),
            hash_policy,
        })
    }
}
