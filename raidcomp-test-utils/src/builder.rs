//! Declarative test builder.
//!
//! Every test gets its own temporary data directory. The builder queues the data files to
//! seed and writes them all during the final `build()` call.

use serde_json::Value;

use crate::{
    constant::{BUILDS_FILE_NAME, CLASSES_FILE_NAME, RAIDERS_FILE_NAME},
    error::TestError,
    fixtures::classes::DEFAULT_CLASSES_JSON,
    setup::TestSetup,
};

/// Builder for a test data directory.
///
/// The class table is always written, the default fixture unless replaced. The raiders and
/// builds files are only written when seeded, so tests can also cover a missing file.
pub struct TestBuilder {
    classes: Option<String>,
    raiders: Option<String>,
    builds: Option<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing seeded.
    pub fn new() -> Self {
        Self {
            classes: None,
            raiders: None,
            builds: None,
        }
    }

    /// Seed the raiders file with roster entries.
    ///
    /// # Arguments
    /// - `raiders` - Entries in stored JSON form, see [`crate::fixtures::factory`]
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_raiders(mut self, raiders: Vec<Value>) -> Self {
        self.raiders = Some(Value::Array(raiders).to_string());
        self
    }

    /// Seed the raiders file with raw contents, which need not be valid JSON.
    pub fn with_raw_raiders(mut self, contents: &str) -> Self {
        self.raiders = Some(contents.to_string());
        self
    }

    /// Seed the builds file.
    ///
    /// # Arguments
    /// - `builds` - `(hash, export text)` pairs
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_builds(mut self, builds: Vec<(&str, &str)>) -> Self {
        let map: serde_json::Map<String, Value> = builds
            .into_iter()
            .map(|(hash, export)| (hash.to_string(), Value::String(export.to_string())))
            .collect();
        self.builds = Some(Value::Object(map).to_string());
        self
    }

    /// Replace the default class table with raw contents, which need not be valid JSON.
    pub fn with_raw_classes(mut self, contents: &str) -> Self {
        self.classes = Some(contents.to_string());
        self
    }

    /// Create the data directory and write every queued file.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Paths of the data files and the directory guard
    /// - `Err(TestError::Io(_))` - Temporary directory or a file could not be written
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let dir = tempfile::tempdir()?;

        let classes_file = dir.path().join(CLASSES_FILE_NAME);
        let raiders_file = dir.path().join(RAIDERS_FILE_NAME);
        let builds_file = dir.path().join(BUILDS_FILE_NAME);

        let classes_json = self
            .classes
            .unwrap_or_else(|| DEFAULT_CLASSES_JSON.to_string());
        tokio::fs::write(&classes_file, &classes_json).await?;

        if let Some(raiders) = self.raiders {
            tokio::fs::write(&raiders_file, raiders).await?;
        }
        if let Some(builds) = self.builds {
            tokio::fs::write(&builds_file, builds).await?;
        }

        Ok(TestSetup {
            dir,
            classes_file,
            raiders_file,
            builds_file,
            classes_json,
        })
    }
}
