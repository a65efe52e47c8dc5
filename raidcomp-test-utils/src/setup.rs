use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

use crate::error::TestError;

/// A seeded data directory, removed when dropped.
pub struct TestSetup {
    pub dir: TempDir,
    pub classes_file: PathBuf,
    pub raiders_file: PathBuf,
    pub builds_file: PathBuf,
    /// Contents written to `classes_file`
    pub classes_json: String,
}

impl TestSetup {
    /// Current contents of the raiders file parsed as JSON.
    pub async fn read_raiders(&self) -> Result<Value, TestError> {
        let contents = self.read_raw_raiders().await?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Current contents of the raiders file as written.
    pub async fn read_raw_raiders(&self) -> Result<String, TestError> {
        Ok(tokio::fs::read_to_string(&self.raiders_file).await?)
    }

    /// Current contents of the builds file as written.
    pub async fn read_raw_builds(&self) -> Result<String, TestError> {
        Ok(tokio::fs::read_to_string(&self.builds_file).await?)
    }

    /// Current contents of the builds file parsed as JSON.
    pub async fn read_builds(&self) -> Result<Value, TestError> {
        let contents = self.read_raw_builds().await?;

        Ok(serde_json::from_str(&contents)?)
    }
}
