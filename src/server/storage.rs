//! JSON file persistence for named collections.
//!
//! Each collection (the roster, the build map) lives in its own JSON file behind a
//! [`JsonFileStore`]. All access to a store goes through a per-store mutex, so a
//! read-modify-write in [`JsonFileStore::update`] can never interleave with another update of
//! the same collection and lose it. Different collections do not block each other.

use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
};

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use crate::server::error::storage::StorageError;

/// A JSON file holding one value of type `T`.
///
/// A missing file reads as `T::default()`, so a fresh deployment starts with an empty roster
/// and an empty build map without any setup.
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Creates a store backed by the file at `path`. Nothing is read until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current value.
    pub async fn load(&self) -> Result<T, StorageError> {
        let _guard = self.lock.lock().await;

        self.read().await
    }

    /// Replaces the stored value.
    pub async fn save(&self, value: &T) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        self.write(value).await
    }

    /// Loads the value, applies `f` and writes the result back, all under the store lock.
    ///
    /// When `f` returns an error nothing is written and the error is returned as is.
    pub async fn update<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<StorageError>,
    {
        let _guard = self.lock.lock().await;

        let mut value = self.read().await?;
        let result = f(&mut value)?;
        self.write(&value).await?;

        Ok(result)
    }

    async fn read(&self) -> Result<T, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "Store file missing, starting empty");

                return Ok(T::default());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(T::default());
        }

        serde_json::from_str(&contents).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, value: &T) -> Result<(), StorageError> {
        let contents = to_pretty_json(value).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        // Write beside the target then rename over it
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, contents).await.map_err(io_err)?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(io_err)?;

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");

        self.path.with_file_name(name)
    }
}

/// Serializes with four space indentation.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
