use dioxus_logger::tracing;

use crate::{
    model::class::ClassSpecTable,
    server::{
        config::Config,
        error::{storage::StorageError, Error},
        model::app::AppState,
    },
};

/// Read and parse the class/spec table, once, at startup
pub async fn load_class_table(config: &Config) -> Result<ClassSpecTable, Error> {
    let path = &config.classes_file;

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

    let table = ClassSpecTable::from_json(&contents).map_err(|source| StorageError::Json {
        path: path.clone(),
        source,
    })?;

    tracing::info!(classes = table.len(), path = ?path, "Loaded class table");

    Ok(table)
}

/// Build the shared application state from the configuration
pub async fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let classes = load_class_table(config).await?;

    Ok(AppState::new(
        classes,
        &config.raiders_file,
        &config.builds_file,
        config.hash_policy,
    ))
}
