//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::AppSettingsError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the remote content provider boundary.
///
/// Malformed or partial payloads fail the whole call; nothing partially
/// parsed ever crosses into the domain layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("no API key is configured")]
    MissingApiKey,
    #[error("provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("provider returned an empty response")]
    EmptyResponse,
    #[error("provider returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("provider payload rejected: {0}")]
    InvalidPayload(String),
}

/// Errors emitted by `AppSettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsServiceError {
    #[error(transparent)]
    Settings(#[from] AppSettingsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
