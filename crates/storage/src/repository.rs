use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use prep_core::model::AppSettings;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the single app-settings row.
///
/// The only thing this application persists is the provider credential and
/// its optional model/base-URL overrides; sessions never survive a restart.
#[async_trait]
pub trait AppSettingsRepository: Send + Sync {
    /// Fetch the settings row, `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or deserialization failures.
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError>;

    /// Persist the settings row, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    settings: Arc<Mutex<Option<AppSettings>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppSettingsRepository for InMemoryRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(settings.clone());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub app_settings: Arc<dyn AppSettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let app_settings: Arc<dyn AppSettingsRepository> = Arc::new(repo);
        Self { app_settings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::AppSettingsDraft;

    #[tokio::test]
    async fn round_trips_settings() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_settings().await.unwrap().is_none());

        let settings = AppSettingsDraft {
            api_key: Some("sk-test".to_string()),
            api_model: None,
            api_base_url: None,
        }
        .validate()
        .unwrap();
        repo.save_settings(&settings).await.unwrap();

        let fetched = repo.get_settings().await.unwrap().unwrap();
        assert_eq!(fetched.api_key(), Some("sk-test"));
    }
}
