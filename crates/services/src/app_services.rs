use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::ai::{ChatProvider, ProviderConfig};
use crate::app_settings_service::AppSettingsService;
use crate::error::AppServicesError;
use crate::guidance_service::GuidanceService;
use crate::provider::ContentProvider;
use crate::run_service::RunService;
use crate::session_builder::SessionBuilder;
use crate::translation_service::TranslationService;

/// Assembles the app-facing services around one provider instance.
///
/// The credential is resolved once, here; changing the stored key takes
/// effect on the next launch.
#[derive(Clone)]
pub struct AppServices {
    provider_enabled: bool,
    session_builder: Arc<SessionBuilder>,
    run_service: Arc<RunService>,
    translations: Arc<TranslationService>,
    guidance: Arc<GuidanceService>,
    app_settings: Arc<AppSettingsService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_storage(storage, clock).await
    }

    /// Build services over an existing storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the settings row cannot be read.
    pub async fn with_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let settings = storage.app_settings.get_settings().await?;
        let config = ProviderConfig::resolve(settings.as_ref());
        let chat = ChatProvider::new(config);
        let provider_enabled = chat.enabled();
        let provider: Arc<dyn ContentProvider> = Arc::new(chat);

        Ok(Self::assemble(
            clock,
            provider,
            provider_enabled,
            Arc::clone(&storage.app_settings),
        ))
    }

    /// Wire services around an arbitrary provider (tests, previews).
    #[must_use]
    pub fn with_provider(
        clock: Clock,
        provider: Arc<dyn ContentProvider>,
        storage: &Storage,
    ) -> Self {
        Self::assemble(clock, provider, true, Arc::clone(&storage.app_settings))
    }

    fn assemble(
        clock: Clock,
        provider: Arc<dyn ContentProvider>,
        provider_enabled: bool,
        settings_repo: Arc<dyn storage::repository::AppSettingsRepository>,
    ) -> Self {
        let session_builder = Arc::new(SessionBuilder::new(clock, Arc::clone(&provider)));
        let run_service = Arc::new(RunService::new(Arc::clone(&provider)));
        let translations = Arc::new(TranslationService::new(Arc::clone(&provider)));
        let guidance = Arc::new(GuidanceService::new(provider));
        let app_settings = Arc::new(AppSettingsService::new(settings_repo));

        Self {
            provider_enabled,
            session_builder,
            run_service,
            translations,
            guidance,
            app_settings,
        }
    }

    /// Whether a usable credential was found at startup.
    #[must_use]
    pub fn provider_enabled(&self) -> bool {
        self.provider_enabled
    }

    #[must_use]
    pub fn session_builder(&self) -> Arc<SessionBuilder> {
        Arc::clone(&self.session_builder)
    }

    #[must_use]
    pub fn run_service(&self) -> Arc<RunService> {
        Arc::clone(&self.run_service)
    }

    #[must_use]
    pub fn translations(&self) -> Arc<TranslationService> {
        Arc::clone(&self.translations)
    }

    #[must_use]
    pub fn guidance(&self) -> Arc<GuidanceService> {
        Arc::clone(&self.guidance)
    }

    #[must_use]
    pub fn app_settings(&self) -> Arc<AppSettingsService> {
        Arc::clone(&self.app_settings)
    }
}
