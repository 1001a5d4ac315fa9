use std::sync::Arc;

use dioxus::prelude::*;
use prep_core::model::{RunReport, Session};
use services::{
    AppSettingsService, GuidanceService, RunService, SessionBuilder, TranslationService,
};

pub trait UiApp: Send + Sync {
    fn provider_enabled(&self) -> bool;

    fn session_builder(&self) -> Arc<SessionBuilder>;
    fn run_service(&self) -> Arc<RunService>;
    fn translations(&self) -> Arc<TranslationService>;
    fn guidance(&self) -> Arc<GuidanceService>;
    fn app_settings(&self) -> Arc<AppSettingsService>;
}

#[derive(Clone)]
pub struct AppContext {
    provider_enabled: bool,

    session_builder: Arc<SessionBuilder>,
    run_service: Arc<RunService>,
    translations: Arc<TranslationService>,
    guidance: Arc<GuidanceService>,
    app_settings: Arc<AppSettingsService>,
}

impl AppContext {
    /// Snapshot the service handles out of the composition root (e.g.
    /// `crates/app`); this is what gets injected into the Dioxus tree.
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            provider_enabled: app.provider_enabled(),
            session_builder: app.session_builder(),
            run_service: app.run_service(),
            translations: app.translations(),
            guidance: app.guidance(),
            app_settings: app.app_settings(),
        }
    }

    /// Whether a usable API credential was resolved at startup.
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

/// Root-owned reactive state shared across views.
///
/// The signals are created once at the app root, so background tasks may
/// keep writing to them after the view that started the task unmounts.
#[derive(Clone, Copy)]
pub struct SharedState {
    pub session: Signal<Option<Session>>,
    pub last_run: Signal<Option<RunReport>>,
    pub error: Signal<Option<String>>,
    pub building: Signal<bool>,
}

impl SharedState {
    /// Install fresh signals at the current scope. Called once from `App`.
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            session: Signal::new(None),
            last_run: Signal::new(None),
            error: Signal::new(None),
            building: Signal::new(false),
        })
    }

    #[must_use]
    pub fn grab() -> Self {
        use_context()
    }

    /// Replace the current session through a pure update, leaving an empty
    /// slot untouched.
    pub fn update_session(mut self, update: impl FnOnce(Session) -> Session) {
        let mut slot = self.session.write();
        if let Some(current) = slot.take() {
            *slot = Some(update(current));
        }
    }

    /// Drop the active session and any stale run output.
    pub fn clear_session(mut self) {
        if self.session.peek().is_some() {
            self.session.set(None);
        }
        if self.last_run.peek().is_some() {
            self.last_run.set(None);
        }
    }

    pub fn report_error(mut self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub fn dismiss_error(mut self) {
        if self.error.peek().is_some() {
            self.error.set(None);
        }
    }
}
