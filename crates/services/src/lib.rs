#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod app_settings_service;
pub mod error;
pub mod guidance_service;
pub mod provider;
pub mod run_service;
pub mod session_builder;
pub mod translation_service;

pub use prep_core::Clock;

pub use ai::{ChatProvider, ProviderConfig};
pub use app_services::AppServices;
pub use app_settings_service::AppSettingsService;
pub use error::{AppServicesError, ProviderError, SettingsServiceError};
pub use guidance_service::GuidanceService;
pub use provider::{ContentProvider, GuidanceKind};
pub use run_service::RunService;
pub use session_builder::{SessionBuilder, SessionPlan};
pub use translation_service::TranslationService;
