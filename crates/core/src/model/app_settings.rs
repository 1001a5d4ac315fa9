use thiserror::Error;
use url::Url;

/// Persisted provider configuration. A single row: the user-supplied API key
/// plus optional model/base-URL overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppSettings {
    api_key: Option<String>,
    api_model: Option<String>,
    api_base_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppSettingsDraft {
    pub api_key: Option<String>,
    pub api_model: Option<String>,
    pub api_base_url: Option<String>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

impl AppSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into persisted settings.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError` if the base URL is present but invalid.
    pub fn validate(self) -> Result<AppSettings, AppSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let api_model = normalize_optional(self.api_model);
        let api_base_url = normalize_optional(self.api_base_url);

        if let Some(url) = api_base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(AppSettingsError::InvalidBaseUrl);
            }
        }

        Ok(AppSettings {
            api_key,
            api_model,
            api_base_url,
        })
    }
}

impl AppSettings {
    /// Rehydrate settings from storage, re-running normalization.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError` if a persisted base URL no longer parses.
    pub fn from_persisted(draft: AppSettingsDraft) -> Result<Self, AppSettingsError> {
        draft.validate()
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn api_model(&self) -> Option<&str> {
        self.api_model.as_deref()
    }

    #[must_use]
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_normalize_to_none() {
        let settings = AppSettingsDraft {
            api_key: Some("   ".to_string()),
            api_model: Some("gpt-4o-mini".to_string()),
            api_base_url: None,
        }
        .validate()
        .unwrap();

        assert_eq!(settings.api_key(), None);
        assert_eq!(settings.api_model(), Some("gpt-4o-mini"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = AppSettingsDraft {
            api_base_url: Some("not a url".to_string()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppSettingsError::InvalidBaseUrl));
    }
}
