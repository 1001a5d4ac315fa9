use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use prep_core::model::{AppSettings, Language, Question, RunReport};

use crate::ai::{prompts, schema};
use crate::error::ProviderError;
use crate::provider::{ContentProvider, GuidanceKind};

/// Placeholder shipped in example configs; treated the same as no key at all.
pub const KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ProviderConfig {
    /// Resolve the effective configuration: persisted settings first, then
    /// the environment, with placeholder/blank keys treated as absent.
    ///
    /// Returns `None` when no usable key exists anywhere; the provider then
    /// fails fast with `ProviderError::MissingApiKey` on every call.
    #[must_use]
    pub fn resolve(settings: Option<&AppSettings>) -> Option<Self> {
        let api_key = settings
            .and_then(AppSettings::api_key)
            .map(str::to_string)
            .filter(|key| usable_key(key))
            .or_else(|| env::var("PREPWISE_API_KEY").ok().filter(|key| usable_key(key)))?;

        let base_url = settings
            .and_then(AppSettings::api_base_url)
            .map(str::to_string)
            .or_else(|| env::var("PREPWISE_API_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = settings
            .and_then(AppSettings::api_model)
            .map(str::to_string)
            .or_else(|| env::var("PREPWISE_API_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.into());

        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

fn usable_key(key: &str) -> bool {
    let trimmed = key.trim();
    !trimmed.is_empty() && trimmed != KEY_PLACEHOLDER
}

/// Remote content provider backed by an OpenAI-style chat-completions API.
///
/// One request per operation; no retries, no local timeout.
#[derive(Clone)]
pub struct ChatProvider {
    client: Client,
    config: Option<ProviderConfig>,
}

impl ChatProvider {
    #[must_use]
    pub fn new(config: Option<ProviderConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Whether a usable credential was resolved at construction time.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ProviderError> {
        let config = self.config.as_ref().ok_or(ProviderError::MissingApiKey)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)?;

        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(content)
    }

    /// Structured call: low temperature, strict JSON parse at the boundary.
    async fn complete_json<T: serde::de::DeserializeOwned>(
        &self,
        prompt: &str,
    ) -> Result<T, ProviderError> {
        let raw = self.complete(prompt, 0.2).await?;
        let json = schema::extract_json(&raw);
        Ok(serde_json::from_str(json)?)
    }
}

#[async_trait]
impl ContentProvider for ChatProvider {
    async fn generate_question(
        &self,
        topic: &str,
        index: usize,
    ) -> Result<Question, ProviderError> {
        let payload: schema::QuestionPayload = self
            .complete_json(&prompts::generate_question(topic, index))
            .await?;
        payload.into_question()
    }

    async fn fetch_question(&self, title: &str) -> Result<Question, ProviderError> {
        let payload: schema::QuestionPayload =
            self.complete_json(&prompts::fetch_question(title)).await?;
        payload.into_question()
    }

    async fn evaluate(
        &self,
        question: &Question,
        language: Language,
        code: &str,
    ) -> Result<RunReport, ProviderError> {
        self.complete_json(&prompts::evaluate(question, language, code))
            .await
    }

    async fn translate_solution(
        &self,
        question: &Question,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        self.complete(&prompts::translate_solution(question, target_language), 0.4)
            .await
    }

    async fn guidance(&self, kind: GuidanceKind) -> Result<String, ProviderError> {
        self.complete(&prompts::guidance(kind), 0.7).await
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::AppSettingsDraft;

    #[test]
    fn placeholder_key_counts_as_absent() {
        assert!(!usable_key(KEY_PLACEHOLDER));
        assert!(!usable_key("   "));
        assert!(usable_key("sk-real"));
    }

    #[test]
    fn settings_key_wins_over_defaults() {
        let settings = AppSettingsDraft {
            api_key: Some("sk-local".to_string()),
            api_model: Some("gpt-4.1".to_string()),
            api_base_url: None,
        }
        .validate()
        .unwrap();

        let config = ProviderConfig::resolve(Some(&settings)).unwrap();
        assert_eq!(config.api_key, "sk-local");
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn disabled_provider_fails_fast() {
        let provider = ChatProvider::new(None);
        assert!(!provider.enabled());
        let err = provider.fetch_question("Two Sum").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }
}
