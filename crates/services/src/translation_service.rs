use std::sync::{Arc, Mutex};

use prep_core::model::{Question, QuestionId};

use crate::error::ProviderError;
use crate::provider::ContentProvider;

#[derive(Clone, Debug, PartialEq, Eq)]
struct CachedTranslation {
    question_id: QuestionId,
    language: String,
    document: String,
}

/// Requests rendered explanation+code documents in an arbitrary language and
/// holds exactly one of them at a time.
///
/// A request for a different (question, language) pair replaces the cached
/// entry; switching the session language should call `invalidate` so the
/// next solution-tab view triggers a fresh request.
#[derive(Clone)]
pub struct TranslationService {
    provider: Arc<dyn ContentProvider>,
    cache: Arc<Mutex<Option<CachedTranslation>>>,
}

impl TranslationService {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Translate the question's solution, serving the cached document when
    /// the (question, language) pair matches the last request.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on request failure; the cache keeps its
    /// previous entry in that case.
    pub async fn translate(
        &self,
        question: &Question,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        if let Some(hit) = self.cached(&question.id, target_language) {
            return Ok(hit);
        }

        let document = self
            .provider
            .translate_solution(question, target_language)
            .await?;

        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(CachedTranslation {
                question_id: question.id.clone(),
                language: target_language.to_string(),
                document: document.clone(),
            });
        }
        Ok(document)
    }

    /// Drop the cached entry (called when the session language switches).
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.cache.lock() {
            *guard = None;
        }
    }

    fn cached(&self, question_id: &QuestionId, language: &str) -> Option<String> {
        let guard = self.cache.lock().ok()?;
        guard
            .as_ref()
            .filter(|entry| entry.question_id == *question_id && entry.language == language)
            .map(|entry| entry.document.clone())
    }
}
