use async_trait::async_trait;

use prep_core::model::{Language, Question, RunReport};

use crate::error::ProviderError;

/// Which free-text advice document to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuidanceKind {
    /// A structured learning path for interview preparation.
    Learning,
    /// Expert-level tips and strategy.
    Expert,
}

/// The remote content provider: every operation is one round trip to an
/// external generative model, treated as opaque, possibly slow, and possibly
/// failing.
///
/// Structured operations must return fully-validated domain values or a
/// `ProviderError` — never a partially-parsed object.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generate the `index`-th question for a topic.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the credential is missing, the request
    /// fails, or the payload does not conform to the question schema.
    async fn generate_question(&self, topic: &str, index: usize)
    -> Result<Question, ProviderError>;

    /// Fetch a well-known question by its exact title.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`ContentProvider::generate_question`].
    async fn fetch_question(&self, title: &str) -> Result<Question, ProviderError>;

    /// Judge the user's code against the question's examples.
    ///
    /// The provider simulates execution; correctness is only as good as the
    /// model's judgment. This is a trust boundary, not a guarantee.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on request failure or a malformed verdict.
    async fn evaluate(
        &self,
        question: &Question,
        language: Language,
        code: &str,
    ) -> Result<RunReport, ProviderError>;

    /// Render the question's solution approaches in `target_language`.
    ///
    /// `target_language` is free text, not restricted to the four-language
    /// enum.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on request failure or an empty document.
    async fn translate_solution(
        &self,
        question: &Question,
        target_language: &str,
    ) -> Result<String, ProviderError>;

    /// Fetch one of the free-form advice documents.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on request failure or an empty document.
    async fn guidance(&self, kind: GuidanceKind) -> Result<String, ProviderError>;
}
