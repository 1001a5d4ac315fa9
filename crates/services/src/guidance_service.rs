use std::sync::Arc;

use crate::error::ProviderError;
use crate::provider::{ContentProvider, GuidanceKind};

/// Fetches the free-form learning-path and expert-advice documents.
#[derive(Clone)]
pub struct GuidanceService {
    provider: Arc<dyn ContentProvider>,
}

impl GuidanceService {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self { provider }
    }

    /// Fetch one advice document as markdown.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the credential is missing or the request
    /// fails.
    pub async fn fetch(&self, kind: GuidanceKind) -> Result<String, ProviderError> {
        self.provider.guidance(kind).await
    }
}
