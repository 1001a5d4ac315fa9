use std::sync::Arc;

use prep_core::Clock;
use prep_core::model::{Question, Session};

use crate::error::ProviderError;
use crate::provider::ContentProvider;

/// The work items for one incremental build: a topic repeated `count` times
/// (each fetch gets its index) or a list of literal question titles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPlan {
    Topic { topic: String, count: usize },
    Titles(Vec<String>),
}

impl SessionPlan {
    /// Total number of work items, successful or not.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SessionPlan::Topic { count, .. } => *count,
            SessionPlan::Titles(titles) => titles.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn fetch(
        &self,
        provider: &dyn ContentProvider,
        index: usize,
    ) -> Result<Question, ProviderError> {
        match self {
            SessionPlan::Topic { topic, .. } => provider.generate_question(topic, index).await,
            SessionPlan::Titles(titles) => provider.fetch_question(&titles[index]).await,
        }
    }
}

/// Turns a plan into a filled `Session` without blocking on N round trips:
/// item 0 is fetched up front to unblock the UI, the rest arrive in the
/// background one at a time.
#[derive(Clone)]
pub struct SessionBuilder {
    clock: Clock,
    provider: Arc<dyn ContentProvider>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new(clock: Clock, provider: Arc<dyn ContentProvider>) -> Self {
        Self { clock, provider }
    }

    /// Fetch item 0 and build the session around it.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the first fetch fails; no session is
    /// created in that case. An empty plan is reported as an invalid payload.
    pub async fn first(&self, plan: &SessionPlan) -> Result<Session, ProviderError> {
        if plan.is_empty() {
            return Err(ProviderError::InvalidPayload("empty session plan".into()));
        }
        let first = plan.fetch(self.provider.as_ref(), 0).await?;
        Ok(Session::create(first, self.clock.now()))
    }

    /// Fetch items 1..N-1 strictly in index order, one in flight at a time,
    /// invoking `on_append` for each success.
    ///
    /// A failed item is logged and skipped; the loop continues, so the
    /// session may end up shorter than the plan. No retries. The caller's
    /// reducer is responsible for dropping appends that arrive after the
    /// session was cleared.
    pub async fn fill_remaining(&self, plan: &SessionPlan, mut on_append: impl FnMut(Question)) {
        for index in 1..plan.len() {
            match plan.fetch(self.provider.as_ref(), index).await {
                Ok(question) => on_append(question),
                Err(error) => {
                    tracing::warn!(index, %error, "background question fetch failed, skipping");
                }
            }
        }
    }
}
