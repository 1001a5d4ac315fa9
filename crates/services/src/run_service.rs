use std::sync::Arc;

use prep_core::model::{Language, Question, RunReport, RunStatus};

use crate::error::ProviderError;
use crate::provider::ContentProvider;

/// Facade over the provider's simulated code execution.
///
/// Submits the user's current buffer plus question context and normalizes
/// whatever comes back into the fixed `RunReport` shape.
#[derive(Clone)]
pub struct RunService {
    provider: Arc<dyn ContentProvider>,
}

impl RunService {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self { provider }
    }

    /// Run the user's code against the question's examples.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the credential is missing, the request
    /// fails, or the verdict payload is malformed.
    pub async fn run(
        &self,
        question: &Question,
        language: Language,
        code: &str,
    ) -> Result<RunReport, ProviderError> {
        let report = self.provider.evaluate(question, language, code).await?;
        Ok(normalize(report))
    }
}

/// Keep the per-example breakdown internally consistent: examples sorted by
/// index, and an "Accepted" status downgraded if any example failed.
fn normalize(mut report: RunReport) -> RunReport {
    report.examples.sort_by_key(|run| run.index);
    if report.status == RunStatus::Accepted && report.examples.iter().any(|run| !run.passed) {
        report.status = RunStatus::WrongAnswer;
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::ExampleRun;

    fn example(index: usize, passed: bool) -> ExampleRun {
        ExampleRun {
            index,
            passed,
            expected: "1".into(),
            actual: if passed { "1".into() } else { "0".into() },
            console: None,
        }
    }

    #[test]
    fn normalize_sorts_examples_by_index() {
        let report = normalize(RunReport {
            status: RunStatus::Accepted,
            examples: vec![example(2, true), example(0, true), example(1, true)],
        });
        let indices: Vec<_> = report.examples.iter().map(|run| run.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(report.status, RunStatus::Accepted);
    }

    #[test]
    fn accepted_with_a_failing_example_is_downgraded() {
        let report = normalize(RunReport {
            status: RunStatus::Accepted,
            examples: vec![example(0, true), example(1, false)],
        });
        assert_eq!(report.status, RunStatus::WrongAnswer);
    }
}
