use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall verdict for one simulated run of the user's code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Accepted,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
    Error,
}

impl RunStatus {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, RunStatus::Accepted)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStatus::Accepted => "Accepted",
            RunStatus::WrongAnswer => "Wrong Answer",
            RunStatus::RuntimeError => "Runtime Error",
            RunStatus::Error => "Error",
        };
        write!(f, "{label}")
    }
}

/// Outcome of the user's code against one example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRun {
    pub index: usize,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console: Option<String>,
}

/// Normalized result shape for a run: one overall status plus a per-example
/// breakdown. Produced entirely by the provider; no code actually executes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub status: RunStatus,
    pub examples: Vec<ExampleRun>,
}

impl RunReport {
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.examples.iter().filter(|run| run.passed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_wire_shape() {
        assert_eq!(RunStatus::WrongAnswer.to_string(), "Wrong Answer");
        assert_eq!(
            serde_json::from_str::<RunStatus>("\"Wrong Answer\"").unwrap(),
            RunStatus::WrongAnswer
        );
    }

    #[test]
    fn passed_count_ignores_failures() {
        let report = RunReport {
            status: RunStatus::WrongAnswer,
            examples: vec![
                ExampleRun {
                    index: 0,
                    passed: true,
                    expected: "1".into(),
                    actual: "1".into(),
                    console: None,
                },
                ExampleRun {
                    index: 1,
                    passed: false,
                    expected: "2".into(),
                    actual: "3".into(),
                    console: Some("panic".into()),
                },
            ],
        };
        assert_eq!(report.passed_count(), 1);
    }
}
