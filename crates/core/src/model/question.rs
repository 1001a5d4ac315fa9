use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{LanguageMap, QuestionId, Solution};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{label}")
    }
}

/// Error type for parsing a `Difficulty` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    raw: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {}", self.raw)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError {
                raw: other.to_string(),
            }),
        }
    }
}

/// One worked input/output pair shown alongside a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A single practice question as delivered by the provider.
///
/// Plain data: everything here arrives fully formed from the provider
/// boundary, which is responsible for rejecting partial payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub description: String,
    pub constraints: Vec<String>,
    pub examples: Vec<Example>,
    pub starter_code: LanguageMap<String>,
    pub solution: Solution,
    pub hints: Vec<String>,
}
