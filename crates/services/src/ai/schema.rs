//! Wire payloads for structured provider replies.
//!
//! Validation happens here, at the boundary: a payload missing any required
//! field fails deserialization, and semantic checks reject the rest, so a
//! half-formed `Question` can never leak inward.

use serde::Deserialize;

use prep_core::model::{
    Approach, Difficulty, Example, LanguageMap, Question, QuestionId, Solution,
};

use crate::error::ProviderError;

/// Strip a markdown code fence if the model wrapped its JSON in one.
#[must_use]
pub fn extract_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start_matches(['\r', '\n']);
    rest.strip_suffix("```").map_or(rest, str::trim).trim()
}

#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    id: String,
    title: String,
    difficulty: String,
    topic: String,
    description: String,
    constraints: Vec<String>,
    examples: Vec<ExamplePayload>,
    #[serde(alias = "starterCode")]
    starter_code: LanguageMap<String>,
    solution: SolutionPayload,
    hints: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ExamplePayload {
    input: String,
    output: String,
    #[serde(default)]
    explanation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SolutionPayload {
    approaches: Vec<ApproachPayload>,
}

#[derive(Debug, Deserialize)]
struct ApproachPayload {
    name: String,
    description: String,
    #[serde(alias = "timeComplexity")]
    time_complexity: String,
    #[serde(alias = "spaceComplexity")]
    space_complexity: String,
    code: String,
}

impl QuestionPayload {
    /// Convert into a domain `Question`, rejecting semantic holes the type
    /// system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidPayload` for blank ids/titles/
    /// descriptions or an unknown difficulty label.
    pub fn into_question(self) -> Result<Question, ProviderError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ProviderError::InvalidPayload("blank question id".into()));
        }
        if self.title.trim().is_empty() {
            return Err(ProviderError::InvalidPayload("blank title".into()));
        }
        if self.description.trim().is_empty() {
            return Err(ProviderError::InvalidPayload("blank description".into()));
        }

        let difficulty: Difficulty = normalize_difficulty(&self.difficulty)
            .parse()
            .map_err(|_| {
                ProviderError::InvalidPayload(format!("unknown difficulty: {}", self.difficulty))
            })?;

        Ok(Question {
            id: QuestionId::new(id),
            title: self.title,
            difficulty,
            topic: self.topic,
            description: self.description,
            constraints: self.constraints,
            examples: self
                .examples
                .into_iter()
                .map(|example| Example {
                    input: example.input,
                    output: example.output,
                    explanation: example.explanation,
                })
                .collect(),
            starter_code: self.starter_code,
            solution: Solution {
                approaches: self
                    .solution
                    .approaches
                    .into_iter()
                    .map(|approach| Approach {
                        name: approach.name,
                        description: approach.description,
                        time_complexity: approach.time_complexity,
                        space_complexity: approach.space_complexity,
                        code: approach.code,
                    })
                    .collect(),
            },
            hints: self.hints,
        })
    }
}

fn normalize_difficulty(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::Language;

    const FULL_PAYLOAD: &str = r#"{
        "id": "two-sum",
        "title": "Two Sum",
        "difficulty": "easy",
        "topic": "arrays",
        "description": "Find two indices that sum to target.",
        "constraints": ["2 <= n <= 10^4"],
        "examples": [{"input": "[2,7], 9", "output": "[0,1]"}],
        "starter_code": {"java": "j", "cpp": "c", "python": "p", "javascript": "s"},
        "solution": {"approaches": [{"name": "Hash map", "description": "One pass.", "time_complexity": "O(n)", "space_complexity": "O(n)", "code": "..."}]},
        "hints": ["Think about complements."]
    }"#;

    #[test]
    fn full_payload_parses_into_question() {
        let payload: QuestionPayload = serde_json::from_str(FULL_PAYLOAD).unwrap();
        let question = payload.into_question().unwrap();
        assert_eq!(question.id, QuestionId::new("two-sum"));
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert_eq!(question.starter_code.get(Language::Python), "p");
        assert_eq!(question.solution.approaches.len(), 1);
    }

    #[test]
    fn missing_language_buffer_fails_the_whole_call() {
        let broken = FULL_PAYLOAD.replace(r#""python": "p", "#, "");
        assert!(serde_json::from_str::<QuestionPayload>(&broken).is_err());
    }

    #[test]
    fn missing_required_field_fails_the_whole_call() {
        let broken = FULL_PAYLOAD.replace(r#""title": "Two Sum","#, "");
        assert!(serde_json::from_str::<QuestionPayload>(&broken).is_err());
    }

    #[test]
    fn blank_title_is_rejected_semantically() {
        let blank = FULL_PAYLOAD.replace(r#""title": "Two Sum""#, r#""title": "  ""#);
        let payload: QuestionPayload = serde_json::from_str(&blank).unwrap();
        assert!(matches!(
            payload.into_question().unwrap_err(),
            ProviderError::InvalidPayload(_)
        ));
    }

    #[test]
    fn extract_json_unwraps_fences() {
        assert_eq!(extract_json("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(extract_json("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(extract_json("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }
}
