//! Prompt templates for the five provider operations.
//!
//! Structured prompts spell out the exact JSON shape the model must emit;
//! the boundary in `schema.rs` rejects anything that deviates.

use prep_core::model::{Language, Question};

use crate::provider::GuidanceKind;

const QUESTION_SHAPE: &str = r#"{
  "id": "kebab-case-slug",
  "title": "string",
  "difficulty": "Easy" | "Medium" | "Hard",
  "topic": "string",
  "description": "markdown string",
  "constraints": ["string", ...],
  "examples": [{"input": "string", "output": "string", "explanation": "string (optional)"}, ...],
  "starter_code": {"java": "string", "cpp": "string", "python": "string", "javascript": "string"},
  "solution": {"approaches": [{"name": "string", "description": "string", "time_complexity": "string", "space_complexity": "string", "code": "string"}, ...]},
  "hints": ["string", ...]
}"#;

const JSON_RULES: &str = "Respond with a single JSON object and nothing else. \
No prose before or after it. Every listed field is required; use empty arrays \
rather than omitting fields.";

#[must_use]
pub fn generate_question(topic: &str, index: usize) -> String {
    format!(
        "Generate coding interview question number {number} on the topic \
\"{topic}\". Make it distinct from typical earlier questions in the set and \
appropriate for a timed interview. Starter code must declare the expected \
function signature in all four languages. Order solution approaches from \
brute force to optimal.\n\nUse exactly this JSON shape:\n{QUESTION_SHAPE}\n\n{JSON_RULES}",
        number = index + 1,
    )
}

#[must_use]
pub fn fetch_question(title: &str) -> String {
    format!(
        "Produce the well-known coding interview question titled \"{title}\" \
with its canonical statement, constraints, and examples. Starter code must \
declare the expected function signature in all four languages. Order solution \
approaches from brute force to optimal.\n\nUse exactly this JSON shape:\n{QUESTION_SHAPE}\n\n{JSON_RULES}"
    )
}

#[must_use]
pub fn evaluate(question: &Question, language: Language, code: &str) -> String {
    let examples = serde_json::to_string_pretty(&question.examples).unwrap_or_default();
    format!(
        "Act as a code execution engine. Run the {language} solution below \
against every example of the question \"{title}\" and report the outcome. Do \
not fix or improve the code; judge it as written. If the code would not \
compile or would throw, the overall status is \"Runtime Error\"; if it runs \
but an output differs, \"Wrong Answer\"; if everything matches, \"Accepted\".\n\n\
Question description:\n{description}\n\nExamples:\n{examples}\n\nCode:\n```\n{code}\n```\n\n\
Respond with exactly this JSON shape:\n{{\n  \"status\": \"Accepted\" | \"Wrong Answer\" | \"Runtime Error\" | \"Error\",\n  \
\"examples\": [{{\"index\": 0, \"passed\": true, \"expected\": \"string\", \"actual\": \"string\", \"console\": \"string (optional)\"}}, ...]\n}}\n\n{JSON_RULES}",
        language = language.label(),
        title = question.title,
        description = question.description,
    )
}

#[must_use]
pub fn translate_solution(question: &Question, target_language: &str) -> String {
    let approaches = serde_json::to_string_pretty(&question.solution.approaches)
        .unwrap_or_default();
    format!(
        "Rewrite the solution to \"{title}\" in {target_language}. For each \
approach below, keep its name and complexity, explain the idea in two or \
three sentences, then give idiomatic {target_language} code in a fenced code \
block. Return markdown, not JSON.\n\nApproaches:\n{approaches}",
        title = question.title,
    )
}

#[must_use]
pub fn guidance(kind: GuidanceKind) -> String {
    match kind {
        GuidanceKind::Learning => "Write a practical learning path for coding \
interview preparation: the order to study data structures and algorithms, \
how long to spend on each stage, and which classic problems to practice at \
each stage. Return markdown with section headings."
            .to_string(),
        GuidanceKind::Expert => "Write expert-level advice for candidates who \
already know the standard material: how to approach unseen problems under \
time pressure, communicate during the interview, and avoid common \
late-stage mistakes. Return markdown with section headings."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_prompts_carry_the_schema() {
        let prompt = generate_question("dynamic programming", 2);
        assert!(prompt.contains("question number 3"));
        assert!(prompt.contains("\"starter_code\""));

        let prompt = fetch_question("Two Sum");
        assert!(prompt.contains("Two Sum"));
        assert!(prompt.contains("\"approaches\""));
    }

    #[test]
    fn guidance_prompts_differ_by_kind() {
        assert_ne!(guidance(GuidanceKind::Learning), guidance(GuidanceKind::Expert));
    }
}
