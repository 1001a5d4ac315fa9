use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::model::{Language, LanguageMap, Question, QuestionId, SessionId};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The single mutable aggregate describing one practice run.
///
/// Every operation is a pure transformation: it consumes the session and
/// returns a new value, so a render pass holding the previous value never
/// observes a partially-updated structure. Operations are total; preconditions
/// that do not hold degrade to no-ops rather than errors.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    id: SessionId,
    questions: Vec<Question>,
    current: usize,
    user_code: HashMap<QuestionId, LanguageMap<String>>,
    language: Language,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Build a session around its first question.
    ///
    /// Seeds the question's code buffers from starter code, sets the index to
    /// 0, and defaults the display language to Java.
    #[must_use]
    pub fn create(first_question: Question, started_at: DateTime<Utc>) -> Self {
        let mut user_code = HashMap::new();
        user_code.insert(
            first_question.id.clone(),
            first_question.starter_code.clone(),
        );
        Self {
            id: SessionId::new(),
            questions: vec![first_question],
            current: 0,
            user_code,
            language: Language::Java,
            started_at,
        }
    }

    /// Append a background-filled question and seed its buffers.
    #[must_use]
    pub fn with_question(mut self, question: Question) -> Self {
        self.user_code
            .insert(question.id.clone(), question.starter_code.clone());
        self.questions.push(question);
        self
    }

    /// Switch the session-wide display language. Buffers are untouched.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Replace exactly one code buffer.
    ///
    /// A question id that is not part of the session leaves the session
    /// unchanged.
    #[must_use]
    pub fn with_code(
        mut self,
        question_id: &QuestionId,
        language: Language,
        code: impl Into<String>,
    ) -> Self {
        if let Some(buffers) = self.user_code.get_mut(question_id) {
            buffers.set(language, code.into());
        }
        self
    }

    /// Move the current index by `delta`, clamped to `[0, len - 1]`.
    ///
    /// No wraparound: advancing past either boundary is a no-op.
    #[must_use]
    pub fn advanced(mut self, delta: i64) -> Self {
        let last = self.questions.len().saturating_sub(1) as i64;
        let target = (self.current as i64).saturating_add(delta);
        self.current = target.clamp(0, last) as usize;
        self
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// False for any session built through [`Session::create`], which seeds
    /// the first question; `current_question` indexes on that basis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Read one code buffer; `None` if the question is not in the session.
    #[must_use]
    pub fn code_for(&self, question_id: &QuestionId, language: Language) -> Option<&str> {
        self.user_code
            .get(question_id)
            .map(|buffers| buffers.get(language).as_str())
    }

    /// Buffer for the current question in the session language.
    #[must_use]
    pub fn current_code(&self) -> &str {
        self.code_for(&self.current_question().id, self.language)
            .unwrap_or_default()
    }
}

/// Reducer for background-fill append events.
///
/// A cleared session (`None`) means the user navigated away mid-build; the
/// late arrival is dropped silently.
#[must_use]
pub fn apply_append(session: Option<Session>, question: Question) -> Option<Session> {
    session.map(|current| current.with_question(question))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
