//! Quiz authoring draft used by the instructor course page.

#[cfg(test)]
#[path = "quiz_draft_test.rs"]
mod quiz_draft_test;

/// A single answer option under construction.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct OptionDraft {
    pub content: String,
    pub is_correct: bool,
}

/// A single question under construction.
#[derive(Clone, Debug, serde::Serialize)]
pub struct QuestionDraft {
    pub content: String,
    pub options: Vec<OptionDraft>,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        // Start with two blank options; a one-option question is never valid.
        Self { content: String::new(), options: vec![OptionDraft::default(), OptionDraft::default()] }
    }
}

/// In-progress quiz. Serializes directly into the upload request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct QuizDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

impl Default for QuizDraft {
    fn default() -> Self {
        Self { title: String::new(), questions: vec![QuestionDraft::default()] }
    }
}

impl QuizDraft {
    pub fn add_question(&mut self) {
        self.questions.push(QuestionDraft::default());
    }

    pub fn add_option(&mut self, question_index: usize) {
        if let Some(question) = self.questions.get_mut(question_index) {
            question.options.push(OptionDraft::default());
        }
    }

    /// Mirror of the server-side rules, so the submit button can stay
    /// disabled instead of round-tripping an invalid draft.
    #[must_use]
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("quiz needs a title");
        }
        if self.questions.is_empty() {
            return Some("quiz needs at least one question");
        }
        for question in &self.questions {
            if question.content.trim().is_empty() {
                return Some("every question needs text");
            }
            if question.options.len() < 2 {
                return Some("every question needs at least two options");
            }
            if question.options.iter().any(|o| o.content.trim().is_empty()) {
                return Some("every option needs text");
            }
            if !question.options.iter().any(|o| o.is_correct) {
                return Some("every question needs a correct option");
            }
        }
        None
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }
}
