//! Module content service — video/quiz authoring, content fetch, grading.
//!
//! DESIGN
//! ======
//! Quiz creation writes the module, quiz, questions and options in one
//! transaction so a half-written quiz never becomes visible. Content fetch
//! strips correctness flags; the client only ever sees option ids and text.
//! Grading scores selections against the quiz's own correct option set and
//! persists the result.

use std::collections::HashSet;

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::course::ModuleRow;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("module not found: {0}")]
    ModuleNotFound(Uuid),
    #[error("module is not a quiz")]
    NotAQuiz,
    #[error("invalid quiz: {0}")]
    InvalidQuiz(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Quiz option as authored by an instructor.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OptionInput {
    pub content: String,
    pub is_correct: bool,
}

/// Quiz question as authored by an instructor.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct QuestionInput {
    pub content: String,
    pub options: Vec<OptionInput>,
}

/// Quiz option as served to a quiz taker. No correctness flag.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OptionView {
    pub id: Uuid,
    pub content: String,
}

/// Quiz question as served to a quiz taker.
#[derive(Debug, Clone, serde::Serialize)]
pub struct QuestionView {
    pub id: Uuid,
    pub content: String,
    pub options: Vec<OptionView>,
}

/// Kind-specific module payload.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModuleContent {
    Video { url: String },
    Quiz { questions: Vec<QuestionView> },
}

/// Persisted grading outcome.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScoreRow {
    pub score: i32,
    pub total: i32,
}

// =============================================================================
// VALIDATION & GRADING (pure)
// =============================================================================

/// Validate an authored quiz before anything is written.
pub fn validate_quiz(title: &str, questions: &[QuestionInput]) -> Result<(), QuizError> {
    if title.trim().is_empty() {
        return Err(QuizError::InvalidQuiz("title must not be empty"));
    }
    if questions.is_empty() {
        return Err(QuizError::InvalidQuiz("quiz needs at least one question"));
    }
    for question in questions {
        if question.content.trim().is_empty() {
            return Err(QuizError::InvalidQuiz("question text must not be empty"));
        }
        if question.options.len() < 2 {
            return Err(QuizError::InvalidQuiz("question needs at least two options"));
        }
        if question.options.iter().any(|o| o.content.trim().is_empty()) {
            return Err(QuizError::InvalidQuiz("option text must not be empty"));
        }
        if !question.options.iter().any(|o| o.is_correct) {
            return Err(QuizError::InvalidQuiz("question needs a correct option"));
        }
    }
    Ok(())
}

/// Score selections against the quiz's correct option set. Duplicates count
/// once; option ids from outside the quiz never count.
#[must_use]
pub fn score_selections(selected: &[Uuid], correct: &HashSet<Uuid>) -> i32 {
    let chosen: HashSet<Uuid> = selected.iter().copied().collect();
    i32::try_from(chosen.intersection(correct).count()).unwrap_or(i32::MAX)
}

// =============================================================================
// AUTHORING
// =============================================================================

/// Add a video module to a course. The video itself is hosted elsewhere;
/// only its URL is recorded.
pub async fn create_video_module(
    pool: &PgPool,
    course_id: Uuid,
    title: &str,
    url: &str,
    is_private: bool,
) -> Result<ModuleRow, QuizError> {
    if title.trim().is_empty() || url.trim().is_empty() {
        return Err(QuizError::InvalidQuiz("title and url must not be empty"));
    }

    let mut tx = pool.begin().await?;
    let row = sqlx::query(
        r"INSERT INTO modules (course_id, title, kind, is_private)
          VALUES ($1, $2, 'video', $3)
          RETURNING id, title, kind, is_private",
    )
    .bind(course_id)
    .bind(title)
    .bind(is_private)
    .fetch_one(&mut *tx)
    .await?;
    let module_id: Uuid = row.get("id");

    sqlx::query("INSERT INTO videos (module_id, url) VALUES ($1, $2)")
        .bind(module_id)
        .bind(url)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(ModuleRow {
        id: module_id,
        title: row.get("title"),
        kind: row.get("kind"),
        is_private: row.get("is_private"),
    })
}

/// Add a quiz module with its questions and options in one transaction.
/// Quiz modules are always private until the student is enrolled.
pub async fn create_quiz_module(
    pool: &PgPool,
    course_id: Uuid,
    title: &str,
    questions: &[QuestionInput],
) -> Result<ModuleRow, QuizError> {
    validate_quiz(title, questions)?;

    let mut tx = pool.begin().await?;
    let row = sqlx::query(
        r"INSERT INTO modules (course_id, title, kind, is_private)
          VALUES ($1, $2, 'quiz', true)
          RETURNING id, title, kind, is_private",
    )
    .bind(course_id)
    .bind(title)
    .fetch_one(&mut *tx)
    .await?;
    let module_id: Uuid = row.get("id");

    let quiz_row = sqlx::query(
        r"INSERT INTO quizzes (module_id, question_count)
          VALUES ($1, $2)
          RETURNING id",
    )
    .bind(module_id)
    .bind(i32::try_from(questions.len()).unwrap_or(i32::MAX))
    .fetch_one(&mut *tx)
    .await?;
    let quiz_id: Uuid = quiz_row.get("id");

    for (position, question) in questions.iter().enumerate() {
        let question_row = sqlx::query(
            r"INSERT INTO questions (quiz_id, content, position)
              VALUES ($1, $2, $3)
              RETURNING id",
        )
        .bind(quiz_id)
        .bind(&question.content)
        .bind(i32::try_from(position).unwrap_or(i32::MAX))
        .fetch_one(&mut *tx)
        .await?;
        let question_id: Uuid = question_row.get("id");

        for (option_position, option) in question.options.iter().enumerate() {
            sqlx::query(
                r"INSERT INTO options (question_id, content, is_correct, position)
                  VALUES ($1, $2, $3, $4)",
            )
            .bind(question_id)
            .bind(&option.content)
            .bind(option.is_correct)
            .bind(i32::try_from(option_position).unwrap_or(i32::MAX))
            .execute(&mut *tx)
            .await?;
        }
    }
    tx.commit().await?;

    Ok(ModuleRow {
        id: module_id,
        title: row.get("title"),
        kind: row.get("kind"),
        is_private: row.get("is_private"),
    })
}

// =============================================================================
// CONTENT
// =============================================================================

/// Fetch a module header row.
pub async fn get_module(pool: &PgPool, module_id: Uuid) -> Result<(ModuleRow, Uuid), QuizError> {
    let row = sqlx::query("SELECT id, course_id, title, kind, is_private FROM modules WHERE id = $1")
        .bind(module_id)
        .fetch_optional(pool)
        .await?
        .ok_or(QuizError::ModuleNotFound(module_id))?;

    let module = ModuleRow {
        id: row.get("id"),
        title: row.get("title"),
        kind: row.get("kind"),
        is_private: row.get("is_private"),
    };
    Ok((module, row.get("course_id")))
}

/// Fetch a module's kind-specific payload. Quiz questions are served
/// without correctness flags.
pub async fn fetch_content(pool: &PgPool, module: &ModuleRow) -> Result<ModuleContent, QuizError> {
    if module.kind == "video" {
        let row = sqlx::query("SELECT url FROM videos WHERE module_id = $1")
            .bind(module.id)
            .fetch_optional(pool)
            .await?
            .ok_or(QuizError::ModuleNotFound(module.id))?;
        return Ok(ModuleContent::Video { url: row.get("url") });
    }

    let question_rows = sqlx::query(
        r"SELECT q.id, q.content
          FROM questions q
          JOIN quizzes z ON z.id = q.quiz_id
          WHERE z.module_id = $1
          ORDER BY q.position",
    )
    .bind(module.id)
    .fetch_all(pool)
    .await?;

    let mut questions = Vec::with_capacity(question_rows.len());
    for q in &question_rows {
        let question_id: Uuid = q.get("id");
        let option_rows = sqlx::query("SELECT id, content FROM options WHERE question_id = $1 ORDER BY position")
            .bind(question_id)
            .fetch_all(pool)
            .await?;
        questions.push(QuestionView {
            id: question_id,
            content: q.get("content"),
            options: option_rows
                .iter()
                .map(|o| OptionView { id: o.get("id"), content: o.get("content") })
                .collect(),
        });
    }

    Ok(ModuleContent::Quiz { questions })
}

// =============================================================================
// GRADING
// =============================================================================

/// Grade a student's selected options against a quiz module and persist the
/// score. Returns the score plus the question count. Selections that do not
/// belong to this quiz are ignored, so the score is bounded by its own
/// correct option count.
pub async fn grade_submission(
    pool: &PgPool,
    student_id: Uuid,
    module_id: Uuid,
    selected_option_ids: &[Uuid],
) -> Result<ScoreRow, QuizError> {
    let quiz_row = sqlx::query("SELECT id, question_count FROM quizzes WHERE module_id = $1")
        .bind(module_id)
        .fetch_optional(pool)
        .await?
        .ok_or(QuizError::NotAQuiz)?;
    let quiz_id: Uuid = quiz_row.get("id");
    let total: i32 = quiz_row.get("question_count");

    let correct_rows = sqlx::query(
        r"SELECT o.id
          FROM options o
          JOIN questions q ON q.id = o.question_id
          WHERE q.quiz_id = $1 AND o.is_correct",
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await?;
    let correct = correct_rows
        .iter()
        .map(|r| r.get::<Uuid, _>("id"))
        .collect::<HashSet<_>>();
    let score = score_selections(selected_option_ids, &correct);

    sqlx::query("INSERT INTO scores (student_id, quiz_id, score_value) VALUES ($1, $2, $3)")
        .bind(student_id)
        .bind(quiz_id)
        .bind(score)
        .execute(pool)
        .await?;

    Ok(ScoreRow { score, total })
}

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
