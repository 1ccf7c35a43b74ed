//! Module routes — video/quiz authoring, content fetch, grading.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::courses::{ModuleResponse, course_error_to_status};
use crate::services::auth::Role;
use crate::services::course;
use crate::services::quiz::{self, ModuleContent, QuestionInput, QuizError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateVideoBody {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Deserialize)]
pub struct CreateQuizBody {
    pub title: String,
    pub questions: Vec<QuestionInput>,
}

#[derive(Serialize)]
pub struct ModuleContentResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub content: ModuleContent,
}

#[derive(Deserialize)]
pub struct GradeBody {
    pub selected_option_ids: Vec<Uuid>,
}

pub(crate) fn quiz_error_to_status(err: &QuizError) -> StatusCode {
    match err {
        QuizError::ModuleNotFound(_) => StatusCode::NOT_FOUND,
        QuizError::NotAQuiz | QuizError::InvalidQuiz(_) => StatusCode::BAD_REQUEST,
        QuizError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn traced(err: &QuizError) -> StatusCode {
    if matches!(err, QuizError::Database(_)) {
        tracing::error!(error = %err, "module query failed");
    }
    quiz_error_to_status(err)
}

fn module_to_response(row: course::ModuleRow) -> ModuleResponse {
    ModuleResponse {
        id: row.id,
        title: row.title,
        kind: row.kind,
        is_private: row.is_private,
    }
}

// =============================================================================
// AUTHORING
// =============================================================================

/// `POST /api/courses/:id/modules/video` — add a video module (owner only).
pub async fn create_video_module(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
    Json(body): Json<CreateVideoBody>,
) -> Result<(StatusCode, Json<ModuleResponse>), StatusCode> {
    course::owned_course(&state.pool, course_id, auth.user.id)
        .await
        .map_err(|e| course_error_to_status(&e))?;

    let row = quiz::create_video_module(&state.pool, course_id, &body.title, &body.url, body.is_private)
        .await
        .map_err(|e| traced(&e))?;
    Ok((StatusCode::CREATED, Json(module_to_response(row))))
}

/// `POST /api/courses/:id/modules/quiz` — add a quiz module (owner only).
pub async fn create_quiz_module(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
    Json(body): Json<CreateQuizBody>,
) -> Result<(StatusCode, Json<ModuleResponse>), StatusCode> {
    course::owned_course(&state.pool, course_id, auth.user.id)
        .await
        .map_err(|e| course_error_to_status(&e))?;

    let row = quiz::create_quiz_module(&state.pool, course_id, &body.title, &body.questions)
        .await
        .map_err(|e| traced(&e))?;
    Ok((StatusCode::CREATED, Json(module_to_response(row))))
}

// =============================================================================
// CONTENT
// =============================================================================

/// Whether the account may open this module's content.
async fn may_view(
    state: &AppState,
    auth: &AuthUser,
    module: &course::ModuleRow,
    course_id: Uuid,
) -> Result<bool, StatusCode> {
    let course = course::get_course(&state.pool, course_id)
        .await
        .map_err(|e| course_error_to_status(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;

    if course.instructor_id == auth.user.id {
        return Ok(true);
    }
    if !course.is_published {
        return Ok(false);
    }
    if !module.is_private {
        return Ok(true);
    }
    course::is_enrolled(&state.pool, auth.user.id, course_id)
        .await
        .map_err(|e| course_error_to_status(&e))
}

/// `GET /api/modules/:id` — module payload (video URL, or quiz questions
/// stripped of correctness flags).
pub async fn module_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(module_id): Path<Uuid>,
) -> Result<Json<ModuleContentResponse>, StatusCode> {
    let (module, course_id) = quiz::get_module(&state.pool, module_id)
        .await
        .map_err(|e| traced(&e))?;

    if !may_view(&state, &auth, &module, course_id).await? {
        return Err(StatusCode::FORBIDDEN);
    }

    let content = quiz::fetch_content(&state.pool, &module)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(ModuleContentResponse { id: module.id, title: module.title, content }))
}

// =============================================================================
// GRADING
// =============================================================================

/// `POST /api/modules/:id/grade` — grade a quiz submission for an enrolled
/// student and return the persisted score.
pub async fn grade(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(module_id): Path<Uuid>,
    Json(body): Json<GradeBody>,
) -> Result<Json<quiz::ScoreRow>, StatusCode> {
    if auth.user.role != Role::Student {
        return Err(StatusCode::FORBIDDEN);
    }

    let (_, course_id) = quiz::get_module(&state.pool, module_id)
        .await
        .map_err(|e| traced(&e))?;

    let course = course::get_course(&state.pool, course_id)
        .await
        .map_err(|e| course_error_to_status(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    if !course.is_published {
        return Err(StatusCode::BAD_REQUEST);
    }
    course::require_enrollment(&state.pool, auth.user.id, course_id)
        .await
        .map_err(|e| course_error_to_status(&e))?;

    let score = quiz::grade_submission(&state.pool, auth.user.id, module_id, &body.selected_option_ids)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(score))
}

#[cfg(test)]
#[path = "modules_test.rs"]
mod tests;
