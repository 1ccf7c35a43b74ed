//! Course routes — catalog, authoring, enrollment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::auth::Role;
use crate::services::course::{self, CourseError, CourseRow, ModuleRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
}

fn to_response(row: CourseRow) -> CourseResponse {
    CourseResponse {
        id: row.id,
        title: row.title,
        description: row.description,
        is_published: row.is_published,
    }
}

#[derive(Serialize)]
pub struct ModuleResponse {
    pub id: Uuid,
    pub title: String,
    pub kind: String,
    pub is_private: bool,
}

fn module_to_response(row: ModuleRow) -> ModuleResponse {
    ModuleResponse {
        id: row.id,
        title: row.title,
        kind: row.kind,
        is_private: row.is_private,
    }
}

#[derive(Serialize)]
pub struct CourseDetailsResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub is_owner: bool,
    pub is_enrolled: bool,
    pub modules: Vec<ModuleResponse>,
}

#[derive(Deserialize)]
pub struct CreateCourseBody {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct DescriptionBody {
    pub description: String,
}

pub(crate) fn course_error_to_status(err: &CourseError) -> StatusCode {
    match err {
        CourseError::NotFound(_) => StatusCode::NOT_FOUND,
        CourseError::Forbidden => StatusCode::FORBIDDEN,
        CourseError::NotPublished => StatusCode::BAD_REQUEST,
        CourseError::NotEnrolled => StatusCode::FORBIDDEN,
        CourseError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn traced(err: &CourseError) -> StatusCode {
    if matches!(err, CourseError::Database(_)) {
        tracing::error!(error = %err, "course query failed");
    }
    course_error_to_status(err)
}

// =============================================================================
// CATALOG
// =============================================================================

/// `GET /api/courses` — published course catalog.
pub async fn catalog(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<Vec<CourseResponse>>, StatusCode> {
    let rows = course::list_published(&state.pool)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `GET /api/courses/:id` — course details with its visible curriculum.
/// Private modules are included only for the owner and enrolled students.
pub async fn course_details(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<CourseDetailsResponse>, StatusCode> {
    let row = course::get_course(&state.pool, course_id)
        .await
        .map_err(|e| traced(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;

    let is_owner = row.instructor_id == auth.user.id;
    // Unpublished drafts are visible to their owner only.
    if !row.is_published && !is_owner {
        return Err(StatusCode::NOT_FOUND);
    }

    let is_enrolled = course::is_enrolled(&state.pool, auth.user.id, course_id)
        .await
        .map_err(|e| traced(&e))?;
    let modules = course::list_modules(&state.pool, course_id, is_owner || is_enrolled)
        .await
        .map_err(|e| traced(&e))?;

    Ok(Json(CourseDetailsResponse {
        id: row.id,
        title: row.title,
        description: row.description,
        is_published: row.is_published,
        is_owner,
        is_enrolled,
        modules: modules.into_iter().map(module_to_response).collect(),
    }))
}

/// `GET /api/courses/:id/description` — description text only.
pub async fn get_description(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let row = course::get_course(&state.pool, course_id)
        .await
        .map_err(|e| traced(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(serde_json::json!({ "description": row.description })))
}

// =============================================================================
// AUTHORING
// =============================================================================

/// `POST /api/courses` — create a draft course (instructor only).
pub async fn create_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateCourseBody>,
) -> Result<(StatusCode, Json<CourseResponse>), StatusCode> {
    if auth.user.role != Role::Instructor {
        return Err(StatusCode::FORBIDDEN);
    }
    if body.title.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = course::create_course(&state.pool, auth.user.id, body.title.trim(), body.description.as_deref())
        .await
        .map_err(|e| traced(&e))?;
    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `GET /api/courses/mine` — the instructor's own courses, drafts included.
pub async fn my_courses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CourseResponse>>, StatusCode> {
    if auth.user.role != Role::Instructor {
        return Err(StatusCode::FORBIDDEN);
    }
    let rows = course::list_by_instructor(&state.pool, auth.user.id)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `PATCH /api/courses/:id/description` — replace the description.
pub async fn update_description(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
    Json(body): Json<DescriptionBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    course::update_description(&state.pool, course_id, auth.user.id, &body.description)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/courses/:id/publish` — make the course visible to students.
pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    course::publish(&state.pool, course_id, auth.user.id)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// =============================================================================
// ENROLLMENT
// =============================================================================

/// `POST /api/courses/:id/enrollment` — enroll the current student.
pub async fn enroll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if auth.user.role != Role::Student {
        return Err(StatusCode::FORBIDDEN);
    }
    course::enroll(&state.pool, auth.user.id, course_id)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /api/courses/:id/enrollment` — whether the current account is enrolled.
pub async fn enrollment_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let enrolled = course::is_enrolled(&state.pool, auth.user.id, course_id)
        .await
        .map_err(|e| traced(&e))?;
    Ok(Json(serde_json::json!({ "enrolled": enrolled })))
}

#[cfg(test)]
#[path = "courses_test.rs"]
mod tests;
