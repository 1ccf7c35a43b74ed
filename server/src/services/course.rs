//! Course service — authoring, catalog, enrollment.
//!
//! DESIGN
//! ======
//! Instructors own courses; students see only published ones. Ownership is
//! always re-checked against the database on write paths, never trusted
//! from the request. Enrollment is keyed (student, course) and idempotent.

use sqlx::{PgPool, Row};
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("course not found: {0}")]
    NotFound(Uuid),
    #[error("not the course owner")]
    Forbidden,
    #[error("course not published")]
    NotPublished,
    #[error("student not enrolled")]
    NotEnrolled,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from course queries.
#[derive(Debug, Clone)]
pub struct CourseRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub instructor_id: Uuid,
}

/// Curriculum entry without its kind-specific payload.
#[derive(Debug, Clone)]
pub struct ModuleRow {
    pub id: Uuid,
    pub title: String,
    pub kind: String,
    pub is_private: bool,
}

fn course_from_row(r: &sqlx::postgres::PgRow) -> CourseRow {
    CourseRow {
        id: r.get("id"),
        title: r.get("title"),
        description: r.get("description"),
        is_published: r.get("is_published"),
        instructor_id: r.get("instructor_id"),
    }
}

// =============================================================================
// AUTHORING
// =============================================================================

/// Create a course owned by the given instructor.
pub async fn create_course(
    pool: &PgPool,
    instructor_id: Uuid,
    title: &str,
    description: Option<&str>,
) -> Result<CourseRow, CourseError> {
    let row = sqlx::query(
        r"INSERT INTO courses (title, description, instructor_id)
          VALUES ($1, $2, $3)
          RETURNING id, title, description, is_published, instructor_id",
    )
    .bind(title)
    .bind(description)
    .bind(instructor_id)
    .fetch_one(pool)
    .await?;
    Ok(course_from_row(&row))
}

/// Fetch a course the instructor owns, or fail.
pub async fn owned_course(pool: &PgPool, course_id: Uuid, instructor_id: Uuid) -> Result<CourseRow, CourseError> {
    let course = get_course(pool, course_id)
        .await?
        .ok_or(CourseError::NotFound(course_id))?;
    if course.instructor_id != instructor_id {
        return Err(CourseError::Forbidden);
    }
    Ok(course)
}

/// Replace a course's description.
pub async fn update_description(
    pool: &PgPool,
    course_id: Uuid,
    instructor_id: Uuid,
    description: &str,
) -> Result<(), CourseError> {
    owned_course(pool, course_id, instructor_id).await?;
    sqlx::query("UPDATE courses SET description = $1 WHERE id = $2")
        .bind(description)
        .bind(course_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Mark a course published. Publishing twice only updates the timestamp once.
pub async fn publish(pool: &PgPool, course_id: Uuid, instructor_id: Uuid) -> Result<(), CourseError> {
    owned_course(pool, course_id, instructor_id).await?;
    sqlx::query(
        r"UPDATE courses
          SET is_published = true,
              published_at = COALESCE(published_at, now())
          WHERE id = $1",
    )
    .bind(course_id)
    .execute(pool)
    .await?;
    Ok(())
}

// =============================================================================
// CATALOG
// =============================================================================

/// Fetch a single course by id.
pub async fn get_course(pool: &PgPool, course_id: Uuid) -> Result<Option<CourseRow>, CourseError> {
    let row = sqlx::query(
        r"SELECT id, title, description, is_published, instructor_id
          FROM courses WHERE id = $1",
    )
    .bind(course_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| course_from_row(&r)))
}

/// List the published catalog, newest first.
pub async fn list_published(pool: &PgPool) -> Result<Vec<CourseRow>, CourseError> {
    let rows = sqlx::query(
        r"SELECT id, title, description, is_published, instructor_id
          FROM courses
          WHERE is_published
          ORDER BY published_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(course_from_row).collect())
}

/// List every course an instructor owns, including drafts.
pub async fn list_by_instructor(pool: &PgPool, instructor_id: Uuid) -> Result<Vec<CourseRow>, CourseError> {
    let rows = sqlx::query(
        r"SELECT id, title, description, is_published, instructor_id
          FROM courses
          WHERE instructor_id = $1
          ORDER BY created_at DESC",
    )
    .bind(instructor_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(course_from_row).collect())
}

/// List a course's curriculum. Private modules are omitted unless the
/// caller may see them (owner, or enrolled student).
pub async fn list_modules(pool: &PgPool, course_id: Uuid, include_private: bool) -> Result<Vec<ModuleRow>, CourseError> {
    let rows = sqlx::query(
        r"SELECT id, title, kind, is_private
          FROM modules
          WHERE course_id = $1 AND (is_private = false OR $2)
          ORDER BY position, created_at",
    )
    .bind(course_id)
    .bind(include_private)
    .fetch_all(pool)
    .await?;
    Ok(rows
        .iter()
        .map(|r| ModuleRow {
            id: r.get("id"),
            title: r.get("title"),
            kind: r.get("kind"),
            is_private: r.get("is_private"),
        })
        .collect())
}

// =============================================================================
// ENROLLMENT
// =============================================================================

/// Enroll a student in a published course. Re-enrolling is a no-op.
pub async fn enroll(pool: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), CourseError> {
    let course = get_course(pool, course_id)
        .await?
        .ok_or(CourseError::NotFound(course_id))?;
    if !course.is_published {
        return Err(CourseError::NotPublished);
    }

    sqlx::query(
        r"INSERT INTO enrollments (student_id, course_id)
          VALUES ($1, $2)
          ON CONFLICT DO NOTHING",
    )
    .bind(student_id)
    .bind(course_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Check whether a student is enrolled in a course.
pub async fn is_enrolled(pool: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<bool, CourseError> {
    let row = sqlx::query("SELECT 1 AS one FROM enrollments WHERE student_id = $1 AND course_id = $2")
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Fail unless the student is enrolled in the course.
pub async fn require_enrollment(pool: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), CourseError> {
    if is_enrolled(pool, student_id, course_id).await? {
        Ok(())
    } else {
        Err(CourseError::NotEnrolled)
    }
}
