//! Wire types shared between pages and the REST gateway.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use crate::state::session::Role;

/// Body for both login and registration calls.
#[derive(Debug, serde::Serialize)]
pub struct CredentialsBody<'a> {
    pub identifier: &'a str,
    pub secret: &'a str,
    pub role: Role,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub email: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct RegisterResponse {
    pub email: String,
}

/// Catalog/list entry for a course.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
}

/// Curriculum entry without its payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModuleSummary {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub is_private: bool,
}

/// Course page payload: header plus the visible curriculum.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CourseDetails {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub is_owner: bool,
    pub is_enrolled: bool,
    pub modules: Vec<ModuleSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct QuizOptionView {
    pub id: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct QuizQuestionView {
    pub id: String,
    pub content: String,
    pub options: Vec<QuizOptionView>,
}

/// Kind-specific module payload.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModuleContent {
    Video { url: String },
    Quiz { questions: Vec<QuizQuestionView> },
}

/// Opened module: header plus payload.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ModuleView {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub content: ModuleContent,
}

/// Graded quiz outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ScoreView {
    pub score: i32,
    pub total: i32,
}

/// Normalized failure reasons surfaced to the user. No raw transport error
/// ever reaches a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    /// Empty required field, caught client-side before any network call.
    Validation(&'static str),
    InvalidCredentials,
    DuplicateAccount,
    NetworkUnavailable,
    ServerError,
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(detail) => write!(f, "{detail}"),
            Self::InvalidCredentials => write!(f, "Invalid username or password."),
            Self::DuplicateAccount => write!(f, "An account with this email already exists."),
            Self::NetworkUnavailable => write!(f, "Could not reach the server. Check your connection."),
            Self::ServerError => write!(f, "Something went wrong on the server. Try again later."),
        }
    }
}

/// Map an HTTP status from the identity API onto the failure taxonomy.
#[must_use]
pub fn failure_from_status(status: u16) -> AuthFailure {
    match status {
        400 => AuthFailure::Validation("request was rejected as invalid"),
        401 | 403 => AuthFailure::InvalidCredentials,
        409 => AuthFailure::DuplicateAccount,
        _ => AuthFailure::ServerError,
    }
}

/// Failure modes of authenticated data fetches. `Unauthorized` means the
/// server no longer recognizes the token; the caller must destroy the
/// session so the guard routes back to login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchError {
    Unauthorized,
    Unavailable,
}

/// Map an HTTP status from a data fetch onto [`FetchError`].
#[must_use]
pub fn fetch_error_from_status(status: u16) -> FetchError {
    if status == 401 { FetchError::Unauthorized } else { FetchError::Unavailable }
}
