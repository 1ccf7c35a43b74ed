//! REST gateway for the identity and course APIs.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`NetworkUnavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth calls resolve exactly once with `Ok` or a normalized `AuthFailure`;
//! they never panic and never mutate session state — committing a session
//! is the caller's job. Data fetches distinguish a rejected token
//! (`FetchError::Unauthorized`, the caller destroys its session) from
//! every other failure (`Unavailable`, pages degrade to empty content).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    CourseDetails, CourseSummary, LoginResponse, ModuleSummary, ModuleView, RegisterResponse, ScoreView,
};
use crate::net::types::{AuthFailure, FetchError};
use crate::state::session::Role;
#[cfg(feature = "hydrate")]
use crate::net::types::{CredentialsBody, failure_from_status, fetch_error_from_status};
use crate::state::quiz_draft::QuizDraft;

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn course_endpoint(course_id: &str) -> String {
    format!("/api/courses/{course_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn module_endpoint(module_id: &str) -> String {
    format!("/api/modules/{module_id}")
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /api/auth/login` — verify credentials and receive a session token.
///
/// # Errors
///
/// Resolves to a normalized `AuthFailure`; transport errors become
/// `NetworkUnavailable`, protocol errors map through `failure_from_status`.
pub async fn login(identifier: &str, secret: &str, role: Role) -> Result<LoginResponse, AuthFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = CredentialsBody { identifier, secret, role };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|_| AuthFailure::ServerError)?
            .send()
            .await
            .map_err(|_| AuthFailure::NetworkUnavailable)?;
        if !resp.ok() {
            return Err(failure_from_status(resp.status()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|_| AuthFailure::ServerError)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, secret, role);
        Err(AuthFailure::NetworkUnavailable)
    }
}

/// `POST /api/auth/register` — create an account. The server's identifier
/// is authoritative; callers echo the returned email, not their input.
///
/// # Errors
///
/// Same normalization as [`login`]; duplicate accounts surface as
/// `AuthFailure::DuplicateAccount`.
pub async fn register(identifier: &str, secret: &str, role: Role) -> Result<RegisterResponse, AuthFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = CredentialsBody { identifier, secret, role };
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&body)
            .map_err(|_| AuthFailure::ServerError)?
            .send()
            .await
            .map_err(|_| AuthFailure::NetworkUnavailable)?;
        if !resp.ok() {
            return Err(failure_from_status(resp.status()));
        }
        resp.json::<RegisterResponse>()
            .await
            .map_err(|_| AuthFailure::ServerError)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, secret, role);
        Err(AuthFailure::NetworkUnavailable)
    }
}

/// `POST /api/auth/logout` — best-effort server-side invalidation. The
/// caller clears local session state regardless of the outcome.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("Authorization", &bearer(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Fetch the published course catalog.
///
/// # Errors
///
/// `Unauthorized` when the server rejects the token; `Unavailable` for
/// transport and server failures.
pub async fn fetch_catalog(token: &str) -> Result<Vec<CourseSummary>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/courses")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| FetchError::Unavailable)?;
        if !resp.ok() {
            return Err(fetch_error_from_status(resp.status()));
        }
        resp.json().await.map_err(|_| FetchError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(FetchError::Unavailable)
    }
}

/// Fetch the instructor's own courses, drafts included.
///
/// # Errors
///
/// Same taxonomy as [`fetch_catalog`].
pub async fn fetch_my_courses(token: &str) -> Result<Vec<CourseSummary>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/courses/mine")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| FetchError::Unavailable)?;
        if !resp.ok() {
            return Err(fetch_error_from_status(resp.status()));
        }
        resp.json().await.map_err(|_| FetchError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(FetchError::Unavailable)
    }
}

/// Fetch one course with its visible curriculum.
///
/// # Errors
///
/// Same taxonomy as [`fetch_catalog`].
pub async fn fetch_course(token: &str, course_id: &str) -> Result<CourseDetails, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&course_endpoint(course_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| FetchError::Unavailable)?;
        if !resp.ok() {
            return Err(fetch_error_from_status(resp.status()));
        }
        resp.json().await.map_err(|_| FetchError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id);
        Err(FetchError::Unavailable)
    }
}

/// Fetch an opened module's payload.
///
/// # Errors
///
/// Same taxonomy as [`fetch_catalog`].
pub async fn fetch_module(token: &str, module_id: &str) -> Result<ModuleView, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&module_endpoint(module_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| FetchError::Unavailable)?;
        if !resp.ok() {
            return Err(fetch_error_from_status(resp.status()));
        }
        resp.json().await.map_err(|_| FetchError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, module_id);
        Err(FetchError::Unavailable)
    }
}

// =============================================================================
// AUTHORING
// =============================================================================

/// Create a draft course.
pub async fn create_course(token: &str, title: &str, description: &str) -> Option<CourseSummary> {
    #[cfg(feature = "hydrate")]
    {
        let description = (!description.trim().is_empty()).then(|| description.trim());
        let payload = serde_json::json!({ "title": title, "description": description });
        let resp = gloo_net::http::Request::post("/api/courses")
            .header("Authorization", &bearer(token))
            .json(&payload)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, title, description);
        None
    }
}

/// Publish a course to the student catalog.
pub async fn publish_course(token: &str, course_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/publish", course_endpoint(course_id));
        gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map(|resp| resp.ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id);
        false
    }
}

/// Replace a course description.
pub async fn update_description(token: &str, course_id: &str, description: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/description", course_endpoint(course_id));
        let payload = serde_json::json!({ "description": description });
        let Ok(req) = gloo_net::http::Request::patch(&url)
            .header("Authorization", &bearer(token))
            .json(&payload)
        else {
            return false;
        };
        req.send().await.map(|resp| resp.ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id, description);
        false
    }
}

/// Add a video module (title + hosted URL) to an owned course.
pub async fn add_video_module(
    token: &str,
    course_id: &str,
    title: &str,
    url: &str,
    is_private: bool,
) -> Option<ModuleSummary> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = format!("{}/modules/video", course_endpoint(course_id));
        let payload = serde_json::json!({ "title": title, "url": url, "is_private": is_private });
        let resp = gloo_net::http::Request::post(&endpoint)
            .header("Authorization", &bearer(token))
            .json(&payload)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id, title, url, is_private);
        None
    }
}

/// Upload an authored quiz to an owned course.
pub async fn add_quiz_module(token: &str, course_id: &str, draft: &QuizDraft) -> Option<ModuleSummary> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = format!("{}/modules/quiz", course_endpoint(course_id));
        let resp = gloo_net::http::Request::post(&endpoint)
            .header("Authorization", &bearer(token))
            .json(draft)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id, draft);
        None
    }
}

// =============================================================================
// ENROLLMENT & GRADING
// =============================================================================

/// Enroll the current student in a published course.
pub async fn enroll(token: &str, course_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/enrollment", course_endpoint(course_id));
        gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map(|resp| resp.ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id);
        false
    }
}

/// Submit selected quiz options for grading.
pub async fn submit_quiz(token: &str, module_id: &str, selected_option_ids: &[String]) -> Option<ScoreView> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/grade", module_endpoint(module_id));
        let payload = serde_json::json!({ "selected_option_ids": selected_option_ids });
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(&payload)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, module_id, selected_option_ids);
        None
    }
}
