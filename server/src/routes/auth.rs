//! Auth routes — registration, login, logout, current account.
//!
//! ERROR HANDLING
//! ==============
//! Service errors are normalized to status codes here: bad identifier or
//! missing secret → 400, wrong credentials → 401, duplicate registration →
//! 409, anything database-shaped → 500 with a traced cause. Bodies carry no
//! detail beyond what the client taxonomy needs.

use axum::extract::{FromRef, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::auth::{self as auth_svc, AuthError, Role};
use crate::services::session;
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
/// The scheme comparison is case-insensitive.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated account extracted from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(StatusCode::UNAUTHORIZED);
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub identifier: String,
    pub secret: String,
    pub role: Role,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub email: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub email: String,
}

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::InvalidIdentifier => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::DuplicateAccount => StatusCode::CONFLICT,
        AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/auth/register` — create an account. Does not open a session;
/// the client logs in explicitly afterwards.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<(StatusCode, Json<RegisterResponse>), StatusCode> {
    if body.secret.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let account = auth_svc::register(&state.pool, &body.identifier, &body.secret, body.role)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::Db(_)) {
                tracing::error!(error = %e, "registration failed");
            }
            auth_error_to_status(&e)
        })?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { email: account.email })))
}

/// `POST /api/auth/login` — verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<LoginResponse>, StatusCode> {
    if body.secret.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let account = auth_svc::login(&state.pool, &body.identifier, &body.secret, body.role)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::Db(_)) {
                tracing::error!(error = %e, "login failed");
            }
            auth_error_to_status(&e)
        })?;

    let token = session::create_session(&state.pool, account.id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session creation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(LoginResponse { token, role: account.role, email: account.email }))
}

/// `POST /api/auth/logout` — invalidate the server-side session.
/// Best-effort: the client clears its local state regardless.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }
    StatusCode::NO_CONTENT
}

/// `GET /api/auth/me` — return the current account.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
