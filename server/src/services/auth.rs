//! Account registration and credential verification.
//!
//! DESIGN
//! ======
//! Students and instructors share one `users` table with a fixed `role`
//! column. Login is role-scoped: a student's credentials do not open an
//! instructor session even when the email matches. Secrets are stored as
//! SHA-256 over a per-account random salt plus the secret.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

const SALT_BYTES: usize = 16;

/// Account role, fixed at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "student" => Some(Self::Student),
            "instructor" => Some(Self::Instructor),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid identifier")]
    InvalidIdentifier,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account already exists")]
    DuplicateAccount,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Verified account returned from registration and login.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Lowercase and shape-check an identifier. Identifiers are email-shaped:
/// exactly one `@` with non-empty local and domain parts.
#[must_use]
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub(crate) fn generate_salt() -> String {
    let bytes: [u8; SALT_BYTES] = rand::rng().random();
    crate::services::session::bytes_to_hex(&bytes)
}

/// Hash a secret with a per-account salt.
#[must_use]
pub fn hash_secret(salt: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(secret.as_bytes());
    let bytes = hasher.finalize();
    crate::services::session::bytes_to_hex(&bytes)
}

/// Register a new account. The stored identifier is the normalized form;
/// the caller should echo it back rather than assume its input was kept.
pub async fn register(pool: &PgPool, identifier: &str, secret: &str, role: Role) -> Result<Account, AuthError> {
    let email = normalize_identifier(identifier).ok_or(AuthError::InvalidIdentifier)?;
    if secret.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }

    let salt = generate_salt();
    let hash = hash_secret(&salt, secret);

    let row = sqlx::query(
        r"INSERT INTO users (email, role, password_salt, password_hash)
          VALUES ($1, $2, $3, $4)
          RETURNING id",
    )
    .bind(&email)
    .bind(role.as_str())
    .bind(&salt)
    .bind(&hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(sqlx::error::DatabaseError::is_unique_violation) {
            AuthError::DuplicateAccount
        } else {
            AuthError::Db(e)
        }
    })?;

    Ok(Account { id: row.get("id"), email, role })
}

/// Verify credentials for the given role. Missing account, wrong secret and
/// wrong role all collapse to `InvalidCredentials` so the response does not
/// leak which part failed.
pub async fn login(pool: &PgPool, identifier: &str, secret: &str, role: Role) -> Result<Account, AuthError> {
    let email = normalize_identifier(identifier).ok_or(AuthError::InvalidCredentials)?;

    let row = sqlx::query(
        r"SELECT id, password_salt, password_hash
          FROM users
          WHERE email = $1 AND role = $2",
    )
    .bind(&email)
    .bind(role.as_str())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let salt: String = row.get("password_salt");
    let stored: String = row.get("password_hash");
    if hash_secret(&salt, secret) != stored {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(Account { id: row.get("id"), email, role })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
