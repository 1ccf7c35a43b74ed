//! End-to-end harness for the live identity and course APIs.
//!
//! This crate drives a running server from the outside over plain HTTP:
//! it registers throwaway accounts, exercises the login/logout lifecycle,
//! and walks the full instructor-authors / student-learns journey. Timing
//! is never handled with fixed sleeps; every wait is a polled predicate
//! with a deadline.

use std::time::Duration;

/// Runtime configuration for live tests, loaded from environment variables.
#[derive(Clone, Debug)]
pub struct E2eConfig {
    /// HTTP base URL of the server under test (e.g. `"http://127.0.0.1:3000"`).
    pub base_url: String,
    /// Shared secret used for every throwaway account.
    pub secret: String,
    /// Deadline for any single polled condition.
    pub wait_timeout: Duration,
    /// Pause between polls of a condition.
    pub poll_interval: Duration,
}

impl E2eConfig {
    /// Load config from environment with sane defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("E2E_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_owned());
        let secret = std::env::var("E2E_SECRET").unwrap_or_else(|_| "burger1244".to_owned());
        let wait_timeout = Duration::from_millis(env_u64("E2E_WAIT_TIMEOUT_MS", 10_000));
        let poll_interval = Duration::from_millis(env_u64("E2E_POLL_INTERVAL_MS", 100));

        Self { base_url, secret, wait_timeout, poll_interval }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Error type for harness operations.
#[derive(Debug, thiserror::Error)]
pub enum E2eError {
    /// An HTTP request to the server failed at the transport level.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a status the test did not expect.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: &'static str, status: u16 },
    /// A required field was absent from a response payload.
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    /// A polled condition never became true before its deadline.
    #[error("condition not met within {0:?}")]
    Timeout(Duration),
}

/// A fresh identifier of the shape real accounts use: eight random
/// lowercase alphanumerics in front of a fixed mail domain.
#[must_use]
pub fn random_identifier() -> String {
    use rand::Rng;

    let prefix: String = rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(8)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{prefix}@gmail.com")
}

/// Poll `probe` until it returns true or `timeout` elapses.
///
/// # Errors
///
/// Returns [`E2eError::Timeout`] when the deadline passes with the probe
/// still false.
pub async fn wait_until<F, Fut>(
    timeout: Duration,
    interval: Duration,
    mut probe: F,
) -> Result<(), E2eError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if probe().await {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(E2eError::Timeout(timeout));
        }
        tokio::time::sleep(interval).await;
    }
}

/// A live session returned by login.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SessionPayload {
    pub token: String,
    pub role: String,
    pub email: String,
}

/// A graded quiz outcome.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct ScorePayload {
    pub score: i32,
    pub total: i32,
}

/// Thin typed client over the REST surface under test.
pub struct ApiDriver {
    http: reqwest::Client,
    base_url: String,
}

impl ApiDriver {
    #[must_use]
    pub fn new(config: &E2eConfig) -> Self {
        Self { http: reqwest::Client::new(), base_url: config.base_url.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// True once `/healthz` answers 200.
    pub async fn is_ready(&self) -> bool {
        self.http
            .get(self.url("/healthz"))
            .send()
            .await
            .is_ok_and(|resp| resp.status().is_success())
    }

    // =========================================================================
    // IDENTITY
    // =========================================================================

    /// Register an account, expecting success.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-201 answer.
    pub async fn register(
        &self,
        identifier: &str,
        secret: &str,
        role: &str,
    ) -> Result<String, E2eError> {
        let resp = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({ "identifier": identifier, "secret": secret, "role": role }))
            .send()
            .await?;
        if resp.status().as_u16() != 201 {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/auth/register",
                status: resp.status().as_u16(),
            });
        }
        let body: serde_json::Value = resp.json().await?;
        body.get("email")
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned)
            .ok_or(E2eError::MissingField("email"))
    }

    /// Log in, expecting success.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or any non-2xx answer.
    pub async fn login(
        &self,
        identifier: &str,
        secret: &str,
        role: &str,
    ) -> Result<SessionPayload, E2eError> {
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "identifier": identifier, "secret": secret, "role": role }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/auth/login",
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    /// Log in and report only the HTTP status, for rejection tests.
    ///
    /// # Errors
    ///
    /// Fails only on transport errors.
    pub async fn login_status(
        &self,
        identifier: &str,
        secret: &str,
        role: &str,
    ) -> Result<u16, E2eError> {
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "identifier": identifier, "secret": secret, "role": role }))
            .send()
            .await?;
        Ok(resp.status().as_u16())
    }

    /// Invalidate a session server-side.
    ///
    /// # Errors
    ///
    /// Fails only on transport errors.
    pub async fn logout(&self, token: &str) -> Result<u16, E2eError> {
        let resp = self
            .http
            .post(self.url("/api/auth/logout"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(resp.status().as_u16())
    }

    /// Status of the who-am-I probe for `token`.
    ///
    /// # Errors
    ///
    /// Fails only on transport errors.
    pub async fn me_status(&self, token: &str) -> Result<u16, E2eError> {
        let resp = self
            .http
            .get(self.url("/api/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(resp.status().as_u16())
    }

    // =========================================================================
    // COURSES
    // =========================================================================

    /// Create a draft course, returning its id.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx answers, or a malformed payload.
    pub async fn create_course(&self, token: &str, title: &str) -> Result<String, E2eError> {
        let resp = self
            .http
            .post(self.url("/api/courses"))
            .bearer_auth(token)
            .json(&serde_json::json!({ "title": title, "description": "made by the e2e harness" }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/courses",
                status: resp.status().as_u16(),
            });
        }
        let body: serde_json::Value = resp.json().await?;
        id_field(&body)
    }

    /// Publish a draft course.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx answers.
    pub async fn publish_course(&self, token: &str, course_id: &str) -> Result<(), E2eError> {
        let resp = self
            .http
            .post(self.url(&format!("/api/courses/{course_id}/publish")))
            .bearer_auth(token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/courses/{id}/publish",
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }

    /// The published catalog as raw JSON entries.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx answers.
    pub async fn catalog(&self, token: &str) -> Result<Vec<serde_json::Value>, E2eError> {
        let resp = self
            .http
            .get(self.url("/api/courses"))
            .bearer_auth(token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/courses",
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    /// One course with its visible curriculum.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx answers.
    pub async fn course(&self, token: &str, course_id: &str) -> Result<serde_json::Value, E2eError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/courses/{course_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/courses/{id}",
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    /// Enroll the authenticated student in a published course.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx answers.
    pub async fn enroll(&self, token: &str, course_id: &str) -> Result<(), E2eError> {
        let resp = self
            .http
            .post(self.url(&format!("/api/courses/{course_id}/enrollment")))
            .bearer_auth(token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/courses/{id}/enrollment",
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // MODULES
    // =========================================================================

    /// Add a video module to an owned course, returning the module id.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx answers, or a malformed payload.
    pub async fn add_video_module(
        &self,
        token: &str,
        course_id: &str,
        title: &str,
        video_url: &str,
    ) -> Result<String, E2eError> {
        let resp = self
            .http
            .post(self.url(&format!("/api/courses/{course_id}/modules/video")))
            .bearer_auth(token)
            .json(&serde_json::json!({ "title": title, "url": video_url }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/courses/{id}/modules/video",
                status: resp.status().as_u16(),
            });
        }
        let body: serde_json::Value = resp.json().await?;
        id_field(&body)
    }

    /// Add a quiz module to an owned course, returning the module id.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx answers, or a malformed payload.
    pub async fn add_quiz_module(
        &self,
        token: &str,
        course_id: &str,
        quiz: &serde_json::Value,
    ) -> Result<String, E2eError> {
        let resp = self
            .http
            .post(self.url(&format!("/api/courses/{course_id}/modules/quiz")))
            .bearer_auth(token)
            .json(quiz)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/courses/{id}/modules/quiz",
                status: resp.status().as_u16(),
            });
        }
        let body: serde_json::Value = resp.json().await?;
        id_field(&body)
    }

    /// An opened module's payload.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx answers.
    pub async fn module(&self, token: &str, module_id: &str) -> Result<serde_json::Value, E2eError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/modules/{module_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/modules/{id}",
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    /// Submit selected option ids for grading.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-2xx answers.
    pub async fn grade(
        &self,
        token: &str,
        module_id: &str,
        selected_option_ids: &[String],
    ) -> Result<ScorePayload, E2eError> {
        let resp = self
            .http
            .post(self.url(&format!("/api/modules/{module_id}/grade")))
            .bearer_auth(token)
            .json(&serde_json::json!({ "selected_option_ids": selected_option_ids }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(E2eError::UnexpectedStatus {
                endpoint: "/api/modules/{id}/grade",
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}

fn id_field(body: &serde_json::Value) -> Result<String, E2eError> {
    body.get("id")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or(E2eError::MissingField("id"))
}

#[cfg(test)]
#[path = "e2e_live_test.rs"]
mod tests;
