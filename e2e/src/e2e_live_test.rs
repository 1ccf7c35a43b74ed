use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;

// =============================================================================
// HARNESS UNIT TESTS (no server required)
// =============================================================================

#[test]
fn random_identifier_has_account_shape() {
    let id = random_identifier();
    let (prefix, domain) = id.split_once('@').expect("identifier has a domain");
    assert_eq!(domain, "gmail.com");
    assert_eq!(prefix.len(), 8);
    assert!(prefix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[test]
fn random_identifiers_are_fresh_across_calls() {
    let a = random_identifier();
    let b = random_identifier();
    assert_ne!(a, b);
}

#[tokio::test]
async fn wait_until_returns_once_probe_turns_true() {
    let calls = AtomicUsize::new(0);
    let result = wait_until(Duration::from_secs(1), Duration::from_millis(1), || {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        async move { n >= 2 }
    })
    .await;

    assert!(result.is_ok());
    assert!(calls.load(Ordering::SeqCst) >= 3);
}

#[tokio::test]
async fn wait_until_times_out_when_probe_stays_false() {
    let result = wait_until(Duration::from_millis(20), Duration::from_millis(5), || async {
        false
    })
    .await;

    assert!(matches!(result, Err(E2eError::Timeout(_))));
}

// =============================================================================
// LIVE TESTS (require a running server, run with --ignored)
// =============================================================================

async fn ready_driver() -> Result<(E2eConfig, ApiDriver), E2eError> {
    let config = E2eConfig::from_env();
    let driver = ApiDriver::new(&config);
    wait_until(config.wait_timeout, config.poll_interval, || driver.is_ready()).await?;
    Ok((config, driver))
}

#[tokio::test]
#[ignore = "live e2e test; requires a running server, run with --ignored"]
async fn register_then_login_yields_a_session() -> Result<(), E2eError> {
    let (config, driver) = ready_driver().await?;
    let identifier = random_identifier();

    let email = driver.register(&identifier, &config.secret, "student").await?;
    assert_eq!(email, identifier);

    let session = driver.login(&identifier, &config.secret, "student").await?;
    assert_eq!(session.role, "student");
    assert_eq!(session.email, identifier);
    assert!(!session.token.is_empty());

    assert_eq!(driver.me_status(&session.token).await?, 200);
    Ok(())
}

#[tokio::test]
#[ignore = "live e2e test; requires a running server, run with --ignored"]
async fn wrong_secret_is_rejected_without_a_session() -> Result<(), E2eError> {
    let (config, driver) = ready_driver().await?;
    let identifier = random_identifier();
    driver.register(&identifier, &config.secret, "student").await?;

    let status = driver.login_status(&identifier, "not-the-secret", "student").await?;
    assert_eq!(status, 401);
    Ok(())
}

#[tokio::test]
#[ignore = "live e2e test; requires a running server, run with --ignored"]
async fn duplicate_registration_is_rejected() -> Result<(), E2eError> {
    let (config, driver) = ready_driver().await?;
    let identifier = random_identifier();
    driver.register(&identifier, &config.secret, "student").await?;

    let second = driver.register(&identifier, &config.secret, "student").await;
    assert!(matches!(
        second,
        Err(E2eError::UnexpectedStatus { status: 409, .. })
    ));
    Ok(())
}

#[tokio::test]
#[ignore = "live e2e test; requires a running server, run with --ignored"]
async fn login_is_scoped_to_the_registered_role() -> Result<(), E2eError> {
    let (config, driver) = ready_driver().await?;
    let identifier = random_identifier();
    driver.register(&identifier, &config.secret, "student").await?;

    let status = driver.login_status(&identifier, &config.secret, "instructor").await?;
    assert_eq!(status, 401);
    Ok(())
}

#[tokio::test]
#[ignore = "live e2e test; requires a running server, run with --ignored"]
async fn logout_invalidates_the_token() -> Result<(), E2eError> {
    let (config, driver) = ready_driver().await?;
    let identifier = random_identifier();
    driver.register(&identifier, &config.secret, "student").await?;
    let session = driver.login(&identifier, &config.secret, "student").await?;

    assert_eq!(driver.me_status(&session.token).await?, 200);
    let logout_status = driver.logout(&session.token).await?;
    assert!(logout_status == 200 || logout_status == 204);

    wait_until(config.wait_timeout, config.poll_interval, || async {
        matches!(driver.me_status(&session.token).await, Ok(401))
    })
    .await?;
    Ok(())
}

fn journey_quiz() -> serde_json::Value {
    // First option of every question is the correct one.
    serde_json::json!({
        "title": "Checkpoint quiz",
        "questions": [
            {
                "content": "Which layer owns session tokens?",
                "options": [
                    { "content": "The server", "is_correct": true },
                    { "content": "The browser alone", "is_correct": false },
                ],
            },
            {
                "content": "What does a failed logout do locally?",
                "options": [
                    { "content": "Clears the session anyway", "is_correct": true },
                    { "content": "Keeps the session", "is_correct": false },
                ],
            },
        ],
    })
}

#[tokio::test]
#[ignore = "live e2e test; requires a running server, run with --ignored"]
async fn full_instructor_and_student_journey() -> Result<(), E2eError> {
    let (config, driver) = ready_driver().await?;

    // Instructor authors and publishes a course.
    let instructor = random_identifier();
    driver.register(&instructor, &config.secret, "instructor").await?;
    let teaching = driver.login(&instructor, &config.secret, "instructor").await?;

    let course_id = driver.create_course(&teaching.token, "Intro to Sessions").await?;
    driver
        .add_video_module(&teaching.token, &course_id, "Welcome", "https://videos.example/welcome.mp4")
        .await?;
    let quiz_id = driver.add_quiz_module(&teaching.token, &course_id, &journey_quiz()).await?;
    driver.publish_course(&teaching.token, &course_id).await?;

    // Student registers, finds the course in the catalog, and enrolls.
    let student = random_identifier();
    driver.register(&student, &config.secret, "student").await?;
    let learning = driver.login(&student, &config.secret, "student").await?;

    wait_until(config.wait_timeout, config.poll_interval, || async {
        driver.catalog(&learning.token).await.is_ok_and(|catalog| {
            catalog
                .iter()
                .any(|entry| entry.get("id").and_then(serde_json::Value::as_str) == Some(course_id.as_str()))
        })
    })
    .await?;

    driver.enroll(&learning.token, &course_id).await?;

    let course = driver.course(&learning.token, &course_id).await?;
    let modules = course
        .get("modules")
        .and_then(serde_json::Value::as_array)
        .ok_or(E2eError::MissingField("modules"))?;
    assert_eq!(modules.len(), 2);

    // Open the quiz and answer every question with its first option.
    let quiz = driver.module(&learning.token, &quiz_id).await?;
    let questions = quiz
        .get("questions")
        .and_then(serde_json::Value::as_array)
        .ok_or(E2eError::MissingField("questions"))?;
    assert_eq!(questions.len(), 2);

    let mut selections = Vec::new();
    for question in questions {
        let first_option = question
            .get("options")
            .and_then(serde_json::Value::as_array)
            .and_then(|options| options.first())
            .and_then(|option| option.get("id"))
            .and_then(serde_json::Value::as_str)
            .ok_or(E2eError::MissingField("options"))?;
        selections.push(first_option.to_owned());
    }

    let score = driver.grade(&learning.token, &quiz_id, &selections).await?;
    assert_eq!(score.total, 2);
    assert_eq!(score.score, 2);
    Ok(())
}
