use std::collections::HashSet;

use uuid::Uuid;

use super::*;

fn option(content: &str, is_correct: bool) -> OptionInput {
    OptionInput { content: content.to_owned(), is_correct }
}

fn question(content: &str, options: Vec<OptionInput>) -> QuestionInput {
    QuestionInput { content: content.to_owned(), options }
}

fn valid_question() -> QuestionInput {
    question("What is 2 + 2?", vec![option("3", false), option("4", true)])
}

// =============================================================
// validate_quiz
// =============================================================

#[test]
fn validate_accepts_well_formed_quiz() {
    assert!(validate_quiz("Arithmetic", &[valid_question()]).is_ok());
}

#[test]
fn validate_rejects_empty_title() {
    let err = validate_quiz("   ", &[valid_question()]).unwrap_err();
    assert!(matches!(err, QuizError::InvalidQuiz(_)));
}

#[test]
fn validate_rejects_zero_questions() {
    assert!(validate_quiz("Arithmetic", &[]).is_err());
}

#[test]
fn validate_rejects_blank_question_text() {
    let q = question("  ", vec![option("a", true), option("b", false)]);
    assert!(validate_quiz("Arithmetic", &[q]).is_err());
}

#[test]
fn validate_rejects_single_option_question() {
    let q = question("Pick one", vec![option("only", true)]);
    assert!(validate_quiz("Arithmetic", &[q]).is_err());
}

#[test]
fn validate_rejects_blank_option_text() {
    let q = question("Pick one", vec![option("", true), option("b", false)]);
    assert!(validate_quiz("Arithmetic", &[q]).is_err());
}

#[test]
fn validate_rejects_question_without_correct_option() {
    let q = question("Pick one", vec![option("a", false), option("b", false)]);
    assert!(validate_quiz("Arithmetic", &[q]).is_err());
}

// =============================================================
// score_selections
// =============================================================

fn fresh_id() -> Uuid {
    Uuid::new_v4()
}

#[test]
fn empty_selection_scores_zero() {
    assert_eq!(score_selections(&[], &HashSet::new()), 0);
}

#[test]
fn only_correct_selections_score() {
    let right = fresh_id();
    let wrong = fresh_id();
    let correct = HashSet::from([right, fresh_id()]);
    assert_eq!(score_selections(&[right, wrong], &correct), 1);
}

#[test]
fn selections_from_another_quiz_never_score() {
    let correct = HashSet::from([fresh_id()]);
    assert_eq!(score_selections(&[fresh_id(), fresh_id()], &correct), 0);
}

#[test]
fn duplicate_selections_count_once() {
    let right = fresh_id();
    let correct = HashSet::from([right]);
    assert_eq!(score_selections(&[right, right, right], &correct), 1);
}

// =============================================================
// ModuleContent serialization — shape consumed by the client
// =============================================================

#[test]
fn video_content_serializes_with_kind_tag() {
    let content = ModuleContent::Video { url: "https://cdn.example.com/intro.mp4".to_owned() };
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json["kind"], "video");
    assert_eq!(json["url"], "https://cdn.example.com/intro.mp4");
}

#[test]
fn quiz_content_serializes_questions_without_correct_flags() {
    let content = ModuleContent::Quiz {
        questions: vec![QuestionView {
            id: uuid::Uuid::new_v4(),
            content: "What is 2 + 2?".to_owned(),
            options: vec![OptionView { id: uuid::Uuid::new_v4(), content: "4".to_owned() }],
        }],
    };
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json["kind"], "quiz");
    let option = &json["questions"][0]["options"][0];
    assert!(option.get("is_correct").is_none());
    assert_eq!(option["content"], "4");
}
