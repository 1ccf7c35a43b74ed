use super::*;

fn valid_draft() -> QuizDraft {
    QuizDraft {
        title: "Week 1 quiz".to_owned(),
        questions: vec![QuestionDraft {
            content: "What is 2 + 2?".to_owned(),
            options: vec![
                OptionDraft { content: "3".to_owned(), is_correct: false },
                OptionDraft { content: "4".to_owned(), is_correct: true },
            ],
        }],
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_draft_starts_with_one_two_option_question() {
    let draft = QuizDraft::default();
    assert_eq!(draft.questions.len(), 1);
    assert_eq!(draft.questions[0].options.len(), 2);
}

#[test]
fn add_question_appends_default_question() {
    let mut draft = QuizDraft::default();
    draft.add_question();
    assert_eq!(draft.questions.len(), 2);
}

#[test]
fn add_option_targets_the_right_question() {
    let mut draft = QuizDraft::default();
    draft.add_question();
    draft.add_option(1);
    assert_eq!(draft.questions[0].options.len(), 2);
    assert_eq!(draft.questions[1].options.len(), 3);
}

#[test]
fn add_option_out_of_range_is_a_no_op() {
    let mut draft = QuizDraft::default();
    draft.add_option(7);
    assert_eq!(draft.questions[0].options.len(), 2);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_draft_passes() {
    assert!(valid_draft().is_valid());
}

#[test]
fn default_draft_is_invalid() {
    assert!(!QuizDraft::default().is_valid());
}

#[test]
fn blank_title_is_reported() {
    let mut draft = valid_draft();
    draft.title = "  ".to_owned();
    assert_eq!(draft.validation_error(), Some("quiz needs a title"));
}

#[test]
fn question_without_correct_option_is_reported() {
    let mut draft = valid_draft();
    draft.questions[0].options[1].is_correct = false;
    assert_eq!(draft.validation_error(), Some("every question needs a correct option"));
}

#[test]
fn blank_option_is_reported() {
    let mut draft = valid_draft();
    draft.questions[0].options[0].content = String::new();
    assert_eq!(draft.validation_error(), Some("every option needs text"));
}

// =============================================================
// Upload body shape
// =============================================================

#[test]
fn draft_serializes_to_upload_body() {
    let json = serde_json::to_value(valid_draft()).unwrap();
    assert_eq!(json["title"], "Week 1 quiz");
    assert_eq!(json["questions"][0]["options"][1]["is_correct"], true);
}
