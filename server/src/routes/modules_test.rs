use super::*;

// =============================================================
// quiz_error_to_status
// =============================================================

#[test]
fn module_not_found_maps_to_404() {
    let err = QuizError::ModuleNotFound(Uuid::new_v4());
    assert_eq!(quiz_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn bad_submissions_map_to_400() {
    assert_eq!(quiz_error_to_status(&QuizError::NotAQuiz), StatusCode::BAD_REQUEST);
    assert_eq!(
        quiz_error_to_status(&QuizError::InvalidQuiz("missing title")),
        StatusCode::BAD_REQUEST
    );
}

// =============================================================
// Body shapes
// =============================================================

#[test]
fn create_video_body_defaults_private_to_false() {
    let body: CreateVideoBody =
        serde_json::from_str(r#"{"title":"Intro","url":"https://cdn.example.com/v.mp4"}"#).unwrap();
    assert!(!body.is_private);
}

#[test]
fn create_quiz_body_deserializes_nested_questions() {
    let raw = r#"{
        "title": "Week 1",
        "questions": [
            {"content": "2+2?", "options": [
                {"content": "3", "is_correct": false},
                {"content": "4", "is_correct": true}
            ]}
        ]
    }"#;
    let body: CreateQuizBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.questions.len(), 1);
    assert_eq!(body.questions[0].options[1].content, "4");
    assert!(body.questions[0].options[1].is_correct);
}

#[test]
fn module_content_response_flattens_payload() {
    let resp = ModuleContentResponse {
        id: Uuid::new_v4(),
        title: "Intro".to_owned(),
        content: ModuleContent::Video { url: "https://cdn.example.com/v.mp4".to_owned() },
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["kind"], "video");
    assert_eq!(json["title"], "Intro");
    assert_eq!(json["url"], "https://cdn.example.com/v.mp4");
}
