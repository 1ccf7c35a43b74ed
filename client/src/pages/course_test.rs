use super::*;
use crate::net::types::QuizOptionView;

fn question(id: &str) -> QuizQuestionView {
    QuizQuestionView {
        id: id.to_owned(),
        content: format!("question {id}"),
        options: vec![
            QuizOptionView { id: format!("{id}-a"), content: "a".to_owned() },
            QuizOptionView { id: format!("{id}-b"), content: "b".to_owned() },
        ],
    }
}

#[test]
fn ordered_selections_follow_question_order() {
    let questions = vec![question("q1"), question("q2"), question("q3")];
    let mut picks = HashMap::new();
    picks.insert("q3".to_owned(), "q3-a".to_owned());
    picks.insert("q1".to_owned(), "q1-b".to_owned());
    picks.insert("q2".to_owned(), "q2-a".to_owned());

    assert_eq!(
        ordered_selections(&questions, &picks),
        vec!["q1-b".to_owned(), "q2-a".to_owned(), "q3-a".to_owned()]
    );
}

#[test]
fn ordered_selections_skip_unanswered_questions() {
    let questions = vec![question("q1"), question("q2")];
    let mut picks = HashMap::new();
    picks.insert("q2".to_owned(), "q2-b".to_owned());

    assert_eq!(ordered_selections(&questions, &picks), vec!["q2-b".to_owned()]);
}

#[test]
fn all_answered_requires_every_question() {
    let questions = vec![question("q1"), question("q2")];
    let mut picks = HashMap::new();
    assert!(!all_answered(&questions, &picks));

    picks.insert("q1".to_owned(), "q1-a".to_owned());
    assert!(!all_answered(&questions, &picks));

    picks.insert("q2".to_owned(), "q2-a".to_owned());
    assert!(all_answered(&questions, &picks));
}

#[test]
fn all_answered_is_vacuously_true_for_no_questions() {
    assert!(all_answered(&[], &HashMap::new()));
}

#[test]
fn stray_picks_for_unknown_questions_are_ignored() {
    let questions = vec![question("q1")];
    let mut picks = HashMap::new();
    picks.insert("q1".to_owned(), "q1-a".to_owned());
    picks.insert("ghost".to_owned(), "ghost-a".to_owned());

    assert_eq!(ordered_selections(&questions, &picks), vec!["q1-a".to_owned()]);
    assert!(all_answered(&questions, &picks));
}
