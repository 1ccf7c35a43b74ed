use super::*;
use crate::state::session::Session;

fn state_with(token: &str, role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.set(Session { token: token.to_owned(), role, issued_at: 0.0 });
    state
}

#[test]
fn no_session_redirects_to_matching_login() {
    let state = SessionState::default();
    assert_eq!(guard_redirect(&state, Role::Student), Some("/studentLogin"));
    assert_eq!(guard_redirect(&state, Role::Instructor), Some("/instrLogin"));
}

#[test]
fn matching_role_grants_access() {
    let state = state_with("tok", Role::Student);
    assert_eq!(guard_redirect(&state, Role::Student), None);
}

#[test]
fn wrong_role_does_not_cross_dashboards() {
    let student = state_with("tok", Role::Student);
    assert_eq!(guard_redirect(&student, Role::Instructor), Some("/instrLogin"));

    let instructor = state_with("tok", Role::Instructor);
    assert_eq!(guard_redirect(&instructor, Role::Student), Some("/studentLogin"));
}

#[test]
fn cleared_session_redirects_again() {
    let mut state = state_with("tok", Role::Student);
    state.clear();
    assert_eq!(guard_redirect(&state, Role::Student), Some("/studentLogin"));
}
