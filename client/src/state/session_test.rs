use super::*;

fn session(token: &str, role: Role) -> Session {
    Session { token: token.to_owned(), role, issued_at: 0.0 }
}

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn default_state_has_no_session() {
    let state = SessionState::default();
    assert!(state.get().is_none());
    assert!(state.token().is_none());
}

#[test]
fn get_after_set_returns_same_token() {
    let mut state = SessionState::default();
    state.set(session("tok-1", Role::Student));
    assert_eq!(state.token(), Some("tok-1"));
    assert_eq!(state.get().unwrap().role, Role::Student);
}

#[test]
fn new_login_overwrites_prior_session() {
    let mut state = SessionState::default();
    state.set(session("tok-1", Role::Student));
    state.set(session("tok-2", Role::Instructor));
    assert_eq!(state.token(), Some("tok-2"));
    assert_eq!(state.get().unwrap().role, Role::Instructor);
}

#[test]
fn clear_removes_session() {
    let mut state = SessionState::default();
    state.set(session("tok-1", Role::Student));
    state.clear();
    assert!(state.get().is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.clear();
    state.clear();
    assert!(state.get().is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_locally_and_yields_the_token_for_the_remote_call() {
    let mut state = SessionState::default();
    state.set(session("tok-1", Role::Student));
    let token = state.take_for_logout();
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert!(state.get().is_none());
}

#[test]
fn failed_remote_logout_cannot_resurrect_the_session() {
    let mut state = SessionState::default();
    state.set(session("tok-1", Role::Student));
    let token = state.take_for_logout();
    drop(token); // the remote call never happens
    assert!(state.get().is_none());
}

#[test]
fn logout_without_a_session_stays_cleared() {
    let mut state = SessionState::default();
    assert!(state.take_for_logout().is_none());
    assert!(state.get().is_none());
}

// =============================================================
// Role routes
// =============================================================

#[test]
fn dashboard_routes_match_role() {
    assert_eq!(Role::Student.dashboard_route(), "/studentDashboard");
    assert_eq!(Role::Instructor.dashboard_route(), "/instrDashboard");
}

#[test]
fn login_routes_match_role() {
    assert_eq!(Role::Student.login_route(), "/studentLogin");
    assert_eq!(Role::Instructor.login_route(), "/instrLogin");
}

#[test]
fn role_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Instructor).unwrap(), "\"instructor\"");
    let parsed: Role = serde_json::from_str("\"student\"").unwrap();
    assert_eq!(parsed, Role::Student);
}
