use super::*;

fn filled_login_form() -> LoginFormState {
    LoginFormState {
        username: "alice@example.com".to_owned(),
        password: "burger1244".to_owned(),
        ..LoginFormState::default()
    }
}

// =============================================================
// Submit gating
// =============================================================

#[test]
fn default_form_cannot_submit() {
    let form = LoginFormState::default();
    assert!(!form.can_submit_login());
    assert!(!form.can_submit_register());
}

#[test]
fn filled_login_tab_can_submit() {
    assert!(filled_login_form().can_submit_login());
}

#[test]
fn whitespace_only_fields_do_not_enable_submit() {
    let form = LoginFormState {
        username: "   ".to_owned(),
        password: "pw".to_owned(),
        ..LoginFormState::default()
    };
    assert!(!form.can_submit_login());
}

#[test]
fn busy_form_cannot_submit_either_tab() {
    let mut form = filled_login_form();
    form.new_username = "bob@example.com".to_owned();
    form.new_password = "pw".to_owned();
    form.begin_submit();
    assert!(!form.can_submit_login());
    assert!(!form.can_submit_register());
}

#[test]
fn register_buffers_are_independent_of_login_buffers() {
    let form = LoginFormState {
        new_username: "bob@example.com".to_owned(),
        new_password: "pw".to_owned(),
        ..LoginFormState::default()
    };
    assert!(form.can_submit_register());
    assert!(!form.can_submit_login());
}

// =============================================================
// Outcome transitions
// =============================================================

#[test]
fn begin_submit_clears_previous_message() {
    let mut form = filled_login_form();
    form.fail("invalid credentials".to_owned());
    form.begin_submit();
    assert!(form.busy);
    assert!(form.message.is_none());
}

#[test]
fn failure_keeps_fields_intact() {
    let mut form = filled_login_form();
    form.begin_submit();
    form.fail("invalid credentials".to_owned());
    assert!(!form.busy);
    assert_eq!(form.username, "alice@example.com");
    assert_eq!(form.password, "burger1244");
    assert_eq!(form.message.as_deref(), Some("invalid credentials"));
}

#[test]
fn register_success_clears_only_register_buffers() {
    let mut form = filled_login_form();
    form.new_username = "bob@example.com".to_owned();
    form.new_password = "pw".to_owned();
    form.begin_submit();
    form.register_succeeded("bob@example.com");
    assert!(form.new_username.is_empty());
    assert!(form.new_password.is_empty());
    assert_eq!(form.username, "alice@example.com");
    assert_eq!(form.message.as_deref(), Some("bob@example.com registered successfully"));
}

#[test]
fn register_success_returns_to_the_login_tab() {
    let mut form = filled_login_form();
    form.active_tab = FormTab::Register;
    form.new_username = "bob@example.com".to_owned();
    form.new_password = "pw".to_owned();
    form.begin_submit();
    form.register_succeeded("bob@example.com");
    assert_eq!(form.active_tab, FormTab::Login);
}

#[test]
fn login_success_just_releases_busy() {
    let mut form = filled_login_form();
    form.begin_submit();
    form.login_succeeded();
    assert!(!form.busy);
    assert_eq!(form.username, "alice@example.com");
}
