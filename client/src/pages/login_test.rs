use super::*;

#[test]
fn tab_class_marks_only_the_active_tab() {
    assert_eq!(tab_class(FormTab::Login, FormTab::Login), "login-tab login-tab--active");
    assert_eq!(tab_class(FormTab::Login, FormTab::Register), "login-tab");
    assert_eq!(tab_class(FormTab::Register, FormTab::Register), "login-tab login-tab--active");
    assert_eq!(tab_class(FormTab::Register, FormTab::Login), "login-tab");
}
