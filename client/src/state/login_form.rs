//! Login/register card state machine.
//!
//! Two tabs with independent input buffers. Submission is gated on both
//! fields of the active tab being non-empty and no call being in flight;
//! the busy flag is the only mutual exclusion needed since the UI thread
//! is single-threaded.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

/// Tabs of the combined login/register card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormTab {
    #[default]
    Login,
    Register,
}

/// Input buffers and submission status for the login/register card.
#[derive(Clone, Debug, Default)]
pub struct LoginFormState {
    pub active_tab: FormTab,
    pub username: String,
    pub password: String,
    pub new_username: String,
    pub new_password: String,
    pub busy: bool,
    pub message: Option<String>,
}

impl LoginFormState {
    /// Login submit is enabled only with both fields non-empty and no call
    /// in flight.
    #[must_use]
    pub fn can_submit_login(&self) -> bool {
        !self.busy && !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }

    /// Same gate for the register tab's buffers.
    #[must_use]
    pub fn can_submit_register(&self) -> bool {
        !self.busy && !self.new_username.trim().is_empty() && !self.new_password.trim().is_empty()
    }

    /// Mark a call in flight and drop any stale message.
    pub fn begin_submit(&mut self) {
        self.busy = true;
        self.message = None;
    }

    /// Record a failure. Buffers stay intact so the user can correct them.
    pub fn fail(&mut self, reason: String) {
        self.busy = false;
        self.message = Some(reason);
    }

    /// Login resolved successfully; the caller navigates away.
    pub fn login_succeeded(&mut self) {
        self.busy = false;
    }

    /// Registration resolved successfully: clear the register buffers,
    /// return to the login tab, and confirm. The user logs in explicitly
    /// afterwards.
    pub fn register_succeeded(&mut self, email: &str) {
        self.busy = false;
        self.new_username.clear();
        self.new_password.clear();
        self.active_tab = FormTab::Login;
        self.message = Some(format!("{email} registered successfully"));
    }
}
