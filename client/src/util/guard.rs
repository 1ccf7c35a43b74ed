//! Route guarding for the dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route applies the same redirect decision before showing
//! content. The guard reads only the locally cached session — no network
//! calls; a server-expired token is discovered by the first API call made
//! from inside the dashboard, not here.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Role, SessionState};

/// Where to send a visitor who may not enter a dashboard for `required`.
/// `None` means access is granted. A session of the wrong role does not
/// grant access to the other role's dashboard.
#[must_use]
pub fn guard_redirect(state: &SessionState, required: Role) -> Option<&'static str> {
    match state.get() {
        Some(session) if session.role == required => None,
        _ => Some(required.login_route()),
    }
}

/// Redirect whenever the session no longer satisfies the route's role.
pub fn install_session_guard<F>(session: RwSignal<SessionState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_redirect(&session.get(), required) {
            navigate(target, NavigateOptions::default());
        }
    });
}
