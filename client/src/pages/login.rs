//! Combined login / register page, one instance per role.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/studentLogin` and `/instrLogin` render the same tabbed card bound to a
//! different role. Login success stores the session and navigates to the role
//! dashboard; register success only reports the created account and leaves
//! the visitor on the login tab to sign in explicitly.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::state::login_form::{FormTab, LoginFormState};
use crate::state::session::{Role, SessionState};
#[cfg(feature = "hydrate")]
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use crate::util::storage;

#[component]
pub fn StudentLoginPage() -> impl IntoView {
    view! { <LoginCard role=Role::Student/> }
}

#[component]
pub fn InstructorLoginPage() -> impl IntoView {
    view! { <LoginCard role=Role::Instructor/> }
}

/// Tabbed card with a sign-in form and a registration form.
///
/// Submit handlers flip the shared busy flag before the request goes out, so
/// a second submit on either tab is a no-op until the first one settles.
#[component]
fn LoginCard(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(LoginFormState::default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let heading = match role {
        Role::Student => "Student sign in",
        Role::Instructor => "Instructor sign in",
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get();
        if snapshot.busy {
            return;
        }
        if !snapshot.can_submit_login() {
            form.update(|f| f.message = Some("Enter both username and password.".to_owned()));
            return;
        }
        form.update(LoginFormState::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            let identifier = snapshot.username.trim().to_owned();
            let secret = snapshot.password.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&identifier, &secret, role).await {
                    Ok(resp) => {
                        session.update(|s| {
                            s.set(Session {
                                token: resp.token.clone(),
                                role: resp.role,
                                issued_at: storage::now_ms(),
                            });
                        });
                        form.update(LoginFormState::login_succeeded);
                        navigate(resp.role.dashboard_route(), NavigateOptions::default());
                    }
                    Err(reason) => form.update(|f| f.fail(reason.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get();
        if snapshot.busy {
            return;
        }
        if !snapshot.can_submit_register() {
            form.update(|f| f.message = Some("Enter both username and password.".to_owned()));
            return;
        }
        form.update(LoginFormState::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            let identifier = snapshot.new_username.trim().to_owned();
            let secret = snapshot.new_password.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&identifier, &secret, role).await {
                    Ok(resp) => form.update(|f| f.register_succeeded(&resp.email)),
                    Err(reason) => form.update(|f| f.fail(reason.to_string())),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{heading}</h1>
                <div class="login-tabs" role="tablist">
                    <div
                        role="tab"
                        class=move || tab_class(form.get().active_tab, FormTab::Login)
                        on:click=move |_| form.update(|f| f.active_tab = FormTab::Login)
                    >
                        "Login"
                    </div>
                    <div
                        role="tab"
                        class=move || tab_class(form.get().active_tab, FormTab::Register)
                        on:click=move |_| form.update(|f| f.active_tab = FormTab::Register)
                    >
                        "Register"
                    </div>
                </div>

                <Show when=move || form.get().active_tab == FormTab::Login>
                    <form class="login-form" on:submit=on_login>
                        <input
                            class="login-input"
                            type="text"
                            name="username"
                            placeholder="you@example.com"
                            prop:value=move || form.get().username
                            on:input=move |ev| {
                                form.update(|f| f.username = event_target_value(&ev));
                            }
                        />
                        <input
                            class="login-input"
                            type="password"
                            name="password"
                            placeholder="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                            }
                        />
                        <button
                            class="login-button"
                            type="submit"
                            name="loginbutton"
                            disabled=move || !form.get().can_submit_login()
                        >
                            "Sign In"
                        </button>
                    </form>
                </Show>

                <Show when=move || form.get().active_tab == FormTab::Register>
                    <form class="login-form" on:submit=on_register>
                        <input
                            class="login-input"
                            type="text"
                            name="newUsername"
                            placeholder="you@example.com"
                            prop:value=move || form.get().new_username
                            on:input=move |ev| {
                                form.update(|f| f.new_username = event_target_value(&ev));
                            }
                        />
                        <input
                            class="login-input"
                            type="password"
                            name="newPassword"
                            placeholder="password"
                            prop:value=move || form.get().new_password
                            on:input=move |ev| {
                                form.update(|f| f.new_password = event_target_value(&ev));
                            }
                        />
                        <button
                            class="login-button"
                            type="submit"
                            name="registerbutton"
                            disabled=move || !form.get().can_submit_register()
                        >
                            "Register"
                        </button>
                    </form>
                </Show>

                <Show when=move || form.get().message.is_some()>
                    <p class="login-message">
                        {move || form.get().message.unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}

/// Class string for a tab header, marking the active one.
fn tab_class(active: FormTab, this: FormTab) -> &'static str {
    if active == this {
        "login-tab login-tab--active"
    } else {
        "login-tab"
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
