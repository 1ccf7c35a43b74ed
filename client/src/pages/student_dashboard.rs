//! Student dashboard listing the published course catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the student landing route after login. The role guard runs before
//! any content shows; the catalog is fetched once per visit with the session
//! token. Logout clears local state first and tells the server afterwards,
//! so a dead connection can never trap a user in a logged-in tab.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::course_card::CourseCard;
use crate::net::types::CourseSummary;
use crate::state::session::{Role, SessionState};
use crate::util::guard::install_session_guard;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_session_guard(session, Role::Student, navigate);

    // None while loading, Some(vec) once the fetch settles.
    let courses = RwSignal::new(None::<Vec<CourseSummary>>);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::FetchError;

        let requested = RwSignal::new(false);
        Effect::new(move || {
            if requested.get() {
                return;
            }
            let Some(token) = session.get().token().map(ToOwned::to_owned) else {
                return;
            };
            requested.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_catalog(&token).await {
                    Ok(catalog) => courses.set(Some(catalog)),
                    // The server no longer knows this token; destroy the
                    // session so the guard routes back to login.
                    Err(FetchError::Unauthorized) => session.update(SessionState::clear),
                    Err(FetchError::Unavailable) => courses.set(Some(Vec::new())),
                }
            });
        });
    }

    let on_logout = move |_| {
        let mut token = None;
        session.update(|state| token = state.take_for_logout());
        #[cfg(feature = "hydrate")]
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&token).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"My learning"</h1>
                <button class="logout-button" name="logoutbutton" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <Show
                when=move || courses.get().is_some()
                fallback=|| view! { <p class="dashboard__empty">"Loading courses..."</p> }
            >
                <div class="dashboard__grid row">
                    <For
                        each=move || courses.get().unwrap_or_default()
                        key=|course| course.id.clone()
                        children=|course| {
                            view! {
                                <CourseCard
                                    id=course.id
                                    title=course.title
                                    description=course.description
                                />
                            }
                        }
                    />
                </div>
            </Show>
            <Show when=move || courses.get().is_some_and(|list| list.is_empty())>
                <p class="dashboard__empty">"No published courses yet."</p>
            </Show>
        </div>
    }
}
