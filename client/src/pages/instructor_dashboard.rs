//! Instructor dashboard: owned courses (drafts included) and course creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route for instructors. Creating a course opens
//! a dialog, and a successful create navigates straight into the new course
//! page where modules are authored.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::CourseSummary;
use crate::state::session::{Role, SessionState};
use crate::util::guard::install_session_guard;

#[component]
pub fn InstructorDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_session_guard(session, Role::Instructor, navigate.clone());

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
                match crate::net::api::fetch_my_courses(&token).await {
                    Ok(mine) => courses.set(Some(mine)),
                    // The server no longer knows this token; destroy the
                    // session so the guard routes back to login.
                    Err(FetchError::Unauthorized) => session.update(SessionState::clear),
                    Err(FetchError::Unavailable) => courses.set(Some(Vec::new())),
                }
            });
        });
    }

    // Create-course dialog state.
    let show_create = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());
    let create_busy = RwSignal::new(false);
    let create_message = RwSignal::new(String::new());

    let on_open_create = move |_| {
        show_create.set(true);
        new_title.set(String::new());
        new_description.set(String::new());
        create_message.set(String::new());
    };

    let navigate_created = navigate.clone();
    let on_create_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if create_busy.get() {
            return;
        }
        let title = new_title.get().trim().to_owned();
        if title.is_empty() {
            create_message.set("Enter a course title.".to_owned());
            return;
        }
        let description = new_description.get();
        create_busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.get().token().map(ToOwned::to_owned) else {
                create_busy.set(false);
                return;
            };
            let navigate = navigate_created.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_course(&token, &title, &description).await {
                    Some(course) => {
                        navigate(&format!("/course/{}", course.id), NavigateOptions::default());
                    }
                    None => {
                        create_message.set("Could not create the course. Try again.".to_owned());
                        create_busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_created, title, description);
        }
    };

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
                <h1>"My courses"</h1>
                <div class="dashboard__actions">
                    <button class="create-button" on:click=on_open_create>
                        "Create course"
                    </button>
                    <button class="logout-button" name="logoutbutton" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
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
                            let href = format!("/course/{}", course.id);
                            let status = if course.is_published { "Published" } else { "Draft" };
                            view! {
                                <a class="course-tile col-4" href=href>
                                    <span class="course-tile__title">{course.title}</span>
                                    <span class="course-tile__status">{status}</span>
                                </a>
                            }
                        }
                    />
                </div>
            </Show>
            <Show when=move || courses.get().is_some_and(|list| list.is_empty())>
                <p class="dashboard__empty">"No courses yet. Create one to get started."</p>
            </Show>

            <Show when=move || show_create.get()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h2>"New course"</h2>
                        <form class="dialog__form" on:submit=on_create_submit.clone()>
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="Course title"
                                prop:value=move || new_title.get()
                                on:input=move |ev| new_title.set(event_target_value(&ev))
                            />
                            <textarea
                                class="dialog__input"
                                placeholder="Description (optional)"
                                prop:value=move || new_description.get()
                                on:input=move |ev| new_description.set(event_target_value(&ev))
                            ></textarea>
                            <div class="dialog__buttons">
                                <button
                                    class="dialog__cancel"
                                    type="button"
                                    on:click=move |_| show_create.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="dialog__confirm"
                                    type="submit"
                                    disabled=move || create_busy.get()
                                >
                                    "Create"
                                </button>
                            </div>
                        </form>
                        <Show when=move || !create_message.get().is_empty()>
                            <p class="dialog__message">{move || create_message.get()}</p>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
