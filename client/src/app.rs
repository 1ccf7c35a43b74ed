//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::course::CoursePage;
use crate::pages::instructor_dashboard::InstructorDashboardPage;
use crate::pages::login::{InstructorLoginPage, StudentLoginPage};
use crate::pages::student_dashboard::StudentDashboardPage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The
/// session is created empty on app start; it is populated by a login and
/// cleared by logout, never restored implicitly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/opencourse.css"/>
        <Title text="OpenCourse"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route path=StaticSegment("studentLogin") view=StudentLoginPage/>
                <Route path=StaticSegment("instrLogin") view=InstructorLoginPage/>
                <Route path=StaticSegment("studentDashboard") view=StudentDashboardPage/>
                <Route path=StaticSegment("instrDashboard") view=InstructorDashboardPage/>
                <Route path=(StaticSegment("course"), ParamSegment("id")) view=CoursePage/>
            </Routes>
        </Router>
    }
}

/// Root path: forward to the role dashboard when a session exists,
/// otherwise to the student login.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        let target = state
            .get()
            .map_or("/studentLogin", |s| s.role.dashboard_route());
        navigate(target, NavigateOptions::default());
    });

    view! { <p>"Redirecting..."</p> }
}
