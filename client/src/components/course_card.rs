//! Reusable course tile for dashboard grids.

use leptos::prelude::*;

/// A clickable tile representing a course in a dashboard grid.
#[component]
pub fn CourseCard(id: String, title: String, description: Option<String>) -> impl IntoView {
    let href = format!("/course/{id}");

    view! {
        <a class="course-tile col-4" href=href>
            <span class="course-tile__title">{title}</span>
            <span class="course-tile__description">{description.unwrap_or_default()}</span>
        </a>
    }
}
