//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON API under `/api` together with Leptos SSR
//! for the application pages (`/studentLogin`, `/instrDashboard`, ...) in a
//! single Axum router. Static client assets (WASM, CSS) are served from the
//! site root's `pkg` directory.

pub mod auth;
pub mod courses;
pub mod modules;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// JSON API routes consumed by the hydrated client and the e2e harness.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/courses", get(courses::catalog).post(courses::create_course))
        .route("/api/courses/mine", get(courses::my_courses))
        .route("/api/courses/{id}", get(courses::course_details))
        .route(
            "/api/courses/{id}/description",
            get(courses::get_description).patch(courses::update_description),
        )
        .route("/api/courses/{id}/publish", post(courses::publish))
        .route(
            "/api/courses/{id}/enrollment",
            get(courses::enrollment_status).post(courses::enroll),
        )
        .route("/api/courses/{id}/modules/video", post(modules::create_video_module))
        .route("/api/courses/{id}/modules/quiz", post(modules::create_quiz_module))
        .route("/api/modules/{id}", get(modules::module_content))
        .route("/api/modules/{id}/grade", post(modules::grade))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: JSON API + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / environment configuration).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
