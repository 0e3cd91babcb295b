// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{feedback, practice, prompt},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (feedback, practice, prompts).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store, practice sessions, config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let interview_routes = Router::new()
        .route("/{interview_id}/feedback", get(feedback::get_feedback))
        .route("/{interview_id}/practice", post(practice::open_practice));

    let feedback_routes = Router::new().route("/back-to-home", get(feedback::back_to_home));

    let practice_routes = Router::new()
        .route(
            "/{session_id}",
            get(practice::get_practice).delete(practice::close_practice),
        )
        .route("/{session_id}/next", post(practice::next_question))
        .route("/{session_id}/prev", post(practice::prev_question))
        .route("/{session_id}/select", post(practice::select_option))
        .route("/{session_id}/save", post(practice::save_answer))
        .route("/{session_id}/submit", post(practice::submit_practice));

    let prompt_routes = Router::new().route("/feedback", post(prompt::build_feedback_prompt));

    Router::new()
        .nest("/api/interviews", interview_routes)
        .nest("/api/feedback", feedback_routes)
        .nest("/api/practice", practice_routes)
        .nest("/api/prompts", prompt_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
