// src/handlers/feedback.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::{
    config::Config,
    error::AppError,
    models::feedback::FeedbackPage,
    store::{FeedbackStore, load_feedback},
};

pub const BACK_TO_HOME_PATH: &str = "/api/feedback/back-to-home";

/// Returns the feedback page for an interview.
///
/// * Lists every rated answer of the interview in id order.
/// * Falls back to the empty page when nothing is found or the store fails.
pub async fn get_feedback(
    State(store): State<Arc<dyn FeedbackStore>>,
    Path(interview_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = load_feedback(store.as_ref(), &interview_id).await;
    tracing::debug!(
        "Loaded {} answers and {} MCQs for interview {}",
        data.answers.len(),
        data.mcqs.len(),
        interview_id
    );

    Ok(Json(FeedbackPage::build(&interview_id, &data, BACK_TO_HOME_PATH)))
}

/// "Back to home" on the empty page. Holds the response for the configured
/// delay so the client can show "Redirecting", then sends it to the dashboard.
pub async fn back_to_home(State(config): State<Config>) -> impl IntoResponse {
    tokio::time::sleep(config.redirect_delay).await;
    Redirect::to(&config.dashboard_path)
}
