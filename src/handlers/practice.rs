// src/handlers/practice.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::practice::McqPractice,
    state::PracticeSessions,
    store::{FeedbackStore, load_feedback},
};

/// DTO for picking an option on the current question.
#[derive(Debug, Deserialize, Validate)]
pub struct SelectOptionRequest {
    #[validate(length(min = 1))]
    pub value: String,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Practice session {} not found", id))
}

/// Opens the MCQ practice dialog for an interview.
///
/// All MCQ sets of the interview are merged into one question list, so every
/// answer panel opens the same practice.
pub async fn open_practice(
    State(store): State<Arc<dyn FeedbackStore>>,
    State(sessions): State<PracticeSessions>,
    Path(interview_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = load_feedback(store.as_ref(), &interview_id).await;
    let practice = McqPractice::new(data.mcqs)
        .ok_or_else(|| AppError::NotFound("No MCQs found for this interview".to_string()))?;

    let id = sessions.open(practice).await;
    tracing::info!("Opened practice session {} for interview {}", id, interview_id);

    let view = sessions
        .with(id, |p| p.view(id, None))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_practice(
    State(sessions): State<PracticeSessions>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = sessions
        .with(id, |p| p.view(id, None))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(view))
}

/// Moves to the next question. Stays put on the last one.
pub async fn next_question(
    State(sessions): State<PracticeSessions>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = sessions
        .with(id, |p| {
            p.next();
            p.view(id, None)
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(view))
}

/// Moves to the previous question. Stays put on the first one.
pub async fn prev_question(
    State(sessions): State<PracticeSessions>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = sessions
        .with(id, |p| {
            p.prev();
            p.view(id, None)
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(view))
}

pub async fn select_option(
    State(sessions): State<PracticeSessions>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectOptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let view = sessions
        .with(id, |p| p.select_option(&payload.value).map(|_| p.view(id, None)))
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(view))
}

/// Saves the selected option of the current question, replacing any earlier save.
pub async fn save_answer(
    State(sessions): State<PracticeSessions>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = sessions
        .with(id, |p| {
            let notification = p.save();
            p.view(id, Some(notification))
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(view))
}

/// Finishes the practice. Only allowed on the last question.
pub async fn submit_practice(
    State(sessions): State<PracticeSessions>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = sessions
        .with(id, |p| p.submit().map(|notification| p.view(id, Some(notification))))
        .await
        .ok_or_else(|| session_not_found(id))??;

    tracing::info!("Practice session {} submitted", id);
    Ok(Json(view))
}

/// Closes the dialog. Saved answers are discarded with the session.
pub async fn close_practice(
    State(sessions): State<PracticeSessions>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !sessions.close(id).await {
        return Err(session_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
