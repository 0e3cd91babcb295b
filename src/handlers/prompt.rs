// src/handlers/prompt.rs

use axum::{Json, response::IntoResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{error::AppError, utils::prompt::feedback_prompt};

/// DTO for building a feedback request for the AI service.
#[derive(Debug, Deserialize, Validate)]
pub struct FeedbackPromptRequest {
    #[validate(length(min = 1, max = 2000))]
    pub question: String,
    #[validate(length(min = 1, max = 10000))]
    pub user_answer: String,
}

/// Builds the prompt asking the AI service to rate an answer and suggest MCQs.
pub async fn build_feedback_prompt(
    Json(payload): Json<FeedbackPromptRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    Ok(Json(serde_json::json!({
        "prompt": feedback_prompt(&payload.question, &payload.user_answer),
    })))
}
