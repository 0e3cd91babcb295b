// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::FeedbackStore;
use crate::{
    error::AppError,
    models::{answer::AnswerRow, mcq::McqSetRow},
};

#[derive(Clone)]
pub struct PgFeedbackStore {
    pool: PgPool,
}

impl PgFeedbackStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn answer_rows(&self, mock_idref: &str) -> Result<Vec<AnswerRow>, AppError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT
                id,
                mock_idref,
                question,
                correct_answer,
                user_answer,
                feedback,
                rating,
                user_email,
                created_at
            FROM user_answers
            WHERE mock_idref = $1
            ORDER BY id
            "#,
        )
        .bind(mock_idref)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn mcq_set_rows(&self, mock_idref: &str) -> Result<Vec<McqSetRow>, AppError> {
        let rows = sqlx::query_as::<_, McqSetRow>(
            r#"
            SELECT id, mock_idref, mcqs, created_at
            FROM mcq_details
            WHERE mock_idref = $1
            ORDER BY id
            "#,
        )
        .bind(mock_idref)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
