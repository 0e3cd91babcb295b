// src/store/mod.rs

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        answer::{AnswerRow, InterviewAnswer},
        feedback::FeedbackData,
        mcq::{McqSetRow, format_mcq_data},
    },
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryFeedbackStore;
pub use postgres::PgFeedbackStore;

/// Read access to the interview answers and MCQ sets of a mock interview.
/// Both queries return rows ordered by ascending id.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn answer_rows(&self, mock_idref: &str) -> Result<Vec<AnswerRow>, AppError>;

    async fn mcq_set_rows(&self, mock_idref: &str) -> Result<Vec<McqSetRow>, AppError>;
}

/// Loads and normalizes the feedback for one interview.
///
/// Answers are fetched first, then MCQ sets. If either query fails the error
/// is logged and an empty result is returned, which renders the empty page.
pub async fn load_feedback(store: &dyn FeedbackStore, mock_idref: &str) -> FeedbackData {
    match fetch_feedback(store, mock_idref).await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Failed to fetch feedback for interview {}: {:?}", mock_idref, e);
            FeedbackData::default()
        }
    }
}

async fn fetch_feedback(store: &dyn FeedbackStore, mock_idref: &str) -> Result<FeedbackData, AppError> {
    let answer_rows = store.answer_rows(mock_idref).await?;
    let mcq_rows = store.mcq_set_rows(mock_idref).await?;

    let answers = answer_rows
        .into_iter()
        .filter_map(|row| match InterviewAnswer::try_from(row) {
            Ok(answer) => Some(answer),
            Err(missing) => {
                tracing::warn!("Skipping incomplete answer: {}", missing);
                None
            }
        })
        .collect();

    Ok(FeedbackData {
        answers,
        mcqs: format_mcq_data(&mcq_rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_row(id: i32, mock_idref: &str, rating: Option<i32>) -> AnswerRow {
        AnswerRow {
            id,
            mock_idref: mock_idref.to_string(),
            question: format!("Question {}", id),
            correct_answer: Some("expected".to_string()),
            user_answer: Some("given".to_string()),
            feedback: Some("feedback".to_string()),
            rating,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn loads_only_the_requested_interview_in_id_order() {
        let store = MemoryFeedbackStore::new();
        store.insert_answer(answer_row(3, "abc123", Some(7)));
        store.insert_answer(answer_row(1, "abc123", Some(4)));
        store.insert_answer(answer_row(2, "other", Some(9)));
        store.insert_mcq_set(
            "abc123",
            r#"[{"question": "Q", "options": [{"option": "A"}], "correctAnswer": "A"}]"#,
        );

        let data = load_feedback(&store, "abc123").await;
        let ids: Vec<i32> = data.answers.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(data.mcqs.len(), 1);
    }

    #[tokio::test]
    async fn incomplete_rows_are_skipped() {
        let store = MemoryFeedbackStore::new();
        store.insert_answer(answer_row(1, "abc123", None));
        store.insert_answer(answer_row(2, "abc123", Some(6)));

        let data = load_feedback(&store, "abc123").await;
        assert_eq!(data.answers.len(), 1);
        assert_eq!(data.answers[0].id, 2);
    }

    #[tokio::test]
    async fn store_failure_falls_back_to_empty() {
        let store = MemoryFeedbackStore::new();
        store.insert_answer(answer_row(1, "abc123", Some(6)));
        store.fail_with("connection refused");

        let data = load_feedback(&store, "abc123").await;
        assert!(data.answers.is_empty());
        assert!(data.mcqs.is_empty());
    }
}
