// src/models/answer.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

use super::{MissingField, required};

/// Represents the 'user_answers' table in the database.
/// The answer, feedback and rating columns are nullable because they are
/// filled in by the feedback generation step, so rows are checked with
/// `InterviewAnswer::try_from` before they are displayed.
#[derive(Debug, Clone, Default, FromRow)]
pub struct AnswerRow {
    pub id: i32,

    /// Interview session this answer belongs to.
    pub mock_idref: String,

    pub question: String,
    pub correct_answer: Option<String>,
    pub user_answer: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
    pub user_email: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A fully populated interview answer, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewAnswer {
    pub id: i32,
    pub mock_idref: String,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback: String,
    /// Score on a 1-10 scale.
    pub rating: i32,
    pub user_email: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TryFrom<AnswerRow> for InterviewAnswer {
    type Error = MissingField;

    fn try_from(row: AnswerRow) -> Result<Self, Self::Error> {
        let id = row.id;
        Ok(Self {
            id,
            mock_idref: row.mock_idref,
            question: row.question,
            user_answer: required(row.user_answer, id, "user_answer")?,
            correct_answer: required(row.correct_answer, id, "correct_answer")?,
            feedback: required(row.feedback, id, "feedback")?,
            rating: required(row.rating, id, "rating")?,
            user_email: row.user_email,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row() -> AnswerRow {
        AnswerRow {
            id: 7,
            mock_idref: "abc123".to_string(),
            question: "What is ownership?".to_string(),
            correct_answer: Some("Each value has a single owner.".to_string()),
            user_answer: Some("Values have owners.".to_string()),
            feedback: Some("Mention moves and drops.".to_string()),
            rating: Some(6),
            ..Default::default()
        }
    }

    #[test]
    fn complete_row_converts() {
        let answer = InterviewAnswer::try_from(complete_row()).unwrap();
        assert_eq!(answer.id, 7);
        assert_eq!(answer.rating, 6);
        assert_eq!(answer.user_answer, "Values have owners.");
    }

    #[test]
    fn missing_rating_is_reported() {
        let row = AnswerRow { rating: None, ..complete_row() };
        let err = InterviewAnswer::try_from(row).unwrap_err();
        assert_eq!(err, MissingField { row_id: 7, field: "rating" });
    }
}
