// src/models/mcq.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use super::{MissingField, required};

/// Represents the 'mcq_details' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct McqSetRow {
    pub id: i32,
    pub mock_idref: String,

    /// Raw JSON payload as returned by the feedback generator.
    pub mcqs: String,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqOption {
    pub option: String,
}

/// One practice question, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McqItem {
    pub question: String,
    pub options: Vec<McqOption>,
    pub correct_answer: String,
}

impl McqItem {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.option == value)
    }
}

/// The generator either stores the bare MCQ array or the whole response object.
#[derive(Deserialize)]
#[serde(untagged)]
enum McqPayload {
    List(Vec<RawMcq>),
    Wrapped { mcqs: Vec<RawMcq> },
}

impl McqPayload {
    fn into_entries(self) -> Vec<RawMcq> {
        match self {
            McqPayload::List(entries) | McqPayload::Wrapped { mcqs: entries } => entries,
        }
    }
}

#[derive(Deserialize)]
struct RawMcq {
    question: Option<String>,
    options: Option<Vec<RawOption>>,
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    correct_answer: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Keyed { option: String },
    Plain(String),
}

impl From<RawOption> for McqOption {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Keyed { option } | RawOption::Plain(option) => McqOption { option },
        }
    }
}

impl RawMcq {
    fn into_item(self, row_id: i32) -> Result<McqItem, MissingField> {
        let question = required(self.question, row_id, "question")?;
        let options: Vec<McqOption> = required(self.options, row_id, "options")?
            .into_iter()
            .map(McqOption::from)
            .collect();
        if options.is_empty() {
            return Err(MissingField { row_id, field: "options" });
        }
        let correct_answer = required(self.correct_answer, row_id, "correctAnswer")?;

        Ok(McqItem {
            question,
            options,
            correct_answer,
        })
    }
}

/// Flattens MCQ set rows into one ordered list of questions.
///
/// Row order and the order inside each payload are preserved. Payloads that are
/// not valid JSON and entries missing a required field are skipped and logged.
pub fn format_mcq_data(rows: &[McqSetRow]) -> Vec<McqItem> {
    let mut items = Vec::new();

    for row in rows {
        let payload = match serde_json::from_str::<McqPayload>(&row.mcqs) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(row_id = row.id, "Skipping unreadable MCQ payload: {}", e);
                continue;
            }
        };

        for (position, entry) in payload.into_entries().into_iter().enumerate() {
            match entry.into_item(row.id) {
                Ok(item) => items.push(item),
                Err(missing) => {
                    tracing::warn!(position, "Skipping MCQ entry: {}", missing);
                }
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, mcqs: &str) -> McqSetRow {
        McqSetRow {
            id,
            mock_idref: "abc123".to_string(),
            mcqs: mcqs.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn flattens_rows_in_order() {
        let rows = vec![
            row(
                1,
                r#"[
                    {"question": "Q1", "options": [{"option": "A"}, {"option": "B"}], "correctAnswer": "A"},
                    {"question": "Q2", "options": [{"option": "C"}, {"option": "D"}], "correctAnswer": "D"}
                ]"#,
            ),
            row(
                2,
                r#"{"rating": 7, "feedback": "ok", "mcqs": [
                    {"question": "Q3", "options": ["E", "F"], "correct_answer": "F"}
                ]}"#,
            ),
        ];

        let items = format_mcq_data(&rows);
        let questions: Vec<&str> = items.iter().map(|i| i.question.as_str()).collect();
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
        assert_eq!(items[2].options[1].option, "F");
        assert_eq!(items[2].correct_answer, "F");
    }

    #[test]
    fn skips_incomplete_entries_and_bad_payloads() {
        let rows = vec![
            row(1, "not json"),
            row(
                2,
                r#"[
                    {"question": "No answer", "options": [{"option": "A"}]},
                    {"question": "No options", "options": [], "correctAnswer": "A"},
                    {"question": "Kept", "options": [{"option": "A"}], "correctAnswer": "A"}
                ]"#,
            ),
        ];

        let items = format_mcq_data(&rows);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].question, "Kept");
        assert!(items[0].has_option("A"));
        assert!(!items[0].has_option("B"));
    }
}
