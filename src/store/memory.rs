// src/store/memory.rs

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::FeedbackStore;
use crate::{
    error::AppError,
    models::{answer::AnswerRow, mcq::McqSetRow},
};

#[derive(Default)]
struct Tables {
    answers: Vec<AnswerRow>,
    mcq_sets: Vec<McqSetRow>,
    failure: Option<String>,
}

/// In-process store with the same ordering guarantees as `PgFeedbackStore`.
/// Used to run the service without a database.
#[derive(Default)]
pub struct MemoryFeedbackStore {
    tables: RwLock<Tables>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_answer(&self, row: AnswerRow) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.answers.push(row);
    }

    /// Stores a raw MCQ payload and returns the id assigned to the row.
    pub fn insert_mcq_set(&self, mock_idref: &str, mcqs: &str) -> i32 {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let id = tables.mcq_sets.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        tables.mcq_sets.push(McqSetRow {
            id,
            mock_idref: mock_idref.to_string(),
            mcqs: mcqs.to_string(),
            created_at: Some(chrono::Utc::now()),
        });
        id
    }

    /// Makes every subsequent query fail with the given message.
    pub fn fail_with(&self, message: &str) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.failure = Some(message.to_string());
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, AppError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        if let Some(message) = &tables.failure {
            return Err(AppError::InternalServerError(message.clone()));
        }
        Ok(tables)
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn answer_rows(&self, mock_idref: &str) -> Result<Vec<AnswerRow>, AppError> {
        let tables = self.read()?;
        let mut rows: Vec<AnswerRow> = tables
            .answers
            .iter()
            .filter(|r| r.mock_idref == mock_idref)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    async fn mcq_set_rows(&self, mock_idref: &str) -> Result<Vec<McqSetRow>, AppError> {
        let tables = self.read()?;
        let mut rows: Vec<McqSetRow> = tables
            .mcq_sets
            .iter()
            .filter(|r| r.mock_idref == mock_idref)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }
}
