// src/models/practice.rs

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::mcq::{McqItem, McqOption};

/// A saved response to one practice question. Lives only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McqAnswerDraft {
    pub question: String,
    pub is_correct: bool,
    /// The option text the user picked.
    pub selected_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
}

/// Transient toast shown by the client after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeError {
    UnknownOption(String),
    NotOnLastQuestion { active: usize, total: usize },
}

impl fmt::Display for PracticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PracticeError::UnknownOption(value) => {
                write!(f, "'{}' is not an option for this question", value)
            }
            PracticeError::NotOnLastQuestion { active, total } => write!(
                f,
                "Submit is only available on the last question (on {} of {})",
                active + 1,
                total
            ),
        }
    }
}

impl std::error::Error for PracticeError {}

/// Navigation and answer tracking for one run through a list of MCQs.
///
/// The cursor always points at an existing question, so the list is never empty.
#[derive(Debug, Clone)]
pub struct McqPractice {
    items: Vec<McqItem>,
    active: usize,
    selections: HashMap<usize, String>,
    drafts: BTreeMap<usize, McqAnswerDraft>,
}

impl McqPractice {
    /// Returns `None` when there is nothing to practice.
    pub fn new(items: Vec<McqItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            active: 0,
            selections: HashMap::new(),
            drafts: BTreeMap::new(),
        })
    }

    pub fn active_question(&self) -> usize {
        self.active
    }

    pub fn question_count(&self) -> usize {
        self.items.len()
    }

    pub fn current(&self) -> &McqItem {
        &self.items[self.active]
    }

    pub fn next(&mut self) {
        if self.active + 1 < self.items.len() {
            self.active += 1;
        }
    }

    pub fn prev(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Records a provisional choice for the current question. Nothing is
    /// committed until `save`.
    pub fn select_option(&mut self, value: &str) -> Result<(), PracticeError> {
        if !self.current().has_option(value) {
            return Err(PracticeError::UnknownOption(value.to_string()));
        }
        self.selections.insert(self.active, value.to_string());
        Ok(())
    }

    /// The choice shown for the current question: the pending selection, or
    /// else whatever was last saved.
    pub fn selected(&self) -> Option<&str> {
        self.selections
            .get(&self.active)
            .map(String::as_str)
            .or_else(|| self.drafts.get(&self.active).map(|d| d.selected_answer.as_str()))
    }

    /// Commits the current selection, replacing any earlier draft for this question.
    pub fn save(&mut self) -> Notification {
        let selected_answer = self.selected().unwrap_or_default().to_string();
        let item = self.current();
        let draft = McqAnswerDraft {
            question: item.question.clone(),
            is_correct: selected_answer == item.correct_answer,
            selected_answer,
        };
        self.drafts.insert(self.active, draft);
        Notification::success("Answer saved")
    }

    pub fn can_submit(&self) -> bool {
        self.active + 1 == self.question_count()
    }

    /// Results are neither scored nor stored.
    pub fn submit(&self) -> Result<Notification, PracticeError> {
        if !self.can_submit() {
            return Err(PracticeError::NotOnLastQuestion {
                active: self.active,
                total: self.items.len(),
            });
        }
        Ok(Notification::success("Submitted successfully"))
    }

    pub fn draft(&self, index: usize) -> Option<&McqAnswerDraft> {
        self.drafts.get(&index)
    }

    pub fn drafts(&self) -> &BTreeMap<usize, McqAnswerDraft> {
        &self.drafts
    }

    pub fn view(&self, session_id: Uuid, notification: Option<Notification>) -> PracticeView {
        let item = self.current();
        PracticeView {
            session_id,
            active_question: self.active,
            total_questions: self.question_count(),
            question: item.question.clone(),
            options: item.options.clone(),
            selected: self.selected().map(str::to_string),
            can_submit: self.can_submit(),
            drafts: self
                .drafts
                .iter()
                .map(|(&index, draft)| SavedDraft {
                    index,
                    draft: draft.clone(),
                })
                .collect(),
            notification,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavedDraft {
    pub index: usize,
    #[serde(flatten)]
    pub draft: McqAnswerDraft,
}

/// What the practice dialog renders after each action.
#[derive(Debug, Serialize)]
pub struct PracticeView {
    pub session_id: Uuid,
    /// Zero-based; the client labels it "Question {n + 1}".
    pub active_question: usize,
    pub total_questions: usize,
    pub question: String,
    pub options: Vec<McqOption>,
    pub selected: Option<String>,
    pub can_submit: bool,
    pub drafts: Vec<SavedDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}
