// src/models/mod.rs

use std::fmt;

pub mod answer;
pub mod feedback;
pub mod mcq;
pub mod practice;

/// A stored record lacked a field the page cannot render without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub row_id: i32,
    pub field: &'static str,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} is missing '{}'", self.row_id, self.field)
    }
}

impl std::error::Error for MissingField {}

pub(crate) fn required<T>(value: Option<T>, row_id: i32, field: &'static str) -> Result<T, MissingField> {
    value.ok_or(MissingField { row_id, field })
}
