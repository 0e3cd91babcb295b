// src/utils/rating.rs

use serde::Serialize;

/// Color of the "Rating" label on a feedback panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelTone {
    Red,
    Green,
}

/// Background of the "Your answer" box on a feedback panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerTone {
    Red,
    Yellow,
    Green,
}

/// 5 and below is flagged red.
pub fn label_tone(rating: i32) -> LabelTone {
    if rating <= 5 {
        LabelTone::Red
    } else {
        LabelTone::Green
    }
}

/// Independent of `label_tone`: a 5 gets a red label but a yellow answer box.
pub fn answer_tone(rating: i32) -> AnswerTone {
    if rating <= 4 {
        AnswerTone::Red
    } else if rating >= 7 {
        AnswerTone::Green
    } else {
        AnswerTone::Yellow
    }
}
