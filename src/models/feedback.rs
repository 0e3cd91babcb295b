// src/models/feedback.rs

use serde::Serialize;

use super::{answer::InterviewAnswer, mcq::McqItem};
use crate::utils::rating::{AnswerTone, LabelTone, answer_tone, label_tone};

/// Everything the feedback page needs for one interview.
#[derive(Debug, Clone, Default)]
pub struct FeedbackData {
    pub answers: Vec<InterviewAnswer>,
    pub mcqs: Vec<McqItem>,
}

/// DTO for the feedback page.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedbackPage {
    Empty {
        title: String,
        action: HomeAction,
    },
    Ready {
        title: String,
        subtitle: String,
        description: String,
        panels: Vec<FeedbackPanel>,
    },
}

/// The "Back to home" button on the empty page.
#[derive(Debug, Serialize)]
pub struct HomeAction {
    pub label: String,
    pub loading_text: String,
    pub href: String,
}

/// One collapsible answer panel.
#[derive(Debug, Serialize)]
pub struct FeedbackPanel {
    pub id: i32,
    pub question: String,
    pub rating: i32,
    pub rating_tone: LabelTone,
    pub answer_tone: AnswerTone,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback: String,
    pub practice: PracticeLink,
}

/// Trigger for the MCQ practice dialog. MCQs belong to the interview, not to
/// the answer, so every panel points at the same set.
#[derive(Debug, Serialize)]
pub struct PracticeLink {
    pub label: String,
    pub question_count: usize,
    pub available: bool,
    pub href: String,
}

impl FeedbackPage {
    pub fn build(interview_id: &str, data: &FeedbackData, home_href: &str) -> Self {
        if data.answers.is_empty() {
            return FeedbackPage::Empty {
                title: "No interview feedback Found".to_string(),
                action: HomeAction {
                    label: "Back to home".to_string(),
                    loading_text: "Redirecting".to_string(),
                    href: home_href.to_string(),
                },
            };
        }

        let practice_href = format!("/api/interviews/{}/practice", interview_id);
        let panels = data
            .answers
            .iter()
            .map(|answer| FeedbackPanel {
                id: answer.id,
                question: answer.question.clone(),
                rating: answer.rating,
                rating_tone: label_tone(answer.rating),
                answer_tone: answer_tone(answer.rating),
                user_answer: answer.user_answer.clone(),
                correct_answer: answer.correct_answer.clone(),
                feedback: answer.feedback.clone(),
                practice: PracticeLink {
                    label: "Suggest Some MCQ".to_string(),
                    question_count: data.mcqs.len(),
                    available: !data.mcqs.is_empty(),
                    href: practice_href.clone(),
                },
            })
            .collect();

        FeedbackPage::Ready {
            title: "Congratulations!".to_string(),
            subtitle: "Here is your interview feedback".to_string(),
            description: "Find below interview questions with the correct answer, your answer, and feedback for improvement.".to_string(),
            panels,
        }
    }
}
