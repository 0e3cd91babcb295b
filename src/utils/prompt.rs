// src/utils/prompt.rs

use crate::config::MCQS_PER_QUESTION;

/// Builds the instruction sent to the generative AI service to rate an
/// interview answer and produce follow-up MCQs.
///
/// The reply is expected to be a JSON object with `rating`, `feedback` and
/// `mcqs` keys. This only builds the request text; the reply is not checked here.
pub fn feedback_prompt(question: &str, user_answer: &str) -> String {
    format!(
        "Question: {question}, User Answer: {user_answer}. \
Based on the interview question and the user answer above, give a rating for the answer \
and feedback on areas of improvement, if any, in just 3 to 5 lines. \
Reply in JSON format with a \"rating\" field holding a number from 1 to 10 and a \"feedback\" field holding the text. \
Also give {count} multiple choice questions about the question above in an array under the key \"mcqs\". \
Each item of \"mcqs\" must be an object with a \"question\" field, an \"options\" field listing the choices \
as objects with an \"option\" key, and a \"correctAnswer\" field holding the text of the correct option. \
Do not prefix questions or options with numbers or letters, and do not add anything outside the JSON object.",
        count = MCQS_PER_QUESTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_question_and_answer() {
        let prompt = feedback_prompt("What is a lifetime?", "A scope for references.");
        assert!(prompt.starts_with("Question: What is a lifetime?, User Answer: A scope for references."));
    }

    #[test]
    fn asks_for_every_reply_key() {
        let prompt = feedback_prompt("q", "a");
        for key in ["\"rating\"", "\"feedback\"", "\"mcqs\"", "\"question\"", "\"options\"", "\"correctAnswer\""] {
            assert!(prompt.contains(key), "prompt is missing {}", key);
        }
        assert!(prompt.contains("give 5 multiple choice questions"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(feedback_prompt("q", "a"), feedback_prompt("q", "a"));
    }
}
