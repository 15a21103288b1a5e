use thiserror::Error;

/// Reasons a question bank cannot start a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyQuestionBank,

    #[error("question {id} is invalid: {reason}")]
    InvalidQuestion { id: u32, reason: String },
}
