use crate::quiz::error::QuizError;
use serde::{Deserialize, Serialize};

/// A single multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_choice: usize,
    pub explanation: String,
    pub source_label: String,
    pub source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_choice
    }

    pub fn correct_text(&self) -> &str {
        self.choices
            .get(self.correct_choice)
            .map(|c| c.as_str())
            .unwrap_or("")
    }

    /// Check the question is playable: a prompt, at least two choices, and a
    /// correct answer that points inside `choices`.
    pub fn validate(&self) -> Result<(), QuizError> {
        let invalid = |reason: &str| QuizError::InvalidQuestion {
            id: self.id,
            reason: reason.to_string(),
        };

        if self.prompt.trim().is_empty() {
            return Err(invalid("prompt is empty"));
        }
        if self.choices.len() < 2 {
            return Err(invalid("needs at least two choices"));
        }
        if self.choices.iter().any(|c| c.trim().is_empty()) {
            return Err(invalid("has an empty choice"));
        }
        if self.correct_choice >= self.choices.len() {
            return Err(QuizError::InvalidQuestion {
                id: self.id,
                reason: format!(
                    "correct choice {} is out of range for {} choices",
                    self.correct_choice,
                    self.choices.len()
                ),
            });
        }
        Ok(())
    }
}
