//! Trivia questions.

use serde::{Deserialize, Serialize};

/// Every question offers exactly this many options.
pub const OPTIONS_PER_QUESTION: usize = 3;

/// A single trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Must equal one of `options`.
    pub correct_option: String,
}

impl QuizQuestion {
    /// Create a question from its prompt, options and correct option.
    pub fn new<I, S>(prompt: impl Into<String>, options: I, correct_option: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option: correct_option.into(),
        }
    }

    /// Exact string comparison against the correct option.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_option == choice
    }
}
