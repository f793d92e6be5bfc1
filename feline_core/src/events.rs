//! Events consumed by the site state.

use serde::{Deserialize, Serialize};

/// A discrete user action forwarded by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    SubmitAnswer { choice: String },
    /// Raw strings; validated when applied.
    RecordAnswer { category: String, value: String },
    MatchPersonality,
    ResetQuiz,
    ResetMatch,
    Like,
    AdvanceFact,
}

/// Anything that can change site state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteEvent {
    Intent(Intent),
    /// Fired by the fact ticker.
    FactTick,
}

impl Intent {
    /// Create a quiz answer intent.
    pub fn submit_answer(choice: impl Into<String>) -> Self {
        Intent::SubmitAnswer {
            choice: choice.into(),
        }
    }

    /// Create a personality answer intent.
    pub fn record_answer(category: impl Into<String>, value: impl Into<String>) -> Self {
        Intent::RecordAnswer {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SubmitAnswer { .. } => "submit_answer",
            Intent::RecordAnswer { .. } => "record_answer",
            Intent::MatchPersonality => "match_personality",
            Intent::ResetQuiz => "reset_quiz",
            Intent::ResetMatch => "reset_match",
            Intent::Like => "like",
            Intent::AdvanceFact => "advance_fact",
        }
    }
}

impl From<Intent> for SiteEvent {
    fn from(intent: Intent) -> Self {
        SiteEvent::Intent(intent)
    }
}
