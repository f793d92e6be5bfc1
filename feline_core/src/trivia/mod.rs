//! Trivia engine - walks the fixed question list and keeps score.
//!
//! On the last question the index stays put and `finished` is raised instead, so
//! the final question remains addressable while the result is shown.

use feline_catalog::QuizQuestion;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// In-memory progress through the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawQuizSession")]
pub struct QuizSession {
    current_index: usize,
    score: usize,
    finished: bool,
}

/// Unchecked wire form of [`QuizSession`].
#[derive(Deserialize)]
struct RawQuizSession {
    current_index: usize,
    score: usize,
    finished: bool,
}

impl TryFrom<RawQuizSession> for QuizSession {
    type Error = String;

    fn try_from(raw: RawQuizSession) -> Result<Self, Self::Error> {
        let session = QuizSession {
            current_index: raw.current_index,
            score: raw.score,
            finished: raw.finished,
        };
        if session.score > session.answered() {
            return Err(format!(
                "score {} exceeds {} answered questions",
                session.score,
                session.answered()
            ));
        }
        Ok(session)
    }
}

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
    /// The quiz was already finished (or had no questions); nothing changed.
    Ignored,
}

/// Read-only projection for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizView {
    Question {
        index: usize,
        total: usize,
        prompt: String,
        options: Vec<String>,
    },
    Finished {
        score: usize,
        total: usize,
    },
}

impl QuizSession {
    /// A fresh session at the first question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the question being shown; stays on the last one once finished.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Check if every question has been answered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.current_index + usize::from(self.finished)
    }

    /// Score the choice against the current question and move on.
    pub fn submit_answer(&mut self, questions: &[QuizQuestion], choice: &str) -> SubmitOutcome {
        if self.finished {
            debug!(choice, "quiz already finished, ignoring answer");
            return SubmitOutcome::Ignored;
        }
        let Some(question) = questions.get(self.current_index) else {
            return SubmitOutcome::Ignored;
        };

        let outcome = if question.is_correct(choice) {
            self.score += 1;
            SubmitOutcome::Correct
        } else {
            SubmitOutcome::Incorrect
        };

        if self.current_index + 1 == questions.len() {
            self.finished = true;
            info!(score = self.score, total = questions.len(), "quiz finished");
        } else {
            self.current_index += 1;
        }

        debug!(
            index = self.current_index,
            score = self.score,
            ?outcome,
            "answer submitted"
        );
        outcome
    }

    /// Back to the first question with no score.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Project the session for the view layer.
    pub fn view(&self, questions: &[QuizQuestion]) -> QuizView {
        match questions.get(self.current_index) {
            Some(question) if !self.finished => QuizView::Question {
                index: self.current_index,
                total: questions.len(),
                prompt: question.prompt.clone(),
                options: question.options.clone(),
            },
            _ => QuizView::Finished {
                score: self.score,
                total: questions.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feline_catalog::Catalog;

    fn correct(questions: &[QuizQuestion], session: &QuizSession) -> String {
        questions[session.current_index()].correct_option.clone()
    }

    #[test]
    fn test_correct_wrong_correct() {
        let catalog = Catalog::builtin();
        let questions = &catalog.questions;
        let mut session = QuizSession::new();

        let answer = correct(questions, &session);
        assert_eq!(session.submit_answer(questions, &answer), SubmitOutcome::Correct);
        assert!(!session.is_finished());

        assert_eq!(
            session.submit_answer(questions, "definitely wrong"),
            SubmitOutcome::Incorrect
        );
        assert!(!session.is_finished());

        let answer = correct(questions, &session);
        assert_eq!(session.submit_answer(questions, &answer), SubmitOutcome::Correct);

        assert_eq!(session.score(), 2);
        assert!(session.is_finished());
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.answered(), 3);
        assert_eq!(session.view(questions), QuizView::Finished { score: 2, total: 3 });
    }

    #[test]
    fn test_score_bounded_and_monotonic() {
        let catalog = Catalog::builtin();
        let questions = &catalog.questions;

        // Every correct/wrong pattern over three questions.
        for pattern in 0..8u8 {
            let mut session = QuizSession::new();
            let mut last_score = 0;
            for bit in 0..3 {
                let choice = if pattern & (1 << bit) != 0 {
                    correct(questions, &session)
                } else {
                    "nope".to_string()
                };
                session.submit_answer(questions, &choice);
                assert!(session.score() <= session.answered());
                assert!(session.score() >= last_score);
                last_score = session.score();
            }
            assert!(session.is_finished());
            assert_eq!(session.score(), pattern.count_ones() as usize);
        }
    }

    #[test]
    fn test_submit_after_finish_is_noop() {
        let catalog = Catalog::builtin();
        let questions = &catalog.questions;
        let mut session = QuizSession::new();
        for _ in 0..3 {
            let answer = correct(questions, &session);
            session.submit_answer(questions, &answer);
        }
        let before = session;

        let answer = correct(questions, &session);
        assert_eq!(session.submit_answer(questions, &answer), SubmitOutcome::Ignored);
        assert_eq!(session, before);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_reset() {
        let catalog = Catalog::builtin();
        let questions = &catalog.questions;
        let mut session = QuizSession::new();
        session.submit_answer(questions, &correct(questions, &session));
        session.submit_answer(questions, "x");

        session.reset();
        assert_eq!(session, QuizSession::new());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_view_shows_current_question() {
        let catalog = Catalog::builtin();
        let questions = &catalog.questions;
        let mut session = QuizSession::new();
        session.submit_answer(questions, "x");

        match session.view(questions) {
            QuizView::Question {
                index,
                total,
                prompt,
                options,
            } => {
                assert_eq!(index, 1);
                assert_eq!(total, 3);
                assert_eq!(prompt, questions[1].prompt);
                assert_eq!(options.len(), 3);
            }
            other => panic!("expected a question, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_rejects_inflated_score() {
        let result = serde_json::from_str::<QuizSession>(
            r#"{"current_index":1,"score":9,"finished":false}"#,
        );
        assert!(result.is_err());

        let session: QuizSession =
            serde_json::from_str(r#"{"current_index":2,"score":3,"finished":true}"#).unwrap();
        assert_eq!(session.answered(), 3);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_no_questions() {
        let mut session = QuizSession::new();
        assert_eq!(session.submit_answer(&[], "x"), SubmitOutcome::Ignored);
        assert_eq!(session.view(&[]), QuizView::Finished { score: 0, total: 0 });
    }
}
