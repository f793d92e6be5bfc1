//! Site state - the four independent state pieces behind one update function.

mod runtime;

pub use runtime::*;

use feline_catalog::{AnswerValue, Catalog, Category, SiteConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::events::{Intent, SiteEvent};
use crate::facts::FactRotator;
use crate::likes::{LikeCounter, Notifier};
use crate::matcher::PersonalityMatcher;
use crate::trivia::{QuizSession, QuizView};
use crate::CoreError;

/// All interactive state for one page view.
#[derive(Debug, Clone)]
pub struct SiteState {
    catalog: Catalog,
    config: SiteConfig,
    quiz: QuizSession,
    matcher: PersonalityMatcher,
    facts: FactRotator,
    likes: LikeCounter,
}

/// Read-only projection handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSnapshot {
    pub quiz: QuizView,
    pub questionnaire: Vec<QuestionnaireItem>,
    pub answers: BTreeMap<Category, AnswerValue>,
    pub matched_breed: Option<MatchedBreed>,
    pub fact: FactView,
    pub likes: u64,
}

/// One personality question and the answers it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireItem {
    pub category: Category,
    pub prompt: String,
    pub options: Vec<AnswerValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedBreed {
    pub name: String,
    pub description: String,
    pub image_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactView {
    pub index: usize,
    pub total: usize,
    pub text: String,
}

impl SiteState {
    /// Validate the catalog and config and start a fresh page view.
    pub fn new(catalog: Catalog, config: SiteConfig) -> Result<Self, CoreError> {
        catalog.validate().map_err(CoreError::Catalog)?;
        config.validate().map_err(CoreError::Catalog)?;
        let facts = FactRotator::new(catalog.facts.len());
        Ok(Self {
            catalog,
            config,
            quiz: QuizSession::new(),
            matcher: PersonalityMatcher::new(),
            facts,
            likes: LikeCounter::new(),
        })
    }

    /// Built-in catalog with default configuration.
    pub fn with_defaults() -> Self {
        let catalog = Catalog::builtin();
        Self {
            facts: FactRotator::new(catalog.facts.len()),
            catalog,
            config: SiteConfig::default(),
            quiz: QuizSession::new(),
            matcher: PersonalityMatcher::new(),
            likes: LikeCounter::new(),
        }
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the quiz session.
    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    /// Get the personality matcher.
    pub fn matcher(&self) -> &PersonalityMatcher {
        &self.matcher
    }

    /// Get the fact rotator.
    pub fn facts(&self) -> &FactRotator {
        &self.facts
    }

    /// Get the like counter.
    pub fn likes(&self) -> &LikeCounter {
        &self.likes
    }

    /// Apply one event. On error the state is unchanged.
    pub fn apply(&mut self, event: SiteEvent, notifier: &mut dyn Notifier) -> Result<(), CoreError> {
        match event {
            SiteEvent::FactTick => {
                self.facts.tick();
                Ok(())
            }
            SiteEvent::Intent(intent) => self.apply_intent(intent, notifier),
        }
    }

    fn apply_intent(&mut self, intent: Intent, notifier: &mut dyn Notifier) -> Result<(), CoreError> {
        debug!(intent = intent.name(), "applying intent");
        match intent {
            Intent::SubmitAnswer { choice } => {
                self.quiz.submit_answer(&self.catalog.questions, &choice);
            }
            Intent::ResetQuiz => self.quiz.reset(),
            Intent::RecordAnswer { category, value } => {
                if let Err(err) = self.matcher.record_answer(&category, &value) {
                    warn!(%category, %value, "rejected personality answer");
                    return Err(err);
                }
            }
            Intent::MatchPersonality => {
                self.matcher.match_personality(&self.catalog)?;
            }
            Intent::ResetMatch => self.matcher.reset(),
            Intent::Like => {
                self.likes.like(&self.config.like_notification, notifier);
            }
            Intent::AdvanceFact => self.facts.advance(),
        }
        Ok(())
    }

    /// Tear down the fact card: later ticks are ignored.
    pub fn unmount(&mut self) {
        self.facts.unmount();
    }

    /// Project the current state for rendering.
    pub fn snapshot(&self) -> SiteSnapshot {
        let index = self.facts.index();
        SiteSnapshot {
            quiz: self.quiz.view(&self.catalog.questions),
            questionnaire: Category::ALL
                .into_iter()
                .map(|category| QuestionnaireItem {
                    category,
                    prompt: category.prompt().to_string(),
                    options: category.options().to_vec(),
                })
                .collect(),
            answers: self.matcher.answers().iter().collect(),
            matched_breed: self.matcher.result(&self.catalog).map(|b| MatchedBreed {
                name: b.name.clone(),
                description: b.description.clone(),
                image_ref: b.image_ref.clone(),
            }),
            fact: FactView {
                index,
                total: self.catalog.facts.len(),
                text: self.catalog.facts.get(index).cloned().unwrap_or_default(),
            },
            likes: self.likes.count(),
        }
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SiteSnapshot {
    /// Serialize the snapshot as JSON for the view layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
