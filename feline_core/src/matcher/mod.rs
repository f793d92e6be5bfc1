//! Personality matcher - scores every breed against the collected answers.
//!
//! Scoring adds one point per satisfied condition:
//! - activity high and the breed is `energetic`
//! - activity low and the breed is `calm`
//! - affection high and the breed is `affectionate`
//! - vocal yes and the breed is `talkative`
//!
//! The best breed is the first one in catalog order reaching the maximum score. With
//! no answers every breed scores zero and the first breed wins.

mod answers;

pub use answers::*;

use feline_catalog::{
    AnswerValue, BreedRecord, Catalog, Category, TAG_AFFECTIONATE, TAG_CALM, TAG_ENERGETIC,
    TAG_TALKATIVE,
};
use tracing::{debug, info};

use crate::CoreError;

/// (answer, required tag) pairs that each earn a point.
const CONDITIONS: [(Category, AnswerValue, &str); 4] = [
    (Category::Activity, AnswerValue::High, TAG_ENERGETIC),
    (Category::Activity, AnswerValue::Low, TAG_CALM),
    (Category::Affection, AnswerValue::High, TAG_AFFECTIONATE),
    (Category::Vocal, AnswerValue::Yes, TAG_TALKATIVE),
];

/// Number of satisfied conditions for one breed.
pub fn score_breed(answers: &PersonalityAnswers, breed: &BreedRecord) -> u32 {
    CONDITIONS
        .iter()
        .filter(|(category, value, tag)| answers.is(*category, *value) && breed.has_tag(tag))
        .count() as u32
}

/// Pick the best breed. Only a strictly higher score replaces the current best.
pub fn compute_match<'a>(
    answers: &PersonalityAnswers,
    breeds: &'a [BreedRecord],
) -> Option<&'a BreedRecord> {
    compute_match_index(answers, breeds).map(|i| &breeds[i])
}

fn compute_match_index(answers: &PersonalityAnswers, breeds: &[BreedRecord]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, breed) in breeds.iter().enumerate() {
        let score = score_breed(answers, breed);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Questionnaire state plus the last computed match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonalityMatcher {
    answers: PersonalityAnswers,
    /// Index into the catalog's breed list.
    result: Option<usize>,
}

impl PersonalityMatcher {
    /// Create a matcher with no answers and no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the answers recorded so far.
    pub fn answers(&self) -> &PersonalityAnswers {
        &self.answers
    }

    /// Record or overwrite one answer. A previously computed match is kept until the
    /// next `match_personality` or `reset`.
    pub fn record_answer(&mut self, category: &str, value: &str) -> Result<(), CoreError> {
        self.answers.record_raw(category, value)?;
        debug!(category, value, "personality answer recorded");
        Ok(())
    }

    /// Score the catalog and remember the winner.
    pub fn match_personality<'a>(
        &mut self,
        catalog: &'a Catalog,
    ) -> Result<&'a BreedRecord, CoreError> {
        let index =
            compute_match_index(&self.answers, &catalog.breeds).ok_or(CoreError::EmptyCatalog)?;
        self.result = Some(index);

        let breed = &catalog.breeds[index];
        info!(
            breed = %breed.name,
            answered = self.answers.len(),
            "personality match computed"
        );
        Ok(breed)
    }

    /// The last computed match, if any.
    pub fn result<'a>(&self, catalog: &'a Catalog) -> Option<&'a BreedRecord> {
        self.result.and_then(|i| catalog.breeds.get(i))
    }

    /// Check if a match has been computed.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Clear answers and result, back to collecting answers.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
        debug!("personality matcher reset");
    }
}
