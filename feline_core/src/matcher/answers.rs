//! Answers collected by the personality questionnaire.

use feline_catalog::{AnswerValue, CatalogError, Category};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::CoreError;

/// Category -> chosen value. May be partial at any point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawAnswers")]
pub struct PersonalityAnswers {
    answers: BTreeMap<Category, AnswerValue>,
}

/// Unchecked wire form of [`PersonalityAnswers`].
#[derive(Deserialize)]
struct RawAnswers {
    answers: BTreeMap<Category, AnswerValue>,
}

impl TryFrom<RawAnswers> for PersonalityAnswers {
    type Error = CoreError;

    fn try_from(raw: RawAnswers) -> Result<Self, Self::Error> {
        Self::from_pairs(raw.answers)
    }
}

impl PersonalityAnswers {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from typed pairs, failing on the first pair its category does not accept.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (Category, AnswerValue)>,
    {
        let mut answers = Self::new();
        for (category, value) in pairs {
            answers.record(category, value)?;
        }
        Ok(answers)
    }

    /// Upsert a typed answer.
    pub fn record(&mut self, category: Category, value: AnswerValue) -> Result<(), CoreError> {
        if !category.accepts(value) {
            return Err(CoreError::InvalidInput(CatalogError::InvalidValue {
                category: category.as_str().to_string(),
                value: value.as_str().to_string(),
            }));
        }
        self.answers.insert(category, value);
        Ok(())
    }

    /// Upsert a raw `(category, value)` pair as forwarded by the view layer.
    pub fn record_raw(&mut self, category: &str, value: &str) -> Result<(), CoreError> {
        let (category, value) = Category::parse_answer(category, value)?;
        self.answers.insert(category, value);
        Ok(())
    }

    /// The answer recorded for a category, if any.
    pub fn get(&self, category: Category) -> Option<AnswerValue> {
        self.answers.get(&category).copied()
    }

    /// True if the category was answered with exactly this value.
    pub fn is(&self, category: Category, value: AnswerValue) -> bool {
        self.get(category) == Some(value)
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of answered categories.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Forget every answer.
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Answers in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, AnswerValue)> + '_ {
        self.answers.iter().map(|(c, v)| (*c, *v))
    }
}
