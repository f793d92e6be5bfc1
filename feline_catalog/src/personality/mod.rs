//! Vocabulary of the personality questionnaire: categories and their answers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CatalogError;

/// Questionnaire categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Activity,
    Affection,
    Vocal,
}

/// A chosen answer. Which values are legal depends on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerValue {
    Low,
    High,
    No,
    Yes,
}

impl Category {
    /// All categories, in questionnaire order.
    pub const ALL: [Category; 3] = [Category::Activity, Category::Affection, Category::Vocal];

    /// Lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Activity => "activity",
            Category::Affection => "affection",
            Category::Vocal => "vocal",
        }
    }

    /// The two answers this category accepts.
    pub fn options(&self) -> [AnswerValue; 2] {
        match self {
            Category::Activity | Category::Affection => [AnswerValue::Low, AnswerValue::High],
            Category::Vocal => [AnswerValue::No, AnswerValue::Yes],
        }
    }

    /// Check if this category accepts the value.
    pub fn accepts(&self, value: AnswerValue) -> bool {
        self.options().contains(&value)
    }

    /// Question text shown for this category.
    pub fn prompt(&self) -> &'static str {
        match self {
            Category::Activity => "How active are you?",
            Category::Affection => "How much affection do you want from your cat?",
            Category::Vocal => "Do you enjoy a chatty cat?",
        }
    }

    /// Validate a raw `(category, value)` pair as forwarded by the view layer.
    pub fn parse_answer(category: &str, value: &str) -> Result<(Category, AnswerValue), CatalogError> {
        let parsed: Category = category.parse()?;
        let invalid = || CatalogError::InvalidValue {
            category: parsed.as_str().to_string(),
            value: value.to_string(),
        };
        let answer: AnswerValue = value.parse().map_err(|_| invalid())?;
        if !parsed.accepts(answer) {
            return Err(invalid());
        }
        Ok((parsed, answer))
    }
}

impl AnswerValue {
    /// Lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerValue::Low => "low",
            AnswerValue::High => "high",
            AnswerValue::No => "no",
            AnswerValue::Yes => "yes",
        }
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

impl FromStr for AnswerValue {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(AnswerValue::Low),
            "high" => Ok(AnswerValue::High),
            "no" => Ok(AnswerValue::No),
            "yes" => Ok(AnswerValue::Yes),
            _ => Err(CatalogError::InvalidValue {
                category: String::new(),
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_answers() {
        assert_eq!(
            Category::parse_answer("activity", "high").unwrap(),
            (Category::Activity, AnswerValue::High)
        );
        assert_eq!(
            Category::parse_answer("affection", "low").unwrap(),
            (Category::Affection, AnswerValue::Low)
        );
        assert_eq!(
            Category::parse_answer("vocal", "yes").unwrap(),
            (Category::Vocal, AnswerValue::Yes)
        );
    }

    #[test]
    fn test_unknown_category() {
        let err = Category::parse_answer("grooming", "high").unwrap_err();
        assert_eq!(err, CatalogError::UnknownCategory("grooming".into()));
    }

    #[test]
    fn test_value_from_wrong_category() {
        let err = Category::parse_answer("vocal", "high").unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidValue {
                category: "vocal".into(),
                value: "high".into()
            }
        );

        assert!(Category::parse_answer("activity", "yes").is_err());
        assert!(Category::parse_answer("activity", "HIGH").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&(Category::Affection, AnswerValue::High)).unwrap();
        assert_eq!(json, r#"["affection","high"]"#);
    }
}
