//! The catalog - every piece of fixed data the page renders or scores against.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::breeds::BreedRecord;
use crate::quiz::{QuizQuestion, OPTIONS_PER_QUESTION};
use crate::CatalogError;

/// A "did you know" fact.
pub type FactRecord = String;

/// Immutable reference data, loaded once per page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    /// General feline characteristics, listed on their own tab.
    #[serde(default)]
    pub characteristics: Vec<String>,
    /// Ordered; the matcher breaks ties by this order.
    pub breeds: Vec<BreedRecord>,
    pub facts: Vec<FactRecord>,
    pub questions: Vec<QuizQuestion>,
}

/// One entry of the breed gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub image_ref: &'a str,
}

impl Catalog {
    /// The built-in example data: five breeds, five facts, three questions.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Parse a catalog from TOML and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(input)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the structural invariants the interactive core relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.breeds.is_empty() {
            return Err(CatalogError::NoBreeds);
        }

        let mut seen = HashSet::new();
        for breed in &self.breeds {
            if !seen.insert(breed.name.as_str()) {
                return Err(CatalogError::DuplicateBreed(breed.name.clone()));
            }
        }

        if self.facts.is_empty() {
            return Err(CatalogError::NoFacts);
        }

        if self.questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(CatalogError::WrongOptionCount {
                    index,
                    count: question.options.len(),
                    expected: OPTIONS_PER_QUESTION,
                });
            }
            if !question.options.contains(&question.correct_option) {
                return Err(CatalogError::CorrectOptionMissing {
                    index,
                    correct: question.correct_option.clone(),
                });
            }
        }

        Ok(())
    }

    /// Look up a breed by name.
    pub fn breed(&self, name: &str) -> Option<&BreedRecord> {
        self.breeds.iter().find(|b| b.name == name)
    }

    /// Breeds in catalog order, as shown in the gallery.
    pub fn gallery(&self) -> impl Iterator<Item = GalleryEntry<'_>> {
        self.breeds.iter().map(|b| GalleryEntry {
            name: &b.name,
            description: &b.description,
            image_ref: &b.image_ref,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeds::{TAG_AFFECTIONATE, TAG_ENERGETIC, TAG_TALKATIVE};

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.breeds.len(), 5);
        assert_eq!(catalog.facts.len(), 5);
        assert_eq!(catalog.questions.len(), 3);
        assert_eq!(catalog.breeds[0].name, "Siamese");
    }

    #[test]
    fn test_builtin_tags() {
        let catalog = Catalog::builtin();
        let siamese = catalog.breed("Siamese").unwrap();
        assert!(siamese.has_tag(TAG_TALKATIVE));
        assert!(siamese.has_tag(TAG_AFFECTIONATE));
        assert!(!siamese.has_tag(TAG_ENERGETIC));

        let sphynx = catalog.breed("Sphynx").unwrap();
        assert!(sphynx.has_tag(TAG_ENERGETIC));
        assert!(!sphynx.has_tag(TAG_AFFECTIONATE));
        assert!(!sphynx.has_tag(TAG_TALKATIVE));
    }

    #[test]
    fn test_gallery_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.gallery().map(|e| e.name).collect();
        assert_eq!(
            names,
            ["Siamese", "Persian", "Maine Coon", "British Shorthair", "Sphynx"]
        );
    }

    #[test]
    fn test_duplicate_breed_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.breeds.push(BreedRecord::new("Persian", "again"));
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateBreed("Persian".into()))
        );
    }

    #[test]
    fn test_bad_questions_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.questions[1].options.pop();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::WrongOptionCount { index: 1, count: 2, .. })
        ));

        let mut catalog = Catalog::builtin();
        catalog.questions[0].correct_option = "Forty".into();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::CorrectOptionMissing { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_sections_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.facts.clear();
        assert_eq!(catalog.validate(), Err(CatalogError::NoFacts));

        let mut catalog = Catalog::builtin();
        catalog.breeds.clear();
        assert_eq!(catalog.validate(), Err(CatalogError::NoBreeds));
    }

    #[test]
    fn test_from_toml() {
        let input = r#"
            facts = ["Cats purr at 25 to 150 Hz."]

            [[breeds]]
            name = "Ragdoll"
            description = "Goes limp when held."
            personality_tags = ["calm", "affectionate"]

            [[questions]]
            prompt = "Which breed goes limp when held?"
            options = ["Ragdoll", "Bengal", "Manx"]
            correct_option = "Ragdoll"
        "#;

        let catalog = Catalog::from_toml_str(input).unwrap();
        assert_eq!(catalog.breeds.len(), 1);
        assert!(catalog.breeds[0].has_tag("calm"));
        assert!(catalog.breeds[0].image_ref.is_empty());
        assert!(catalog.title.is_empty());
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            Catalog::from_toml_str("facts = ["),
            Err(CatalogError::Parse(_))
        ));
        assert_eq!(
            Catalog::from_toml_str("breeds = []\nfacts = []\nquestions = []"),
            Err(CatalogError::NoBreeds)
        );
    }
}
