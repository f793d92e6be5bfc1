//! Breed records and the personality tags the matcher scores against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tag carried by high-energy breeds.
pub const TAG_ENERGETIC: &str = "energetic";
/// Tag carried by low-key breeds.
pub const TAG_CALM: &str = "calm";
/// Tag carried by breeds that seek out people.
pub const TAG_AFFECTIONATE: &str = "affectionate";
/// Tag carried by vocal breeds.
pub const TAG_TALKATIVE: &str = "talkative";

/// A cat breed in the catalog. Names are unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub personality_tags: BTreeSet<String>,
    /// Opaque image reference, resolved by whoever renders the breed.
    #[serde(default)]
    pub image_ref: String,
}

impl BreedRecord {
    /// Create a breed with no tags and no image.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            personality_tags: BTreeSet::new(),
            image_ref: String::new(),
        }
    }

    /// Add a personality tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.personality_tags.insert(tag.into());
        self
    }

    /// Add multiple personality tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personality_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Check if the breed carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.personality_tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_builder() {
        let breed = BreedRecord::new("Siamese", "Vocal and social")
            .with_tag(TAG_TALKATIVE)
            .with_tags([TAG_AFFECTIONATE, TAG_TALKATIVE])
            .with_image("siamese.jpg");

        assert_eq!(breed.name, "Siamese");
        assert_eq!(breed.personality_tags.len(), 2);
        assert!(breed.has_tag(TAG_TALKATIVE));
        assert!(!breed.has_tag(TAG_CALM));
        assert_eq!(breed.image_ref, "siamese.jpg");
    }
}
