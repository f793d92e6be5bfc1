//! The built-in example data set.

use super::Catalog;
use crate::breeds::{BreedRecord, TAG_AFFECTIONATE, TAG_CALM, TAG_ENERGETIC, TAG_TALKATIVE};
use crate::quiz::QuizQuestion;

pub(super) fn catalog() -> Catalog {
    Catalog {
        title: "Feline Fascination".into(),
        tagline: "Cats: Nature's perfect blend of grace, mystery, and adorable mischief.".into(),
        characteristics: vec![
            "Excellent hunters with sharp claws and teeth".into(),
            "Flexible bodies and quick reflexes".into(),
            "Keen senses, especially hearing and night vision".into(),
            "Communicate through vocalizations, body language, and scent".into(),
        ],
        breeds: breeds(),
        facts: vec![
            "Cats have been domesticated for over 9,000 years and were once worshipped as gods in ancient Egypt!".into(),
            "A group of cats is called a clowder.".into(),
            "Cats spend around 70% of their lives asleep.".into(),
            "A cat's nose print is as unique as a human fingerprint.".into(),
            "Cats can rotate their ears 180 degrees.".into(),
        ],
        questions: vec![
            QuizQuestion::new(
                "How many hours a day does the average cat sleep?",
                ["8-10", "12-16", "18-20"],
                "12-16",
            ),
            QuizQuestion::new(
                "What is a group of cats called?",
                ["A pack", "A clowder", "A pride"],
                "A clowder",
            ),
            QuizQuestion::new(
                "How many toes does a typical cat have?",
                ["16", "18", "20"],
                "18",
            ),
        ],
    }
}

fn breeds() -> Vec<BreedRecord> {
    vec![
        BreedRecord::new(
            "Siamese",
            "Vocal and social cats known for their distinctive coloring.",
        )
        .with_tags([TAG_TALKATIVE, TAG_AFFECTIONATE, "social"])
        .with_image("breeds/siamese.jpg"),
        BreedRecord::new("Persian", "Long-haired cats with a sweet, gentle nature.")
            .with_tags([TAG_CALM, "gentle"])
            .with_image("breeds/persian.jpg"),
        BreedRecord::new(
            "Maine Coon",
            "Large, friendly cats often referred to as 'gentle giants'.",
        )
        .with_tags([TAG_AFFECTIONATE, "gentle", "friendly"])
        .with_image("breeds/maine-coon.jpg"),
        BreedRecord::new(
            "British Shorthair",
            "Round-faced cats with a calm and easygoing temperament.",
        )
        .with_tags([TAG_CALM, "easygoing"])
        .with_image("breeds/british-shorthair.jpg"),
        BreedRecord::new(
            "Sphynx",
            "Hairless cats known for their extroverted and energetic personality.",
        )
        .with_tags([TAG_ENERGETIC, "extroverted"])
        .with_image("breeds/sphynx.jpg"),
    ]
}
