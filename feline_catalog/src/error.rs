//! Errors raised while validating answers, catalogs and configuration.

use thiserror::Error;

/// Errors produced by the catalog crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown personality category `{0}`")]
    UnknownCategory(String),

    #[error("`{value}` is not a valid answer for `{category}`")]
    InvalidValue { category: String, value: String },

    #[error("catalog has no breeds")]
    NoBreeds,

    #[error("duplicate breed name `{0}`")]
    DuplicateBreed(String),

    #[error("catalog has no facts")]
    NoFacts,

    #[error("catalog has no quiz questions")]
    NoQuestions,

    #[error("question {index} has {count} options, expected {expected}")]
    WrongOptionCount {
        index: usize,
        count: usize,
        expected: usize,
    },

    #[error("question {index}: correct option `{correct}` is not one of its options")]
    CorrectOptionMissing { index: usize, correct: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse TOML: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
