//! Error type for the interactive core.

use feline_catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced to the view layer. None of them are fatal, and the state that
/// produced one is left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A personality answer with an unknown category or value.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CatalogError),

    /// The catalog or configuration handed to a new site failed validation.
    #[error("catalog rejected: {0}")]
    Catalog(CatalogError),

    #[error("cannot match against an empty breed list")]
    EmptyCatalog,

    #[error("ticker period must be greater than zero")]
    ZeroPeriod,

    #[error("site runtime has shut down")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_converts_to_invalid_input() {
        let err: CoreError = CatalogError::UnknownCategory("mood".into()).into();
        assert_eq!(
            err,
            CoreError::InvalidInput(CatalogError::UnknownCategory("mood".into()))
        );
        assert_eq!(err.to_string(), "invalid input: unknown personality category `mood`");
    }
}
