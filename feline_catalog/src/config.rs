//! Site configuration, loaded from TOML with every field defaulted.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::CatalogError;

/// Tunables for the interactive page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Milliseconds between automatic fact rotations.
    pub fact_interval_ms: u64,
    pub like_notification: NotificationText,
}

/// Title and body of a transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationText {
    pub title: String,
    pub message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fact_interval_ms: 5_000,
            like_notification: NotificationText::default(),
        }
    }
}

impl Default for NotificationText {
    fn default() -> Self {
        Self {
            title: "Thanks for the love!".into(),
            message: "You're pawsome! 🐾".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let config: SiteConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the runtime cannot run with.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.fact_interval_ms == 0 {
            return Err(CatalogError::InvalidConfig(
                "fact_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Interval between automatic fact rotations.
    pub fn fact_interval(&self) -> Duration {
        Duration::from_millis(self.fact_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.fact_interval(), Duration::from_secs(5));
        assert_eq!(config.like_notification.title, "Thanks for the love!");
    }

    #[test]
    fn test_partial_toml() {
        let config = SiteConfig::from_toml_str(
            r#"
            [like_notification]
            title = "Purr"
            "#,
        )
        .unwrap();

        assert_eq!(config.fact_interval_ms, 5_000);
        assert_eq!(config.like_notification.title, "Purr");
        assert_eq!(config.like_notification.message, "You're pawsome! 🐾");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(matches!(
            SiteConfig::from_toml_str("fact_interval_ms = 0"),
            Err(CatalogError::InvalidConfig(_))
        ));
    }
}
