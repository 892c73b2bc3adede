//! Feed configuration schema and validation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── channel    # [channel] - title, description, feed path
//! ├── row        # [row] - the five field mappings
//! ├── error      # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs     # FeedConfig (this file)
//! ```
//!
//! Configuration is supplied by the hosting application (typically as TOML)
//! and validated up front: `validate()` collects every problem into
//! [`ConfigDiagnostics`] so a render is never attempted against a config
//! with unset field mappings.

mod channel;
mod error;
mod row;

pub use channel::{ChannelOptions, MAX_DESCRIPTION_LEN};
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use row::RowFieldsConfig;

use serde::{Deserialize, Serialize};

/// Root configuration for one feed display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Channel settings (title, description, feed path)
    pub channel: ChannelOptions,
    /// Row field mappings
    pub row: RowFieldsConfig,
}

impl FeedConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validate the whole config, collecting every diagnostic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.channel.validate(&mut diag);
        self.row.validate(&mut diag);
        diag.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_fails_validation() {
        let config = FeedConfig::default();
        let err = config.validate().unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.len(), 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_full_config_passes_validation() {
        let config = FeedConfig::from_toml(
            r#"
            [channel]
            title = "Front page"
            description = "All the news"

            [row]
            title_field = "title"
            link_field = "path"
            content_field = "body"
            author_field = "name"
            date_field = "created"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = FeedConfig::from_toml("[row\ntitle_field = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
