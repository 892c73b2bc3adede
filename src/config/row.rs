//! Row-level field mapping configuration.
//!
//! Names the view field feeding each of the five item slots. All five are
//! required: an unset mapping is a configuration error reported before any
//! render is attempted, never a runtime fallback.

use super::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RowFieldsConfig {
    /// Field used as the RSS item title for each row.
    pub title_field: String,
    /// Field used as the RSS item link for each row. Must be a
    /// site-relative path; it is resolved against the base URL.
    pub link_field: String,
    /// Field used as the RSS item content for each row.
    pub content_field: String,
    /// Field used as the RSS item creator for each row.
    pub author_field: String,
    /// Field used as the RSS item pubDate for each row. The value must
    /// already be in RFC 2822 format; it is passed through verbatim.
    pub date_field: String,
}

impl RowFieldsConfig {
    pub const TITLE_FIELD: FieldPath = FieldPath::new("row.title_field");
    pub const LINK_FIELD: FieldPath = FieldPath::new("row.link_field");
    pub const CONTENT_FIELD: FieldPath = FieldPath::new("row.content_field");
    pub const AUTHOR_FIELD: FieldPath = FieldPath::new("row.author_field");
    pub const DATE_FIELD: FieldPath = FieldPath::new("row.date_field");

    /// The five required mappings with their field paths.
    fn required(&self) -> [(FieldPath, &str); 5] {
        [
            (Self::TITLE_FIELD, &self.title_field),
            (Self::LINK_FIELD, &self.link_field),
            (Self::CONTENT_FIELD, &self.content_field),
            (Self::AUTHOR_FIELD, &self.author_field),
            (Self::DATE_FIELD, &self.date_field),
        ]
    }

    /// Report one diagnostic per unset mapping.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in self.required() {
            if value.is_empty() {
                diag.error_with_hint(
                    field,
                    "a view field must be mapped to this RSS item slot",
                    "set it to the id of a field exposed by the view",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedConfig;

    #[test]
    fn test_defaults_are_empty() {
        let config = RowFieldsConfig::default();
        assert!(config.title_field.is_empty());
        assert!(config.date_field.is_empty());
    }

    #[test]
    fn test_parse_from_toml() {
        let config = FeedConfig::from_toml(
            r#"
            [row]
            title_field = "title"
            link_field = "path"
            content_field = "body"
            author_field = "uid"
            date_field = "created"
            "#,
        )
        .unwrap();
        assert_eq!(config.row.title_field, "title");
        assert_eq!(config.row.date_field, "created");
    }

    #[test]
    fn test_validate_reports_each_unset_field() {
        let config = RowFieldsConfig::default();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 5);
    }

    #[test]
    fn test_validate_missing_date_field_only() {
        let config = RowFieldsConfig {
            title_field: "title".into(),
            link_field: "path".into(),
            content_field: "body".into(),
            author_field: "uid".into(),
            date_field: String::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, RowFieldsConfig::DATE_FIELD);
    }

    #[test]
    fn test_validate_complete_config() {
        let config = RowFieldsConfig {
            title_field: "title".into(),
            link_field: "path".into(),
            content_field: "body".into(),
            author_field: "uid".into(),
            date_field: "created".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
