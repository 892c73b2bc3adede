//! Channel-level feed configuration.

use super::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Maximum length of the channel description.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelOptions {
    /// Channel title, also used for the alternate-link advertisement.
    pub title: String,
    /// Channel description, shown in the feed itself. Supports
    /// `{{ field_id }}` tokens substituted from the first result row.
    pub description: Option<String>,
    /// Site-relative path the feed is served from.
    pub feed_path: String,
}

impl ChannelOptions {
    pub const DESCRIPTION: FieldPath = FieldPath::new("channel.description");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(description) = &self.description
            && description.chars().count() > MAX_DESCRIPTION_LEN
        {
            diag.error(
                Self::DESCRIPTION,
                format!("description exceeds {MAX_DESCRIPTION_LEN} characters"),
            );
        }
    }
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            feed_path: "rss.xml".into(),
        }
    }
}
