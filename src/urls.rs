//! URL utilities.
//!
//! Feed consumers require fully qualified links, so every link field value
//! is rooted at the hosting application's base URL:
//! - [`ensure_leading_slash`] - normalize a field value to a root-relative path
//! - [`BaseUrl`] - validated scheme+host base, absolute resolution, feed self-URL

use crate::config::ConfigError;
use anyhow::{Context, Result};
use std::borrow::Cow;
use url::Url;

/// Prefix a path with `/` unless it already starts with one.
///
/// # Examples
/// ```
/// use turbo_feed::urls::ensure_leading_slash;
/// assert_eq!(ensure_leading_slash("news/42"), "/news/42");
/// assert_eq!(ensure_leading_slash("/news/42"), "/news/42");
/// assert_eq!(ensure_leading_slash(""), "/");
/// ```
#[inline]
pub fn ensure_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// The hosting application's base URL (scheme + host, optionally a port).
///
/// Validated once at construction so per-row link resolution cannot hit a
/// malformed base mid-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parse and validate a base URL. The URL must carry a host.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let url =
            Url::parse(input).map_err(|e| ConfigError::BaseUrl(input.to_string(), e))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ConfigError::BaseUrl(
                input.to_string(),
                url::ParseError::EmptyHost,
            ));
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Resolve a site-relative path to an absolute URL.
    ///
    /// The path is rooted first, so `news/42` and `/news/42` resolve
    /// identically regardless of any path on the base URL itself.
    pub fn join_root_relative(&self, path: &str) -> Result<Url> {
        let path = ensure_leading_slash(path);
        self.0
            .join(&path)
            .with_context(|| format!("cannot resolve `{path}` against `{}`", self.0))
    }

    /// Build the feed's own absolute URL, carrying forward the active query
    /// parameters of the embedding page so a filtered listing advertises the
    /// matching filtered feed.
    pub fn feed_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = self.join_root_relative(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}
