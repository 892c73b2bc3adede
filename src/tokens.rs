//! Token substitution for the channel description.
//!
//! `{{ field_id }}` markers are replaced with field values drawn from the
//! first result row. Unknown or unresolvable tokens substitute to the empty
//! string, matching how per-item field misses degrade.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").unwrap());

/// Replace every `{{ field_id }}` marker using `resolve`.
pub fn substitute(template: &str, mut resolve: impl FnMut(&str) -> String) -> String {
    RE_TOKEN
        .replace_all(template, |caps: &Captures| resolve(&caps[1]))
        .into_owned()
}

/// Substitute against an empty context: every token becomes the empty string.
/// Used when the result set has no rows to draw values from.
pub fn substitute_empty(template: &str) -> String {
    substitute(template, |_| String::new())
}
