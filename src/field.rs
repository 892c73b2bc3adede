//! Field resolution: the capability seam between the feed renderer and the
//! hosting view layer.
//!
//! The renderer never inspects row data directly. It asks the host's
//! [`FieldResolver`] for "field X of row I" and gets back a [`FieldValue`]:
//! plain text, a pre-rendered markup fragment, or nothing. Misses degrade to
//! [`FieldValue::Empty`] uniformly; a missing field never fails a row.

/// A resolved field value.
///
/// Upstream field formatters sometimes produce plain text and sometimes a
/// fully rendered markup fragment. The variant keeps that distinction
/// explicit so markup passes through to the feed unescaped while text can
/// still be coerced when a slot requires markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Field absent, unresolvable, or resolver unavailable.
    Empty,
    /// Plain text value.
    Text(String),
    /// Pre-rendered markup fragment, passed through unmodified.
    Markup(String),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The value as plain text; `Empty` yields `""`.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Text(s) | Self::Markup(s) => s,
        }
    }

    /// Coerce into a markup fragment. Markup passes through unmodified;
    /// text becomes a plain fragment; `Empty` becomes the empty fragment.
    /// Every item slot that needs markup therefore always gets a value.
    pub fn into_markup(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) | Self::Markup(s) => s,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Window into the host's formatted row data.
///
/// Implementations must treat `row_index` as positional: row 0 is the first
/// row of the current result set, in result order.
pub trait FieldResolver {
    fn resolve_field(&self, row_index: usize, field_id: &str) -> FieldValue;
}

/// Resolve a field, guarding against an unset mapping.
///
/// An empty `field_id` short-circuits to `Empty` without consulting the
/// resolver, mirroring how an absent resolver behaves.
pub fn resolve(resolver: &dyn FieldResolver, row_index: usize, field_id: &str) -> FieldValue {
    if field_id.is_empty() {
        return FieldValue::Empty;
    }
    resolver.resolve_field(row_index, field_id)
}

/// Resolve a field as plain text; misses become the empty string.
pub fn resolve_text(resolver: &dyn FieldResolver, row_index: usize, field_id: &str) -> String {
    resolve(resolver, row_index, field_id).as_text().to_string()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{FieldResolver, FieldValue};
    use std::collections::HashMap;

    /// In-memory resolver backed by a list of rows, for tests.
    #[derive(Debug, Default)]
    pub struct TableResolver {
        rows: Vec<HashMap<String, FieldValue>>,
    }

    impl TableResolver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push_row(&mut self, fields: &[(&str, FieldValue)]) {
            self.rows.push(
                fields
                    .iter()
                    .map(|(id, value)| (id.to_string(), value.clone()))
                    .collect(),
            );
        }

        pub fn len(&self) -> usize {
            self.rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.rows.is_empty()
        }
    }

    impl FieldResolver for TableResolver {
        fn resolve_field(&self, row_index: usize, field_id: &str) -> FieldValue {
            self.rows
                .get(row_index)
                .and_then(|row| row.get(field_id))
                .cloned()
                .unwrap_or(FieldValue::Empty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::TableResolver;
    use super::*;

    #[test]
    fn test_empty_field_id_never_hits_resolver() {
        let resolver = TableResolver::new();
        assert!(resolver.is_empty());
        assert_eq!(resolve(&resolver, 0, ""), FieldValue::Empty);
    }

    #[test]
    fn test_miss_resolves_to_empty() {
        let mut resolver = TableResolver::new();
        resolver.push_row(&[("title", FieldValue::from("hello"))]);
        assert_eq!(resolve(&resolver, 0, "missing"), FieldValue::Empty);
        assert_eq!(resolve(&resolver, 7, "title"), FieldValue::Empty);
    }

    #[test]
    fn test_resolve_text_degrades_to_empty_string() {
        let resolver = TableResolver::new();
        assert_eq!(resolve_text(&resolver, 0, "anything"), "");
    }

    #[test]
    fn test_into_markup_passes_fragments_through() {
        let markup = FieldValue::Markup("<b>hi</b>".into());
        assert_eq!(markup.into_markup(), "<b>hi</b>");
    }

    #[test]
    fn test_into_markup_coerces_text_and_empty() {
        assert_eq!(FieldValue::from("plain").into_markup(), "plain");
        assert_eq!(FieldValue::Empty.into_markup(), "");
    }
}
