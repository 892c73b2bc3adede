//! Row-to-item mapping.
//!
//! [`ItemMapper`] turns one result row into one [`FeedItem`] by resolving
//! the five configured field mappings against the host's field resolver.
//! The mapper owns the row cursor for a single render pass: it starts at 0
//! on construction and advances once per mapped row, so positional field
//! lookups stay aligned with the result set. Construct a fresh mapper per
//! pass; a reused cursor would misalign every subsequent render.

use crate::{
    config::RowFieldsConfig,
    field::{FieldResolver, resolve, resolve_text},
    urls::BaseUrl,
};
use anyhow::Result;
use url::Url;

/// One rendered feed item, consumed immediately by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Item title; empty when the title field resolves to nothing.
    pub title: String,
    /// Absolute link to the item.
    pub link: Url,
    /// Markup fragment for the item body. Never absent: plain text and
    /// misses are coerced to a (possibly empty) fragment.
    pub content: String,
    /// Item creator; empty when unresolvable.
    pub author: String,
    /// Publication date, RFC 2822, passed through verbatim from the field.
    pub pub_date: String,
}

/// Pass-scoped mapper from rows to feed items.
pub struct ItemMapper<'a> {
    fields: &'a RowFieldsConfig,
    base: &'a BaseUrl,
    row_index: usize,
}

impl<'a> ItemMapper<'a> {
    /// Create a mapper with its row cursor at 0.
    pub fn new(fields: &'a RowFieldsConfig, base: &'a BaseUrl) -> Self {
        Self {
            fields,
            base,
            row_index: 0,
        }
    }

    /// Rows mapped so far in this pass.
    pub fn rows_mapped(&self) -> usize {
        self.row_index
    }

    /// Map the row at the current cursor position, then advance the cursor.
    ///
    /// Non-link slots degrade independently: an unresolvable field yields an
    /// empty value for that slot only. The link field is normalized to a
    /// root-relative path and resolved against the base URL; feed consumers
    /// require fully qualified links.
    pub fn map_row(&mut self, resolver: &dyn FieldResolver) -> Result<FeedItem> {
        let index = self.row_index;

        let title = resolve_text(resolver, index, &self.fields.title_field);
        let link_path = resolve_text(resolver, index, &self.fields.link_field);
        let link = self.base.join_root_relative(&link_path)?;
        let content = resolve(resolver, index, &self.fields.content_field).into_markup();
        let author = resolve_text(resolver, index, &self.fields.author_field);
        let pub_date = resolve_text(resolver, index, &self.fields.date_field);

        self.row_index += 1;

        Ok(FeedItem {
            title,
            link,
            content,
            author,
            pub_date,
        })
    }
}
