//! Channel-level feed assembly.
//!
//! [`FeedAssembler`] drives one render pass: it walks the result set in
//! result order, maps each row to an item through a pass-scoped
//! [`ItemMapper`], substitutes tokens in the channel description against the
//! first row, and packages everything into a [`FeedDocument`] together with
//! the fixed vendor namespaces and the alternate-link advertisement for the
//! embedding page.

use crate::{
    config::{ChannelOptions, RowFieldsConfig},
    field::{FieldResolver, resolve_text},
    debug,
    item::{FeedItem, ItemMapper},
    log, tokens,
    urls::BaseUrl,
};
use anyhow::Result;
use std::collections::BTreeMap;
use url::Url;

/// Namespace declarations carried by every produced document.
///
/// Declared unconditionally: consumers validate against these schemas
/// whether or not any item content uses them.
pub const NAMESPACES: [(&str, &str); 3] = [
    ("yandex", "http://news.yandex.ru"),
    ("media", "http://search.yahoo.com/mrss/"),
    ("turbo", "http://turbo.yandex.ru"),
];

/// The fixed namespace set as a prefix → URI map.
pub fn namespaces() -> BTreeMap<String, String> {
    NAMESPACES
        .iter()
        .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
        .collect()
}

/// The page-embedding side channel: where the machine-readable feed for the
/// current page lives. Drives both the `rel="alternate"` head link and the
/// feed icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    pub url: Url,
    pub title: String,
}

/// One assembled feed document. Built once per render pass and handed to
/// the serializing layer; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    /// Rendered items, in result-set order.
    pub items: Vec<FeedItem>,
    /// Channel description after token substitution.
    pub description: String,
    /// Namespace prefix → URI declarations.
    pub namespaces: BTreeMap<String, String>,
    /// Feed self-advertisement for the embedding page.
    pub alternate: AlternateLink,
}

/// Assembles a [`FeedDocument`] from a result set.
pub struct FeedAssembler<'a> {
    channel: &'a ChannelOptions,
    base: &'a BaseUrl,
    row_fields: Option<&'a RowFieldsConfig>,
    page_query: &'a [(String, String)],
}

impl<'a> FeedAssembler<'a> {
    pub fn new(channel: &'a ChannelOptions, base: &'a BaseUrl) -> Self {
        Self {
            channel,
            base,
            row_fields: None,
            page_query: &[],
        }
    }

    /// Attach the row mapping. Without it, `render` produces an empty
    /// document and logs a warning.
    pub fn with_row_fields(mut self, fields: &'a RowFieldsConfig) -> Self {
        self.row_fields = Some(fields);
        self
    }

    /// Carry the embedding page's active query parameters into the
    /// alternate link, so a filtered listing advertises the filtered feed.
    pub fn with_page_query(mut self, query: &'a [(String, String)]) -> Self {
        self.page_query = query;
        self
    }

    /// Render one pass over `row_count` rows.
    ///
    /// Output order is input order, strictly: no sorting, no deduplication.
    /// A missing row mapping is non-fatal and yields a document with no
    /// items; the namespace declarations and alternate link are present on
    /// every document regardless.
    pub fn render(&self, row_count: usize, resolver: &dyn FieldResolver) -> Result<FeedDocument> {
        let alternate = AlternateLink {
            url: self
                .base
                .feed_url(&self.channel.feed_path, self.page_query)?,
            title: self.channel.title.clone(),
        };
        let description = self.describe(row_count, resolver);

        let Some(fields) = self.row_fields else {
            log!("feed"; "missing row mapping, rendering an empty feed");
            return Ok(FeedDocument {
                items: Vec::new(),
                description,
                namespaces: namespaces(),
                alternate,
            });
        };

        let mut mapper = ItemMapper::new(fields, self.base);
        let mut items = Vec::with_capacity(row_count);
        for _ in 0..row_count {
            items.push(mapper.map_row(resolver)?);
            debug!("feed"; "mapped row {} of {row_count}", mapper.rows_mapped());
        }

        Ok(FeedDocument {
            items,
            description,
            namespaces: namespaces(),
            alternate,
        })
    }

    /// Token-substitute the channel description against the first row only.
    /// With no rows the context is empty and every token resolves to "".
    fn describe(&self, row_count: usize, resolver: &dyn FieldResolver) -> String {
        let template = self.channel.description.as_deref().unwrap_or_default();
        if row_count == 0 {
            tokens::substitute_empty(template)
        } else {
            tokens::substitute(template, |field_id| resolve_text(resolver, 0, field_id))
        }
    }
}
