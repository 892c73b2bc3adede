//! Render tabular result rows as a Yandex Turbo RSS feed.
//!
//! The hosting view layer owns query execution, field formatting, and
//! pagination; this crate owns the two-stage rendering pipeline that turns
//! its result set into a feed document:
//!
//! ```text
//! src/
//! ├── config/     # [channel] + [row] schema, validation, diagnostics
//! ├── field       # FieldValue + FieldResolver capability seam
//! ├── item        # ItemMapper: one row -> one FeedItem
//! ├── assemble    # FeedAssembler: result set -> FeedDocument
//! ├── tokens      # {{ field_id }} substitution for the description
//! ├── urls        # BaseUrl, absolute link resolution
//! ├── xml         # FeedDocument -> RSS 2.0 text
//! └── logger      # log! / debug! macros
//! ```
//!
//! # Example
//!
//! ```
//! use turbo_feed::{BaseUrl, FeedAssembler, FeedConfig, FieldResolver, FieldValue};
//!
//! struct OneRow;
//!
//! impl FieldResolver for OneRow {
//!     fn resolve_field(&self, row_index: usize, field_id: &str) -> FieldValue {
//!         match (row_index, field_id) {
//!             (0, "title") => FieldValue::Text("Breaking".into()),
//!             (0, "path") => FieldValue::Text("news/42".into()),
//!             (0, "body") => FieldValue::Markup("<p>story</p>".into()),
//!             _ => FieldValue::Empty,
//!         }
//!     }
//! }
//!
//! let config = FeedConfig::from_toml(r#"
//!     [channel]
//!     title = "Front page"
//!
//!     [row]
//!     title_field = "title"
//!     link_field = "path"
//!     content_field = "body"
//!     author_field = "name"
//!     date_field = "created"
//! "#).unwrap();
//! config.validate().unwrap();
//!
//! let base = BaseUrl::parse("https://example.com").unwrap();
//! let doc = FeedAssembler::new(&config.channel, &base)
//!     .with_row_fields(&config.row)
//!     .render(1, &OneRow)
//!     .unwrap();
//!
//! assert_eq!(doc.items[0].link.as_str(), "https://example.com/news/42");
//! let xml = turbo_feed::to_xml(&doc).unwrap();
//! assert!(xml.contains("xmlns:turbo"));
//! ```

pub mod assemble;
pub mod config;
pub mod field;
pub mod item;
pub mod logger;
pub mod tokens;
pub mod urls;
pub mod xml;

pub use assemble::{AlternateLink, FeedAssembler, FeedDocument, NAMESPACES, namespaces};
pub use config::{
    ChannelOptions, ConfigDiagnostics, ConfigError, FeedConfig, FieldPath, RowFieldsConfig,
};
pub use field::{FieldResolver, FieldValue, resolve, resolve_text};
pub use item::{FeedItem, ItemMapper};
pub use urls::BaseUrl;
pub use xml::to_xml;
