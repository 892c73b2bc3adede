//! RSS 2.0 serialization of an assembled [`FeedDocument`].
//!
//! The assembler hands over a structured document; this module turns it into
//! literal XML with the vendor namespaces declared on the channel element.

use crate::assemble::FeedDocument;
use crate::item::FeedItem;
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};

/// Serialize a document to RSS 2.0 XML text.
pub fn to_xml(doc: &FeedDocument) -> Result<String> {
    let items: Vec<_> = doc.items.iter().map(item_to_rss).collect();

    let channel = ChannelBuilder::default()
        .title(doc.alternate.title.clone())
        .link(doc.alternate.url.to_string())
        .description(doc.description.clone())
        .namespaces(doc.namespaces.clone())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn item_to_rss(item: &FeedItem) -> rss::Item {
    let link = item.link.to_string();

    // Empty author/pubDate slots are omitted from the XML rather than
    // emitted as empty elements; the document descriptor keeps them as "".
    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(Some(item.content.clone()))
        .author((!item.author.is_empty()).then(|| item.author.clone()))
        .pub_date((!item.pub_date.is_empty()).then(|| item.pub_date.clone()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{AlternateLink, namespaces};
    use url::Url;

    fn document(items: Vec<FeedItem>) -> FeedDocument {
        FeedDocument {
            items,
            description: "All the news".into(),
            namespaces: namespaces(),
            alternate: AlternateLink {
                url: Url::parse("https://example.com/rss.xml").unwrap(),
                title: "Front page".into(),
            },
        }
    }

    fn item(n: usize) -> FeedItem {
        FeedItem {
            title: format!("story {n}"),
            link: Url::parse(&format!("https://example.com/news/{n}")).unwrap(),
            content: format!("<p>body {n}</p>"),
            author: "desk".into(),
            pub_date: "Tue, 01 Jul 2025 10:00:00 +0000".into(),
        }
    }

    #[test]
    fn test_xml_declares_vendor_namespaces() {
        let xml = to_xml(&document(vec![item(0)])).unwrap();
        assert!(xml.contains(r#"xmlns:yandex="http://news.yandex.ru""#));
        assert!(xml.contains(r#"xmlns:media="http://search.yahoo.com/mrss/""#));
        assert!(xml.contains(r#"xmlns:turbo="http://turbo.yandex.ru""#));
    }

    #[test]
    fn test_xml_contains_channel_and_items() {
        let xml = to_xml(&document(vec![item(0), item(1)])).unwrap();
        assert!(xml.contains("<title>Front page</title>"));
        assert!(xml.contains("All the news"));
        assert!(xml.contains("story 0"));
        assert!(xml.contains("story 1"));
        assert!(xml.contains("https://example.com/news/1"));
    }

    #[test]
    fn test_markup_content_survives_serialization_unescaped() {
        let rich = FeedItem {
            content: "<b>hi</b>".into(),
            ..item(0)
        };
        let xml = to_xml(&document(vec![rich])).unwrap();
        // The fragment must reach consumers as markup, not as escaped text.
        assert!(xml.contains("<b>hi</b>"));
        assert!(!xml.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn test_empty_document_serializes() {
        let xml = to_xml(&document(Vec::new())).unwrap();
        assert!(xml.contains("xmlns:turbo"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_empty_slots_are_omitted_not_invalid() {
        let bare = FeedItem {
            title: String::new(),
            link: Url::parse("https://example.com/news/9").unwrap(),
            content: String::new(),
            author: String::new(),
            pub_date: String::new(),
        };
        let xml = to_xml(&document(vec![bare])).unwrap();
        assert!(xml.contains("https://example.com/news/9"));
        assert!(!xml.contains("<author>"));
        assert!(!xml.contains("<pubDate>"));
    }
}
