//! Station feed aggregation. The news and sport feeds are ordinary RSS
//! documents read through the relay; items are scanned out of the markup
//! the same way the rest of the app scrapes fragments, without a full XML
//! parser. Items missing a title are skipped, a document without items is
//! reported as an error the view turns into empty-state copy.

use crate::api::models::Article;
use crate::api::relay;
use crate::utils::{compact_whitespace, decode_html_entities, is_absolute_http_url, strip_html_tags};
use chrono::{DateTime, Utc};

pub const NEWS_FEED_URL: &str = "https://www.ansa.it/sito/notizie/topnews/topnews_rss.xml";
pub const SPORT_FEED_URL: &str = "https://www.ansa.it/sito/notizie/sport/sport_rss.xml";

/// Fetch a feed through the relay and parse its items.
pub async fn fetch_feed(url: &str) -> Result<Vec<Article>, String> {
    let body = relay::fetch_via_relay(url).await?;
    parse_feed(&body)
}

/// Scan an RSS document for `<item>` blocks.
pub fn parse_feed(xml: &str) -> Result<Vec<Article>, String> {
    if !xml.contains("<item") {
        return Err("document contains no feed items".to_string());
    }

    let mut articles = Vec::new();
    let mut remaining = xml;

    while let Some(start) = remaining.find("<item") {
        let after_open = &remaining[start..];
        let Some(end) = after_open.find("</item>") else {
            break;
        };

        if let Some(article) = parse_item(&after_open[..end]) {
            articles.push(article);
        }
        remaining = &after_open[end + "</item>".len()..];
    }

    Ok(articles)
}

fn parse_item(block: &str) -> Option<Article> {
    let title = extract_tag(block, "title")
        .map(|raw| compact_whitespace(&decode_html_entities(&strip_html_tags(&raw))))
        .filter(|title| !title.is_empty())?;

    let link = extract_tag(block, "link")
        .map(|raw| raw.trim().to_string())
        .filter(|link| is_absolute_http_url(link))
        .unwrap_or_default();

    let summary = extract_tag(block, "description")
        .map(|raw| compact_whitespace(&decode_html_entities(&strip_html_tags(&raw))))
        .unwrap_or_default();

    let published = extract_tag(block, "pubDate")
        .as_deref()
        .and_then(parse_feed_date);

    let image_url = extract_attr(block, "enclosure", "url")
        .or_else(|| extract_attr(block, "media:content", "url"))
        .filter(|url| is_absolute_http_url(url));

    Some(Article {
        title,
        link,
        published,
        summary,
        image_url,
    })
}

/// Content of the first `<tag>…</tag>` pair, with CDATA unwrapped.
fn extract_tag(block: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let start = block.find(&open)?;
    let after_open = &block[start + open.len()..];
    // The match must be the tag itself, not a longer name sharing the prefix.
    let gt = after_open.find('>')?;
    let head = &after_open[..gt];
    if !head.is_empty() && !head.starts_with(' ') && !head.starts_with('/') {
        return None;
    }

    let content_start = &after_open[gt + 1..];
    let end = content_start.find(&close)?;
    let raw = content_start[..end].trim();

    let unwrapped = raw
        .strip_prefix("<![CDATA[")
        .and_then(|inner| inner.strip_suffix("]]>"))
        .unwrap_or(raw);

    Some(unwrapped.trim().to_string())
}

/// Value of `attr="…"` on the first `<tag …>` element in the block.
fn extract_attr(block: &str, tag: &str, attr: &str) -> Option<String> {
    let open = format!("<{tag}");
    let start = block.find(&open)?;
    let element = &block[start..];
    let end = element.find('>')?;
    let element = &element[..end];

    let marker = format!("{attr}=\"");
    let value_start = element.find(&marker)? + marker.len();
    let tail = &element[value_start..];
    let value_end = tail.find('"')?;

    Some(tail[..value_end].to_string())
}

/// Feed dates are RFC 2822 in the wild, with the odd RFC 3339 outlier.
pub fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>RVR News</title>
    <item>
      <title><![CDATA[Local elections &amp; results]]></title>
      <link>https://news.example/elections</link>
      <description><![CDATA[<p>The <b>full</b> breakdown.</p>]]></description>
      <pubDate>Tue, 05 Aug 2025 18:30:00 +0200</pubDate>
      <enclosure url="https://news.example/img/elections.jpg" type="image/jpeg" length="1"/>
    </item>
    <item>
      <title>Festival opens &quot;Piazza Grande&quot;</title>
      <link>https://news.example/festival</link>
      <description>Three days of music.</description>
      <media:content url="https://news.example/img/festival.jpg" medium="image"/>
    </item>
    <item>
      <link>https://news.example/broken</link>
      <description>No title here.</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_and_skips_titleless_ones() {
        let articles = parse_feed(SAMPLE).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Local elections & results");
        assert_eq!(articles[0].link, "https://news.example/elections");
        assert_eq!(articles[0].summary, "The full breakdown.");
        assert_eq!(
            articles[0].image_url.as_deref(),
            Some("https://news.example/img/elections.jpg")
        );
    }

    #[test]
    fn decodes_entities_in_plain_titles() {
        let articles = parse_feed(SAMPLE).unwrap();
        assert_eq!(articles[1].title, "Festival opens \"Piazza Grande\"");
        assert_eq!(
            articles[1].image_url.as_deref(),
            Some("https://news.example/img/festival.jpg")
        );
    }

    #[test]
    fn parses_rfc2822_dates() {
        let articles = parse_feed(SAMPLE).unwrap();
        let published = articles[0].published.expect("date should parse");
        assert_eq!(published.year(), 2025);
        assert_eq!(published.month(), 8);
        assert!(articles[1].published.is_none());
    }

    #[test]
    fn rejects_documents_without_items() {
        assert!(parse_feed("<html><body>gateway error</body></html>").is_err());
        assert!(parse_feed("").is_err());
    }

    #[test]
    fn unterminated_item_is_ignored() {
        let xml = "<rss><item><title>Dangling</title>";
        assert_eq!(parse_feed(xml).unwrap().len(), 0);
    }

    #[test]
    fn feed_date_handles_both_formats() {
        assert!(parse_feed_date("Tue, 05 Aug 2025 18:30:00 +0200").is_some());
        assert!(parse_feed_date("2025-08-05T18:30:00Z").is_some());
        assert!(parse_feed_date("yesterday").is_none());
        assert!(parse_feed_date("").is_none());
    }
}
