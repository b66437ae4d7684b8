//! Page-metadata extraction strategies.
//!
//! Lowest-priority chain entries: Open Graph tags, JSON-LD blocks, and the
//! document title element. These survive client-side rendering better than
//! the visible DOM but describe the page rather than the post, so they only
//! run after the structural and textual tiers have come up dry.

use dom_query::Selection;
use serde_json::Value;

use crate::classify::{classify, LineContext};
use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns;

fn meta_content(doc: &Document, css: &str) -> Option<String> {
    let sel = doc.select(css);
    if !sel.exists() {
        return None;
    }
    dom::get_attribute(&sel, "content")
        .map(|c| dom::normalize_whitespace(&c))
        .filter(|c| !c.is_empty())
}

/// All top-level JSON-LD items on the page, with arrays and `@graph`
/// containers flattened.
fn json_ld_items(doc: &Document) -> Vec<Value> {
    let mut items = Vec::new();
    for node in doc.select("script[type='application/ld+json']").nodes() {
        let sel = Selection::from(*node);
        let raw = dom::text_content(&sel);
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            continue;
        };
        match value {
            Value::Array(entries) => items.extend(entries),
            Value::Object(map) => {
                if let Some(Value::Array(graph)) = map.get("@graph") {
                    items.extend(graph.clone());
                } else {
                    items.push(Value::Object(map));
                }
            }
            _ => {}
        }
    }
    items
}

/// Strip the trailing site-name segment from a page title.
fn clean_title(raw: &str, opts: &Options) -> Option<String> {
    let raw = dom::normalize_whitespace(raw);
    if raw.is_empty() {
        return None;
    }

    let parts: Vec<&str> = patterns::TITLE_SEPARATOR
        .split(&raw)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let candidate = match parts.as_slice() {
        [] => return None,
        [only] => (*only).to_string(),
        init => init[..init.len() - 1]
            .iter()
            .copied()
            .max_by_key(|p| p.chars().count())
            .unwrap_or(init[0])
            .to_string(),
    };

    if classify(&candidate, LineContext::Title, opts).accepted {
        Some(candidate)
    } else {
        None
    }
}

/// Title from `og:title`, JSON-LD headline, or the title element.
#[must_use]
pub fn title_from_page_metadata(doc: &Document, opts: &Options) -> Option<String> {
    if let Some(title) = meta_content(doc, "meta[property='og:title']").and_then(|c| clean_title(&c, opts)) {
        return Some(title);
    }

    for item in json_ld_items(doc) {
        let headline = item.get("headline").or_else(|| item.get("name")).and_then(Value::as_str);
        if let Some(title) = headline.and_then(|h| clean_title(h, opts)) {
            return Some(title);
        }
    }

    let title_elem = doc.select("title");
    if title_elem.exists() {
        return clean_title(&dom::text_content(&title_elem), opts);
    }
    None
}

/// Author from the author meta tag or JSON-LD author objects.
#[must_use]
pub fn author_from_page_metadata(doc: &Document, opts: &Options) -> Option<String> {
    if let Some(name) = meta_content(doc, "meta[name='author']").and_then(|c| super::tidy_author(&c, opts)) {
        return Some(name);
    }

    for item in json_ld_items(doc) {
        if let Some(name) = json_ld_author_name(item.get("author")) {
            if let Some(name) = super::tidy_author(&name, opts) {
                return Some(name);
            }
        }
    }
    None
}

/// Author name from a JSON-LD author value: a string, an object with a
/// `name`, or an array of either.
fn json_ld_author_name(author: Option<&Value>) -> Option<String> {
    match author? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(ToString::to_string),
        Value::Array(entries) => entries.first().and_then(|v| json_ld_author_name(Some(v))),
        _ => None,
    }
}

/// Timestamp from article meta tags or JSON-LD `datePublished`.
#[must_use]
pub fn timestamp_from_page_metadata(doc: &Document, _opts: &Options) -> Option<String> {
    if let Some(ts) = meta_content(doc, "meta[property='article:published_time']")
        .as_deref()
        .and_then(super::tidy_timestamp)
    {
        return Some(ts);
    }

    for item in json_ld_items(doc) {
        let published = item.get("datePublished").and_then(Value::as_str);
        if let Some(ts) = published.and_then(super::tidy_timestamp) {
            return Some(ts);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn og_title_loses_site_suffix() {
        let doc = dom::parse(
            r#"
            <html><head>
              <meta property="og:title" content="Weekly Check-in - AcmeForum">
            </head><body></body></html>
        "#,
        );
        let title = title_from_page_metadata(&doc, &Options::default());
        assert_eq!(title.as_deref(), Some("Weekly Check-in"));
    }

    #[test]
    fn title_element_is_the_last_resort() {
        let doc = dom::parse(
            r"
            <html><head><title>Understanding ownership | AcmeForum</title></head>
            <body></body></html>
        ",
        );
        let title = title_from_page_metadata(&doc, &Options::default());
        assert_eq!(title.as_deref(), Some("Understanding ownership"));
    }

    #[test]
    fn json_ld_supplies_all_three_fields() {
        let doc = dom::parse(
            r#"
            <html><head>
              <script type="application/ld+json">
              {
                "@type": "DiscussionForumPosting",
                "headline": "Weekly Check-in",
                "author": {"@type": "Person", "name": "alice"},
                "datePublished": "2026-07-30T10:00:00Z"
              }
              </script>
            </head><body></body></html>
        "#,
        );

        let opts = Options::default();
        assert_eq!(title_from_page_metadata(&doc, &opts).as_deref(), Some("Weekly Check-in"));
        assert_eq!(author_from_page_metadata(&doc, &opts).as_deref(), Some("alice"));
        assert_eq!(
            timestamp_from_page_metadata(&doc, &opts).as_deref(),
            Some("2026-07-30 10:00")
        );
    }

    #[test]
    fn json_ld_graph_and_author_arrays_flatten() {
        let doc = dom::parse(
            r#"
            <html><head>
              <script type="application/ld+json">
              {"@graph": [
                {"@type": "WebSite", "name": "AcmeForum"},
                {"@type": "Article", "headline": "Profiling allocator churn", "author": ["bob"]}
              ]}
              </script>
            </head><body></body></html>
        "#,
        );

        let opts = Options::default();
        assert_eq!(
            title_from_page_metadata(&doc, &opts).as_deref(),
            Some("Profiling allocator churn")
        );
        assert_eq!(author_from_page_metadata(&doc, &opts).as_deref(), Some("bob"));
    }

    #[test]
    fn malformed_json_ld_is_skipped() {
        let doc = dom::parse(
            r#"
            <html><head>
              <script type="application/ld+json">{not json at all</script>
              <title>Fallback title here - AcmeForum</title>
            </head><body></body></html>
        "#,
        );
        let title = title_from_page_metadata(&doc, &Options::default());
        assert_eq!(title.as_deref(), Some("Fallback title here"));
    }
}
