//! Listing-page extraction.
//!
//! Produces an ordered sequence of lightweight post summaries from a
//! category or index page. The primary strategy walks repeating card
//! containers; when that finds nothing, a global anchor scan looks for
//! post-shaped links anywhere in the document. Document order is kept
//! as-is and treated as recency order; the source pages never carry a
//! timestamp to verify that against.

use dom_query::Selection;
use tracing::debug;
use url::Url;

use crate::chain::structural;
use crate::classify::{classify, LineContext};
use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns;
use crate::record::PostSummary;

/// Extract post summaries from a listing page document.
///
/// Returns at most `limit` summaries in document order. An empty result
/// means "no posts found" and is not an error; structural diagnostics are
/// logged so an operator can see what the page looked like.
#[must_use]
pub fn extract_listing_from_document(doc: &Document, limit: usize, opts: &Options) -> Vec<PostSummary> {
    if limit == 0 {
        return Vec::new();
    }

    let mut summaries = card_scan(doc, limit, opts);
    if summaries.is_empty() {
        summaries = anchor_scan(doc, limit, opts);
    }
    if summaries.is_empty() {
        log_structure_diagnostics(doc, opts);
    }
    summaries
}

/// Primary strategy: repeating card containers, each holding one post link.
fn card_scan(doc: &Document, limit: usize, opts: &Options) -> Vec<PostSummary> {
    for css in patterns::CARD_SELECTORS {
        let cards = doc.select(css);
        if !cards.exists() {
            continue;
        }

        let mut summaries = Vec::new();
        let mut seen_links = Vec::new();
        for node in cards.nodes() {
            if summaries.len() >= limit {
                break;
            }
            let card = Selection::from(*node);
            if structural::is_site_chrome(&card) {
                continue;
            }
            if let Some(summary) = summary_from_card(&card, opts) {
                if seen_links.contains(&summary.link) {
                    continue;
                }
                seen_links.push(summary.link.clone());
                summaries.push(summary);
            }
        }

        if !summaries.is_empty() {
            return summaries;
        }
    }
    Vec::new()
}

/// One summary from one card, when the card holds a post-shaped anchor
/// and a usable title.
fn summary_from_card(card: &Selection, opts: &Options) -> Option<PostSummary> {
    let (anchor, link) = post_anchor(card, opts)?;

    let mut title = heading_text(&anchor, opts);
    if title.is_none() {
        title = heading_text(card, opts);
    }
    let title = title.or_else(|| anchor_title(&anchor, opts))?;

    Some(PostSummary {
        link: resolve_link(&link, opts),
        content_preview: card_preview(card, &title, opts),
        author: structural::author_within(card, opts),
        title,
    })
}

/// First anchor in scope whose href looks like a post link.
fn post_anchor<'a>(scope: &Selection<'a>, opts: &Options) -> Option<(Selection<'a>, String)> {
    for node in scope.select("a[href]").nodes() {
        let anchor = Selection::from(*node);
        if let Some(href) = dom::get_attribute(&anchor, "href") {
            if opts.is_post_link(&href) {
                return Some((anchor, href));
            }
        }
    }
    None
}

/// Title from a heading nested in the scope.
fn heading_text(scope: &Selection, opts: &Options) -> Option<String> {
    let headings = scope.select(patterns::CARD_HEADING_SELECTOR);
    for h in headings.iter() {
        let text = dom::normalize_whitespace(&h.text());
        if classify(&text, LineContext::Title, opts).accepted {
            return Some(text);
        }
    }
    None
}

/// Title from the anchor's own text.
fn anchor_title(anchor: &Selection, opts: &Options) -> Option<String> {
    let text = dom::normalize_whitespace(&dom::text_content(anchor));
    if classify(&text, LineContext::Title, opts).accepted {
        Some(text)
    } else {
        None
    }
}

/// Bounded preview from the card's own text, skipping the title line.
fn card_preview(card: &Selection, title: &str, opts: &Options) -> Option<String> {
    for line in dom::text_lines(card) {
        let line = dom::normalize_whitespace(&line);
        if line == title {
            continue;
        }
        if classify(&line, LineContext::Preview, opts).accepted {
            return Some(truncate_chars(&line, opts.preview_max_chars));
        }
    }
    None
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    text.chars().take(max).collect::<String>().trim_end().to_string()
}

/// Secondary strategy: every post-shaped anchor in the document.
fn anchor_scan(doc: &Document, limit: usize, opts: &Options) -> Vec<PostSummary> {
    let mut summaries = Vec::new();
    let mut seen_links = Vec::new();

    for node in doc.select("a[href]").nodes() {
        if summaries.len() >= limit {
            break;
        }
        let anchor = Selection::from(*node);
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };
        if !opts.is_post_link(&href) {
            continue;
        }

        let Some(title) = heading_text(&anchor, opts).or_else(|| anchor_title(&anchor, opts)) else {
            continue;
        };

        let link = resolve_link(&href, opts);
        if seen_links.contains(&link) {
            continue;
        }
        seen_links.push(link.clone());
        summaries.push(PostSummary { title, link, content_preview: None, author: None });
    }

    summaries
}

/// Resolve a relative link against the configured base URL.
fn resolve_link(href: &str, opts: &Options) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(base) = &opts.base_url {
        if let Ok(base) = Url::parse(base) {
            if let Ok(resolved) = base.join(href) {
                return resolved.to_string();
            }
        }
    }
    href.to_string()
}

/// Sample the page's shape into the log for operator troubleshooting.
fn log_structure_diagnostics(doc: &Document, opts: &Options) {
    let n = opts.diagnostic_sample;

    let mut classes = Vec::new();
    for node in doc.select("body *").nodes().iter().take(n) {
        let sel = Selection::from(*node);
        let tag = dom::tag_name(&sel).unwrap_or_default();
        let class = dom::class_name(&sel).unwrap_or_default();
        classes.push(format!("<{tag} class={class:?}>"));
    }

    let mut links = Vec::new();
    for node in doc.select("a[href]").nodes().iter().take(n) {
        let sel = Selection::from(*node);
        if let Some(href) = dom::get_attribute(&sel, "href") {
            links.push(href);
        }
    }

    debug!(?classes, ?links, "listing scan found no post cards or post-shaped anchors");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_link_joins_relative_hrefs() {
        let opts = Options {
            base_url: Some("https://forum.example".to_string()),
            ..Options::default()
        };
        assert_eq!(resolve_link("/post/42", &opts), "https://forum.example/post/42");
        assert_eq!(
            resolve_link("https://other.example/post/1", &opts),
            "https://other.example/post/1"
        );
        // No base configured: pass through unchanged
        assert_eq!(resolve_link("/post/42", &Options::default()), "/post/42");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 300), "short");
        let long = "x".repeat(400);
        assert_eq!(truncate_chars(&long, 300).chars().count(), 300);
    }
}
