//! Structural extraction strategies.
//!
//! These query the document with decreasing specificity: named content
//! containers first, then generic article containers, then bare
//! paragraphs. Every strategy excludes elements sitting inside site
//! chrome (navigation, banner, and footer regions) so forum branding
//! never masquerades as content.

use dom_query::Selection;

use crate::classify::{classify, LineContext};
use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns;

/// Whether an element sits inside site chrome.
///
/// Walks the element and its ancestors. `nav` and `aside` are always
/// chrome; `header`/`footer` only when not inside an article or main
/// region, so a post header inside `<article>` stays eligible. Class and
/// id tokens are matched against the chrome vocabulary.
#[must_use]
pub(crate) fn is_site_chrome(sel: &Selection) -> bool {
    let mut current = sel.clone();
    while current.exists() {
        let tag = dom::tag_name(&current).unwrap_or_default();
        match tag.as_str() {
            "nav" | "aside" => return true,
            "header" | "footer" => {
                if !has_content_ancestor(&current) {
                    return true;
                }
            }
            _ => {}
        }

        let id = dom::id(&current).unwrap_or_default();
        let class = dom::class_name(&current).unwrap_or_default();
        let id_class = format!("{id} {class}");
        if patterns::CHROME_CLASS.is_match(&id_class) {
            return true;
        }

        current = dom::parent(&current);
    }
    false
}

fn has_content_ancestor(sel: &Selection) -> bool {
    let mut current = dom::parent(sel);
    while current.exists() {
        if matches!(dom::tag_name(&current).as_deref(), Some("article" | "main")) {
            return true;
        }
        current = dom::parent(&current);
    }
    false
}

// === Title ===

/// Title from named title containers (`.post-title` and friends).
#[must_use]
pub fn title_from_named_container(doc: &Document, opts: &Options) -> Option<String> {
    title_from_selectors(doc, patterns::TITLE_CONTAINER_SELECTORS, opts)
}

/// Title from bare heading elements.
#[must_use]
pub fn title_from_heading(doc: &Document, opts: &Options) -> Option<String> {
    title_from_selectors(doc, patterns::HEADING_SELECTORS, opts)
}

fn title_from_selectors(doc: &Document, selectors: &[&str], opts: &Options) -> Option<String> {
    for css in selectors {
        for node in doc.select(css).nodes() {
            let sel = Selection::from(*node);
            if is_site_chrome(&sel) {
                continue;
            }
            let text = dom::normalize_whitespace(&dom::text_content(&sel));
            if classify(&text, LineContext::Title, opts).accepted {
                return Some(text);
            }
        }
    }
    None
}

// === Body ===

/// Body from named post-body containers.
#[must_use]
pub fn body_from_named_container(doc: &Document, opts: &Options) -> Option<String> {
    body_from_selectors(doc, patterns::BODY_CONTAINER_SELECTORS, opts)
}

/// Body from generic article/main containers.
#[must_use]
pub fn body_from_generic_container(doc: &Document, opts: &Options) -> Option<String> {
    body_from_selectors(doc, patterns::GENERIC_CONTAINER_SELECTORS, opts)
}

fn body_from_selectors(doc: &Document, selectors: &[&str], opts: &Options) -> Option<String> {
    for css in selectors {
        for node in doc.select(css).nodes() {
            let sel = Selection::from(*node);
            if is_site_chrome(&sel) {
                continue;
            }
            let text = container_text(&sel, opts);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Prose inside a container: classifier-accepted paragraph lines, falling
/// back to the container's whole text when it holds no paragraphs.
fn container_text(sel: &Selection, opts: &Options) -> String {
    let paragraphs = sel.select("p");
    let mut lines = Vec::new();
    for p in paragraphs.iter() {
        let line = dom::normalize_whitespace(&p.text());
        if classify(&line, LineContext::BodyLine, opts).accepted {
            lines.push(line);
        }
    }
    if !lines.is_empty() {
        return lines.join("\n");
    }

    dom::normalize_whitespace(&dom::text_content(sel))
}

/// Body from the first cluster of acceptable paragraphs anywhere on the
/// page. Last structural resort before the wild-text scan.
#[must_use]
pub fn body_from_paragraphs(doc: &Document, opts: &Options) -> Option<String> {
    let mut lines = Vec::new();
    for node in doc.select("p").nodes() {
        let sel = Selection::from(*node);
        if is_site_chrome(&sel) {
            continue;
        }
        let line = dom::normalize_whitespace(&dom::text_content(&sel));
        if classify(&line, LineContext::BodyLine, opts).accepted {
            lines.push(line);
            if lines.len() >= opts.body_scan_lines {
                break;
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

// === Author ===

/// Author from author containers anywhere in the document.
#[must_use]
pub fn author_from_container(doc: &Document, opts: &Options) -> Option<String> {
    author_within(&doc.select("body"), opts)
}

/// Author from author containers inside a scope (a document body or one
/// listing card).
#[must_use]
pub(crate) fn author_within(scope: &Selection, opts: &Options) -> Option<String> {
    for css in patterns::AUTHOR_SELECTORS {
        for node in scope.select(css).nodes() {
            let sel = Selection::from(*node);
            if is_site_chrome(&sel) {
                continue;
            }
            if let Some(name) = super::tidy_author(&dom::text_content(&sel), opts) {
                return Some(name);
            }
        }
    }
    None
}

// === Timestamp ===

/// Timestamp from machine-readable datetime attributes.
#[must_use]
pub fn timestamp_from_datetime_attr(doc: &Document, _opts: &Options) -> Option<String> {
    for node in doc.select("time[datetime]").nodes() {
        let sel = Selection::from(*node);
        if let Some(raw) = dom::get_attribute(&sel, "datetime") {
            if let Some(ts) = super::tidy_timestamp(&raw) {
                return Some(ts);
            }
        }
    }

    for node in doc.select("[itemprop='datePublished']").nodes() {
        let sel = Selection::from(*node);
        let raw = dom::get_attribute(&sel, "content").or_else(|| dom::get_attribute(&sel, "datetime"));
        if let Some(ts) = raw.as_deref().and_then(super::tidy_timestamp) {
            return Some(ts);
        }
    }

    None
}

/// Timestamp from date-bearing containers.
#[must_use]
pub fn timestamp_from_container(doc: &Document, _opts: &Options) -> Option<String> {
    for css in patterns::TIMESTAMP_SELECTORS {
        for node in doc.select(css).nodes() {
            let sel = Selection::from(*node);
            if is_site_chrome(&sel) {
                continue;
            }
            let text = dom::normalize_whitespace(&dom::text_content(&sel));
            if patterns::DATE_TEXT.is_match(&text) {
                if let Some(ts) = super::tidy_timestamp(&text) {
                    return Some(ts);
                }
            }
        }
    }
    None
}
