//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate providing the handful of
//! operations the extraction pipeline performs: parsing, attribute access,
//! tag names, and text retrieval. The parsed [`Document`] is the document
//! handle the pipeline operates on; it is owned transiently per extraction
//! call and never persisted.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns;

// === Parsing ===

/// Parse an HTML string into a queryable document handle.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only
/// when you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Collapse internal whitespace runs and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    patterns::WHITESPACE_NORMALIZE
        .replace_all(text.trim(), " ")
        .to_string()
}

/// Text content split into trimmed, non-empty lines.
///
/// Line structure follows the source markup, so this is the "whole visible
/// text" view the textual fallback strategies scan.
#[must_use]
pub fn text_lines(sel: &Selection) -> Vec<String> {
    text_content(sel)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

// === Tree Navigation ===

/// Get parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}
