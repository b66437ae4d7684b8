//! Whole-text extraction strategies.
//!
//! Fallbacks for pages where content was injected by client-side rendering
//! after the snapshot was taken, leaving the structural containers empty.
//! The page's entire visible text is split into lines, every line runs
//! through the classifier, and field-specific shape rules pick candidates
//! out of what survives.

use crate::classify::{classify, LineContext};
use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns;

fn page_lines(doc: &Document) -> Vec<String> {
    dom::text_lines(&doc.select("body"))
}

/// Title from wild page text.
///
/// A wild-text title must look like a headline: within the configured
/// word range, under the length cap, free of non-title vocabulary, and
/// not a sentence trailing off with a period.
#[must_use]
pub fn title_from_text(doc: &Document, opts: &Options) -> Option<String> {
    for line in page_lines(doc) {
        if !classify(&line, LineContext::Title, opts).accepted {
            continue;
        }
        let words = line.split_whitespace().count();
        if words < opts.title_min_words || words > opts.title_max_words {
            continue;
        }
        let lower = line.to_lowercase();
        if patterns::NON_TITLE_TERMS.iter().any(|t| lower.contains(t)) {
            continue;
        }
        if line.ends_with('.') || line.ends_with(',') {
            continue;
        }
        return Some(line);
    }
    None
}

/// Body from wild page text: the first N classifier-accepted,
/// conversational lines, concatenated.
#[must_use]
pub fn body_from_text(doc: &Document, opts: &Options) -> Option<String> {
    let mut lines = Vec::new();
    for line in page_lines(doc) {
        if !classify(&line, LineContext::BodyLine, opts).accepted {
            continue;
        }
        if !is_conversational(&line, opts) {
            continue;
        }
        lines.push(line);
        if lines.len() >= opts.body_scan_lines {
            break;
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Whether a line reads like discussion prose rather than labels.
fn is_conversational(line: &str, opts: &Options) -> bool {
    if line.chars().count() >= opts.conversational_min_chars {
        return true;
    }
    let lower = line.to_lowercase();
    patterns::DISCUSSION_TERMS.iter().any(|t| lower.contains(t))
}

/// Author from byline lines in wild page text.
#[must_use]
pub fn author_from_byline(doc: &Document, opts: &Options) -> Option<String> {
    for line in page_lines(doc) {
        if let Some(caps) = patterns::BYLINE_TEXT.captures(&line) {
            if let Some(name) = super::tidy_author(&caps[1], opts) {
                return Some(name);
            }
        }
    }
    None
}

/// Timestamp from date expressions embedded in wild page text.
#[must_use]
pub fn timestamp_from_text(doc: &Document, _opts: &Options) -> Option<String> {
    for line in page_lines(doc) {
        if let Some(found) = patterns::DATE_TEXT.find(&line) {
            if let Some(ts) = super::tidy_timestamp(found.as_str()) {
                return Some(ts);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // A hydrated page snapshot: no containers survive, only text
    const WILD_PAGE: &str = r#"
        <html><body><div id="app">AcmeForum
Home
Explore
Dashboard
Rust lifetimes in practice
Posted by carol
July 30, 2026
I have been trying to understand how lifetimes interact with trait objects lately.
It took a while, but I think the compiler errors finally started to make sense.
3 points
Reply
</div></body></html>"#;

    #[test]
    fn recovers_title_from_wild_text() {
        let doc = dom::parse(WILD_PAGE);
        let title = title_from_text(&doc, &Options::default());
        assert_eq!(title.as_deref(), Some("Rust lifetimes in practice"));
    }

    #[test]
    fn recovers_body_from_wild_text() {
        let doc = dom::parse(WILD_PAGE);
        let body = body_from_text(&doc, &Options::default()).unwrap();
        assert!(body.contains("lifetimes interact with trait objects"));
        assert!(body.contains("compiler errors"));
        assert!(!body.contains("Dashboard"));
        assert!(!body.contains("3 points"));
    }

    #[test]
    fn recovers_author_from_byline() {
        let doc = dom::parse(WILD_PAGE);
        let author = author_from_byline(&doc, &Options::default());
        assert_eq!(author.as_deref(), Some("carol"));
    }

    #[test]
    fn recovers_timestamp_from_text() {
        let doc = dom::parse(WILD_PAGE);
        let ts = timestamp_from_text(&doc, &Options::default());
        assert_eq!(ts.as_deref(), Some("July 30, 2026"));
    }

    #[test]
    fn empty_page_yields_nothing() {
        let doc = dom::parse("<html><body></body></html>");
        let opts = Options::default();
        assert!(title_from_text(&doc, &opts).is_none());
        assert!(body_from_text(&doc, &opts).is_none());
        assert!(author_from_byline(&doc, &opts).is_none());
        assert!(timestamp_from_text(&doc, &opts).is_none());
    }
}
