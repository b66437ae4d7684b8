//! Ordered field strategy chains.
//!
//! Each extractable field has a fixed, ordered table of strategies tried
//! until one yields output that survives validation. The tables are static
//! configuration, safe for concurrent reuse; reordering a chain is a table
//! edit, not a code change. A strategy that finds nothing is a miss, a
//! candidate the validator rejects sends the driver on to the next entry,
//! and an exhausted chain yields `None`, never a guess.

pub mod meta;
pub mod structural;
pub mod textual;

use tracing::trace;

use crate::dom::Document;
use crate::options::Options;
use crate::validate::{self, FieldKind};

/// A provisional extracted value awaiting validation.
///
/// `rank` is the strategy's position in its chain; lower means higher
/// priority. Never exposed outside the pipeline.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The extracted text.
    pub text: String,
    /// Which strategy produced it.
    pub strategy: &'static str,
    /// Ordinal position in the chain.
    pub rank: usize,
}

/// One entry in a strategy chain.
pub struct Strategy {
    /// Stable identifier for diagnostics.
    pub id: &'static str,
    /// Attempt extraction; `None` is a miss.
    pub run: fn(&Document, &Options) -> Option<String>,
}

/// Title strategies, in priority order.
pub static TITLE_STRATEGIES: &[Strategy] = &[
    Strategy { id: "title-named-container", run: structural::title_from_named_container },
    Strategy { id: "title-heading", run: structural::title_from_heading },
    Strategy { id: "title-text-scan", run: textual::title_from_text },
    Strategy { id: "title-page-metadata", run: meta::title_from_page_metadata },
];

/// Body strategies, in priority order.
pub static BODY_STRATEGIES: &[Strategy] = &[
    Strategy { id: "body-named-container", run: structural::body_from_named_container },
    Strategy { id: "body-generic-container", run: structural::body_from_generic_container },
    Strategy { id: "body-paragraph-cluster", run: structural::body_from_paragraphs },
    Strategy { id: "body-text-scan", run: textual::body_from_text },
];

/// Author strategies, in priority order.
pub static AUTHOR_STRATEGIES: &[Strategy] = &[
    Strategy { id: "author-container", run: structural::author_from_container },
    Strategy { id: "author-byline-scan", run: textual::author_from_byline },
    Strategy { id: "author-page-metadata", run: meta::author_from_page_metadata },
];

/// Timestamp strategies, in priority order.
pub static TIMESTAMP_STRATEGIES: &[Strategy] = &[
    Strategy { id: "timestamp-datetime-attr", run: structural::timestamp_from_datetime_attr },
    Strategy { id: "timestamp-container", run: structural::timestamp_from_container },
    Strategy { id: "timestamp-text-scan", run: textual::timestamp_from_text },
    Strategy { id: "timestamp-page-metadata", run: meta::timestamp_from_page_metadata },
];

/// The chain configured for a field kind.
#[must_use]
pub fn strategies_for(kind: FieldKind) -> &'static [Strategy] {
    match kind {
        FieldKind::Title => TITLE_STRATEGIES,
        FieldKind::Body => BODY_STRATEGIES,
        FieldKind::Author => AUTHOR_STRATEGIES,
        FieldKind::Timestamp => TIMESTAMP_STRATEGIES,
    }
}

/// Run a field's chain against a document.
///
/// First strategy whose output survives validation wins; there is no
/// scoring beyond ordinal priority.
#[must_use]
pub fn select_field(doc: &Document, kind: FieldKind, opts: &Options) -> Option<Candidate> {
    for (rank, strategy) in strategies_for(kind).iter().enumerate() {
        let Some(text) = (strategy.run)(doc, opts) else {
            trace!(field = kind.as_str(), strategy = strategy.id, "strategy miss");
            continue;
        };

        match validate::validate(&text, kind, opts) {
            Ok(()) => {
                trace!(field = kind.as_str(), strategy = strategy.id, rank, "candidate accepted");
                return Some(Candidate { text: text.trim().to_string(), strategy: strategy.id, rank });
            }
            Err(reason) => {
                trace!(field = kind.as_str(), strategy = strategy.id, ?reason, "candidate rejected");
            }
        }
    }
    None
}

/// Normalize a recognizable timestamp, keeping free-form text as-is.
#[must_use]
pub(crate) fn tidy_timestamp(raw: &str) -> Option<String> {
    let raw = crate::dom::normalize_whitespace(raw);
    if raw.is_empty() || raw.chars().count() > 80 {
        return None;
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(&raw) {
        return Some(parsed.format("%Y-%m-%d %H:%M").to_string());
    }
    Some(raw)
}

/// Clean an author candidate: strip byline prefixes, enforce name shape.
#[must_use]
pub(crate) fn tidy_author(raw: &str, opts: &Options) -> Option<String> {
    let raw = crate::dom::normalize_whitespace(raw);
    let name = crate::patterns::BYLINE_PREFIX.replace(&raw, "").trim().to_string();

    let chars = name.chars().count();
    let words = name.split_whitespace().count();
    if chars < 2 || chars > opts.author_max_chars {
        return None;
    }
    if words == 0 || words > opts.author_max_words {
        return None;
    }
    if name.contains('@') {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn chains_are_ordered_and_nonempty() {
        for kind in [FieldKind::Title, FieldKind::Body, FieldKind::Author, FieldKind::Timestamp] {
            let chain = strategies_for(kind);
            assert!(!chain.is_empty());
        }
    }

    #[test]
    fn first_surviving_strategy_wins() {
        let html = r#"
            <html><body>
              <article>
                <h1 class="post-title">Weekly Check-in</h1>
                <h1>Some other heading entirely</h1>
              </article>
            </body></html>
        "#;
        let doc = dom::parse(html);

        let candidate = select_field(&doc, FieldKind::Title, &Options::default()).unwrap();
        assert_eq!(candidate.text, "Weekly Check-in");
        assert_eq!(candidate.strategy, "title-named-container");
        assert_eq!(candidate.rank, 0);
    }

    #[test]
    fn exhausted_chain_returns_none() {
        let doc = dom::parse("<html><body><p>hi</p></body></html>");
        assert!(select_field(&doc, FieldKind::Body, &Options::default()).is_none());
    }

    #[test]
    fn tidy_timestamp_normalizes_rfc3339() {
        assert_eq!(
            tidy_timestamp("2026-07-30T10:00:00Z").as_deref(),
            Some("2026-07-30 10:00")
        );
        // Free-form passes through
        assert_eq!(tidy_timestamp("2 hours ago").as_deref(), Some("2 hours ago"));
        assert_eq!(tidy_timestamp(""), None);
    }

    #[test]
    fn tidy_author_strips_bylines_and_rejects_junk() {
        let opts = Options::default();
        assert_eq!(tidy_author("Posted by alice", &opts).as_deref(), Some("alice"));
        assert_eq!(tidy_author("by Jane Q. Public", &opts).as_deref(), Some("Jane Q. Public"));
        assert_eq!(tidy_author("alice@example.com", &opts), None);
        assert_eq!(tidy_author("x", &opts), None);
        assert_eq!(tidy_author("one two three four five six", &opts), None);
    }
}
