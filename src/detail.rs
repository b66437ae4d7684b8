//! Post-page extraction.
//!
//! Assembles a full post record from a single post page: the strategy
//! chain runs independently for title, body, author, and timestamp, then a
//! bounded collection pass gathers existing comments. The body is the load
//! bearing field: without a validated body there is no record at all, so
//! callers can never act on partial post content.

use dom_query::Selection;
use tracing::debug;

use crate::chain::{self, structural};
use crate::classify::{classify, LineContext};
use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns;
use crate::record::PostDetail;
use crate::validate::{self, FieldKind};

/// Extract a full post record from a post page document.
///
/// Returns `None` when no validated body could be recovered, or when the
/// assembled record still matches a suspicious-content signature.
#[must_use]
pub fn extract_detail_from_document(doc: &Document, url: &str, opts: &Options) -> Option<PostDetail> {
    let Some(body) = chain::select_field(doc, FieldKind::Body, opts) else {
        debug!(url, "no body candidate survived the chain");
        return None;
    };

    if validate::has_noise_signature(&body.text) {
        debug!(url, strategy = body.strategy, "assembled body matches a noise signature");
        return None;
    }

    let title = chain::select_field(doc, FieldKind::Title, opts)
        .map(|c| c.text)
        .unwrap_or_default();
    let author = chain::select_field(doc, FieldKind::Author, opts).map(|c| c.text);
    let timestamp = chain::select_field(doc, FieldKind::Timestamp, opts).map(|c| c.text);
    let comments = collect_comments(doc, opts);

    Some(PostDetail {
        title,
        content: body.text,
        author,
        timestamp,
        comments,
        source_url: url.to_string(),
    })
}

/// Collect up to `max_comments` comment texts.
///
/// Each selector pattern contributes one independent pass; the passes are
/// merged in order, deduplicated by exact text, and capped across all
/// patterns combined.
fn collect_comments(doc: &Document, opts: &Options) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for css in patterns::COMMENT_SELECTORS {
        if merged.len() >= opts.max_comments {
            break;
        }
        for text in comment_pass(doc, css, opts) {
            if merged.len() >= opts.max_comments {
                break;
            }
            if !merged.contains(&text) {
                merged.push(text);
            }
        }
    }

    merged
}

/// One collection pass: all acceptable comment texts under one selector.
fn comment_pass(doc: &Document, css: &str, opts: &Options) -> Vec<String> {
    let mut texts = Vec::new();
    for node in doc.select(css).nodes() {
        let sel = Selection::from(*node);
        if structural::is_site_chrome(&sel) {
            continue;
        }
        let text = dom::normalize_whitespace(&dom::text_content(&sel));
        if classify(&text, LineContext::Comment, opts).accepted {
            texts.push(text);
        }
    }
    texts
}
