//! Line-level text classification.
//!
//! The classifier is a pure function deciding whether a single line of raw
//! text is plausibly human-authored content. It knows nothing about post
//! structure; every higher strategy (structural, textual, comment
//! collection) routes its candidate lines through here. Rules apply in
//! order, first match wins: length, denylist, renderer artifacts, accept.

use crate::options::Options;
use crate::patterns;

/// The context a line is being judged in. Thresholds differ per context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineContext {
    /// A candidate post title.
    Title,
    /// A candidate listing preview line.
    Preview,
    /// A single line of post body prose.
    BodyLine,
    /// A candidate comment.
    Comment,
}

/// Why a line was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Below the minimum length or word count for the context.
    TooShort,
    /// Above the maximum length for the context.
    TooLong,
    /// Matched the structural/navigational denylist.
    DenylistMatch,
    /// Contains framework-hydration or placeholder artifacts.
    StructuralArtifact,
    /// Passed every rule.
    Accepted,
}

/// Classification outcome for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the line is plausibly content.
    pub accepted: bool,
    /// The rule that decided.
    pub reason: Reason,
}

impl Verdict {
    #[must_use]
    fn accept() -> Self {
        Self { accepted: true, reason: Reason::Accepted }
    }

    #[must_use]
    fn reject(reason: Reason) -> Self {
        Self { accepted: false, reason }
    }
}

/// Minimum (chars, words) and maximum chars for a context.
fn thresholds(ctx: LineContext, opts: &Options) -> (usize, usize, Option<usize>) {
    match ctx {
        LineContext::Title => (opts.title_min_chars, 1, Some(opts.title_max_chars)),
        LineContext::Preview => (opts.preview_min_chars, 3, None),
        LineContext::BodyLine => (opts.body_line_min_chars, opts.body_line_min_words, None),
        LineContext::Comment => (opts.comment_min_chars, 2, Some(opts.comment_max_chars)),
    }
}

/// Classify one line of raw text.
///
/// The line is trimmed before judging. Denylist terms match the whole
/// line, case-insensitively; hydration markers match anywhere in it.
#[must_use]
pub fn classify(line: &str, ctx: LineContext, opts: &Options) -> Verdict {
    let line = line.trim();
    let chars = line.chars().count();
    let words = line.split_whitespace().count();

    let (min_chars, min_words, max_chars) = thresholds(ctx, opts);
    if chars < min_chars || words < min_words {
        return Verdict::reject(Reason::TooShort);
    }
    if let Some(max) = max_chars {
        if chars > max {
            return Verdict::reject(Reason::TooLong);
        }
    }

    let lower = line.to_lowercase();
    if is_denylisted(&lower, opts) {
        return Verdict::reject(Reason::DenylistMatch);
    }

    if is_renderer_artifact(&lower) {
        return Verdict::reject(Reason::StructuralArtifact);
    }

    Verdict::accept()
}

/// Whole-line denylist check. Expects a lowercased, trimmed line.
fn is_denylisted(lower: &str, opts: &Options) -> bool {
    if patterns::NOISE_LINES.contains(&lower) {
        return true;
    }
    if opts.site_terms.iter().any(|t| t.to_lowercase() == lower) {
        return true;
    }
    patterns::SCORE_LINE.is_match(lower)
        || patterns::DATE_LINE.is_match(lower)
        || patterns::RELATIVE_TIME_LINE.is_match(lower)
        || patterns::BREADCRUMB_SEPARATOR.is_match(lower)
}

/// Renderer-leakage check. Expects a lowercased line.
fn is_renderer_artifact(lower: &str) -> bool {
    patterns::PLACEHOLDER_LINES.contains(&lower)
        || patterns::HYDRATION_MARKERS.iter().any(|m| lower.contains(m))
}
