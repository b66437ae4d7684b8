//! Block-level candidate validation.
//!
//! The classifier judges single lines; this module judges whole candidate
//! blocks. The two tiers exist because boilerplate can be distributed
//! across multiple lines that each look fine on their own. Body candidates
//! additionally get shape checks: size floors, a line-break cap, and a URL
//! token ratio that separates prose from link lists.

use crate::options::Options;
use crate::patterns;

/// The field a candidate was extracted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Post title.
    Title,
    /// Post body.
    Body,
    /// Author name.
    Author,
    /// Publication timestamp.
    Timestamp,
}

impl FieldKind {
    /// Stable name for diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Body => "body",
            FieldKind::Author => "author",
            FieldKind::Timestamp => "timestamp",
        }
    }
}

/// Why a candidate block was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Below the character floor.
    TooShort,
    /// Below the word floor.
    TooFewWords,
    /// Too many embedded line breaks; looks like a navigation dump.
    TooManyLineBreaks,
    /// Too many URL-shaped tokens; looks like a link list.
    LinkHeavy,
    /// Contains a known boilerplate phrase.
    BoilerplateMatch,
    /// Contains a renderer artifact.
    ArtifactMatch,
}

/// Validate a candidate block for a field.
///
/// Every kind gets the block-level noise check; body candidates also get
/// the shape checks. An `Err` here sends the strategy chain on to its
/// next entry.
pub fn validate(text: &str, kind: FieldKind, opts: &Options) -> Result<(), Rejection> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Rejection::TooShort);
    }

    if kind == FieldKind::Body {
        validate_body_shape(text, opts)?;
    }

    check_noise_signature(text)
}

/// Shape checks for assembled body candidates.
fn validate_body_shape(text: &str, opts: &Options) -> Result<(), Rejection> {
    if text.chars().count() < opts.body_min_chars {
        return Err(Rejection::TooShort);
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < opts.body_min_words {
        return Err(Rejection::TooFewWords);
    }

    let breaks = text.matches('\n').count();
    if breaks > opts.body_max_line_breaks {
        return Err(Rejection::TooManyLineBreaks);
    }

    let url_tokens = tokens.iter().filter(|t| patterns::URL_TOKEN.is_match(t)).count();
    let ratio = url_tokens as f64 / tokens.len() as f64;
    if ratio > opts.max_url_token_ratio {
        return Err(Rejection::LinkHeavy);
    }

    Ok(())
}

/// Block-level denylist pass over the whole candidate.
fn check_noise_signature(text: &str) -> Result<(), Rejection> {
    let lower = text.to_lowercase();

    if patterns::PLACEHOLDER_LINES.contains(&lower.trim()) {
        return Err(Rejection::ArtifactMatch);
    }
    if patterns::HYDRATION_MARKERS.iter().any(|m| lower.contains(m)) {
        return Err(Rejection::ArtifactMatch);
    }
    if patterns::BOILERPLATE_PHRASES.iter().any(|p| lower.contains(p)) {
        return Err(Rejection::BoilerplateMatch);
    }

    Ok(())
}

/// Whether a block matches any suspicious-content signature.
///
/// Used as the final whole-record gate before a post record is released.
#[must_use]
pub fn has_noise_signature(text: &str) -> bool {
    check_noise_signature(text).is_err()
}
