//! Compiled regex patterns and vocabulary tables for extraction.
//!
//! All regexes are compiled once at startup using `LazyLock`. The denylist
//! and allowlist vocabularies are declared here as named constant tables,
//! one per concern, so they can be unit-tested independently of the
//! extraction logic that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Line Denylists (classifier)
// =============================================================================

/// Navigational and structural lines, matched whole, case-insensitive.
///
/// Lines consisting only of one of these are site chrome, never content.
pub static NOISE_LINES: &[&str] = &[
    "login",
    "log in",
    "sign in",
    "signin",
    "register",
    "sign up",
    "signup",
    "logout",
    "log out",
    "search",
    "home",
    "explore",
    "dashboard",
    "notifications",
    "messages",
    "settings",
    "profile",
    "categories",
    "all categories",
    "latest",
    "trending",
    "popular",
    "new post",
    "create post",
    "submit",
    "reply",
    "share",
    "report",
    "edit",
    "delete",
    "read more",
    "load more",
    "show more",
    "next",
    "previous",
    "next page",
    "previous page",
    "privacy policy",
    "terms of service",
    "terms of use",
    "cookie policy",
    "about",
    "contact",
    "help",
    "faq",
];

/// Placeholder lines left behind by client-side renderers, matched whole.
pub static PLACEHOLDER_LINES: &[&str] = &[
    "undefined",
    "null",
    "nan",
    "[object object]",
    "loading",
    "loading...",
    "...",
    "\u{2026}",
];

/// Substrings indicating framework internals leaked into visible text.
///
/// Matched case-insensitively anywhere in a line or block; any hit means
/// the renderer exposed internal state, not human-authored content.
pub static HYDRATION_MARKERS: &[&str] = &[
    "__next_data__",
    "self.__next_f",
    "__nuxt__",
    "data-reactroot",
    "data-react-helmet",
    "data-server-rendered",
    "dangerouslysetinnerhtml",
    "[object object]",
    "{{",
    "}}",
    "<!--$",
    "data-v-",
];

/// Boilerplate phrases checked against whole candidate blocks.
///
/// The classifier rejects these line by line; this table exists for the
/// second, block-level pass, because boilerplate can be distributed across
/// multiple otherwise-valid-looking lines.
pub static BOILERPLATE_PHRASES: &[&str] = &[
    "a community based around",
    "community based around",
    "join the conversation",
    "log in to reply",
    "sign in to comment",
    "be the first to comment",
    "powered by",
    "all rights reserved",
    "terms of service",
    "privacy policy",
    "cookie policy",
];

/// Vocabulary that disqualifies a line as a title candidate.
pub static NON_TITLE_TERMS: &[&str] = &[
    "comments",
    "replies",
    "share",
    "report",
    "upvote",
    "downvote",
    "read more",
    "posted by",
    "sort by",
    "oldest",
    "newest",
    "sign in",
    "sign up",
];

/// Discussion-indicative vocabulary marking a line as conversational.
pub static DISCUSSION_TERMS: &[&str] = &[
    "i ",
    "we ",
    "you ",
    "anyone",
    "everyone",
    "thoughts",
    "think",
    "question",
    "help",
    "thanks",
    "wondering",
    "discuss",
    "what",
    "how",
    "why",
    "recommend",
    "advice",
    "looking for",
    "?",
];

// =============================================================================
// Line-Shape Patterns (classifier)
// =============================================================================

/// Score/vote counter lines, e.g. "12 score", "3 points".
pub static SCORE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s+(?:score|points?|upvotes?|votes?|likes?)$").expect("SCORE_LINE regex")
});

/// Bare date lines, e.g. "July 30, 2026".
pub static DATE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}$")
        .expect("DATE_LINE regex")
});

/// Bare relative-time lines, e.g. "2 hours ago".
pub static RELATIVE_TIME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\d+\s+(?:second|minute|hour|day|week|month|year)s?\s+ago|just now|yesterday)$")
        .expect("RELATIVE_TIME_LINE regex")
});

/// Breadcrumb separator characters.
pub static BREADCRUMB_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{203a}\u{bb}]").expect("BREADCRUMB_SEPARATOR regex"));

// =============================================================================
// Field Extraction Patterns
// =============================================================================

/// Byline prefixes stripped from author candidates.
pub static BYLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:by|posted by|written by|author)[:\s]+").expect("BYLINE_PREFIX regex")
});

/// Byline lines, capturing the author segment.
pub static BYLINE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:by|posted by|written by|author)[:\s]+([^,\n]+)$").expect("BYLINE_TEXT regex")
});

/// Date and relative-time expressions found inside arbitrary text.
pub static DATE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)(
            \d{4}-\d{2}-\d{2}(?:[T\ ]\d{2}:\d{2}(?::\d{2})?(?:Z|[+-]\d{2}:?\d{2})?)?
            | (?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}
            | \d{1,2}/\d{1,2}/\d{2,4}
            | \d+\s+(?:second|minute|hour|day|week|month|year)s?\s+ago
            | just\ now
            | yesterday
        )",
    )
    .expect("DATE_TEXT regex")
});

/// Whitespace-delimited tokens that are URLs.
pub static URL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:https?://|www\.)\S+$").expect("URL_TOKEN regex"));

/// Labeled numeric counters, e.g. "1,234 posts", "56 members".
pub static STAT_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,3}(?:,\d{3})+|\d+)\s*(posts?|topics?|threads?|members?|users?|comments?|repl(?:y|ies)|online)\b")
        .expect("STAT_COUNTER regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Separators used between a page title and the trailing site name.
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[\|\u{2013}\u{2014}\u{b7}]\s*|\s+-\s+").expect("TITLE_SEPARATOR regex")
});

/// Class/id fragments identifying site chrome containers.
pub static CHROME_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^|[\s_-])(nav|navbar|navigation|menu|sidebar|breadcrumbs?|masthead|topbar|toolbar|banner|site-header|site-footer)([\s_-]|$)",
    )
    .expect("CHROME_CLASS regex")
});

// =============================================================================
// CSS Selector Tables
// =============================================================================

/// Named post-body containers, most specific first.
pub static BODY_CONTAINER_SELECTORS: &[&str] = &[
    "[itemprop='articleBody']",
    ".post-content",
    ".post-body",
    ".post-text",
    ".entry-content",
    ".message-body",
    ".topic-body",
    ".thread-content",
    ".content-body",
];

/// Generic content containers tried when no named container matches.
pub static GENERIC_CONTAINER_SELECTORS: &[&str] = &["article", "main", "[role='main']"];

/// Named title containers, tried before bare headings.
pub static TITLE_CONTAINER_SELECTORS: &[&str] = &[
    "[itemprop='headline']",
    ".post-title",
    ".topic-title",
    ".thread-title",
    ".entry-title",
];

/// Heading elements scanned for a title.
pub static HEADING_SELECTORS: &[&str] = &["h1", "h2"];

/// Author containers, most specific first.
pub static AUTHOR_SELECTORS: &[&str] = &[
    "[rel='author']",
    "[itemprop='author']",
    ".post-author",
    ".author",
    ".byline",
    ".username",
    ".user-name",
];

/// Timestamp containers, most specific first.
pub static TIMESTAMP_SELECTORS: &[&str] = &[
    "[itemprop='datePublished']",
    ".post-date",
    ".timestamp",
    ".date",
    "time",
];

/// Comment containers; each entry is one collection pass.
pub static COMMENT_SELECTORS: &[&str] = &[
    ".comment-body",
    ".comment-content",
    ".comment-text",
    ".comment",
    ".reply-body",
    "[class*='comment'] p",
];

/// Containers that hold labeled site counters.
pub static STAT_CONTAINER_SELECTORS: &[&str] =
    &[".stats", ".forum-stats", ".community-stats", ".stat", ".counter"];

/// Repeating listing-card containers, most specific first.
pub static CARD_SELECTORS: &[&str] = &[
    ".post-card",
    ".post-item",
    ".topic-item",
    ".thread-item",
    ".card",
    "article",
];

/// Headings searched inside a card or anchor for the post title.
pub const CARD_HEADING_SELECTOR: &str = "h1, h2, h3, h4";
