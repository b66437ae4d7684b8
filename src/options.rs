//! Configuration options for forum page extraction.
//!
//! The `Options` struct holds the tuning thresholds used by the classifier,
//! the validator, and the per-field strategy chains. Several of these
//! (comment cap, preview window) are tuning constants rather than hard
//! contracts, so they are exposed here instead of being baked in.

/// Configuration options for extraction behavior.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use forum_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_comments: 10,
///     base_url: Some("https://forum.example".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum character count for a title line.
    ///
    /// Default: `10`
    pub title_min_chars: usize,

    /// Maximum character count for a title candidate.
    ///
    /// Default: `100`
    pub title_max_chars: usize,

    /// Word count range for titles recovered from wild page text.
    ///
    /// Structured titles (headings, page metadata) are not held to the
    /// lower bound; single-word forum titles like "Introductions" are
    /// common there.
    ///
    /// Defaults: `2` / `15`
    pub title_min_words: usize,
    /// See [`Options::title_min_words`].
    pub title_max_words: usize,

    /// Minimum character count for a listing preview line.
    ///
    /// Default: `20`
    pub preview_min_chars: usize,

    /// Maximum character count kept for a listing preview.
    ///
    /// Longer previews are truncated, not rejected.
    ///
    /// Default: `300`
    pub preview_max_chars: usize,

    /// Minimum character count for a single body line.
    ///
    /// Default: `25`
    pub body_line_min_chars: usize,

    /// Minimum word count for a single body line.
    ///
    /// Default: `5`
    pub body_line_min_words: usize,

    /// Number of accepted lines concatenated by the wild-text body scan.
    ///
    /// Default: `5`
    pub body_scan_lines: usize,

    /// Minimum character count for an assembled body.
    ///
    /// Default: `100`
    pub body_min_chars: usize,

    /// Minimum word count for an assembled body.
    ///
    /// Default: `15`
    pub body_min_words: usize,

    /// Maximum embedded line breaks in a body candidate.
    ///
    /// More than this signals a navigation dump rather than prose.
    ///
    /// Default: `50`
    pub body_max_line_breaks: usize,

    /// Maximum fraction of whitespace-delimited tokens that may look like
    /// URLs before a body candidate is treated as a link list.
    ///
    /// Default: `0.1`
    pub max_url_token_ratio: f64,

    /// Character floor above which a line counts as body prose even
    /// without discussion-indicative vocabulary.
    ///
    /// Default: `80`
    pub conversational_min_chars: usize,

    /// Character bounds for an individual comment.
    ///
    /// Defaults: `10` / `500`
    pub comment_min_chars: usize,
    /// See [`Options::comment_min_chars`].
    pub comment_max_chars: usize,

    /// Maximum number of comments collected per post, across all selector
    /// passes combined.
    ///
    /// Default: `5`
    pub max_comments: usize,

    /// Maximum character count for an author name.
    ///
    /// Default: `60`
    pub author_max_chars: usize,

    /// Maximum word count for an author name.
    ///
    /// Default: `4`
    pub author_max_words: usize,

    /// Path markers identifying post links in a listing page.
    ///
    /// An anchor is treated as a post link when its href contains any of
    /// these markers.
    ///
    /// Default: `/post/`, `/posts/`, `/thread/`, `/threads/`, `/topic/`, `/t/`
    pub post_link_markers: Vec<String>,

    /// Base URL used to resolve relative listing links.
    ///
    /// When unset, relative links are passed through unchanged.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Extra denylist lines (e.g. the forum's own name) rejected by the
    /// classifier in addition to the built-in vocabulary.
    ///
    /// Matched as whole lines, case-insensitive.
    ///
    /// Default: empty
    pub site_terms: Vec<String>,

    /// Number of element classes and links sampled into the diagnostics
    /// log when a listing scan comes back empty.
    ///
    /// Default: `8`
    pub diagnostic_sample: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            title_min_chars: 10,
            title_max_chars: 100,
            title_min_words: 2,
            title_max_words: 15,
            preview_min_chars: 20,
            preview_max_chars: 300,
            body_line_min_chars: 25,
            body_line_min_words: 5,
            body_scan_lines: 5,
            body_min_chars: 100,
            body_min_words: 15,
            body_max_line_breaks: 50,
            max_url_token_ratio: 0.1,
            conversational_min_chars: 80,
            comment_min_chars: 10,
            comment_max_chars: 500,
            max_comments: 5,
            author_max_chars: 60,
            author_max_words: 4,
            post_link_markers: vec![
                "/post/".to_string(),
                "/posts/".to_string(),
                "/thread/".to_string(),
                "/threads/".to_string(),
                "/topic/".to_string(),
                "/t/".to_string(),
            ],
            base_url: None,
            site_terms: Vec::new(),
            diagnostic_sample: 8,
        }
    }
}

impl Options {
    /// Whether an href points at a post page.
    #[must_use]
    pub fn is_post_link(&self, href: &str) -> bool {
        if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
            return false;
        }
        self.post_link_markers.iter().any(|m| href.contains(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.title_min_chars, 10);
        assert_eq!(opts.title_max_chars, 100);
        assert_eq!(opts.preview_min_chars, 20);
        assert_eq!(opts.preview_max_chars, 300);
        assert_eq!(opts.body_line_min_words, 5);
        assert_eq!(opts.body_min_chars, 100);
        assert_eq!(opts.comment_min_chars, 10);
        assert_eq!(opts.comment_max_chars, 500);
        assert_eq!(opts.max_comments, 5);
        assert!((opts.max_url_token_ratio - 0.1).abs() < f64::EPSILON);
        assert!(opts.base_url.is_none());
        assert!(opts.site_terms.is_empty());
    }

    #[test]
    fn test_post_link_detection() {
        let opts = Options::default();

        assert!(opts.is_post_link("/post/42"));
        assert!(opts.is_post_link("https://forum.example/threads/weekly-check-in.91"));
        assert!(opts.is_post_link("/t/rust-ownership/17"));
        assert!(!opts.is_post_link("/login"));
        assert!(!opts.is_post_link("#comments"));
        assert!(!opts.is_post_link("javascript:void(0)"));
        assert!(!opts.is_post_link(""));
    }

    #[test]
    fn test_custom_markers() {
        let opts = Options {
            post_link_markers: vec!["/d/".to_string()],
            ..Options::default()
        };

        assert!(opts.is_post_link("/d/123-some-discussion"));
        assert!(!opts.is_post_link("/post/42"));
    }
}
