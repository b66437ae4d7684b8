//! Output types for extraction results.
//!
//! These records are the crate's only products: lightweight summaries from
//! listing pages, full records from post pages, and site-level counters.
//! All of them are plain data, created and discarded within one extraction
//! call; downstream layers consume them as context for generation and
//! submission and never hand them back.

use serde::{Deserialize, Serialize};

/// A lightweight post entry recovered from a listing page.
///
/// Invariant: `title` and `link` are both non-empty; candidates that fail
/// this are discarded during listing extraction, never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Post title.
    pub title: String,

    /// Post link, relative or absolute. Resolved against
    /// `Options::base_url` when one is configured.
    pub link: String,

    /// Bounded preview of the post body, when the card exposed one.
    pub content_preview: Option<String>,

    /// Author name, when the card exposed one.
    pub author: Option<String>,
}

/// A full post record recovered from a single post page.
///
/// Invariant: `content` is non-empty and has passed validation; a post
/// whose body cannot be recovered yields no record at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    /// Post title. Empty when every title strategy came up dry.
    pub title: String,

    /// Post body text.
    pub content: String,

    /// Author name, when one was found.
    pub author: Option<String>,

    /// Publication timestamp, free-form (normalized when recognizable).
    pub timestamp: Option<String>,

    /// Existing comments, deduplicated, in document order, capped at
    /// `Options::max_comments`.
    pub comments: Vec<String>,

    /// The URL this record was extracted from.
    pub source_url: String,
}

/// Site-level counters recovered from labeled stat elements or page text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumStats {
    /// Post/topic/thread count.
    pub posts: Option<u64>,

    /// Member/user count.
    pub members: Option<u64>,

    /// Comment/reply count.
    pub comments: Option<u64>,

    /// Users currently online.
    pub online: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_stable_shape() {
        let summary = PostSummary {
            title: "Weekly Check-in".to_string(),
            link: "/post/42".to_string(),
            content_preview: None,
            author: Some("alice".to_string()),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""title":"Weekly Check-in""#));
        assert!(json.contains(r#""link":"/post/42""#));
        assert!(json.contains(r#""author":"alice""#));
    }

    #[test]
    fn test_detail_round_trips() {
        let detail = PostDetail {
            title: "Weekly Check-in".to_string(),
            content: "Body text".to_string(),
            author: None,
            timestamp: Some("2026-07-30 10:00".to_string()),
            comments: vec!["First".to_string()],
            source_url: "https://forum.example/post/42".to_string(),
        };

        let json = serde_json::to_string(&detail).unwrap();
        let back: PostDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detail);
    }

    #[test]
    fn test_stats_default_is_all_absent() {
        let stats = ForumStats::default();
        assert!(stats.posts.is_none());
        assert!(stats.members.is_none());
        assert!(stats.comments.is_none());
        assert!(stats.online.is_none());
    }
}
