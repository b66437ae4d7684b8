//! # forum-extract
//!
//! Resilient content extraction for forum pages.
//!
//! This library recovers a small set of semantic fields (title, body
//! text, author, timestamp, and a bounded set of existing comments) from
//! arbitrarily-structured, partially-rendered forum HTML, with no stable
//! selector contract from the source. Each field is tried through an
//! ordered chain of strategies (named containers, generic containers,
//! whole-text scans, page metadata) and every candidate is routed through
//! a line classifier and a block validator, so extraction degrades
//! gracefully instead of failing outright.
//!
//! Rendering, navigation, and submission are the caller's business: this
//! crate is a pure in-process transform from an already-stable HTML
//! snapshot to structured records.
//!
//! ## Quick Start
//!
//! ```rust
//! use forum_extract::extract_detail;
//!
//! let html = r#"<html><body><article>
//!   <h1 class="post-title">Weekly Check-in</h1>
//!   <div class="post-content"><p>Let's discuss recent trends, what has
//!   everyone been working on this week? Looking forward to your
//!   thoughts.</p></div>
//! </article></body></html>"#;
//!
//! let detail = extract_detail(html, "https://forum.example/post/42")?;
//! if let Some(post) = detail {
//!     println!("{}: {}", post.title, post.content);
//! }
//! # Ok::<(), forum_extract::Error>(())
//! ```

mod chain;
mod error;
mod options;
mod record;

/// Line-level text classification.
pub mod classify;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Post-page extraction.
pub mod detail;

/// Listing-page extraction.
pub mod listing;

/// Compiled regex patterns and vocabulary tables.
pub mod patterns;

/// Site-level counter extraction.
pub mod stats;

/// Block-level candidate validation.
pub mod validate;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use record::{ForumStats, PostDetail, PostSummary};

use dom::Document;

fn document_from(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        return Err(Error::DocumentUnavailable("empty input".to_string()));
    }
    Ok(dom::parse(html))
}

/// Extracts post summaries from a listing page using default options.
///
/// Returns at most `limit` summaries in document order. An empty vec
/// means "no posts found" and is not an error; the only error is an
/// input that cannot serve as a document at all.
pub fn extract_listing(html: &str, limit: usize) -> Result<Vec<PostSummary>> {
    extract_listing_with_options(html, limit, &Options::default())
}

/// Extracts post summaries from a listing page with custom options.
pub fn extract_listing_with_options(
    html: &str,
    limit: usize,
    options: &Options,
) -> Result<Vec<PostSummary>> {
    let doc = document_from(html)?;
    Ok(listing::extract_listing_from_document(&doc, limit, options))
}

/// Extracts a full post record from a post page using default options.
///
/// Returns `Ok(None)` when no validated post body could be recovered;
/// callers must skip such pages rather than act on partial content.
pub fn extract_detail(html: &str, url: &str) -> Result<Option<PostDetail>> {
    extract_detail_with_options(html, url, &Options::default())
}

/// Extracts a full post record from a post page with custom options.
pub fn extract_detail_with_options(
    html: &str,
    url: &str,
    options: &Options,
) -> Result<Option<PostDetail>> {
    let doc = document_from(html)?;
    Ok(detail::extract_detail_from_document(&doc, url, options))
}

/// Extracts labeled site counters from a page.
pub fn extract_stats(html: &str) -> Result<ForumStats> {
    let doc = document_from(html)?;
    Ok(stats::extract_stats_from_document(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_document_unavailable() {
        assert!(matches!(
            extract_listing("", 10),
            Err(Error::DocumentUnavailable(_))
        ));
        assert!(matches!(
            extract_detail("   \n  ", "/post/1"),
            Err(Error::DocumentUnavailable(_))
        ));
        assert!(matches!(extract_stats(""), Err(Error::DocumentUnavailable(_))));
    }
}
