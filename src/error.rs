//! Error types for forum-extract.
//!
//! Missing fields and empty results are not errors: a strategy miss falls
//! through to the next strategy, an exhausted chain yields an absent field,
//! and a post page without usable content yields `Ok(None)`. The only fatal
//! condition is an input that cannot serve as a document at all.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not serve as a document handle (e.g. empty input).
    #[error("document unavailable: {0}")]
    DocumentUnavailable(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
