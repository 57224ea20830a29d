//! Where catalogs and authored lesson content come from.

use async_trait::async_trait;

use kql_core::Catalog;

use crate::error::{CatalogSourceError, ContentSourceError};

mod dir;
mod http;
mod static_source;

pub use dir::DirSource;
pub use http::HttpSource;
pub use static_source::StaticContentSource;

/// Location of the catalog document relative to the content root.
pub const CATALOG_PATH: &str = "content/sessions-config.json";

/// Extension of authored topic documents.
pub const TOPIC_CONTENT_EXTENSION: &str = "html";

/// Relative path of the authored document for a topic.
#[must_use]
pub fn topic_content_path(session_id: &str, topic_id: &str) -> String {
    format!("content/{session_id}/{topic_id}.{TOPIC_CONTENT_EXTENSION}")
}

/// Ids are used as path segments; anything that could escape the content
/// directory is never looked up.
pub(crate) fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '?', '#'])
}

/// Provides the session/topic catalog document.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogSourceError` if the document is unreachable or malformed.
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogSourceError>;
}

/// Provides authored content for individual topics.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the authored document for a topic; `Ok(None)` when none exists.
    ///
    /// # Errors
    ///
    /// Returns `ContentSourceError` on transport or I/O failures.
    async fn fetch_topic_content(
        &self,
        session_id: &str,
        topic_id: &str,
    ) -> Result<Option<String>, ContentSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_paths_follow_content_layout() {
        assert_eq!(
            topic_content_path("session-01", "part1"),
            "content/session-01/part1.html"
        );
    }

    #[test]
    fn unsafe_segments_are_rejected() {
        assert!(is_safe_segment("testing-access"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment("a\\b"));
        assert!(!is_safe_segment("part1?x=1"));
    }
}
