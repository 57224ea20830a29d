use std::collections::HashMap;

use async_trait::async_trait;

use super::ContentSource;
use crate::error::ContentSourceError;

/// Authored content compiled into the binary or assembled in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticContentSource {
    entries: HashMap<(String, String), String>,
}

impl StaticContentSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_topic(
        mut self,
        session_id: impl Into<String>,
        topic_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.insert(session_id, topic_id, content);
        self
    }

    pub fn insert(
        &mut self,
        session_id: impl Into<String>,
        topic_id: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.entries
            .insert((session_id.into(), topic_id.into()), content.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn fetch_topic_content(
        &self,
        session_id: &str,
        topic_id: &str,
    ) -> Result<Option<String>, ContentSourceError> {
        Ok(self
            .entries
            .get(&(session_id.to_owned(), topic_id.to_owned()))
            .cloned())
    }
}
