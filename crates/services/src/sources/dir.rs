use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use kql_core::Catalog;

use super::{CATALOG_PATH, CatalogSource, ContentSource, is_safe_segment, topic_content_path};
use crate::error::{CatalogSourceError, ContentSourceError};

/// Reads the catalog and topic documents from a directory laid out like the
/// deployed site (`<root>/content/...`).
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl CatalogSource for DirSource {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogSourceError> {
        let payload = tokio::fs::read(self.root.join(CATALOG_PATH)).await?;
        Ok(Catalog::from_json(&payload)?)
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch_topic_content(
        &self,
        session_id: &str,
        topic_id: &str,
    ) -> Result<Option<String>, ContentSourceError> {
        if !is_safe_segment(session_id) || !is_safe_segment(topic_id) {
            return Ok(None);
        }
        let path = self.root.join(topic_content_path(session_id, topic_id));
        debug!(path = %path.display(), "reading topic content");

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
