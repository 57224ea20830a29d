use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use kql_core::Catalog;

use super::{CATALOG_PATH, CatalogSource, ContentSource, is_safe_segment, topic_content_path};
use crate::error::{CatalogSourceError, ContentSourceError};

/// Reads the catalog and topic documents from a web server.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// `base_url` is the site root; a trailing slash is added when missing so
    /// relative paths resolve beneath it.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a path relative to the site root.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn url_for(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogSourceError> {
        let url = self.url_for(CATALOG_PATH)?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogSourceError::HttpStatus(response.status()));
        }
        let body = response.bytes().await?;
        Ok(Catalog::from_json(&body)?)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch_topic_content(
        &self,
        session_id: &str,
        topic_id: &str,
    ) -> Result<Option<String>, ContentSourceError> {
        if !is_safe_segment(session_id) || !is_safe_segment(topic_id) {
            return Ok(None);
        }
        let url = self.url_for(&topic_content_path(session_id, topic_id))?;
        debug!(url = url.as_str(), "fetching topic content");

        let response = self.client.get(url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(Some(response.text().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(ContentSourceError::HttpStatus(status)),
        }
    }
}
