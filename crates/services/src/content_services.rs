use std::sync::Arc;

use kql_core::Catalog;
use storage::repository::Storage;

use crate::catalog_store::CatalogStore;
use crate::config::{ContentConfig, ContentRoot};
use crate::content_manager::ContentManager;
use crate::error::ContentServicesError;
use crate::progress::{LocalProgressTracker, ProgressTracker};
use crate::sources::{CatalogSource, ContentSource, DirSource, HttpSource};

/// Assembles the catalog store and content manager for a page-rendering layer.
#[derive(Clone)]
pub struct ContentServices {
    catalog: Arc<CatalogStore>,
    content: Arc<ContentManager>,
}

impl ContentServices {
    /// Build services from configuration with the key-value progress tracker.
    ///
    /// # Errors
    ///
    /// Returns `ContentServicesError` if the progress database cannot be opened.
    pub async fn from_config(config: &ContentConfig) -> Result<Self, ContentServicesError> {
        let storage = match config.database_url.as_deref() {
            Some(url) => Storage::sqlite(url).await?,
            None => Storage::in_memory(),
        };
        let progress = Arc::new(LocalProgressTracker::new(
            Arc::clone(&storage.kv),
            config.namespace.clone(),
        ));
        Ok(Self::with_progress_tracker(config, progress))
    }

    /// Build services that delegate all progress calls to `progress`.
    #[must_use]
    pub fn with_progress_tracker(
        config: &ContentConfig,
        progress: Arc<dyn ProgressTracker>,
    ) -> Self {
        let (catalog_source, content_source) = sources_for(&config.root);
        Self::assemble(catalog_source, content_source, progress)
    }

    #[must_use]
    pub fn assemble(
        catalog_source: Arc<dyn CatalogSource>,
        content_source: Arc<dyn ContentSource>,
        progress: Arc<dyn ProgressTracker>,
    ) -> Self {
        let catalog = Arc::new(CatalogStore::new(catalog_source));
        let content = Arc::new(ContentManager::new(
            Arc::clone(&catalog),
            content_source,
            progress,
        ));
        Self { catalog, content }
    }

    /// Load the catalog; see [`CatalogStore::load`].
    pub async fn start(&self) -> Arc<Catalog> {
        self.catalog.load().await
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogStore> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentManager> {
        Arc::clone(&self.content)
    }
}

fn sources_for(root: &ContentRoot) -> (Arc<dyn CatalogSource>, Arc<dyn ContentSource>) {
    match root {
        ContentRoot::Http(url) => {
            let source = Arc::new(HttpSource::new(url.clone()));
            let catalog: Arc<dyn CatalogSource> = source.clone();
            let content: Arc<dyn ContentSource> = source;
            (catalog, content)
        }
        ContentRoot::Directory(path) => {
            let source = Arc::new(DirSource::new(path.clone()));
            let catalog: Arc<dyn CatalogSource> = source.clone();
            let content: Arc<dyn ContentSource> = source;
            (catalog, content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn missing_content_directory_still_serves_builtin_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentConfig::new(ContentRoot::Directory(PathBuf::from(dir.path())));
        let services = ContentServices::from_config(&config).await.unwrap();

        let catalog = services.start().await;
        assert_eq!(*catalog, Catalog::builtin());
        assert_eq!(
            services.content().session_progress("session-01").await,
            kql_core::SessionProgress {
                completed: 0,
                total: 8,
                percentage: 0
            }
        );
    }

    #[tokio::test]
    async fn sqlite_progress_survives_service_rebuilds() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("progress.db");
        let config = ContentConfig::new(ContentRoot::Directory(dir.path().to_path_buf()))
            .with_database_url(format!("sqlite://{}?mode=rwc", db.display()));

        let services = ContentServices::from_config(&config).await.unwrap();
        services.start().await;
        services
            .content()
            .mark_topic_complete("session-01", "part1")
            .await
            .unwrap();
        drop(services);

        let services = ContentServices::from_config(&config).await.unwrap();
        services.start().await;
        assert!(
            services
                .content()
                .is_topic_complete("session-01", "part1")
                .await
        );
    }
}
