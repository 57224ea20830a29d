use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use kql_core::{Catalog, SearchRecord, Session, Topic, build_search_index};

use crate::sources::CatalogSource;

/// Holds the current catalog and answers read-only lookups against it.
///
/// `load` never fails: an unreachable or malformed document is replaced by
/// [`Catalog::builtin`]. Reloading swaps the whole catalog.
pub struct CatalogStore {
    source: Arc<dyn CatalogSource>,
    current: RwLock<Option<Arc<Catalog>>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            current: RwLock::new(None),
        }
    }

    /// Fetch the catalog (or fall back to the built-in one) and make it current.
    pub async fn load(&self) -> Arc<Catalog> {
        let catalog = match self.source.fetch_catalog().await {
            Ok(catalog) => {
                info!(sessions = catalog.len(), "sessions catalog loaded");
                catalog
            }
            Err(err) => {
                warn!(error = %err, "failed to load sessions catalog, using built-in catalog");
                Catalog::builtin()
            }
        };

        let catalog = Arc::new(catalog);
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&catalog));
        catalog
    }

    /// Alias of [`CatalogStore::load`]; the previous catalog is replaced, not merged.
    pub async fn reload(&self) -> Arc<Catalog> {
        self.load().await
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Catalog>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Sessions in catalog order; empty before the first load.
    #[must_use]
    pub fn sessions(&self) -> Vec<Session> {
        self.snapshot()
            .map(|catalog| catalog.sessions().to_vec())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn session(&self, session_id: &str) -> Option<Session> {
        self.snapshot()?.session(session_id).cloned()
    }

    #[must_use]
    pub fn topic(&self, session_id: &str, topic_id: &str) -> Option<Topic> {
        self.snapshot()?.topic(session_id, topic_id).cloned()
    }

    /// Recomputed on every call.
    #[must_use]
    pub fn search_index(&self) -> Vec<SearchRecord> {
        self.snapshot()
            .map(|catalog| build_search_index(&catalog))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kql_core::TopicType;
    use std::sync::Mutex;

    use crate::error::CatalogSourceError;

    /// Serves queued responses in order.
    struct ScriptedSource {
        responses: Mutex<Vec<Result<Catalog, CatalogSourceError>>>,
    }

    impl ScriptedSource {
        fn new(mut responses: Vec<Result<Catalog, CatalogSourceError>>) -> Arc<Self> {
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
            })
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        async fn fetch_catalog(&self) -> Result<Catalog, CatalogSourceError> {
            self.responses
                .lock()
                .unwrap()
                .pop()
                .expect("unexpected catalog fetch")
        }
    }

    fn custom_catalog() -> Catalog {
        Catalog::new(vec![
            Session::new("session-02", "Aggregations")
                .with_topic(Topic::new("summarize", "Summarize", TopicType::Tutorial)),
            Session::new("session-03", "Empty"),
        ])
        .unwrap()
    }

    fn io_failure() -> CatalogSourceError {
        CatalogSourceError::Io(std::io::Error::other("connection refused"))
    }

    #[test]
    fn empty_before_first_load() {
        let store = CatalogStore::new(ScriptedSource::new(vec![]));
        assert!(!store.is_loaded());
        assert!(store.sessions().is_empty());
        assert!(store.session("session-01").is_none());
        assert!(store.search_index().is_empty());
    }

    #[tokio::test]
    async fn falls_back_to_builtin_catalog_on_failure() {
        let store = CatalogStore::new(ScriptedSource::new(vec![Err(io_failure())]));
        let catalog = store.load().await;

        assert_eq!(*catalog, Catalog::builtin());
        let sessions = store.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id().as_str(), "session-01");
        assert_eq!(sessions[0].topic_count(), 8);
    }

    #[tokio::test]
    async fn lookups_use_loaded_catalog() {
        let store = CatalogStore::new(ScriptedSource::new(vec![Ok(custom_catalog())]));
        store.load().await;

        assert_eq!(
            store.session("session-02").map(|s| s.title().to_owned()),
            Some("Aggregations".to_owned())
        );
        assert!(store.topic("session-02", "summarize").is_some());
        assert!(store.topic("session-03", "summarize").is_none());
        assert!(store.topic("missing", "summarize").is_none());
        assert!(store.session("session-01").is_none());
        assert_eq!(store.search_index().len(), 3);
    }

    #[tokio::test]
    async fn reload_replaces_rather_than_merges() {
        let store = CatalogStore::new(ScriptedSource::new(vec![
            Ok(custom_catalog()),
            Err(io_failure()),
        ]));
        store.load().await;
        let first = store.snapshot().unwrap();

        store.reload().await;
        let ids: Vec<String> = store
            .sessions()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(ids, ["session-01"]);
        // Earlier snapshots stay intact.
        assert_eq!(first.len(), 2);
    }
}
