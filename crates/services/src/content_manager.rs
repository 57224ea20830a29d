use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use kql_core::model::KEY_SEPARATOR;
use kql_core::{CONTENT_NOT_FOUND, SessionProgress, render_placeholder};

use crate::catalog_store::CatalogStore;
use crate::error::ProgressError;
use crate::progress::ProgressTracker;
use crate::sources::ContentSource;

/// The catalog has no entry for the requested pair.
struct Unresolved;

/// Resolves renderable content for topics and fronts the progress tracker.
///
/// Resolution order: memoized content, then the content source, then a
/// placeholder synthesized from catalog metadata. Each key is materialized
/// at most once per manager; concurrent requests for the same key wait on
/// the first one. Nothing is evicted.
pub struct ContentManager {
    catalog: Arc<CatalogStore>,
    content: Arc<dyn ContentSource>,
    progress: Arc<dyn ProgressTracker>,
    cache: Mutex<HashMap<String, Arc<OnceCell<String>>>>,
}

impl ContentManager {
    #[must_use]
    pub fn new(
        catalog: Arc<CatalogStore>,
        content: Arc<dyn ContentSource>,
        progress: Arc<dyn ProgressTracker>,
    ) -> Self {
        Self {
            catalog,
            content,
            progress,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Content for a topic. Always returns displayable markup: authored
    /// content, a placeholder, or [`CONTENT_NOT_FOUND`] when the catalog has
    /// no such topic (that last case is not memoized).
    pub async fn resolve_content(&self, session_id: &str, topic_id: &str) -> String {
        if session_id.contains(KEY_SEPARATOR) || topic_id.contains(KEY_SEPARATOR) {
            return CONTENT_NOT_FOUND.to_owned();
        }
        let key = cache_key(session_id, topic_id);
        let cell = {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(cache.entry(key.clone()).or_default())
        };

        match cell
            .get_or_try_init(|| self.materialize(session_id, topic_id))
            .await
        {
            Ok(content) => content.clone(),
            Err(Unresolved) => {
                // Waiters still hold the cell and may yet fill it.
                let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
                if cache.get(&key).is_some_and(|current| {
                    Arc::ptr_eq(current, &cell)
                        && !current.initialized()
                        && Arc::strong_count(&cell) == 2
                }) {
                    cache.remove(&key);
                }
                CONTENT_NOT_FOUND.to_owned()
            }
        }
    }

    /// Number of memoized entries.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    async fn materialize(&self, session_id: &str, topic_id: &str) -> Result<String, Unresolved> {
        match self.content.fetch_topic_content(session_id, topic_id).await {
            Ok(Some(content)) => {
                debug!(session_id, topic_id, "serving authored content");
                return Ok(content);
            }
            Ok(None) => debug!(session_id, topic_id, "no authored content"),
            Err(err) => debug!(session_id, topic_id, error = %err, "authored content unavailable"),
        }

        let catalog = self.catalog.snapshot().ok_or(Unresolved)?;
        let session = catalog.session(session_id).ok_or(Unresolved)?;
        let topic = session.topic(topic_id).ok_or(Unresolved)?;
        debug!(session_id, topic_id, "rendering placeholder content");
        Ok(render_placeholder(session, topic))
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if the tracker cannot persist the change.
    pub async fn mark_topic_complete(
        &self,
        session_id: &str,
        topic_id: &str,
    ) -> Result<(), ProgressError> {
        self.progress.mark_complete(session_id, topic_id).await
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if the tracker cannot persist the change.
    pub async fn mark_topic_incomplete(
        &self,
        session_id: &str,
        topic_id: &str,
    ) -> Result<(), ProgressError> {
        self.progress.mark_incomplete(session_id, topic_id).await
    }

    /// Tracker failures read as "not complete".
    pub async fn is_topic_complete(&self, session_id: &str, topic_id: &str) -> bool {
        match self.progress.is_complete(session_id, topic_id).await {
            Ok(complete) => complete,
            Err(err) => {
                warn!(session_id, topic_id, error = %err, "progress lookup failed");
                false
            }
        }
    }

    /// Completion for a session, counting only topics present in the catalog.
    /// Unknown sessions and sessions without topics report all zeroes.
    pub async fn session_progress(&self, session_id: &str) -> SessionProgress {
        let Some(catalog) = self.catalog.snapshot() else {
            return SessionProgress::default();
        };
        let Some(session) = catalog.session(session_id) else {
            return SessionProgress::default();
        };
        if session.topic_count() == 0 {
            return SessionProgress::default();
        }

        let completed = match self.progress.completed_topics(session_id).await {
            Ok(ids) => ids
                .iter()
                .filter(|id| session.topic(id.as_str()).is_some())
                .count(),
            Err(err) => {
                warn!(session_id, error = %err, "progress lookup failed");
                0
            }
        };
        SessionProgress::from_counts(completed, session.topic_count())
    }
}

fn cache_key(session_id: &str, topic_id: &str) -> String {
    format!("{session_id}{KEY_SEPARATOR}{topic_id}")
}
