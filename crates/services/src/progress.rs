use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use kql_core::TopicId;
use storage::repository::KeyValueStore;

use crate::error::ProgressError;

/// Default key namespace for persisted progress.
pub const DEFAULT_NAMESPACE: &str = "kql";

/// Owner of durable per-topic completion state.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Mark a topic complete. Marking twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the state cannot be persisted.
    async fn mark_complete(&self, session_id: &str, topic_id: &str) -> Result<(), ProgressError>;

    /// Mark a topic incomplete. Unmarking an incomplete topic is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the state cannot be persisted.
    async fn mark_incomplete(&self, session_id: &str, topic_id: &str)
    -> Result<(), ProgressError>;

    /// # Errors
    ///
    /// Returns `ProgressError` if the state cannot be read.
    async fn is_complete(&self, session_id: &str, topic_id: &str) -> Result<bool, ProgressError>;

    /// Completed topic ids for a session, without duplicates, in completion order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the state cannot be read.
    async fn completed_topics(&self, session_id: &str) -> Result<Vec<TopicId>, ProgressError>;
}

/// Progress persisted in a key-value store as one JSON array of topic ids
/// per session, under `<namespace>-progress-<session id>`.
///
/// Every mutation rewrites the whole list. A value that is not a JSON array
/// of strings reads as an empty list.
pub struct LocalProgressTracker {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
    write_lock: Mutex<()>,
}

impl LocalProgressTracker {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn with_default_namespace(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_NAMESPACE)
    }

    #[must_use]
    pub fn storage_key(&self, session_id: &str) -> String {
        format!("{}-progress-{session_id}", self.namespace)
    }

    async fn read_list(&self, key: &str) -> Result<Vec<String>, ProgressError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => Ok(list),
            Err(err) => {
                warn!(key, error = %err, "ignoring malformed progress data");
                Ok(Vec::new())
            }
        }
    }

    async fn write_list(&self, key: &str, list: &[String]) -> Result<(), ProgressError> {
        let encoded = serde_json::to_string(list)?;
        self.store.set(key, &encoded).await?;
        Ok(())
    }
}

#[async_trait]
impl ProgressTracker for LocalProgressTracker {
    async fn mark_complete(&self, session_id: &str, topic_id: &str) -> Result<(), ProgressError> {
        let _guard = self.write_lock.lock().await;
        let key = self.storage_key(session_id);
        let mut list = self.read_list(&key).await?;
        if !list.iter().any(|id| id == topic_id) {
            list.push(topic_id.to_owned());
            self.write_list(&key, &list).await?;
        }
        Ok(())
    }

    async fn mark_incomplete(
        &self,
        session_id: &str,
        topic_id: &str,
    ) -> Result<(), ProgressError> {
        let _guard = self.write_lock.lock().await;
        let key = self.storage_key(session_id);
        let mut list = self.read_list(&key).await?;
        let before = list.len();
        list.retain(|id| id != topic_id);
        if list.len() != before {
            self.write_list(&key, &list).await?;
        }
        Ok(())
    }

    async fn is_complete(&self, session_id: &str, topic_id: &str) -> Result<bool, ProgressError> {
        let list = self.read_list(&self.storage_key(session_id)).await?;
        Ok(list.iter().any(|id| id == topic_id))
    }

    async fn completed_topics(&self, session_id: &str) -> Result<Vec<TopicId>, ProgressError> {
        let list = self.read_list(&self.storage_key(session_id)).await?;
        let mut completed: Vec<TopicId> = Vec::with_capacity(list.len());
        for id in list {
            if !completed.iter().any(|seen| *seen == *id.as_str()) {
                completed.push(TopicId::from(id));
            }
        }
        Ok(completed)
    }
}
