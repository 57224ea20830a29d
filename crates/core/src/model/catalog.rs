use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::KEY_SEPARATOR;
use crate::model::{Session, SessionId, Topic, TopicId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Malformed(String),

    #[error("identifier cannot be empty")]
    EmptyId,

    #[error("identifier `{0}` contains the reserved separator '/'")]
    ReservedSeparator(String),

    #[error("duplicate session id `{0}`")]
    DuplicateSession(SessionId),

    #[error("duplicate topic id `{topic}` in session `{session}`")]
    DuplicateTopic { session: SessionId, topic: TopicId },
}

/// On-the-wire shape of `sessions-config.json`.
#[derive(Debug, Deserialize, Serialize)]
struct CatalogDocument {
    sessions: Vec<Session>,
}

/// The ordered set of sessions making up the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub(super) sessions: Vec<Session>,
}

impl Catalog {
    /// Build a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an id is empty or contains `/`, or if session
    /// ids (or topic ids within a session) are not unique.
    pub fn new(sessions: Vec<Session>) -> Result<Self, CatalogError> {
        let mut seen_sessions = HashSet::with_capacity(sessions.len());
        for session in &sessions {
            validate_id(session.id().as_str())?;
            if !seen_sessions.insert(session.id()) {
                return Err(CatalogError::DuplicateSession(session.id().clone()));
            }

            let mut seen_topics = HashSet::with_capacity(session.topic_count());
            for topic in session.topics() {
                validate_id(topic.id().as_str())?;
                if !seen_topics.insert(topic.id()) {
                    return Err(CatalogError::DuplicateTopic {
                        session: session.id().clone(),
                        topic: topic.id().clone(),
                    });
                }
            }
        }
        Ok(Self { sessions })
    }

    /// Parse and validate a catalog document (`{"sessions": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if the payload is not a valid document,
    /// or any validation error from [`Catalog::new`].
    pub fn from_json(payload: &[u8]) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_slice(payload)
            .map_err(|err| CatalogError::Malformed(err.to_string()))?;
        Self::new(document.sessions)
    }

    /// Serialize back into the document shape accepted by [`Catalog::from_json`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let document = CatalogDocument {
            sessions: self.sessions.clone(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|err| CatalogError::Malformed(err.to_string()))
    }

    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[must_use]
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions
            .iter()
            .find(|session| *session.id() == *session_id)
    }

    #[must_use]
    pub fn topic(&self, session_id: &str, topic_id: &str) -> Option<&Topic> {
        self.session(session_id)?.topic(topic_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn validate_id(id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::EmptyId);
    }
    if id.contains(KEY_SEPARATOR) {
        return Err(CatalogError::ReservedSeparator(id.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TopicType;

    fn session(id: &str, topics: &[&str]) -> Session {
        topics.iter().fold(Session::new(id, id.to_uppercase()), |s, t| {
            s.with_topic(Topic::new(*t, *t, TopicType::Tutorial))
        })
    }

    #[test]
    fn lookups_find_sessions_and_topics() {
        let catalog = Catalog::new(vec![
            session("s1", &["a", "b"]),
            session("s2", &["a", "c"]),
        ])
        .unwrap();

        for s in catalog.sessions() {
            assert_eq!(catalog.session(s.id().as_str()), Some(s));
            for t in s.topics() {
                assert_eq!(catalog.topic(s.id().as_str(), t.id().as_str()), Some(t));
            }
        }
        assert!(catalog.session("s3").is_none());
        assert!(catalog.topic("s1", "c").is_none());
        assert!(catalog.topic("s3", "a").is_none());
    }

    #[test]
    fn rejects_duplicate_session_ids() {
        let err = Catalog::new(vec![session("s1", &[]), session("s1", &[])]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSession(SessionId::new("s1")));
    }

    #[test]
    fn rejects_duplicate_topic_ids_within_a_session() {
        let err = Catalog::new(vec![session("s1", &["a", "a"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTopic { .. }));
    }

    #[test]
    fn rejects_separator_in_ids() {
        let err = Catalog::new(vec![session("s1", &["a/b"])]).unwrap_err();
        assert_eq!(err, CatalogError::ReservedSeparator("a/b".into()));
        assert_eq!(
            Catalog::new(vec![session(" ", &[])]).unwrap_err(),
            CatalogError::EmptyId
        );
    }

    #[test]
    fn malformed_documents_are_reported() {
        assert!(matches!(
            Catalog::from_json(b"{\"sessions\": 4}"),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(
            Catalog::from_json(b"not json"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let catalog = Catalog::new(vec![session("s2", &["x"]), session("s1", &["y"])]).unwrap();
        let json = catalog.to_json().unwrap();
        let parsed = Catalog::from_json(json.as_bytes()).unwrap();
        assert_eq!(parsed, catalog);
    }
}
