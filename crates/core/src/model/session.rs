use serde::{Deserialize, Serialize};

use crate::model::{SessionId, Topic};

/// A top-level course unit with its ordered topics.
///
/// Sessions are immutable once a catalog has been loaded; the builder-style
/// `with_*` methods exist for assembling catalogs in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    estimated_time: String,
    #[serde(default)]
    prerequisites: Vec<SessionId>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    topics: Vec<Topic>,
}

impl Session {
    #[must_use]
    pub fn new(id: impl Into<SessionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            difficulty: String::new(),
            estimated_time: String::new(),
            prerequisites: Vec::new(),
            tags: Vec::new(),
            topics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    #[must_use]
    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = estimated_time.into();
        self
    }

    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SessionId>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    #[must_use]
    pub fn prerequisites(&self) -> &[SessionId] {
        &self.prerequisites
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Linear scan; sessions hold a handful of topics.
    #[must_use]
    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| *topic.id() == *topic_id)
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TopicType;

    #[test]
    fn parses_camel_case_document() {
        let session: Session = serde_json::from_str(
            r#"{
                "id": "session-02",
                "title": "Aggregations",
                "description": "Summarize data",
                "difficulty": "Intermediate",
                "estimatedTime": "3 hours",
                "prerequisites": ["session-01"],
                "tags": ["summarize"],
                "topics": [{"id": "intro", "title": "Intro", "type": "overview"}]
            }"#,
        )
        .unwrap();

        assert_eq!(session.estimated_time(), "3 hours");
        assert_eq!(session.prerequisites(), &[SessionId::new("session-01")]);
        assert_eq!(session.topic_count(), 1);
        assert_eq!(
            session.topic("intro").map(Topic::topic_type),
            Some(&TopicType::Overview)
        );
        assert!(session.topic("missing").is_none());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let session: Session =
            serde_json::from_str(r#"{"id": "s", "title": "Bare"}"#).unwrap();
        assert!(session.tags().is_empty());
        assert!(session.topics().is_empty());
        assert_eq!(session.description(), "");
    }
}
