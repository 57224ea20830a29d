//! Flat search records derived from the catalog.
use serde::{Deserialize, Serialize};

use crate::model::{Catalog, Session, Topic};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String, // description + tags
    pub tags: Vec<String>,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecord {
    pub id: String,
    pub session_id: String,
    pub title: String,
    pub description: String,
    pub content: String, // title + description + type
    pub session_title: String,
    pub topic_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// One searchable entry; self-contained so matching never consults the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchRecord {
    Session(SessionRecord),
    Topic(TopicRecord),
}

impl SearchRecord {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Session(record) => &record.id,
            Self::Topic(record) => &record.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Session(record) => &record.title,
            Self::Topic(record) => &record.title,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Session(record) => &record.content,
            Self::Topic(record) => &record.content,
        }
    }

    /// Case-insensitive match: every whitespace-separated term of `query`
    /// must appear in the title or searchable content.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let haystack = format!("{} {}", self.title(), self.content()).to_lowercase();
        let mut terms = query.split_whitespace().peekable();
        if terms.peek().is_none() {
            return false;
        }
        terms.all(|term| haystack.contains(&term.to_lowercase()))
    }
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            title: session.title().to_owned(),
            description: session.description().to_owned(),
            content: format!("{} {}", session.description(), session.tags().join(" ")),
            tags: session.tags().to_vec(),
            difficulty: session.difficulty().to_owned(),
        }
    }
}

fn topic_record(session: &Session, topic: &Topic) -> TopicRecord {
    let description = topic.description().unwrap_or_default();
    TopicRecord {
        id: topic.id().to_string(),
        session_id: session.id().to_string(),
        title: topic.title().to_owned(),
        description: description.to_owned(),
        content: format!("{} {} {}", topic.title(), description, topic.topic_type()),
        session_title: session.title().to_owned(),
        topic_type: topic.topic_type().to_string(),
        duration: topic.duration().map(ToOwned::to_owned),
    }
}

/// Build the search index: each session record is followed by its topic
/// records, all in catalog order.
#[must_use]
pub fn build_search_index(catalog: &Catalog) -> Vec<SearchRecord> {
    let capacity = catalog
        .sessions()
        .iter()
        .map(|session| 1 + session.topic_count())
        .sum();
    let mut records = Vec::with_capacity(capacity);

    for session in catalog.sessions() {
        records.push(SearchRecord::Session(SessionRecord::from(session)));
        records.extend(
            session
                .topics()
                .iter()
                .map(|topic| SearchRecord::Topic(topic_record(session, topic))),
        );
    }
    records
}
