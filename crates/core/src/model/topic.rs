use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::TopicId;

/// Role a topic plays inside its session.
///
/// The set is open: labels outside the known four are kept verbatim in
/// `Other` so a newer catalog never fails to load on an older build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TopicType {
    Overview,
    Setup,
    Tutorial,
    Practice,
    Other(String),
}

impl TopicType {
    /// The label used in catalog documents and search records.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Overview => "overview",
            Self::Setup => "setup",
            Self::Tutorial => "tutorial",
            Self::Practice => "practice",
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for TopicType {
    fn from(label: &str) -> Self {
        match label {
            "overview" => Self::Overview,
            "setup" => Self::Setup,
            "tutorial" => Self::Tutorial,
            "practice" => Self::Practice,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for TopicType {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<TopicType> for String {
    fn from(value: TopicType) -> Self {
        match value {
            TopicType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TopicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lesson inside a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    id: TopicId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "type")]
    topic_type: TopicType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
}

impl Topic {
    #[must_use]
    pub fn new(id: impl Into<TopicId>, title: impl Into<String>, topic_type: TopicType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            topic_type,
            duration: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn topic_type(&self) -> &TopicType {
        &self.topic_type
    }

    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }
}
