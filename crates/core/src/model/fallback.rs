use crate::model::{Catalog, Session, Topic, TopicType};

impl Catalog {
    /// The catalog used when no catalog document can be loaded.
    ///
    /// Holds the single "KQL Basics & Fundamentals" session so navigation is
    /// never empty.
    #[must_use]
    pub fn builtin() -> Self {
        let topics = [
            ("introduction", "Introduction", TopicType::Overview),
            ("testing-access", "Testing Access", TopicType::Setup),
            ("part1", "KQL Basics", TopicType::Tutorial),
            ("part2", "Filtering & Projecting", TopicType::Tutorial),
            ("part3", "Aggregation & Time", TopicType::Tutorial),
            ("part4", "Joining Tables", TopicType::Tutorial),
            ("part5", "Advanced Concepts", TopicType::Tutorial),
            ("part6", "Challenge Queries", TopicType::Practice),
        ];

        let session = topics.into_iter().fold(
            Session::new("session-01", "KQL Basics & Fundamentals")
                .with_description("Introduction to KQL, basic operators, and data exploration")
                .with_difficulty("Beginner")
                .with_estimated_time("2-3 hours")
                .with_tags(["basics", "introduction", "fundamentals"]),
            |session, (id, title, topic_type)| session.with_topic(Topic::new(id, title, topic_type)),
        );

        Self {
            sessions: vec![session],
        }
    }
}
