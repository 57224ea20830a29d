//! Placeholder lesson markup for topics that have no authored content yet.
//!
//! Everything that varies by topic type or topic id lives in the tables
//! below; adding a topic type or a curated objectives list is a data change.

use std::fmt::Write as _;

use crate::model::{Session, Topic};

/// Payload returned when a session/topic pair is not in the catalog.
pub const CONTENT_NOT_FOUND: &str =
    r#"<div class="text-center py-12"><p class="text-gray-500">Content not found</p></div>"#;

/// Presentation record for one topic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypePresentation {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub section: Option<&'static str>,
}

/// Used for any type label missing from [`TYPE_PRESENTATIONS`].
pub static NEUTRAL_PRESENTATION: TypePresentation = TypePresentation {
    label: "",
    icon: "",
    color: "gray",
    section: None,
};

pub const TYPE_PRESENTATIONS: &[TypePresentation] = &[
    TypePresentation {
        label: "overview",
        icon: "fas fa-info-circle",
        color: "blue",
        section: None,
    },
    TypePresentation {
        label: "setup",
        icon: "fas fa-cog",
        color: "green",
        section: Some(SETUP_SECTION),
    },
    TypePresentation {
        label: "tutorial",
        icon: "fas fa-book-open",
        color: "purple",
        section: Some(TUTORIAL_SECTION),
    },
    TypePresentation {
        label: "practice",
        icon: "fas fa-dumbbell",
        color: "orange",
        section: Some(PRACTICE_SECTION),
    },
];

pub static LEARNING_OBJECTIVES: &[(&str, [&str; 3])] = &[
    (
        "introduction",
        [
            "Understanding KQL fundamentals and use cases",
            "Overview of Azure Data Explorer ecosystem",
            "Setting expectations for the learning journey",
        ],
    ),
    (
        "testing-access",
        [
            "Connecting to the practice environment",
            "Running your first KQL queries",
            "Troubleshooting common connection issues",
        ],
    ),
    (
        "part1",
        [
            "Core KQL operators and syntax",
            "Data flow and piping concepts",
            "Table schema exploration techniques",
        ],
    ),
    (
        "part2",
        [
            "Advanced filtering with where operator",
            "Column selection and transformation",
            "Performance optimization techniques",
        ],
    ),
    (
        "window-functions",
        [
            "Row numbering and ranking functions",
            "Sliding window calculations",
            "Partition-based analytics",
        ],
    ),
    (
        "threat-hunting-basics",
        [
            "Threat hunting methodology",
            "Common attack patterns in data",
            "Building detection queries",
        ],
    ),
];

pub static GENERIC_OBJECTIVES: [&str; 3] = [
    "Core concepts and principles",
    "Practical implementation techniques",
    "Real-world application examples",
];

const DEFAULT_TOPIC_DESCRIPTION: &str = "Learn the fundamentals of this topic";

const TUTORIAL_SECTION: &str = r#"<div class="space-y-8">
  <div class="bg-white border rounded-lg p-6">
    <h3 class="text-lg font-semibold mb-4">📝 Tutorial Structure</h3>
    <div class="grid md:grid-cols-3 gap-4">
      <div class="text-center p-4 bg-blue-50 rounded-lg">
        <i class="fas fa-lightbulb text-blue-600 text-2xl mb-2"></i>
        <h4 class="font-medium">Concepts</h4>
        <p class="text-sm text-gray-600">Theory and background</p>
      </div>
      <div class="text-center p-4 bg-green-50 rounded-lg">
        <i class="fas fa-code text-green-600 text-2xl mb-2"></i>
        <h4 class="font-medium">Examples</h4>
        <p class="text-sm text-gray-600">Hands-on code samples</p>
      </div>
      <div class="text-center p-4 bg-purple-50 rounded-lg">
        <i class="fas fa-tasks text-purple-600 text-2xl mb-2"></i>
        <h4 class="font-medium">Practice</h4>
        <p class="text-sm text-gray-600">Apply your knowledge</p>
      </div>
    </div>
  </div>
</div>"#;

const PRACTICE_SECTION: &str = r#"<div class="bg-orange-50 border border-orange-200 rounded-lg p-6">
  <h3 class="text-lg font-semibold text-orange-900 mb-4">🎯 Practice Exercises</h3>
  <div class="space-y-3">
    <div class="flex items-center p-3 bg-white rounded border">
      <div class="w-8 h-8 bg-orange-100 rounded-full flex items-center justify-center mr-3"><span class="text-orange-600 text-sm font-bold">1</span></div>
      <span class="text-gray-700">Interactive coding challenges</span>
    </div>
    <div class="flex items-center p-3 bg-white rounded border">
      <div class="w-8 h-8 bg-orange-100 rounded-full flex items-center justify-center mr-3"><span class="text-orange-600 text-sm font-bold">2</span></div>
      <span class="text-gray-700">Real-world scenario problems</span>
    </div>
    <div class="flex items-center p-3 bg-white rounded border">
      <div class="w-8 h-8 bg-orange-100 rounded-full flex items-center justify-center mr-3"><span class="text-orange-600 text-sm font-bold">3</span></div>
      <span class="text-gray-700">Progressive difficulty levels</span>
    </div>
  </div>
</div>"#;

const SETUP_SECTION: &str = r#"<div class="bg-green-50 border border-green-200 rounded-lg p-6">
  <h3 class="text-lg font-semibold text-green-900 mb-4">⚙️ Setup Instructions</h3>
  <div class="space-y-4">
    <div class="flex items-start">
      <div class="w-6 h-6 bg-green-500 rounded-full flex items-center justify-center mr-3 mt-1"><i class="fas fa-check text-white text-xs"></i></div>
      <div><h4 class="font-medium text-gray-900">Environment Preparation</h4><p class="text-sm text-gray-600">Step-by-step environment setup</p></div>
    </div>
    <div class="flex items-start">
      <div class="w-6 h-6 bg-green-500 rounded-full flex items-center justify-center mr-3 mt-1"><i class="fas fa-check text-white text-xs"></i></div>
      <div><h4 class="font-medium text-gray-900">Connection Verification</h4><p class="text-sm text-gray-600">Test your setup with sample queries</p></div>
    </div>
    <div class="flex items-start">
      <div class="w-6 h-6 bg-green-500 rounded-full flex items-center justify-center mr-3 mt-1"><i class="fas fa-check text-white text-xs"></i></div>
      <div><h4 class="font-medium text-gray-900">Troubleshooting Guide</h4><p class="text-sm text-gray-600">Common issues and solutions</p></div>
    </div>
  </div>
</div>"#;

const COMING_SOON_SECTION: &str = r#"<div class="mt-12 p-6 bg-blue-50 rounded-lg border border-blue-200">
  <h3 class="font-semibold text-blue-900 mb-2">💡 Coming Soon</h3>
  <p class="text-blue-800">This modular structure will allow us to easily add rich, interactive content for each topic including:</p>
  <ul class="mt-3 space-y-1 text-blue-700 text-sm">
    <li>• Interactive code examples with syntax highlighting</li>
    <li>• Step-by-step guided exercises</li>
    <li>• Real-world scenario demonstrations</li>
    <li>• Progressive difficulty challenges</li>
    <li>• Video tutorials and visual explanations</li>
  </ul>
</div>"#;

/// Presentation for a type label, or the neutral gray record.
#[must_use]
pub fn presentation_for(label: &str) -> &'static TypePresentation {
    TYPE_PRESENTATIONS
        .iter()
        .find(|p| p.label == label)
        .unwrap_or(&NEUTRAL_PRESENTATION)
}

/// Curated objectives for a topic id, or the generic three bullets.
#[must_use]
pub fn learning_objectives(topic_id: &str) -> &'static [&'static str] {
    LEARNING_OBJECTIVES
        .iter()
        .find(|(id, _)| *id == topic_id)
        .map_or(&GENERIC_OBJECTIVES[..], |(_, objectives)| &objectives[..])
}

/// Render the placeholder page for a topic. Pure: identical inputs always
/// produce identical markup.
#[must_use]
pub fn render_placeholder(session: &Session, topic: &Topic) -> String {
    let presentation = presentation_for(topic.topic_type().as_str());
    let color = presentation.color;
    let title = html_escape(topic.title());
    let description = html_escape(topic.description().unwrap_or(DEFAULT_TOPIC_DESCRIPTION));
    let type_label = html_escape(topic.topic_type().as_str());
    let session_title = html_escape(session.title());

    let mut out = String::with_capacity(4096);
    out.push_str("<div class=\"max-w-4xl\">\n");

    // header
    let _ = write!(
        out,
        r#"<div class="mb-8">
  <div class="flex items-center gap-3 mb-4">
    <div class="w-12 h-12 bg-{color}-100 rounded-lg flex items-center justify-center">
      <i class="{icon} text-{color}-600 text-lg"></i>
    </div>
    <div>
      <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
      <p class="text-gray-600">{description}</p>
    </div>
  </div>
  <div class="flex items-center gap-4 text-sm">
    <span class="px-3 py-1 bg-{color}-100 text-{color}-800 rounded-full capitalize">{type_label}</span>
"#,
        icon = presentation.icon,
    );
    if let Some(duration) = topic.duration() {
        let _ = writeln!(
            out,
            r#"    <span class="text-gray-600">⏱️ {}</span>"#,
            html_escape(duration)
        );
    }
    let _ = write!(
        out,
        r#"    <span class="text-gray-600">📚 {session_title}</span>
  </div>
</div>
"#
    );

    // under-development banner with objectives
    let objectives = learning_objectives(topic.id().as_str())
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("<br>");
    let _ = write!(
        out,
        r#"<div class="bg-gradient-to-r from-{color}-50 to-{color}-100 border border-{color}-200 rounded-xl p-8 mb-8">
  <div class="text-center">
    <div class="w-16 h-16 bg-{color}-200 rounded-full mx-auto mb-4 flex items-center justify-center">
      <i class="fas fa-hammer text-{color}-600 text-xl"></i>
    </div>
    <h2 class="text-2xl font-bold text-gray-900 mb-2">Content Under Development</h2>
    <p class="text-gray-700 mb-6">This topic is being prepared with comprehensive examples and exercises.</p>
    <div class="bg-white rounded-lg p-6 max-w-lg mx-auto">
      <h3 class="font-semibold text-gray-800 mb-4">What You'll Learn:</h3>
      <div class="text-left space-y-2 text-gray-600">{objectives}</div>
    </div>
  </div>
</div>
"#
    );

    if let Some(section) = presentation.section {
        out.push_str(section);
        out.push('\n');
    }

    out.push_str(COMING_SOON_SECTION);
    out.push_str("\n</div>\n");
    out
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, TopicType};

    fn render(session_id: &str, topic_id: &str) -> String {
        let catalog = Catalog::builtin();
        let session = catalog.session(session_id).unwrap();
        let topic = session.topic(topic_id).unwrap();
        render_placeholder(session, topic)
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render("session-01", "part3"), render("session-01", "part3"));
    }

    #[test]
    fn practice_topics_get_only_the_practice_section() {
        let html = render("session-01", "part6");
        assert!(html.contains("Practice Exercises"));
        assert!(!html.contains("Tutorial Structure"));
        assert!(!html.contains("Setup Instructions"));
        assert!(html.contains("bg-orange-100"));
        assert!(html.contains("fas fa-dumbbell"));
    }

    #[test]
    fn setup_and_tutorial_sections_follow_type() {
        let setup = render("session-01", "testing-access");
        assert!(setup.contains("Setup Instructions"));
        assert!(!setup.contains("Practice Exercises"));

        let tutorial = render("session-01", "part1");
        assert!(tutorial.contains("Tutorial Structure"));
        assert!(!tutorial.contains("Setup Instructions"));

        let overview = render("session-01", "introduction");
        assert!(!overview.contains("Tutorial Structure"));
        assert!(!overview.contains("Practice Exercises"));
        assert!(!overview.contains("Setup Instructions"));
    }

    #[test]
    fn unknown_types_render_gray_without_sections() {
        let session = Session::new("s", "Session");
        let topic = Topic::new("lab", "Lab", TopicType::Other("workshop".into()));
        let html = render_placeholder(&session, &topic);
        assert!(html.contains("bg-gray-100"));
        assert!(!html.contains("Tutorial Structure"));
        assert!(!html.contains("Practice Exercises"));
        assert!(!html.contains("Setup Instructions"));
        assert!(html.contains("Coming Soon"));
    }

    #[test]
    fn objectives_use_curated_list_or_generic_fallback() {
        assert_eq!(learning_objectives("part1")[0], "Core KQL operators and syntax");
        assert_eq!(learning_objectives("part5"), &GENERIC_OBJECTIVES[..]);

        let html = render("session-01", "testing-access");
        assert!(html.contains("• Connecting to the practice environment<br>• Running your first KQL queries"));
    }

    #[test]
    fn optional_fields_and_escaping() {
        let session = Session::new("s", "Joins & Unions");
        let topic = Topic::new("t", "<script>", TopicType::Tutorial)
            .with_description("Combine tables")
            .with_duration("45 min");
        let html = render_placeholder(&session, &topic);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("📚 Joins &amp; Unions"));
        assert!(html.contains("⏱️ 45 min"));
        assert!(html.contains("Combine tables"));

        let bare = render("session-01", "part2");
        assert!(!bare.contains("⏱️"));
        assert!(bare.contains(DEFAULT_TOPIC_DESCRIPTION));
    }
}
