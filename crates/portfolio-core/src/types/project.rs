//! Project records and their presentation variants
//!
//! Each record carries explicit variant tags for the parts of the card and
//! the detail view that differ between projects, so the gallery never
//! branches on a particular id.

use serde::{Deserialize, Serialize};

use super::{ProjectId, ProjectSize};

/// Default label for the secondary detail action
pub const DEFAULT_SECONDARY_ACTION: &str = "Case Study";

fn default_secondary_action() -> String {
    DEFAULT_SECONDARY_ACTION.to_string()
}

/// How the grid card lays out its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutVariant {
    /// Title above description
    #[default]
    Standard,
    /// Credential layout with institution, badge chip and a faded watermark
    Academic {
        institution: String,
        badge: String,
        focus: String,
        watermark: String,
    },
}

impl LayoutVariant {
    pub fn is_academic(&self) -> bool {
        matches!(self, LayoutVariant::Academic { .. })
    }
}

/// What the detail view shows in its header area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaVariant {
    /// Static log lines followed by a blinking cursor
    TerminalSim { lines: Vec<String> },
    /// Fixed "VIDEO PLACEHOLDER" label
    VideoPlaceholder,
    /// The record title as a large label
    #[default]
    TitleCard,
}

/// A single entry in the catalog
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    /// Call to action shown on hover
    pub subtitle: String,
    pub description: String,
    /// Markdown body for the detail view
    pub long_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub size: ProjectSize,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub layout: LayoutVariant,
    #[serde(default)]
    pub media: MediaVariant,
    pub primary_action_label: String,
    #[serde(default = "default_secondary_action")]
    pub secondary_action_label: String,
}

impl ProjectRecord {
    /// Text for the hover call to action.
    pub fn call_to_action(&self) -> String {
        format!("{} \u{2197}", self.subtitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_uses_defaults() {
        let json = r#"{
            "id": 9,
            "title": "Ray Tracer",
            "subtitle": "Open Renders",
            "description": "Path tracing in a weekend.",
            "long_description": "A small path tracer.",
            "primary_action_label": "View Source"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ProjectId(9));
        assert_eq!(record.size, ProjectSize::Medium);
        assert_eq!(record.layout, LayoutVariant::Standard);
        assert_eq!(record.media, MediaVariant::TitleCard);
        assert_eq!(record.secondary_action_label, DEFAULT_SECONDARY_ACTION);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_variants_are_tagged_by_kind() {
        let media: MediaVariant =
            serde_json::from_str(r#"{"kind": "terminal_sim", "lines": ["boot"]}"#).unwrap();
        assert_eq!(
            media,
            MediaVariant::TerminalSim {
                lines: vec!["boot".to_string()]
            }
        );

        let layout: LayoutVariant = serde_json::from_str(
            r#"{"kind": "academic", "institution": "UTN", "badge": "Thesis", "focus": "GA", "watermark": "MSc"}"#,
        )
        .unwrap();
        assert!(layout.is_academic());
    }

    #[test]
    fn test_call_to_action_appends_arrow() {
        let record = ProjectRecord {
            id: ProjectId(1),
            title: "T".to_string(),
            subtitle: "Run in Browser".to_string(),
            description: String::new(),
            long_description: String::new(),
            tags: vec![],
            size: ProjectSize::Small,
            stats: String::new(),
            features: vec![],
            layout: LayoutVariant::Standard,
            media: MediaVariant::TitleCard,
            primary_action_label: "View Source".to_string(),
            secondary_action_label: default_secondary_action(),
        };
        assert_eq!(record.call_to_action(), "Run in Browser \u{2197}");
    }
}
