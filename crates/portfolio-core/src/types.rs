//! Core types for the portfolio gallery

use serde::{Deserialize, Serialize};

pub mod project;

pub use project::{LayoutVariant, MediaVariant, ProjectRecord};

/// Unique identifier for a project record
///
/// Stable across renders; used as the list key and as the selection value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Layout hint controlling how many grid columns a card spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSize {
    Large,
    #[default]
    Medium,
    Small,
}

impl ProjectSize {
    /// Grid columns occupied on wide layouts.
    pub fn column_span(&self) -> u8 {
        match self {
            ProjectSize::Large => 2,
            ProjectSize::Medium | ProjectSize::Small => 1,
        }
    }

    /// CSS modifier class for the card.
    pub fn class(&self) -> &'static str {
        match self {
            ProjectSize::Large => "project-card--large",
            ProjectSize::Medium => "project-card--medium",
            ProjectSize::Small => "project-card--small",
        }
    }
}

impl std::fmt::Display for ProjectSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectSize::Large => write!(f, "large"),
            ProjectSize::Medium => write!(f, "medium"),
            ProjectSize::Small => write!(f, "small"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_column_span_table() {
        assert_eq!(ProjectSize::Large.column_span(), 2);
        assert_eq!(ProjectSize::Medium.column_span(), 1);
        assert_eq!(ProjectSize::Small.column_span(), 1);
    }

    #[test]
    fn test_size_serde_names() {
        let json = serde_json::to_string(&ProjectSize::Large).unwrap();
        assert_eq!(json, "\"large\"");
        let size: ProjectSize = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(size, ProjectSize::Small);
    }

    #[test]
    fn test_project_id_is_transparent() {
        let id: ProjectId = serde_json::from_str("4").unwrap();
        assert_eq!(id, ProjectId(4));
        assert_eq!(id.to_string(), "4");
    }
}
