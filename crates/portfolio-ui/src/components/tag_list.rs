//! Tag List Component
//!
//! Renders an ordered list of tags as pills or chips.

use dioxus::prelude::*;

/// Tag presentation
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TagStyle {
    /// Rounded outline pill (grid cards)
    #[default]
    Pill,
    /// Square filled chip (detail view)
    Chip,
}

impl TagStyle {
    pub fn class(&self) -> &'static str {
        match self {
            TagStyle::Pill => "tag-pill",
            TagStyle::Chip => "tag-chip",
        }
    }
}

/// Tags in the order given
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagList {
///         tags: vec!["C++".to_string(), "WASM".to_string()],
///         style: TagStyle::Chip,
///     }
/// }
/// ```
#[component]
pub fn TagList(
    tags: Vec<String>,
    #[props(default)]
    style: TagStyle,
) -> Element {
    if tags.is_empty() {
        return VNode::empty();
    }

    let item_class = style.class();

    rsx! {
        div { class: "tag-list",
            for (idx, tag) in tags.iter().enumerate() {
                // Tags may repeat; position keeps keys unique.
                span { key: "{idx}-{tag}", class: "{item_class}", "{tag}" }
            }
        }
    }
}
