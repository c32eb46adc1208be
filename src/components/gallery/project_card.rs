//! Project Card Component
//!
//! One grid cell. Layout comes from the record's [`LayoutVariant`]; the hover
//! call-to-action overlay and lift are pure CSS.

use dioxus::prelude::*;
use portfolio_core::{LayoutVariant, ProjectId, ProjectRecord};
use portfolio_ui::{TagList, TagStyle};

/// CSS classes for a card: base, size modifier and layout modifier.
pub fn card_class(record: &ProjectRecord) -> String {
    let layout_class = match record.layout {
        LayoutVariant::Standard => "project-card--standard",
        LayoutVariant::Academic { .. } => "project-card--academic",
    };
    format!("project-card {} {}", record.size.class(), layout_class)
}

/// Grid card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         record: record.clone(),
///         on_open: move |id| open(id),
///         on_mounted: move |e: Event<MountedData>| layout.register_source(id, e.data()),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    record: ProjectRecord,
    /// Click handler (receives the record id)
    on_open: EventHandler<ProjectId>,
    /// Receives the card's mounted handle for layout measurement
    on_mounted: EventHandler<Event<MountedData>>,
) -> Element {
    let id = record.id;
    let class = card_class(&record);
    let span = record.size.column_span();
    let cta = record.call_to_action();

    rsx! {
        div {
            class: "{class}",
            "data-span": "{span}",
            role: "button",
            tabindex: "0",
            "aria-label": "{record.title}",
            onclick: move |_| on_open.call(id),
            onmounted: move |e: Event<MountedData>| on_mounted.call(e),

            div { class: "project-card__body",
                {
                    match &record.layout {
                        LayoutVariant::Standard => rsx! {
                            h3 { class: "project-card__title", "{record.title}" }
                            p { class: "project-card__description", "{record.description}" }
                        },
                        LayoutVariant::Academic { institution, badge, focus, .. } => rsx! {
                            AcademicCardBody {
                                title: record.title.clone(),
                                institution: institution.clone(),
                                badge: badge.clone(),
                                description: record.description.clone(),
                                focus: focus.clone(),
                            }
                        },
                    }
                }
            }

            TagList { tags: record.tags.clone(), style: TagStyle::Pill }

            div { class: "project-card__hover",
                span { class: "project-card__cta", "{cta}" }
            }

            if let LayoutVariant::Academic { watermark, .. } = &record.layout {
                div { class: "project-card__watermark", "{watermark}" }
            }
        }
    }
}

/// Credential layout: title and institution, badge chip, focus line.
#[component]
fn AcademicCardBody(
    title: String,
    institution: String,
    badge: String,
    description: String,
    focus: String,
) -> Element {
    rsx! {
        div { class: "academic__heading",
            div {
                h3 { class: "academic__title", "{title}" }
                p { class: "academic__institution", "{institution}" }
            }
            span { class: "academic__badge", "{badge}" }
        }

        p { class: "academic__specialization", "{description}" }

        p { class: "academic__focus",
            span { class: "academic__focus-icon", "\u{1F52C}" }
            span {
                "Focus: "
                span { class: "academic__focus-value", "{focus}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::Catalog;

    #[test]
    fn card_classes_follow_size_and_layout() {
        let catalog = Catalog::reference();
        let classes: Vec<String> = catalog.iter().map(card_class).collect();
        assert_eq!(
            classes,
            vec![
                "project-card project-card--large project-card--standard",
                "project-card project-card--medium project-card--standard",
                "project-card project-card--small project-card--standard",
                "project-card project-card--large project-card--academic",
            ]
        );
    }
}
