//! Detail Modal Component
//!
//! Full-screen layer with a dismissable backdrop and the expanded card. The
//! backdrop and the card are siblings so clicks inside the card never reach
//! the backdrop.

use dioxus::prelude::*;
use portfolio_core::{GalleryEvent, ProjectRecord};
use portfolio_ui::{Button, ButtonVariant, TagList, TagStyle};

use super::media_header::MediaHeader;
use crate::components::markdown::MarkdownBlock;

/// Layer class; the leaving modifier fades the backdrop and disables input.
pub fn layer_class(leaving: bool) -> &'static str {
    if leaving {
        "detail-layer detail-layer--leaving"
    } else {
        "detail-layer"
    }
}

/// Expanded project view
///
/// `card_style` carries the shared-layout transform for the card element.
#[component]
pub fn DetailModal(
    record: ProjectRecord,
    /// Whether the exit animation is running
    leaving: bool,
    /// Inline style for the card (transform and transition)
    card_style: String,
    /// Backdrop or close control clicked
    on_dismiss: EventHandler<GalleryEvent>,
    /// Receives the card's mounted handle for layout measurement
    on_mounted: EventHandler<Event<MountedData>>,
) -> Element {
    rsx! {
        div { class: layer_class(leaving),
            div {
                class: "detail-backdrop",
                onclick: move |_| on_dismiss.call(GalleryEvent::BackdropClicked),
            }

            div {
                class: "detail-card",
                style: "{card_style}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{record.title}",
                onmounted: move |e: Event<MountedData>| on_mounted.call(e),

                MediaHeader {
                    media: record.media.clone(),
                    title: record.title.clone(),
                    on_close: move |_| on_dismiss.call(GalleryEvent::CloseClicked),
                }

                div { class: "detail-body",
                    div { class: "detail-heading",
                        h2 { class: "detail-title", "{record.title}" }
                        span { class: "detail-stats", "{record.stats}" }
                    }

                    MarkdownBlock {
                        content: record.long_description.clone(),
                        class: "detail-description".to_string(),
                    }

                    div { class: "detail-columns",
                        div { class: "detail-column",
                            h4 { class: "detail-column__title", "Key Features" }
                            ul { class: "detail-features",
                                for (idx, feature) in record.features.iter().enumerate() {
                                    li { key: "{idx}", class: "detail-feature",
                                        span { class: "detail-feature__bullet" }
                                        "{feature}"
                                    }
                                }
                            }
                        }
                        div { class: "detail-column",
                            h4 { class: "detail-column__title", "Tech Stack" }
                            TagList { tags: record.tags.clone(), style: TagStyle::Chip }
                        }
                    }

                    div { class: "detail-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "detail-action".to_string(),
                            "{record.primary_action_label}"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            class: "detail-action".to_string(),
                            "{record.secondary_action_label}"
                        }
                    }
                }
            }
        }
    }
}
