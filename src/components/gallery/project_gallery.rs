//! Project Gallery Component
//!
//! Grid of project cards plus the single-selection detail overlay. Selection
//! changes happen synchronously in click handlers; the card-to-modal morph is
//! layered on top by the shared-layout hook and never feeds back into selection.

use dioxus::prelude::*;
use portfolio_core::{
    Catalog, GalleryEvent, GalleryView, LayoutPhase, ProjectId, ProjectRecord, SelectionState,
    SpringConfig,
};

use super::detail_modal::DetailModal;
use super::project_card::ProjectCard;
use crate::components::shared_layout::use_shared_layout;

/// Card grid with an expandable detail view
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectGallery { catalog: Catalog::reference() }
/// }
/// ```
#[component]
pub fn ProjectGallery(catalog: ReadOnlySignal<Catalog>) -> Element {
    let mut selection = use_signal(SelectionState::new);
    let mut layout = use_shared_layout::<ProjectId>(SpringConfig::default());

    // A swapped catalog may no longer contain the open project.
    use_effect(move || {
        let catalog = catalog.read();
        let current = *selection.peek();
        let mut next = current;
        let drop_overlay = reconcile_after_swap(&mut next, layout.active_key(), &catalog);
        if next != current {
            selection.set(next);
        }
        if drop_overlay {
            layout.dismiss();
        }
    });

    let open = move |id: ProjectId| {
        let view = selection.write().apply(GalleryEvent::CardClicked(id), &catalog.peek());
        if opens_detail(view, id) {
            layout.open(id);
        }
    };

    let dismiss = move |event: GalleryEvent| {
        selection.write().apply(event, &catalog.peek());
        layout.close();
    };

    let records = catalog.read().records().to_vec();
    let is_empty = records.is_empty();
    let view = selection.read().view();
    let overlay = layout.active().and_then(|active| {
        overlay_record(view, Some((active.key, active.phase)), &catalog.read())
            .cloned()
            .map(|record| (active, record))
    });
    let card_style = layout.style();

    rsx! {
        section { class: "project-gallery",
            if is_empty {
                p { class: "project-gallery__empty", "No projects yet." }
            }

            div { class: "project-grid",
                for record in records {
                    {
                        let id = record.id;
                        rsx! {
                            ProjectCard {
                                key: "{id}",
                                record: record,
                                on_open: open,
                                on_mounted: move |e: Event<MountedData>| layout.register_source(id, e.data()),
                            }
                        }
                    }
                }
            }

            // Zero or one overlay; keyed by mount so a reopen remounts and re-measures.
            for (active, record) in overlay {
                DetailModal {
                    key: "{active.instance}",
                    record: record,
                    leaving: active.phase.is_leaving(),
                    card_style: card_style.clone(),
                    on_dismiss: dismiss,
                    on_mounted: move |e: Event<MountedData>| layout.target_mounted(e.data()),
                }
            }
        }
    }
}

/// True when a card click for `id` left the gallery showing its detail.
fn opens_detail(view: GalleryView, id: ProjectId) -> bool {
    view == GalleryView::Detail(id)
}

/// The record the overlay renders, if any.
///
/// `Detail(id)` shows the modal for `id` once the layout is tracking it; after
/// closing it stays only while animating out. Keys missing from `catalog`
/// render nothing.
fn overlay_record<'a>(
    view: GalleryView,
    active: Option<(ProjectId, LayoutPhase)>,
    catalog: &'a Catalog,
) -> Option<&'a ProjectRecord> {
    let (key, phase) = active?;
    let shown = match view {
        GalleryView::Detail(id) => id == key,
        GalleryView::Grid => phase.is_leaving(),
    };
    if !shown {
        return None;
    }
    catalog.get(key)
}

/// Bring `selection` back in line with a swapped catalog.
///
/// Returns true when the overlay for `active_key` has to be dropped.
fn reconcile_after_swap(
    selection: &mut SelectionState,
    active_key: Option<ProjectId>,
    catalog: &Catalog,
) -> bool {
    selection.reconcile(catalog);
    active_key.is_some_and(|key| !catalog.contains(key))
}
