//! Grid/detail selection state machine
//!
//! The gallery holds one optional selected id. Clicking a card opens its
//! detail view; clicking the backdrop or the close control returns to the
//! grid. Transitions are synchronous and never fail.
//!
//! ```text
//!          CardClicked(id)
//!   Grid ──────────────────▶ Detail(id)
//!    ▲                           │
//!    └───────────────────────────┘
//!     BackdropClicked | CloseClicked
//! ```

use crate::catalog::Catalog;
use crate::types::{ProjectId, ProjectRecord};

/// What the gallery is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryView {
    #[default]
    Grid,
    Detail(ProjectId),
}

impl GalleryView {
    pub fn selected(&self) -> Option<ProjectId> {
        match self {
            GalleryView::Grid => None,
            GalleryView::Detail(id) => Some(*id),
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, GalleryView::Detail(_))
    }
}

/// User input that can change the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    CardClicked(ProjectId),
    BackdropClicked,
    CloseClicked,
}

/// Component-local selection state.
///
/// Starts at [`GalleryView::Grid`] and only changes through [`SelectionState::apply`]
/// or [`SelectionState::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<ProjectId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn view(&self) -> GalleryView {
        match self.selected {
            Some(id) => GalleryView::Detail(id),
            None => GalleryView::Grid,
        }
    }

    /// Apply a click and return the resulting view.
    ///
    /// Card clicks only open a detail from the grid and only for ids present
    /// in `catalog`. While a detail is open the overlay covers the grid, so a
    /// card click arriving then is ignored.
    pub fn apply(&mut self, event: GalleryEvent, catalog: &Catalog) -> GalleryView {
        match (self.selected, event) {
            (None, GalleryEvent::CardClicked(id)) => {
                if catalog.contains(id) {
                    tracing::debug!(%id, "Opening project detail");
                    self.selected = Some(id);
                } else {
                    tracing::warn!(%id, "Card click for unknown project, staying on grid");
                }
            }
            (Some(open), GalleryEvent::CardClicked(id)) => {
                tracing::debug!(%open, %id, "Ignoring card click while detail is open");
            }
            (Some(open), GalleryEvent::BackdropClicked | GalleryEvent::CloseClicked) => {
                tracing::debug!(%open, ?event, "Closing project detail");
                self.selected = None;
            }
            (None, GalleryEvent::BackdropClicked | GalleryEvent::CloseClicked) => {}
        }
        self.view()
    }

    /// The record shown in the detail view, if any.
    ///
    /// A selection that no longer resolves in `catalog` reads as the grid.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a ProjectRecord> {
        self.selected.and_then(|id| catalog.get(id))
    }

    /// Drop a selection that no longer resolves in `catalog`.
    ///
    /// Returns true if the state changed.
    pub fn reconcile(&mut self, catalog: &Catalog) -> bool {
        match self.selected {
            Some(id) if !catalog.contains(id) => {
                tracing::warn!(%id, "Selected project left the catalog, falling back to grid");
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
