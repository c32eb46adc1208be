//! Property-based tests for the selection state machine
//!
//! Uses proptest to drive arbitrary click sequences against the reference
//! catalog and check the selection invariants.

use portfolio_core::{Catalog, GalleryEvent, GalleryView, ProjectId, SelectionState};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Ids in and slightly beyond the reference catalog
fn project_id_strategy() -> impl Strategy<Value = ProjectId> {
    (0u32..8).prop_map(ProjectId)
}

fn event_strategy() -> impl Strategy<Value = GalleryEvent> {
    prop_oneof![
        3 => project_id_strategy().prop_map(GalleryEvent::CardClicked),
        1 => Just(GalleryEvent::BackdropClicked),
        1 => Just(GalleryEvent::CloseClicked),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The selection is always empty or an id present in the catalog
    #[test]
    fn selection_always_resolves(events in prop::collection::vec(event_strategy(), 0..64)) {
        let catalog = Catalog::reference();
        let mut state = SelectionState::new();

        for event in events {
            state.apply(event, &catalog);
            if let Some(id) = state.selected() {
                prop_assert!(catalog.contains(id));
                prop_assert_eq!(state.resolve(&catalog).map(|r| r.id), Some(id));
            }
        }
    }

    /// A detail view is only ever entered through a click on that card
    #[test]
    fn detail_entered_only_by_its_card(events in prop::collection::vec(event_strategy(), 1..64)) {
        let catalog = Catalog::reference();
        let mut state = SelectionState::new();

        for event in events {
            let before = state.view();
            let after = state.apply(event, &catalog);
            if let (GalleryView::Grid, GalleryView::Detail(id)) = (before, after) {
                prop_assert_eq!(event, GalleryEvent::CardClicked(id));
            }
        }
    }

    /// Dismissing from any state lands on the grid, and repeating it changes nothing
    #[test]
    fn dismiss_is_idempotent(
        events in prop::collection::vec(event_strategy(), 0..32),
        close in any::<bool>(),
    ) {
        let catalog = Catalog::reference();
        let mut state = SelectionState::new();
        for event in events {
            state.apply(event, &catalog);
        }

        let dismiss = if close { GalleryEvent::CloseClicked } else { GalleryEvent::BackdropClicked };
        prop_assert_eq!(state.apply(dismiss, &catalog), GalleryView::Grid);
        prop_assert_eq!(state.apply(dismiss, &catalog), GalleryView::Grid);
    }

    /// The resolved record is exactly the catalog entry for the selected id
    #[test]
    fn detail_content_matches_catalog(index in 0usize..4) {
        let catalog = Catalog::reference();
        let expected = &catalog.records()[index];
        let mut state = SelectionState::new();
        state.apply(GalleryEvent::CardClicked(expected.id), &catalog);

        let shown = state.resolve(&catalog).unwrap();
        prop_assert_eq!(&shown.title, &expected.title);
        prop_assert_eq!(&shown.stats, &expected.stats);
        prop_assert_eq!(&shown.long_description, &expected.long_description);
        prop_assert_eq!(&shown.features, &expected.features);
        prop_assert_eq!(&shown.tags, &expected.tags);
    }

    /// Removing the selected record makes the gallery read as the grid
    #[test]
    fn removed_selection_falls_back(index in 0usize..4) {
        let catalog = Catalog::reference();
        let target = catalog.records()[index].id;
        let mut state = SelectionState::new();
        state.apply(GalleryEvent::CardClicked(target), &catalog);

        let remaining: Vec<_> = catalog.iter().filter(|r| r.id != target).cloned().collect();
        let shrunk = Catalog::new(remaining).unwrap();

        prop_assert!(state.resolve(&shrunk).is_none());
        prop_assert!(state.reconcile(&shrunk));
        prop_assert_eq!(state.view(), GalleryView::Grid);
    }
}
