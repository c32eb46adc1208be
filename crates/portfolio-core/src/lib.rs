//! Portfolio Gallery Core Library
//!
//! Catalog model, selection state machine and layout-transition math for the
//! portfolio gallery. No UI framework dependency; the desktop app renders
//! from these types.
//!
//! ## Overview
//!
//! - [`Catalog`]: ordered, validated list of [`ProjectRecord`]s
//! - [`SelectionState`]: `Grid` / `Detail(id)` state machine driven by clicks
//! - [`transition`]: FLIP transforms and spring easing for shared-element
//!   transitions
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Catalog, GalleryEvent, GalleryView, ProjectId, SelectionState};
//!
//! let catalog = Catalog::reference();
//! let mut selection = SelectionState::new();
//!
//! let view = selection.apply(GalleryEvent::CardClicked(ProjectId(3)), &catalog);
//! assert_eq!(view, GalleryView::Detail(ProjectId(3)));
//! assert_eq!(selection.resolve(&catalog).unwrap().title, "WASM Engine");
//!
//! selection.apply(GalleryEvent::BackdropClicked, &catalog);
//! assert_eq!(selection.view(), GalleryView::Grid);
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod selection;
pub mod transition;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use error::{GalleryError, GalleryResult};
pub use selection::{GalleryEvent, GalleryView, SelectionState};
pub use transition::{LayoutPhase, Rect, SpringConfig, Transform, TransitionGate, TransitionTicket};
pub use types::*;
