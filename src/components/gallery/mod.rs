//! Project gallery: card grid, detail modal and media header.

mod detail_modal;
mod media_header;
mod project_card;
mod project_gallery;

pub use project_gallery::ProjectGallery;
