//! UI Components for the portfolio gallery.

pub mod gallery;
mod markdown;
mod shared_layout;
mod site_header;

pub use gallery::ProjectGallery;
pub use site_header::SiteHeader;
