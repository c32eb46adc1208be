//! Catalog context for the gallery.
//!
//! The catalog loaded at startup seeds a `Signal<Catalog>` provided by `App`;
//! components that need to swap it (the reload control) read it with
//! [`use_catalog`].

use dioxus::prelude::*;
use portfolio_core::Catalog;

use crate::config::CatalogSource;

/// Where the running catalog was loaded from.
pub fn get_catalog_source() -> CatalogSource {
    crate::get_catalog_source()
}

/// The catalog loaded before the window opened.
pub fn get_initial_catalog() -> Catalog {
    crate::get_initial_catalog()
}

/// Hook to access the live catalog from context.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}
