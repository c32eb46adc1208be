use dioxus::prelude::*;
use portfolio_core::Catalog;

use crate::components::{ProjectGallery, SiteHeader};
use crate::context::get_initial_catalog;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the live catalog, then renders the gallery.
#[component]
pub fn App() -> Element {
    let catalog: Signal<Catalog> = use_signal(get_initial_catalog);
    use_context_provider(|| catalog);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "portfolio",
            SiteHeader {}
            ProjectGallery { catalog: catalog() }
        }
    }
}
