//! Page header with the catalog reload control.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant};

use crate::context::{get_catalog_source, use_catalog};

/// Title bar. When the catalog came from a file, offers to re-read it.
#[component]
pub fn SiteHeader() -> Element {
    let mut catalog = use_catalog();
    let mut reload_error: Signal<Option<String>> = use_signal(|| None);
    let source = get_catalog_source();
    let reloadable = source.path().is_some();
    let count_label = match catalog.read().len() {
        1 => "1 entry".to_string(),
        n => format!("{} entries", n),
    };

    let reload = move |_| match get_catalog_source().load() {
        Ok(fresh) => {
            tracing::info!("Reloaded catalog: {} projects", fresh.len());
            catalog.set(fresh);
            reload_error.set(None);
        }
        Err(e) => {
            tracing::warn!("Catalog reload failed: {}", e);
            reload_error.set(Some(e.to_string()));
        }
    };

    rsx! {
        header { class: "site-header",
            div { class: "site-header__titles",
                h1 { class: "site-header__title", "Selected Work" }
                span { class: "site-header__count", "{count_label}" }
            }

            if reloadable {
                div { class: "site-header__actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: "btn-small".to_string(),
                        onclick: reload,
                        "Reload catalog"
                    }
                    if let Some(err) = reload_error() {
                        span { class: "site-header__error", "{err}" }
                    }
                }
            }
        }
    }
}
