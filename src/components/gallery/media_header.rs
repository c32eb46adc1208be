//! Detail view header area, chosen by the record's [`MediaVariant`].

use dioxus::prelude::*;
use portfolio_core::MediaVariant;
use portfolio_ui::CloseButton;

/// Prefix rendered before each simulated terminal line.
pub const TERMINAL_PROMPT: &str = "> ";
pub const VIDEO_PLACEHOLDER_LABEL: &str = "VIDEO PLACEHOLDER";

#[component]
pub fn MediaHeader(media: MediaVariant, title: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "media-header",
            div { class: "media-header__grid" }

            {
                match media {
                    MediaVariant::TerminalSim { lines } => rsx! {
                        div { class: "media-terminal",
                            for (idx, line) in lines.iter().enumerate() {
                                div { key: "{idx}", class: "media-terminal__line",
                                    "{TERMINAL_PROMPT}{line}"
                                }
                            }
                            span { class: "media-terminal__cursor", "_" }
                        }
                    },
                    MediaVariant::VideoPlaceholder => rsx! {
                        div { class: "media-label", "{VIDEO_PLACEHOLDER_LABEL}" }
                    },
                    MediaVariant::TitleCard => rsx! {
                        div { class: "media-label", "{title}" }
                    },
                }
            }

            div { class: "media-header__close",
                CloseButton { onclick: move |_| on_close.call(()) }
            }
        }
    }
}
