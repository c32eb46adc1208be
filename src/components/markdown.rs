//! Read-only Markdown rendering for long descriptions.

use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render CommonMark (plus tables and strikethrough) to HTML.
///
/// Catalog files are untrusted, so raw HTML is emitted as escaped text.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Markdown block
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     MarkdownBlock {
///         content: record.long_description.clone(),
///         class: "detail-description",
///     }
/// }
/// ```
#[component]
pub fn MarkdownBlock(
    content: ReadOnlySignal<String>,
    #[props(default)]
    class: Option<String>,
) -> Element {
    let html = use_memo(move || markdown_to_html(&content.read()));
    let class = class.unwrap_or_default();

    rsx! {
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{html()}",
        }
    }
}
