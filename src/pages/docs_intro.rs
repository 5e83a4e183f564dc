//! Documentation entry page, target of the hero call-to-action.
//!
//! Content is authored as markdown and rendered to HTML once per mount.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::components::Layout;
use crate::site::use_site_config;

const INTRO_MD: &str = r#"# Field notes

Welcome. This is where the longer write-ups live: problems met in real
projects, the fixes that survived contact with production, and the detours
that turned out to matter.

## What you'll find here

- **Systems** - storage engines, schedulers, and the places they leak.
- **Tooling** - build pipelines, editors, and the glue between them.
- **Practice** - testing habits, review notes, things learned the slow way.

## How it's organized

Notes are grouped by topic rather than by date. Start anywhere; each note
stands alone and links out to the ones it builds on.

> If something here saves you an afternoon, it did its job.
"#;

#[component]
pub fn DocsIntro() -> Element {
    let site = use_site_config();
    let intro = use_memo(|| render_markdown(INTRO_MD));

    rsx! {
        Layout {
            title: format!("Notes | {}", site.title),
            article { class: "docs-page",
                div { class: "docs-markdown", dangerous_inner_html: "{intro()}" }
            }
        }
    }
}

/// Markdown to HTML, with the extensions the notes actually use.
fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_renders_to_html() {
        let html = render_markdown(INTRO_MD);
        assert!(html.contains("<h1>"));
        assert!(html.contains("<h2>"));
        assert!(html.contains("<blockquote>"));
    }

    #[test]
    fn test_tables_extension_is_enabled() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
