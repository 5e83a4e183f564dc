//! Page chrome: document metadata, header navigation, footer.
//!
//! Pages wrap their content in `Layout` and hand it a title and
//! description, the same shape a static-site layout shell would take.

use dioxus::prelude::*;

use crate::app::Route;
use crate::site::use_site_config;

#[component]
pub fn Layout(
    title: String,
    #[props(default = String::new())] description: String,
    children: Element,
) -> Element {
    let site = use_site_config();

    rsx! {
        document::Title { "{title}" }
        if !description.is_empty() {
            document::Meta { name: "description", content: "{description}" }
        }

        div { class: "layout",
            header { class: "site-header",
                Link { class: "site-brand", to: Route::Home {}, "{site.title}" }
                nav { class: "site-nav",
                    Link { class: "site-nav-link", to: Route::Home {}, "Home" }
                    Link { class: "site-nav-link", to: Route::DocsIntro {}, "Notes" }
                }
            }

            main { class: "site-main", {children} }

            footer { class: "site-footer",
                p { "{site.tagline}" }
                p { class: "site-footer-fine", "© 2026 Morgan Hale" }
            }
        }
    }
}
