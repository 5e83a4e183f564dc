use dioxus::prelude::*;

use crate::motion::reveal_keyframes;
use crate::pages::{DocsIntro, Home};
use crate::site::SiteConfig;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the hero section
/// - `/docs/intro` - Documentation entry point (hero call-to-action target)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/docs/intro")]
    DocsIntro {},
}

/// Root application component.
///
/// Provides global styles, the site configuration context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(SiteConfig::default);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {reveal_keyframes()} }
        Router::<Route> {}
    }
}
