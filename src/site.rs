//! Site-wide configuration context.
//!
//! The rough equivalent of a static site generator's site config: title,
//! tagline and description authored once, read anywhere via context.

use dioxus::prelude::*;

/// Site-wide settings, provided at the application root.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SiteConfig {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Driftline",
            tagline: "notes on systems, tools, and the craft of software",
            description: "Morgan Hale's personal site: write-ups on problems met in \
                          real projects, the solutions that stuck, and the tools worth \
                          carrying forward.",
        }
    }
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
