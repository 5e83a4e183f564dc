//! Site landing page: the hero section inside the layout shell.

use dioxus::prelude::*;

use crate::components::{Hero, Layout};
use crate::site::use_site_config;

#[component]
pub fn Home() -> Element {
    let site = use_site_config();

    rsx! {
        Layout {
            title: format!("Hello from {}", site.title),
            description: site.description.to_string(),
            Hero {}
        }
    }
}
