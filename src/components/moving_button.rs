//! Button with a traveling border highlight.
//!
//! A wrapper that draws an animated spot of light orbiting the button's
//! border, with the actual content (usually a link) slotted inside. The
//! orbit runs on the stylesheet's `border-orbit` keyframes.

use dioxus::prelude::*;

#[component]
pub fn MovingButton(
    #[props(default = "1rem".to_string())] border_radius: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "moving-button {class}",
            style: "border-radius: {border_radius};",
            span { class: "moving-button-spot" }
            div { class: "moving-button-inner", {children} }
        }
    }
}
