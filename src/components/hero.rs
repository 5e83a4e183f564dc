//! Hero presentation for the landing page.
//!
//! Four regions reveal in ordinal order: name block, description, social
//! links, call-to-action. A decorative background (ray illustration plus a
//! blurred circle) sits behind them and takes part in no interaction.
//!
//! Two pointer effects coexist on the name block:
//! - the whole block tracks the pointer's viewport position (`--x`/`--y`),
//!   driving a glow that follows the cursor;
//! - the name span tracks its own bounding origin (`--mouse-x`/`--mouse-y`),
//!   an offset reference frame for the gradient highlight.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{MovingButton, SocialLinks};
use crate::motion::{glow_position, highlight_origin, PointerVars, Reveal};
use crate::theme::colors;

/// Landing hero. Fully self-configured; no props.
#[component]
pub fn Hero() -> Element {
    rsx! {
        div { class: "hero",
            div { class: "hero-intro",
                Name {}

                Reveal { ordinal: 2,
                    p { class: "hero-description",
                        "Here I write about the problems I run into across the stack \
                         and the solutions that held up, so the next person hits the \
                         ground a little less hard."
                    }
                }

                Reveal { ordinal: 3, SocialLinks {} }

                Reveal { ordinal: 4, class: "hero-button-row",
                    MovingButton { border_radius: "1rem", class: "hero-button",
                        Link { class: "hero-button-link", to: Route::DocsIntro {},
                            "Browse the notes"
                        }
                    }
                }
            }

            div { class: "hero-background",
                RaySvg {}
                Circle {}
            }
        }
    }
}

/// Greeting and name, first region in the reveal sequence.
#[component]
fn Name() -> Element {
    let mut glow: Signal<PointerVars> = use_signal(PointerVars::default);
    let mut highlight: Signal<PointerVars> = use_signal(PointerVars::default);

    rsx! {
        Reveal { ordinal: 1,
            div {
                class: "hero-text",
                style: "--x: {glow().x}px; --y: {glow().y}px;",
                onmousemove: move |evt| {
                    let client = evt.client_coordinates();
                    glow.set(glow_position(client.x, client.y));
                },

                "Hey! I'm "
                span {
                    class: "hero-name",
                    style: "--mouse-x: {highlight().x}px; --mouse-y: {highlight().y}px;",
                    onmousemove: move |evt| {
                        let client = evt.client_coordinates();
                        let element = evt.element_coordinates();
                        highlight.set(highlight_origin(
                            client.x, client.y, element.x, element.y,
                        ));
                    },
                    "Morgan"
                }
                span { class: "hero-wave", "👋" }
            }
        }
    }
}

/// Decorative blurred circle behind the illustration.
#[component]
fn Circle() -> Element {
    rsx! {
        div { class: "hero-circle" }
    }
}

/// Background ray illustration.
#[component]
fn RaySvg() -> Element {
    rsx! {
        svg {
            class: "hero-ray",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 600 600",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M80 520 L300 60 L340 60 L140 520 Z",
                fill: colors::ACCENT,
                opacity: "0.3",
            }
            path {
                d: "M220 520 L430 80 L470 80 L290 520 Z",
                fill: colors::ACCENT_SOFT,
                opacity: "0.22",
            }
            path {
                d: "M360 520 L540 140 L570 140 L420 520 Z",
                fill: colors::ACCENT,
                opacity: "0.12",
            }
        }
    }
}
