//! Social link row, fed by the social directory.
//!
//! Iterates the derived directory and renders one link per entry that
//! actually carries an `href`; rows without one (unset profile attributes,
//! the RSS pseudo-key) are skipped silently.

use dioxus::prelude::*;

use crate::data::social::{directory, SocialEntry};

#[component]
pub fn SocialLinks() -> Element {
    rsx! {
        div { class: "social-links",
            for entry in linked_entries() {
                SocialLink { entry }
            }
        }
    }
}

/// Directory entries that should render as links.
fn linked_entries() -> impl Iterator<Item = SocialEntry> {
    directory().iter().copied().filter(|e| e.href.is_some())
}

#[component]
fn SocialLink(entry: SocialEntry) -> Element {
    let Some(href) = entry.href else {
        return rsx! {};
    };

    rsx! {
        a {
            class: "social-link",
            style: "--accent: {entry.color};",
            href: "{href}",
            title: "{entry.title}",
            "aria-label": "{entry.title}",
            {render_social_icon(entry.icon)}
        }
    }
}

/// Inline glyph for an icon reference from the directory. Unknown
/// references fall back to a generic link glyph rather than failing.
fn render_social_icon(icon: &str) -> Element {
    match icon {
        "ri:github-line" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
                path { d: "M9 18c-4.51 2-5-2-7-2" }
            }
        },
        "ri:twitter-x-line" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M4 4l16 16" }
                path { d: "M20 4L4 20" }
            }
        },
        "ri:mail-line" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
                path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
            }
        },
        "ri:rss-line" => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M4 11a9 9 0 0 1 9 9" }
                path { d: "M4 4a16 16 0 0 1 16 16" }
                circle { cx: "5", cy: "19", r: "1" }
            }
        },
        _ => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "22",
                height: "22",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }
                path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::social::SocialKind;

    #[test]
    fn test_only_entries_with_hrefs_render() {
        let kinds: Vec<SocialKind> = linked_entries().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![SocialKind::Github, SocialKind::X, SocialKind::Email]);
    }

    #[test]
    fn test_rendered_entries_keep_their_accent_color() {
        for entry in linked_entries() {
            assert!(entry.color.starts_with('#'));
        }
    }
}
