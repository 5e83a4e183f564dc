//! Entrance-animation model for the landing page.
//!
//! Hero regions reveal in a stagger: each region owns a 1-based ordinal and
//! transitions `Hidden` -> `Visible` exactly once, on mount, with a
//! spring-flavored timing curve whose start is delayed in proportion to the
//! ordinal. The two-state variant table lives here as data; the webview's
//! CSS animation engine is the primitive that plays it back.

use dioxus::prelude::*;

/// Named animation states. `Hidden` is the pre-mount pose and always
/// precedes `Visible`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Spring timing parameters for one transition.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring {
    pub damping: f64,
    pub stiffness: f64,
    /// Base duration in seconds, shared by every region.
    pub duration: f64,
    /// Start offset in seconds, derived from the region's ordinal.
    pub delay: f64,
}

pub const DAMPING: f64 = 25.0;
pub const STIFFNESS: f64 = 100.0;
pub const BASE_DURATION: f64 = 0.3;
pub const STAGGER_STEP: f64 = 0.3;

/// Cubic-bezier standing in for the overdamped spring above; CSS has no
/// native spring curve.
pub const SPRING_EASING: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";

/// Per-ordinal start offset. Strictly increasing in the ordinal, so later
/// regions always start later.
pub fn stagger_delay(ordinal: u32) -> f64 {
    f64::from(ordinal) * STAGGER_STEP
}

/// Target values for one state of the variant table.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealTarget {
    pub opacity: f64,
    /// Vertical offset in pixels (positive is below the resting position).
    pub offset_y: f64,
    /// Timing for the transition into this state. `Hidden` has none; it is
    /// applied instantly before first paint.
    pub transition: Option<Spring>,
}

/// The variant table: state name -> target values for a given ordinal.
pub fn variant(state: RevealState, ordinal: u32) -> RevealTarget {
    match state {
        RevealState::Hidden => RevealTarget {
            opacity: 0.0,
            offset_y: 30.0,
            transition: None,
        },
        RevealState::Visible => RevealTarget {
            opacity: 1.0,
            offset_y: 0.0,
            transition: Some(Spring {
                damping: DAMPING,
                stiffness: STIFFNESS,
                duration: BASE_DURATION,
                delay: stagger_delay(ordinal),
            }),
        },
    }
}

/// `@keyframes` rule generated from the variant table, injected next to the
/// global stylesheet so the playback and the table cannot drift apart.
pub fn reveal_keyframes() -> String {
    let hidden = variant(RevealState::Hidden, 0);
    let visible = variant(RevealState::Visible, 0);
    format!(
        "@keyframes reveal {{\n  \
           from {{ opacity: {}; transform: translateY({}px); }}\n  \
           to {{ opacity: {}; transform: translateY({}px); }}\n\
         }}",
        hidden.opacity, hidden.offset_y, visible.opacity, visible.offset_y
    )
}

/// Pointer-tracked visual parameters, consumed by the stylesheet as CSS
/// custom properties.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PointerVars {
    pub x: f64,
    pub y: f64,
}

/// Glow position: the pointer's viewport coordinates, verbatim.
pub fn glow_position(client_x: f64, client_y: f64) -> PointerVars {
    PointerVars {
        x: client_x,
        y: client_y,
    }
}

/// Highlight origin: the hovered element's bounding origin in viewport
/// space, recovered from the event's viewport and element-relative
/// coordinates. A different reference frame from [`glow_position`].
pub fn highlight_origin(
    client_x: f64,
    client_y: f64,
    element_x: f64,
    element_y: f64,
) -> PointerVars {
    PointerVars {
        x: client_x - element_x,
        y: client_y - element_y,
    }
}

/// Animated container for one hero region.
///
/// Renders its children inside a block that starts at the `Hidden` pose and
/// plays the reveal animation once. `animation-fill-mode: both` keeps the
/// hidden pose applied during the stagger delay, so the region never
/// flashes visible before its turn.
#[component]
pub fn Reveal(
    /// 1-based position in the reveal sequence.
    ordinal: u32,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    let target = variant(RevealState::Visible, ordinal);
    let style = match target.transition {
        Some(spring) => format!(
            "animation: reveal {}s {} {}s both;",
            spring.duration, SPRING_EASING, spring.delay
        ),
        None => String::new(),
    };

    rsx! {
        div { class: "reveal {class}", style: "{style}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_ordinal_times_step() {
        assert_eq!(stagger_delay(1), 0.3);
        assert_eq!(stagger_delay(2), 0.6);
        assert_eq!(stagger_delay(3), 0.9);
        assert_eq!(stagger_delay(4), 1.2);
    }

    #[test]
    fn test_stagger_delay_strictly_increases() {
        for i in 1..8 {
            assert!(stagger_delay(i + 1) > stagger_delay(i));
        }
    }

    #[test]
    fn test_hidden_pose_precedes_visible_target() {
        let hidden = variant(RevealState::Hidden, 1);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_y, 30.0);
        assert!(hidden.transition.is_none());

        let visible = variant(RevealState::Visible, 1);
        assert_eq!(visible.opacity, 1.0);
        assert_eq!(visible.offset_y, 0.0);
    }

    #[test]
    fn test_visible_transition_uses_shared_spring_character() {
        for ordinal in 1..=4 {
            let spring = variant(RevealState::Visible, ordinal)
                .transition
                .unwrap();
            assert_eq!(spring.damping, 25.0);
            assert_eq!(spring.stiffness, 100.0);
            assert_eq!(spring.duration, 0.3);
            assert_eq!(spring.delay, stagger_delay(ordinal));
        }
    }

    #[test]
    fn test_variant_table_is_idempotent_across_mounts() {
        // Two independent mounts look up the same ordinals and must get
        // identical targets.
        for ordinal in 1..=4 {
            assert_eq!(
                variant(RevealState::Hidden, ordinal),
                variant(RevealState::Hidden, ordinal)
            );
            assert_eq!(
                variant(RevealState::Visible, ordinal),
                variant(RevealState::Visible, ordinal)
            );
        }
    }

    #[test]
    fn test_keyframes_reflect_the_variant_table() {
        let css = reveal_keyframes();
        assert!(css.contains("from { opacity: 0; transform: translateY(30px); }"));
        assert!(css.contains("to { opacity: 1; transform: translateY(0px); }"));
    }

    #[test]
    fn test_pointer_derivations_are_pure() {
        // Same coordinates in, same parameters out, in any call order.
        let a = glow_position(120.5, 48.0);
        let _ = glow_position(999.0, 999.0);
        let b = glow_position(120.5, 48.0);
        assert_eq!(a, b);
        assert_eq!(a, PointerVars { x: 120.5, y: 48.0 });

        let h1 = highlight_origin(300.0, 200.0, 40.0, 12.5);
        let h2 = highlight_origin(300.0, 200.0, 40.0, 12.5);
        assert_eq!(h1, h2);
        assert_eq!(h1, PointerVars { x: 260.0, y: 187.5 });
    }
}
