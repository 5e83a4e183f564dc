//! Color palette for the Driftline site.
//!
//! Warm paper-and-ink scheme with a teal accent. The stylesheet repeats
//! these values as CSS custom properties; components that build inline
//! styles or SVG fills read them from here.

#![allow(dead_code)]

// === INK (Backgrounds, dark mode base) ===
pub const INK: &str = "#10141a";
pub const INK_SOFT: &str = "#161b23";
pub const INK_BORDER: &str = "#242b36";

// === ACCENT (Links, highlights, call-to-action) ===
pub const ACCENT: &str = "#2ec4b6";
pub const ACCENT_SOFT: &str = "#8fe3dc";
pub const ACCENT_GLOW: &str = "rgba(46, 196, 182, 0.25)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e8ecf1";
pub const TEXT_SECONDARY: &str = "rgba(232, 236, 241, 0.72)";
pub const TEXT_MUTED: &str = "rgba(232, 236, 241, 0.5)";

// === SEMANTIC ===
pub const WARM: &str = "#ffb86b";
pub const ROSE: &str = "#ff6b8a";
