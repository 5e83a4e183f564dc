//! Social profile directory.
//!
//! A hand-authored profile literal plus the display entries derived from it,
//! consumed by `SocialLinks`. The derivation runs once, on first access, and
//! the result is immutable afterwards.

use std::sync::OnceLock;

/// Platform identifiers the profile can carry, plus the `Rss` pseudo-key
/// which has no corresponding profile attribute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SocialKind {
    Github,
    X,
    Juejin,
    Qq,
    Wx,
    Cloudmusic,
    Zhihu,
    Email,
    Discord,
    Rss,
}

/// The authored profile. Each attribute is either absent or a URI
/// (`http(s)` or `mailto:`). Values are not validated; a malformed URI
/// becomes a broken link in the browser, nothing more.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SocialProfile {
    pub github: Option<&'static str>,
    pub x: Option<&'static str>,
    pub juejin: Option<&'static str>,
    pub qq: Option<&'static str>,
    pub wx: Option<&'static str>,
    pub cloudmusic: Option<&'static str>,
    pub zhihu: Option<&'static str>,
    pub email: Option<&'static str>,
    pub discord: Option<&'static str>,
}

/// Morgan's profile. Unset attributes are accounts that are not public yet.
pub const PROFILE: SocialProfile = SocialProfile {
    github: Some("https://github.com/morganhale"),
    x: Some("https://x.com/morganhale_dev"),
    juejin: None,
    qq: None,
    wx: None,
    cloudmusic: None,
    zhihu: None,
    email: Some("mailto:morgan@driftline.dev"),
    discord: None,
};

impl SocialProfile {
    /// The profile attribute for a platform key. `Rss` is a pseudo-key and
    /// never has one.
    pub fn href(&self, kind: SocialKind) -> Option<&'static str> {
        match kind {
            SocialKind::Github => self.github,
            SocialKind::X => self.x,
            SocialKind::Juejin => self.juejin,
            SocialKind::Qq => self.qq,
            SocialKind::Wx => self.wx,
            SocialKind::Cloudmusic => self.cloudmusic,
            SocialKind::Zhihu => self.zhihu,
            SocialKind::Email => self.email,
            SocialKind::Discord => self.discord,
            SocialKind::Rss => None,
        }
    }
}

/// One renderable row of the directory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialEntry {
    pub kind: SocialKind,
    /// Link target, populated only when the profile carries the attribute.
    pub href: Option<&'static str>,
    pub title: &'static str,
    /// Icon-set reference, resolved to a glyph by the link renderer.
    pub icon: &'static str,
    /// Accent color applied on hover.
    pub color: &'static str,
}

/// Display metadata, one row per platform that should appear in the link
/// row. Platforms without a row are intentionally not rendered even when
/// the profile carries a URI for them; supporting a new platform means
/// adding one row here.
const DISPLAY_ROWS: &[(SocialKind, &str, &str, &str)] = &[
    (SocialKind::Github, "GitHub", "ri:github-line", "#010409"),
    (SocialKind::X, "X", "ri:twitter-x-line", "#000"),
    (SocialKind::Email, "Email", "ri:mail-line", "#D44638"),
    (SocialKind::Rss, "RSS", "ri:rss-line", "#FFA501"),
];

/// The derived directory, built from [`PROFILE`] on first access.
pub fn directory() -> &'static [SocialEntry] {
    static DIRECTORY: OnceLock<Vec<SocialEntry>> = OnceLock::new();
    DIRECTORY.get_or_init(|| derive_directory(&PROFILE))
}

/// Joins the display table against a profile. Pure; absent attributes
/// simply yield rows without an `href`.
fn derive_directory(profile: &SocialProfile) -> Vec<SocialEntry> {
    DISPLAY_ROWS
        .iter()
        .map(|&(kind, title, icon, color)| SocialEntry {
            kind,
            href: profile.href(kind),
            title,
            icon,
            color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_attributes_flow_into_hrefs() {
        let entries = derive_directory(&PROFILE);
        let github = entries
            .iter()
            .find(|e| e.kind == SocialKind::Github)
            .unwrap();
        assert_eq!(github.href, PROFILE.github);
        let email = entries.iter().find(|e| e.kind == SocialKind::Email).unwrap();
        assert_eq!(email.href, Some("mailto:morgan@driftline.dev"));
    }

    #[test]
    fn test_pseudo_key_rss_has_metadata_but_no_href() {
        let entries = derive_directory(&PROFILE);
        let rss = entries.iter().find(|e| e.kind == SocialKind::Rss).unwrap();
        assert_eq!(rss.href, None);
        assert!(!rss.title.is_empty());
        assert!(!rss.icon.is_empty());
        assert!(!rss.color.is_empty());
    }

    #[test]
    fn test_every_entry_has_complete_display_metadata() {
        for entry in derive_directory(&PROFILE) {
            assert!(!entry.title.is_empty());
            assert!(!entry.icon.is_empty());
            assert!(!entry.color.is_empty());
        }
    }

    #[test]
    fn test_platforms_without_display_rows_are_omitted() {
        let profile = SocialProfile {
            zhihu: Some("https://www.zhihu.com/people/morgan"),
            ..SocialProfile::default()
        };
        let entries = derive_directory(&profile);
        assert!(entries.iter().all(|e| e.kind != SocialKind::Zhihu));
    }

    #[test]
    fn test_github_and_email_only_scenario() {
        let profile = SocialProfile {
            github: Some("https://github.com/morganhale"),
            email: Some("mailto:morgan@driftline.dev"),
            ..SocialProfile::default()
        };
        let entries = derive_directory(&profile);
        let linked: Vec<SocialKind> = entries
            .iter()
            .filter(|e| e.href.is_some())
            .map(|e| e.kind)
            .collect();
        assert_eq!(linked, vec![SocialKind::Github, SocialKind::Email]);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(derive_directory(&PROFILE), derive_directory(&PROFILE));
        assert_eq!(directory(), derive_directory(&PROFILE).as_slice());
    }
}
