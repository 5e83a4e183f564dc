//! Page components for the Driftline site.

mod docs_intro;
mod home;

pub use docs_intro::DocsIntro;
pub use home::Home;
