//! UI components for the Driftline site.

mod hero;
mod layout;
mod moving_button;
mod social_links;

pub use hero::Hero;
pub use layout::Layout;
pub use moving_button::MovingButton;
pub use social_links::SocialLinks;
