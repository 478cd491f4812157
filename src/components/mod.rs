//! UI Components for the portfolio page.

mod hover_card;
mod navbar;
mod reveal;
mod rich_text;
pub mod sections;

pub use hover_card::HoverCard;
pub use navbar::{use_navbar_variant, Navbar};
pub use reveal::{use_reveal_observer, Reveal, StaggerItem, StaggerReveal};
pub use rich_text::RichText;
