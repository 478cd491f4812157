//! The five page sections, top to bottom.

mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use dioxus::prelude::*;
use portfolio_core::content::SectionIntro;
use portfolio_ui::SectionHeader;

use crate::components::Reveal;
use crate::context::use_session;

/// Section header that rises into view once.
#[component]
fn RevealedHeader(id: String, intro: SectionIntro) -> Element {
    let session = use_session();
    let animation = session.config().header_rise();

    rsx! {
        Reveal { id: id, animation: animation,
            SectionHeader {
                label: intro.label.to_string(),
                heading: intro.heading.to_string(),
            }
        }
    }
}
