use dioxus::prelude::*;
use portfolio_core::content::{ABOUT_INTRO, PROFILE};
use portfolio_core::Anchor;

use super::RevealedHeader;
use crate::components::RichText;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: Anchor::About.id(), class: "section py-large",
            div { class: "container",
                RevealedHeader { id: "about-header".to_string(), intro: ABOUT_INTRO }

                div { class: "about-wrapper glass-card",
                    RichText { spans: PROFILE.about, class: "about-text".to_string() }
                    div { class: "interests-grid",
                        for interest in PROFILE.interests.iter() {
                            div { key: "{interest}", class: "interest-pill", "{interest}" }
                        }
                    }
                }
            }
        }
    }
}
