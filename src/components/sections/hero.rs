//! Hero block: portrait, headline, subtitle and call-to-action buttons,
//! revealed as one staggered group.

use dioxus::prelude::*;
use portfolio_core::content::PROFILE;
use portfolio_core::{Anchor, StaggerGroup};
use portfolio_ui::{ButtonVariant, LinkButton};

use crate::components::{StaggerItem, StaggerReveal};
use crate::context::use_session;

/// Portrait, title, subtitle, buttons
const HERO_CHILDREN: usize = 4;

#[component]
pub fn Hero() -> Element {
    let session = use_session();
    let config = session.config();
    let group = StaggerGroup::new(config.rise(), config.stagger_step(), HERO_CHILDREN);

    rsx! {
        section { id: Anchor::Home.id(), class: "hero-section centered",
            div { class: "container",
                StaggerReveal {
                    id: "hero".to_string(),
                    group: group,
                    class: "hero-content".to_string(),
                    StaggerItem { index: 0, class: "profile-orbit-wrapper".to_string(),
                        div { class: "orbit-c" }
                        div { class: "profile-img-c",
                            img { src: PROFILE.portrait_url, alt: PROFILE.name }
                        }
                    }
                    StaggerItem { index: 1,
                        h1 { class: "hero-title",
                            "{PROFILE.title_lead}"
                            br {}
                            span { class: "gradient-text", "{PROFILE.title_accent}" }
                        }
                    }
                    StaggerItem { index: 2,
                        p { class: "hero-subtitle",
                            "{PROFILE.subtitle[0]}"
                            br {}
                            "{PROFILE.subtitle[1]}"
                        }
                    }
                    StaggerItem { index: 3, class: "hero-cta".to_string(),
                        LinkButton { href: Anchor::Projects.href(), "View Work" }
                        LinkButton {
                            href: Anchor::Contact.href(),
                            variant: ButtonVariant::Ghost,
                            "Contact Me"
                        }
                    }
                }
            }

            div { class: "bg-glow top-glow" }
            div { class: "bg-glow bottom-glow" }
        }
    }
}
