//! Skills bento grid. Cards lift on hover but have no entrance of their own.

use dioxus::prelude::*;
use portfolio_core::content::{SKILLS, SKILLS_INTRO};
use portfolio_core::{Anchor, HoverLift};
use portfolio_ui::Icon;

use super::RevealedHeader;
use crate::components::HoverCard;
use crate::context::use_session;

#[component]
pub fn Skills() -> Element {
    let session = use_session();
    let lift = HoverLift::new(session.config().skill_hover_lift_px);

    rsx! {
        section { id: Anchor::Skills.id(), class: "section py-large",
            div { class: "container",
                RevealedHeader { id: "skills-header".to_string(), intro: SKILLS_INTRO }

                div { class: "skills-grid-bento",
                    for group in SKILLS.iter() {
                        HoverCard { key: "{group.title}", lift: lift, class: "bento-card".to_string(),
                            div { class: "icon-box", Icon { kind: group.icon } }
                            h3 { "{group.title}" }
                            p { "{group.items}" }
                        }
                    }
                }
            }
        }
    }
}
