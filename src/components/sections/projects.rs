//! Project case studies. Each card rises in on its own, one step later
//! than the card before it, and lifts on hover.

use dioxus::prelude::*;
use portfolio_core::content::{Project, PROJECTS, PROJECTS_INTRO};
use portfolio_core::{Anchor, HoverLift, IconKind};
use portfolio_ui::Icon;

use super::RevealedHeader;
use crate::components::{HoverCard, Reveal, RichText};
use crate::context::use_session;

/// Reveal id of the project card at `index`.
pub fn project_reveal_id(index: usize) -> String {
    format!("project-{}", index)
}

#[component]
pub fn Projects() -> Element {
    let session = use_session();
    let config = session.config();
    let lift = HoverLift::new(config.project_hover_lift_px);

    rsx! {
        section { id: Anchor::Projects.id(), class: "section py-large",
            div { class: "container",
                RevealedHeader { id: "projects-header".to_string(), intro: PROJECTS_INTRO }

                div { class: "projects-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        Reveal {
                            key: "{project.title}",
                            id: project_reveal_id(index),
                            animation: config.card_rise(index),
                            HoverCard { lift: lift, class: "project-card".to_string(),
                                ProjectBody { project: *project }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectBody(project: Project) -> Element {
    rsx! {
        div { class: "project-top",
            div { class: "folder-icon", Icon { kind: project.icon, size: 28 } }
            div { class: "links",
                a { href: project.repo_url, "aria-label": "Source", Icon { kind: IconKind::Github, size: 20 } }
                a { href: project.live_url, "aria-label": "Live", Icon { kind: IconKind::ExternalLink, size: 20 } }
            }
        }

        if let Some(status) = project.status {
            div { class: "project-title-row",
                h3 { "{project.title}" }
                span { class: "status-badge", "{status}" }
            }
        } else {
            h3 { "{project.title}" }
        }

        div { class: "project-desc",
            RichText { spans: project.description }
        }

        ul { class: "project-tech",
            for tech in project.tech.iter() {
                li { key: "{tech}", "{tech}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_ids_unique_per_card() {
        let ids: std::collections::HashSet<_> =
            (0..PROJECTS.len()).map(project_reveal_id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(project_reveal_id(2), "project-2");
    }
}
