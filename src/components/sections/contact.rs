use dioxus::prelude::*;
use portfolio_core::content::{CONTACT, PROFILE};
use portfolio_core::Anchor;
use portfolio_ui::Icon;

use crate::components::Reveal;
use crate::context::use_session;

#[component]
pub fn Contact() -> Element {
    let session = use_session();
    let grow = session.config().grow();
    let email = CONTACT.email;

    rsx! {
        section { id: Anchor::Contact.id(), class: "section py-large contact-section",
            div { class: "container contact-wrapper",
                Reveal { id: "contact-heading".to_string(), animation: grow,
                    h2 {
                        "{CONTACT.headline_lead}"
                        br {}
                        span { class: "text-accent", "{CONTACT.headline_accent}" }
                    }
                }
                p { class: "contact-sub", "{CONTACT.blurb}" }

                div { class: "contact-cta-box",
                    a { class: "email-link", href: email.href,
                        Icon { kind: email.icon, class: "inline-icon".to_string() }
                        " {email.label}"
                    }
                    div { class: "social-row",
                        for link in CONTACT.socials {
                            a {
                                key: "{link.label}",
                                href: link.href,
                                target: link.target(),
                                rel: link.rel(),
                                "aria-label": link.label,
                                Icon { kind: link.icon }
                            }
                        }
                    }
                }

                div { class: "footer-loc",
                    p { "{PROFILE.location}" }
                    p { class: "copy", "{PROFILE.copyright}" }
                }
            }
        }
    }
}
