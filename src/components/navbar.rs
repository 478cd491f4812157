//! Navigation Bar Component
//!
//! Sticky bar with the initials logo and one fragment link per section.
//! Transparent at the top of the page, condensed once scrolled.

use dioxus::prelude::*;
use portfolio_core::content::PROFILE;
use portfolio_core::{Anchor, NavbarVariant};

use crate::bridge;
use crate::context::use_session;

/// Track the navbar variant from viewport scroll events.
///
/// Only the page mounted after the preloader calls this, so scroll events
/// are never observed while loading.
pub fn use_navbar_variant() -> Signal<NavbarVariant> {
    let session = use_session();
    let mut variant = use_signal(|| session.navbar_variant());

    use_effect(move || {
        let session = session.clone();
        spawn(async move {
            let mut listener = document::eval(bridge::SCROLL_LISTENER);
            while let Ok(offset) = listener.recv::<f64>().await {
                if let Some(state) = session.on_scroll(offset) {
                    variant.set(state.navbar_variant());
                }
            }
            tracing::debug!("Scroll listener channel closed");
        });
    });

    variant
}

/// CSS animation sliding the bar down from above the viewport.
pub fn enter_animation(duration_ms: u64, delay_ms: u64) -> String {
    format!(
        "animation: nav-enter {}s ease-out {}s both;",
        duration_ms as f32 / 1000.0,
        delay_ms as f32 / 1000.0
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    pub variant: NavbarVariant,
}

#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let session = use_session();
    let config = session.config();
    let style = enter_animation(config.navbar_enter_ms, config.navbar_enter_delay_ms);
    let class = props.variant.class();

    rsx! {
        nav { class: "{class}", style: "{style}",
            div { class: "container nav-content",
                a { class: "logo", href: "#",
                    "{PROFILE.initials}"
                    span { "." }
                }
                div { class: "nav-links",
                    for anchor in Anchor::ALL {
                        a {
                            key: "{anchor.id()}",
                            class: "nav-item",
                            href: "{anchor.href()}",
                            "{anchor.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_animation_uses_seconds() {
        assert_eq!(enter_animation(500, 200), "animation: nav-enter 0.5s ease-out 0.2s both;");
    }
}
