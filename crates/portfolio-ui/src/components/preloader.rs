//! Preloader overlay
//!
//! Full-screen cover with a spinning ring, shown while the page is loading.
//! Fades out over the configured exit duration once the page is ready.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{Easing, PreloaderPhase};

/// Inline style for the overlay in a given phase.
///
/// Opaque while visible; transparent with an opacity transition while
/// exiting, so the fade runs before the element is removed.
pub fn preloader_style(phase: PreloaderPhase, exit: Duration) -> String {
    match phase {
        PreloaderPhase::Visible => "opacity: 1;".to_string(),
        PreloaderPhase::Exiting | PreloaderPhase::Detached => format!(
            "opacity: 0; pointer-events: none; transition: opacity {}s {};",
            exit.as_secs_f32(),
            Easing::EaseInOut.css()
        ),
    }
}

/// Properties for the Preloader component
#[derive(Clone, PartialEq, Props)]
pub struct PreloaderProps {
    pub phase: PreloaderPhase,
    /// Exit fade duration
    pub exit: Duration,
}

/// Loading overlay with a spinning ring
///
/// The ring turns once per second, linearly, forever (`loader-spin`
/// keyframes in the global stylesheet).
#[component]
pub fn Preloader(props: PreloaderProps) -> Element {
    let class = props.phase.class();
    let style = preloader_style(props.phase, props.exit);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            role: "progressbar",
            "aria-label": "Loading",
            div { class: "loader-circle" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_is_opaque() {
        let style = preloader_style(PreloaderPhase::Visible, Duration::from_millis(800));
        assert_eq!(style, "opacity: 1;");
    }

    #[test]
    fn exiting_fades_with_ease_in_out() {
        let style = preloader_style(PreloaderPhase::Exiting, Duration::from_millis(800));
        assert_eq!(
            style,
            "opacity: 0; pointer-events: none; transition: opacity 0.8s ease-in-out;"
        );
    }
}
