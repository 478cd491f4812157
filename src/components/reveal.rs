//! Reveal-on-scroll wrappers
//!
//! `Reveal` fades a single element in the first time it enters the
//! viewport. `StaggerReveal` does the same for a group of `StaggerItem`
//! children that share its trigger and start one step apart.

use dioxus::prelude::*;
use portfolio_core::{RevealAnimation, SectionVisibility, StaggerGroup};

use crate::bridge;
use crate::context::{use_reveal_board, use_session, RevealBoard};

/// Listen for first intersections and drive reveal state.
///
/// Call once from the page after its reveal targets are rendered. Each
/// reported id is fed to the session; when it triggers, the board flips to
/// `Entering` and, once the animation has run, to `Seen`.
pub fn use_reveal_observer() {
    let session = use_session();
    let board = use_reveal_board();

    use_effect(move || {
        let session = session.clone();
        let mut board = board;
        spawn(async move {
            let mut observer = document::eval(bridge::REVEAL_OBSERVER);
            while let Ok(id) = observer.recv::<String>().await {
                if session.on_intersect(&id, true).is_none() {
                    continue;
                }
                board.write().insert(id.clone(), SectionVisibility::Entering);

                let session = session.clone();
                spawn(async move {
                    if session.play_reveal(&id).await {
                        board.write().insert(id, SectionVisibility::Seen);
                    }
                });
            }
            tracing::debug!("Reveal observer channel closed");
        });
    });
}

fn visibility_of(board: &RevealBoard, id: &str) -> SectionVisibility {
    board.get(id).copied().unwrap_or_default()
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Unique reveal id, also written to `data-reveal`
    pub id: String,
    pub animation: RevealAnimation,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Element that plays its entrance once, on first entering the viewport.
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let session = use_session();
    let board = use_reveal_board();
    let animation = use_hook(|| session.ensure_reveal(&props.id, props.animation));

    let visibility = visibility_of(&board.read(), &props.id);
    let style = animation.style_for(visibility);
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            "data-reveal": "{props.id}",
            {props.children}
        }
    }
}

/// Shared trigger handed from a `StaggerReveal` to its items.
#[derive(Clone, PartialEq)]
struct StaggerScope {
    id: String,
    group: StaggerGroup,
}

#[derive(Clone, PartialEq, Props)]
pub struct StaggerRevealProps {
    pub id: String,
    pub group: StaggerGroup,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Container whose `StaggerItem` children reveal in document order.
///
/// The container itself does not move; it only owns the trigger.
#[component]
pub fn StaggerReveal(props: StaggerRevealProps) -> Element {
    let session = use_session();
    use_hook(|| session.ensure_reveal(&props.id, props.group.trigger_animation()));
    use_context_provider(|| StaggerScope {
        id: props.id.clone(),
        group: props.group.clone(),
    });

    let class = props.class.clone().unwrap_or_default();

    rsx! {
        div {
            class: "{class}",
            "data-reveal": "{props.id}",
            {props.children}
        }
    }
}

/// Child of a `StaggerReveal`, started `index` steps after the trigger.
#[component]
pub fn StaggerItem(index: usize, #[props(default)] class: Option<String>, children: Element) -> Element {
    let scope = use_context::<StaggerScope>();
    let board = use_reveal_board();

    let parent = visibility_of(&board.read(), &scope.id);
    let style = scope.group.style_for(index, parent);
    let class = class.unwrap_or_default();

    rsx! {
        div { class: "{class}", style: "{style}", {children} }
    }
}
