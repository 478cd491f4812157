//! Card that lifts while the pointer is over it.

use dioxus::prelude::*;
use portfolio_core::HoverLift;

#[derive(Clone, PartialEq, Props)]
pub struct HoverCardProps {
    pub lift: HoverLift,
    pub class: String,
    pub children: Element,
}

/// The lift is applied on pointer enter and dropped on pointer leave.
#[component]
pub fn HoverCard(props: HoverCardProps) -> Element {
    let mut hovered = use_signal(|| false);
    let style = props.lift.style(hovered());

    rsx! {
        div {
            class: "{props.class}",
            style: "{style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            {props.children}
        }
    }
}
