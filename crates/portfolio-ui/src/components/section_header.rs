//! Section header: small uppercase label over a serif heading.

use dioxus::prelude::*;

#[component]
pub fn SectionHeader(label: String, heading: String) -> Element {
    rsx! {
        div { class: "section-header",
            span { class: "section-label", "{label}" }
            h2 { "{heading}" }
        }
    }
}
